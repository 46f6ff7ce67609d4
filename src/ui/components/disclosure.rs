use dioxus::prelude::*;

/// Collapsible section. Open state lives with the caller so several
/// sections can share one set of open keys.
#[component]
pub fn AccordionItem(title: String, open: bool, on_toggle: EventHandler<()>, children: Element) -> Element {
    let marker = if open { "▾" } else { "▸" };
    rsx! {
        div {
            style: "border-bottom: 1px solid #e5e7eb;",
            button {
                style: "width: 100%; display: flex; justify-content: space-between; padding: 12px 0; background: none; border: none; font-size: 16px; font-weight: 500; cursor: pointer; text-align: left;",
                onclick: move |_| on_toggle.call(()),
                span { "{title}" }
                span { "{marker}" }
            }
            if open {
                div { style: "padding-bottom: 12px; font-size: 14px;", {children} }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TabOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[component]
pub fn TabList(tabs: Vec<TabOption>, active: &'static str, on_select: EventHandler<&'static str>) -> Element {
    rsx! {
        div {
            style: "display: flex; gap: 4px; padding: 4px; margin-bottom: 24px; background: #f1f5f9; border-radius: 8px;",
            for tab in tabs {
                {
                    let is_active = tab.value == active;
                    let background = if is_active { "#fff" } else { "transparent" };
                    let value = tab.value;
                    let label = tab.label;
                    rsx! {
                        button {
                            key: "{value}",
                            style: "flex: 1; padding: 6px 12px; border: none; border-radius: 6px; cursor: pointer; background: {background};",
                            onclick: move |_| on_select.call(value),
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
