use dioxus::prelude::*;

#[component]
pub fn Sidebar(#[props(default = "Filters".to_string())] title: String, children: Element) -> Element {
    rsx! {
        aside {
            style: "width: 300px; flex-shrink: 0; align-self: flex-start; position: sticky; top: 80px; padding: 16px; border-right: 1px solid #e5e7eb; display: flex; flex-direction: column; gap: 16px;",
            if !title.is_empty() {
                h2 { style: "font-size: 20px; font-weight: 600; margin: 0; padding-bottom: 12px; border-bottom: 1px solid #e5e7eb;", "{title}" }
            }
            div { style: "display: flex; flex-direction: column; gap: 12px;", {children} }
        }
    }
}
