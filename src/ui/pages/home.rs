use dioxus::prelude::*;

use crate::app::Route;
use crate::ui::style::card_style;
use crate::APP_NAME;

/// Blank searches stay on the home page.
pub fn search_target(term: &str) -> Option<Route> {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(Route::ChemicalListing {
            search: trimmed.to_string(),
        })
    }
}

#[component]
fn FeatureCard(glyph: &'static str, title: &'static str, blurb: &'static str, action: &'static str, to: Route) -> Element {
    let frame = card_style();
    rsx! {
        div {
            style: "{frame} text-align: center; display: flex; flex-direction: column; gap: 8px; align-items: center;",
            span { style: "font-size: 40px; color: #0284c7;", "{glyph}" }
            h3 { style: "margin: 0;", "{title}" }
            p { style: "font-size: 14px; color: #64748b; margin: 0;", "{blurb}" }
            Link {
                to,
                style: "margin-top: 16px; border: 1px solid #bbb; padding: 6px 12px; border-radius: 6px; color: #0f172a; text-decoration: none;",
                "{action}"
            }
        }
    }
}

#[component]
pub fn Home() -> Element {
    let mut search_term = use_signal(String::new);
    let frame = card_style();

    use_hook(|| tracing::info!("home page loaded"));

    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; gap: 48px; padding: 16px 0;",
            div {
                style: "{frame} width: 100%; max-width: 672px; box-sizing: border-box;",
                div {
                    style: "text-align: center; margin-bottom: 16px;",
                    h1 { style: "font-size: 36px; color: #0369a1; margin: 0;", "Welcome to {APP_NAME}" }
                    p { style: "font-size: 18px; color: #475569;", "Your comprehensive resource for chemical information and safety data." }
                }
                form {
                    style: "display: flex; gap: 12px; align-items: center;",
                    onsubmit: move |event| {
                        event.prevent_default();
                        if let Some(route) = search_target(&search_term()) {
                            navigator().push(route);
                        }
                    },
                    label { r#for: "chemical-search", style: "position: absolute; left: -10000px;", "Search for a chemical" }
                    input {
                        id: "chemical-search",
                        r#type: "search",
                        style: "flex-grow: 1; font-size: 16px; padding: 10px; border: 1px solid #cbd5e1; border-radius: 6px;",
                        placeholder: "Enter chemical name, CAS number, or formula (e.g., Acetone)",
                        value: "{search_term}",
                        oninput: move |event| search_term.set(event.value()),
                    }
                    button {
                        r#type: "submit",
                        style: "padding: 10px 20px; border: none; border-radius: 6px; background: #0284c7; color: #fff; font-size: 16px; cursor: pointer;",
                        "Search"
                    }
                }
            }
            section {
                style: "display: grid; grid-template-columns: repeat(3, minmax(0, 1fr)); gap: 24px; width: 100%; max-width: 896px;",
                FeatureCard {
                    glyph: "▦",
                    title: "Browse Chemicals",
                    blurb: "Explore our extensive database of chemical compounds.",
                    action: "Start Browsing",
                    to: Route::ChemicalListing { search: String::new() },
                }
                FeatureCard {
                    glyph: "⚛",
                    title: "Interactive Periodic Table",
                    blurb: "Discover elements and their properties interactively.",
                    action: "View Table",
                    to: Route::PeriodicTable {},
                }
                FeatureCard {
                    glyph: "📖",
                    title: "Glossary & Safety",
                    blurb: "Understand chemical terms and general safety guidelines.",
                    action: "Learn More",
                    to: Route::GlossaryInfo {},
                }
            }
        }
    }
}
