use dioxus::prelude::*;

use crate::app::{AppServices, Route};
use crate::infra::catalog::reference::{DATA_SOURCES, DISCLAIMER, SAFETY_NOTE};
use crate::ui::components::disclosure::AccordionItem;
use crate::ui::components::layout::{Breadcrumb, Crumb};
use crate::ui::style::card_style;

const CELL: &str = "padding: 8px; border-bottom: 1px solid #e2e8f0; text-align: left; vertical-align: top;";

#[component]
pub fn GlossaryInfo() -> Element {
    let services = use_context::<AppServices>();
    // Single-open accordion.
    let mut open_term = use_signal(|| None::<usize>);
    use_hook(|| tracing::info!("glossary loaded"));

    let terms = services.reference.glossary_terms();
    let units = services.reference.unit_explanations();
    let guidelines = services.reference.safety_guidelines();
    let frame = card_style();
    let crumbs = vec![
        Crumb::link("Home", Route::Home {}),
        Crumb::current("Glossary & Information"),
    ];

    rsx! {
        Breadcrumb { crumbs }
        h1 { style: "font-size: 30px; text-align: center; margin: 0 0 32px 0;", "Glossary & Supplementary Information" }
        div {
            style: "display: flex; flex-direction: column; gap: 32px;",
            section {
                style: "{frame}",
                h2 { style: "font-size: 22px; margin: 0;", "Glossary of Chemical Terms" }
                p { style: "color: #64748b; margin: 4px 0 12px 0;", "Common terms used throughout the ChemInfoHub." }
                {terms.iter().enumerate().map(|(idx, item)| {
                    let definition = item.definition;
                    rsx!(
                        AccordionItem {
                            key: "{idx}",
                            title: item.term.to_string(),
                            open: open_term() == Some(idx),
                            on_toggle: move |_| {
                                let next = if open_term() == Some(idx) { None } else { Some(idx) };
                                open_term.set(next);
                            },
                            "{definition}"
                        }
                    )
                })}
            }
            section {
                style: "{frame}",
                h2 { style: "font-size: 22px; margin: 0;", "Units and Symbols" }
                p { style: "color: #64748b; margin: 4px 0 12px 0;", "Explanation of common units and symbols." }
                table {
                    style: "width: 100%; border-collapse: collapse;",
                    thead {
                        tr {
                            th { style: CELL, "Symbol" }
                            th { style: CELL, "Name" }
                            th { style: CELL, "Description" }
                        }
                    }
                    tbody {
                        {units.iter().map(|unit| {
                            let (symbol, name, description) = (unit.symbol, unit.name, unit.description);
                            rsx!(
                                tr {
                                    key: "{symbol}",
                                    td { style: "{CELL} font-weight: 500;", "{symbol}" }
                                    td { style: CELL, "{name}" }
                                    td { style: "{CELL} font-size: 14px;", "{description}" }
                                }
                            )
                        })}
                    }
                }
            }
            section {
                style: "{frame} font-size: 14px;",
                h2 { style: "font-size: 22px; margin: 0; color: #b91c1c;", "General Laboratory Safety" }
                p { style: "color: #64748b; margin: 4px 0 12px 0;", "Basic safety guidelines. Always refer to specific SDS for detailed information." }
                {guidelines.iter().enumerate().map(|(idx, guideline)| {
                    let number = idx + 1;
                    rsx!(p { key: "{idx}", "{number}. {guideline}" })
                })}
                p { strong { "Note: " } "{SAFETY_NOTE}" }
            }
            section {
                style: "{frame} font-size: 14px;",
                h2 { style: "font-size: 22px; margin: 0 0 12px 0;", "Data Sources & Disclaimer" }
                p { strong { "Data Sources: " } "{DATA_SOURCES}" }
                p { strong { "Disclaimer: " } "{DISCLAIMER}" }
            }
        }
    }
}
