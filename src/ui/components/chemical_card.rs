use dioxus::prelude::*;

use crate::domain::entities::chemical::{ChemicalId, ChemicalRecord};
use crate::ui::style::{badge_style, card_style, BadgeVariant};

#[component]
pub fn ChemicalInfoCard(record: ChemicalRecord, on_view_details: EventHandler<ChemicalId>) -> Element {
    let tag_style = badge_style(BadgeVariant::Secondary);
    let frame = card_style();
    let id = record.id.clone();
    let name = record.name.clone();

    rsx! {
        div {
            style: "{frame} display: flex; flex-direction: column; gap: 8px;",
            h3 { style: "font-size: 18px; margin: 0;", "{name}" }
            if let Some(formula) = record.formula.as_ref() {
                p { style: "margin: 0; color: #475569;", "{formula}" }
            }
            if let Some(cas) = record.cas_number.as_ref() {
                p { style: "margin: 0; font-size: 14px;",
                    span { style: "font-weight: 600;", "CAS: " }
                    "{cas}"
                }
            }
            if let Some(weight) = record.molecular_weight.as_ref() {
                p { style: "margin: 0; font-size: 14px;",
                    span { style: "font-weight: 600;", "MW: " }
                    "{weight} g/mol"
                }
            }
            if !record.tags.is_empty() {
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 4px; padding-top: 8px;",
                    for tag in record.tags.iter() {
                        span { key: "{tag}", style: tag_style, "{tag}" }
                    }
                }
            }
            button {
                style: "margin-top: auto; border: 1px solid #bbb; background: #fff; padding: 8px; border-radius: 6px; cursor: pointer;",
                onclick: move |_| on_view_details.call(id.clone()),
                "View Details →"
            }
        }
    }
}
