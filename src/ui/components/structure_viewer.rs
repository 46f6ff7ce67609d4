use dioxus::prelude::*;

use crate::ui::style::card_style;

/// Stand-in for a real structure viewer. Shows what would be rendered.
#[component]
pub fn StructurePlaceholder(
    structure_name: Option<String>,
    smiles: Option<String>,
    mol_data: Option<String>,
) -> Element {
    let frame = card_style();
    let title = structure_name.unwrap_or_else(|| "Chemical Structure".to_string());
    let mol_note = if mol_data.is_some() {
        " (MOL data provided)"
    } else {
        ""
    };

    rsx! {
        div {
            style: "{frame}",
            h3 { style: "margin: 0 0 4px 0;", "{title}" }
            if let Some(smiles) = smiles {
                p { style: "margin: 0 0 12px 0; color: #64748b;", "SMILES: {smiles}" }
            }
            div {
                style: "width: 100%; aspect-ratio: 1 / 1; max-height: 420px; background: #f3f4f6; border: 1px dashed #d1d5db; border-radius: 6px; display: flex; align-items: center; justify-content: center;",
                p { style: "color: #6b7280; padding: 16px; text-align: center;",
                    "Interactive chemical structure viewer placeholder.{mol_note}"
                }
            }
        }
    }
}
