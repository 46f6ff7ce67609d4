use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PictogramInfo {
    pub glyph: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

/// GHS pictogram keyed by its lowercase type name.
pub fn lookup_pictogram(kind: &str) -> Option<PictogramInfo> {
    let info = match kind.trim().to_lowercase().as_str() {
        "flammable" => PictogramInfo {
            glyph: "🔥",
            label: "Flammable",
            color: "#ef4444",
        },
        "toxic" => PictogramInfo {
            glyph: "☠",
            label: "Toxic",
            color: "#ea580c",
        },
        "irritant" => PictogramInfo {
            glyph: "⚠",
            label: "Irritant/Harmful",
            color: "#eab308",
        },
        "corrosive" => PictogramInfo {
            glyph: "🧪",
            label: "Corrosive",
            color: "#b45309",
        },
        "oxidizing" => PictogramInfo {
            glyph: "◎",
            label: "Oxidizing",
            color: "#f97316",
        },
        "gas_under_pressure" => PictogramInfo {
            glyph: "🌬",
            label: "Gas Under Pressure",
            color: "#0ea5e9",
        },
        "biohazard" => PictogramInfo {
            glyph: "☣",
            label: "Biohazard",
            color: "#b91c1c",
        },
        "health_hazard" => PictogramInfo {
            glyph: "✚",
            label: "Health Hazard",
            color: "#7c3aed",
        },
        "environment" => PictogramInfo {
            glyph: "🐟",
            label: "Hazardous to the Environment",
            color: "#16a34a",
        },
        _ => return None,
    };
    Some(info)
}

#[component]
fn SafetyPictogram(kind: String, size: u32) -> Element {
    let frame = "padding: 8px; border: 1px solid #cbd5e1; border-radius: 6px; display: flex; align-items: center; justify-content: center;";

    match lookup_pictogram(&kind) {
        Some(PictogramInfo {
            glyph,
            label,
            color,
        }) => rsx! {
            div {
                style: "{frame} color: {color}; font-size: {size}px;",
                title: "{label}",
                "{glyph}"
            }
        },
        None => {
            tracing::warn!(%kind, "unknown pictogram type");
            rsx! {
                div {
                    style: "{frame} color: #9ca3af; font-size: {size}px;",
                    title: "Unknown: {kind}",
                    "⚠"
                }
            }
        }
    }
}

#[component]
pub fn SafetyPictogramGroup(
    pictogram_types: Vec<String>,
    #[props(default = "Safety Pictograms".to_string())] title: String,
    #[props(default = 32)] pictogram_size: u32,
) -> Element {
    if pictogram_types.is_empty() {
        return rsx! {};
    }
    tracing::debug!(pictograms = %pictogram_types.join(", "), "rendering safety pictograms");

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 8px;",
            if !title.is_empty() {
                h3 { style: "font-size: 16px; font-weight: 600; margin: 0;", "{title}" }
            }
            div {
                style: "display: flex; flex-wrap: wrap; gap: 12px;",
                for kind in pictogram_types {
                    SafetyPictogram { key: "{kind}", kind: kind.clone(), size: pictogram_size }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let info = lookup_pictogram("Flammable").expect("flammable should be known");
        assert_eq!(info.label, "Flammable");
        assert_eq!(lookup_pictogram("GAS_UNDER_PRESSURE").map(|i| i.label), Some("Gas Under Pressure"));
    }

    #[test]
    fn unknown_pictogram_is_none() {
        assert_eq!(lookup_pictogram("explosive"), None);
    }
}
