use crate::domain::entities::element::ElementCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Default,
    Secondary,
    Destructive,
    Outline,
}

pub fn root_container_style() -> &'static str {
    "display: flex; flex-direction: column; min-height: 100vh; font-family: system-ui, sans-serif; color: #0f172a;"
}

pub fn header_style() -> &'static str {
    "position: sticky; top: 0; z-index: 50; display: flex; gap: 16px; align-items: center; height: 56px; padding: 0 24px; border-bottom: 1px solid #e2e8f0; background: rgba(255,255,255,0.95);"
}

pub fn main_style() -> &'static str {
    "flex-grow: 1; width: 100%; max-width: 1200px; margin: 0 auto; padding: 32px 16px; box-sizing: border-box;"
}

pub fn footer_style() -> &'static str {
    "padding: 24px 0; text-align: center; font-size: 14px; color: #475569; border-top: 1px solid #e2e8f0; margin-top: auto;"
}

pub fn card_style() -> &'static str {
    "border: 1px solid #e2e8f0; border-radius: 8px; background: #fff; padding: 16px; box-shadow: 0 1px 2px rgba(0,0,0,0.05);"
}

pub fn button_style(disabled: bool) -> String {
    let opacity = if disabled { "0.5" } else { "1" };
    let pointer = if disabled { "none" } else { "auto" };
    format!(
        "border: 1px solid #bbb; background: #fff; padding: 6px 12px; border-radius: 6px; cursor: pointer; opacity: {opacity}; pointer-events: {pointer};"
    )
}

pub fn badge_style(variant: BadgeVariant) -> &'static str {
    match variant {
        BadgeVariant::Default => {
            "display: inline-block; padding: 2px 10px; border-radius: 9999px; font-size: 12px; font-weight: 600; background: #0f172a; color: #fff;"
        }
        BadgeVariant::Secondary => {
            "display: inline-block; padding: 2px 10px; border-radius: 9999px; font-size: 12px; font-weight: 600; background: #f1f5f9; color: #0f172a;"
        }
        BadgeVariant::Destructive => {
            "display: inline-block; padding: 2px 10px; border-radius: 9999px; font-size: 12px; font-weight: 600; background: #dc2626; color: #fff;"
        }
        BadgeVariant::Outline => {
            "display: inline-block; padding: 2px 10px; border-radius: 9999px; font-size: 12px; font-weight: 600; border: 1px solid #cbd5e1; color: #0f172a;"
        }
    }
}

pub fn category_color(category: ElementCategory) -> &'static str {
    match category {
        ElementCategory::AlkaliMetal => "#fecaca",
        ElementCategory::AlkalineEarthMetal => "#fed7aa",
        ElementCategory::Lanthanide => "#fef08a",
        ElementCategory::Actinide => "#fde68a",
        ElementCategory::TransitionMetal => "#d9f99d",
        ElementCategory::PostTransitionMetal => "#bbf7d0",
        ElementCategory::Metalloid => "#99f6e4",
        ElementCategory::Nonmetal => "#a5f3fc",
        ElementCategory::Halogen => "#bae6fd",
        ElementCategory::NobleGas => "#bfdbfe",
        ElementCategory::Unknown => "#e5e7eb",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_style_is_sticky() {
        let style = header_style();
        assert!(style.contains("position: sticky"));
        assert!(style.contains("top: 0"));
    }

    #[test]
    fn root_container_style_uses_viewport_height_and_flex() {
        let style = root_container_style();
        assert!(style.contains("min-height: 100vh"));
        assert!(style.contains("flex-direction: column"));
    }

    #[test]
    fn disabled_button_ignores_pointer_events() {
        assert!(button_style(true).contains("pointer-events: none"));
        assert!(button_style(false).contains("pointer-events: auto"));
    }

    #[test]
    fn unknown_category_has_neutral_color() {
        assert_eq!(category_color(ElementCategory::Unknown), "#e5e7eb");
        assert_ne!(
            category_color(ElementCategory::Halogen),
            category_color(ElementCategory::Unknown)
        );
    }
}
