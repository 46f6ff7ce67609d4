use dioxus::prelude::*;

use crate::domain::entities::element::{Element as ChemicalElement, ElementCategory};
use crate::ui::style::category_color;

/// Three decimals when the mass parses, the raw text otherwise.
pub fn format_atomic_mass(mass: &str) -> String {
    match mass.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => format!("{value:.3}"),
        _ => mass.to_string(),
    }
}

pub fn category_label(category: ElementCategory) -> String {
    category.slug().replace('-', " ")
}

pub fn tile_tooltip(element: &ChemicalElement) -> String {
    let mut lines = vec![
        format!("{} ({})", element.name, element.symbol),
        format!("Atomic Number: {}", element.atomic_number),
    ];
    if let Some(mass) = element.atomic_mass.as_deref() {
        lines.push(format!("Atomic Mass: {mass}"));
    }
    lines.push(format!("Category: {}", category_label(element.category)));
    lines.join("\n")
}

#[component]
pub fn PeriodicTableTile(element: ChemicalElement, on_click: EventHandler<String>) -> Element {
    let color = category_color(element.category);
    let tooltip = tile_tooltip(&element);
    let mass = element.atomic_mass.as_deref().map(format_atomic_mass);
    let symbol = element.symbol.clone();
    let ChemicalElement {
        atomic_number,
        name,
        symbol: display_symbol,
        ..
    } = element;

    rsx! {
        div {
            style: "position: relative; aspect-ratio: 1 / 1; display: flex; flex-direction: column; align-items: center; justify-content: center; padding: 2px; text-align: center; cursor: pointer; border-radius: 4px; background: {color}; color: #111827; box-shadow: 0 1px 2px rgba(0,0,0,0.08);",
            title: "{tooltip}",
            onclick: move |_| on_click.call(symbol.clone()),
            span { style: "position: absolute; top: 2px; left: 4px; font-size: 10px;", "{atomic_number}" }
            span { style: "font-size: 20px; font-weight: 700;", "{display_symbol}" }
            span { style: "font-size: 9px; line-height: 1.1; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; width: 100%;", "{name}" }
            if let Some(mass) = mass {
                span { style: "font-size: 8px;", "{mass}" }
            }
        }
    }
}

#[component]
pub fn CategoryMarker(label: &'static str, category: ElementCategory) -> Element {
    let color = category_color(category);
    rsx! {
        div {
            style: "padding: 4px; font-size: 11px; text-align: center; border-radius: 4px; background: {color};",
            "{label}"
        }
    }
}
