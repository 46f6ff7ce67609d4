use dioxus::prelude::*;

use crate::app::{AppServices, Route};
use crate::domain::entities::element::{ElementCategory, PeriodicCell};
use crate::ui::components::layout::{Breadcrumb, Crumb};
use crate::ui::components::periodic_tile::{category_label, CategoryMarker, PeriodicTableTile};
use crate::ui::style::{card_style, category_color};
use crate::usecase::services::reference_service::PERIODIC_COLUMNS;

/// "alkaline-earth-metal" reads as "Alkaline Earth Metal" in the legend.
pub fn legend_label(category: ElementCategory) -> String {
    category_label(category)
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
pub fn PeriodicTable() -> Element {
    let services = use_context::<AppServices>();
    let grid = use_hook(|| {
        services
            .reference
            .periodic_grid()
            .map_err(|err| err.to_string())
    });
    use_hook(|| tracing::info!("periodic table loaded"));

    let grid = match grid {
        Ok(grid) => grid,
        Err(err) => {
            tracing::error!("failed to build periodic grid: {err}");
            return rsx! {
                p { style: "color: #b91c1c;", "Unable to load elements: {err}" }
            };
        }
    };

    let crumbs = vec![
        Crumb::link("Home", Route::Home {}),
        Crumb::current("Interactive Periodic Table"),
    ];
    let frame = card_style();
    let cells = grid.into_iter().flatten().enumerate();

    rsx! {
        Breadcrumb { crumbs }
        h1 { style: "font-size: 30px; text-align: center; margin: 0 0 24px 0;", "Interactive Periodic Table of Elements" }
        p {
            style: "text-align: center; font-size: 14px; color: #4b5563; margin-bottom: 24px;",
            "Click on an element to search for chemicals containing it or view more information. (This is a simplified representation)."
        }
        div {
            style: "display: grid; grid-template-columns: repeat({PERIODIC_COLUMNS}, minmax(40px, 1fr)); gap: 2px; padding: 16px; background: #f3f4f6; border-radius: 8px; overflow-x: auto;",
            {cells.map(|(idx, cell)| match cell {
                PeriodicCell::Element(element) => {
                    let key = element.symbol.clone();
                    let services = services.clone();
                    rsx!(
                        PeriodicTableTile {
                            key: "{key}",
                            element,
                            on_click: move |symbol: String| {
                                match services.reference.find_element(&symbol) {
                                    Ok(Some(element)) => {
                                        tracing::info!(symbol = %symbol, "element selected");
                                        navigator().push(Route::ChemicalListing { search: element.name });
                                    }
                                    Ok(None) => tracing::warn!(symbol = %symbol, "unknown element"),
                                    Err(err) => tracing::error!("failed to look up element: {err}"),
                                }
                            },
                        }
                    )
                }
                PeriodicCell::Marker { label, category } => rsx!(
                    CategoryMarker { key: "marker-{idx}", label, category }
                ),
                PeriodicCell::Empty => rsx!(
                    div { key: "empty-{idx}" }
                ),
            })}
        }
        div {
            style: "{frame} margin-top: 32px;",
            h3 { style: "font-size: 18px; margin: 0 0 8px 0;", "Category Legend:" }
            div {
                style: "display: flex; flex-wrap: wrap; gap: 8px; font-size: 12px;",
                for category in ElementCategory::LEGEND {
                    {
                        let color = category_color(category);
                        let label = legend_label(category);
                        rsx! {
                            span {
                                key: "{label}",
                                style: "padding: 4px 8px; border-radius: 4px; background: {color};",
                                "{label}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legend_labels_are_title_cased() {
        assert_eq!(legend_label(ElementCategory::AlkalineEarthMetal), "Alkaline Earth Metal");
        assert_eq!(legend_label(ElementCategory::PostTransitionMetal), "Post Transition Metal");
        assert_eq!(legend_label(ElementCategory::NobleGas), "Noble Gas");
    }
}
