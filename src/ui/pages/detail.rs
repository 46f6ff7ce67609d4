use std::collections::BTreeSet;

use dioxus::prelude::*;

use crate::app::{AppServices, Route};
use crate::domain::entities::chemical::{ChemicalDetail, ChemicalId, FirstAid};
use crate::ui::components::disclosure::{AccordionItem, TabList, TabOption};
use crate::ui::components::layout::{Breadcrumb, Crumb};
use crate::ui::components::nfpa::NfpaBadges;
use crate::ui::components::pictograms::SafetyPictogramGroup;
use crate::ui::components::structure_viewer::StructurePlaceholder;
use crate::ui::style::{badge_style, card_style, BadgeVariant};

pub fn detail_tabs() -> Vec<TabOption> {
    vec![
        TabOption { value: "general", label: "General" },
        TabOption { value: "properties", label: "Properties" },
        TabOption { value: "structure", label: "Structure" },
        TabOption { value: "safety", label: "Safety" },
        TabOption { value: "uses", label: "Uses" },
    ]
}

#[component]
pub fn ChemicalDetailPage(id: String) -> Element {
    let services = use_context::<AppServices>();
    let active_tab = use_signal(|| "general");
    let open_sections = use_signal(BTreeSet::<&'static str>::new);

    match services.detail.find_detail(&ChemicalId::from(id.as_str())) {
        Ok(Some(detail)) => {
            tracing::debug!(id = %id, "chemical detail page loaded");
            rsx! {
                DetailView { detail, active_tab, open_sections }
            }
        }
        Ok(None) => rsx! { DetailNotFound {} },
        Err(err) => {
            tracing::error!(id = %id, "failed to load chemical detail: {err}");
            rsx! {
                p { style: "color: #b91c1c;", "Unable to load chemical details: {err}" }
            }
        }
    }
}

#[component]
fn DetailNotFound() -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; justify-content: center; padding: 96px 0; text-align: center;",
            span { style: "font-size: 64px; color: #ef4444; margin-bottom: 16px;", "⚠" }
            h1 { style: "font-size: 24px; margin: 0 0 8px 0;", "Chemical Not Found" }
            p { style: "color: #4b5563; margin: 0 0 24px 0;", "The chemical you are looking for does not exist or could not be loaded." }
            Link {
                to: Route::ChemicalListing { search: String::new() },
                style: "border: 1px solid #bbb; padding: 8px 16px; border-radius: 6px; color: #0f172a; text-decoration: none;",
                "Back to Chemical Listing"
            }
        }
    }
}

#[component]
fn DetailView(
    detail: ChemicalDetail,
    mut active_tab: Signal<&'static str>,
    open_sections: Signal<BTreeSet<&'static str>>,
) -> Element {
    let badge = badge_style(BadgeVariant::Secondary);
    let crumbs = vec![
        Crumb::link("Home", Route::Home {}),
        Crumb::link("Chemical Listing", Route::ChemicalListing { search: String::new() }),
        Crumb::current(detail.name.clone()),
    ];
    let name = detail.name.clone();
    let formula = detail.formula.clone();
    let cas_number = detail.cas_number.clone();
    let molecular_weight = detail.molecular_weight.clone();
    let tab = active_tab();

    let body = match tab {
        "properties" => rsx! { PropertiesTab { detail } },
        "structure" => rsx! {
            StructurePlaceholder {
                structure_name: Some(detail.name),
                smiles: detail.smiles,
                mol_data: detail.mol_data,
            }
        },
        "safety" => rsx! { SafetyTab { detail, open_sections } },
        "uses" => rsx! { UsesTab { uses: detail.uses } },
        _ => rsx! { GeneralTab { detail } },
    };

    rsx! {
        Breadcrumb { crumbs }
        div {
            style: "margin-bottom: 24px; padding-bottom: 16px; border-bottom: 1px solid #e2e8f0;",
            h1 { style: "font-size: 36px; margin: 0;", "{name}" }
            if let Some(formula) = formula {
                p { style: "font-size: 20px; color: #4b5563; margin: 4px 0 0 0;", "{formula}" }
            }
            div {
                style: "display: flex; flex-wrap: wrap; gap: 8px; margin-top: 8px;",
                if let Some(cas) = cas_number {
                    span { style: badge, "CAS: {cas}" }
                }
                if let Some(weight) = molecular_weight {
                    span { style: badge, "MW: {weight} g/mol" }
                }
            }
        }
        TabList {
            tabs: detail_tabs(),
            active: tab,
            on_select: move |value| active_tab.set(value),
        }
        {body}
    }
}

#[component]
fn GeneralTab(detail: ChemicalDetail) -> Element {
    let frame = card_style();
    rsx! {
        div {
            style: "{frame} display: flex; flex-direction: column; gap: 16px;",
            h2 { style: "font-size: 20px; margin: 0;", "General Information" }
            if let Some(iupac) = detail.iupac_name {
                p { style: "margin: 0;", span { style: "font-weight: 600;", "IUPAC Name: " } "{iupac}" }
            }
            if let Some(description) = detail.description {
                p { style: "margin: 0;", span { style: "font-weight: 600;", "Description: " } "{description}" }
            }
            if let Some(url) = detail.sds_url {
                a {
                    href: "{url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    style: "align-self: flex-start; border: 1px solid #bbb; padding: 8px 16px; border-radius: 6px; color: #0f172a; text-decoration: none;",
                    "📄 View/Download SDS"
                }
            }
        }
    }
}

#[component]
fn PropertiesTab(detail: ChemicalDetail) -> Element {
    let frame = card_style();
    let cell = "padding: 8px; border-bottom: 1px solid #e2e8f0; text-align: left;";
    rsx! {
        div {
            style: "{frame}",
            h2 { style: "font-size: 20px; margin: 0 0 12px 0;", "Physical & Chemical Properties" }
            if detail.properties.is_empty() {
                p { "No specific properties listed." }
            } else {
                table {
                    style: "width: 100%; border-collapse: collapse;",
                    thead {
                        tr {
                            th { style: cell, "Property" }
                            th { style: cell, "Value" }
                            th { style: cell, "Unit" }
                        }
                    }
                    tbody {
                        {detail.properties.into_iter().map(|prop| {
                            let unit = prop.unit.unwrap_or_default();
                            let prop_name = prop.name;
                            let value = prop.value;
                            rsx!(
                                tr {
                                    key: "{prop_name}",
                                    td { style: "{cell} font-weight: 500;", "{prop_name}" }
                                    td { style: cell, "{value}" }
                                    td { style: cell, "{unit}" }
                                }
                            )
                        })}
                    }
                }
            }
        }
    }
}

#[component]
fn SafetyTab(detail: ChemicalDetail, mut open_sections: Signal<BTreeSet<&'static str>>) -> Element {
    let mut toggle = move |key: &'static str| {
        let mut open = open_sections.write();
        if !open.remove(key) {
            open.insert(key);
        }
    };
    let is_open = |key: &'static str| open_sections.read().contains(key);

    let hazard_open = is_open("hazard-statements");
    let precaution_open = is_open("precautionary-statements");
    let first_aid_open = is_open("first-aid");

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 24px;",
            SafetyPictogramGroup {
                pictogram_types: detail.safety_pictograms,
                title: "GHS Pictograms".to_string(),
                pictogram_size: 40,
            }
            if let Some(rating) = detail.nfpa_rating {
                NfpaBadges { rating }
            }
            div {
                if !detail.hazard_statements.is_empty() {
                    AccordionItem {
                        title: "Hazard Statements".to_string(),
                        open: hazard_open,
                        on_toggle: move |_| toggle("hazard-statements"),
                        StatementList { statements: detail.hazard_statements }
                    }
                }
                if !detail.precautionary_statements.is_empty() {
                    AccordionItem {
                        title: "Precautionary Statements".to_string(),
                        open: precaution_open,
                        on_toggle: move |_| toggle("precautionary-statements"),
                        StatementList { statements: detail.precautionary_statements }
                    }
                }
                if let Some(first_aid) = detail.first_aid {
                    AccordionItem {
                        title: "First Aid Measures".to_string(),
                        open: first_aid_open,
                        on_toggle: move |_| toggle("first-aid"),
                        FirstAidNotes { first_aid }
                    }
                }
            }
        }
    }
}

#[component]
fn StatementList(statements: Vec<String>) -> Element {
    rsx! {
        ul {
            style: "padding-left: 20px; margin: 0; display: flex; flex-direction: column; gap: 4px;",
            for (idx, statement) in statements.into_iter().enumerate() {
                li { key: "{idx}", "{statement}" }
            }
        }
    }
}

#[component]
fn FirstAidNotes(first_aid: FirstAid) -> Element {
    let FirstAid {
        eye,
        skin,
        inhalation,
        ingestion,
    } = first_aid;
    rsx! {
        p { strong { "Eye Contact: " } "{eye}" }
        p { strong { "Skin Contact: " } "{skin}" }
        p { strong { "Inhalation: " } "{inhalation}" }
        p { strong { "Ingestion: " } "{ingestion}" }
    }
}

#[component]
fn UsesTab(uses: Vec<String>) -> Element {
    let frame = card_style();
    rsx! {
        div {
            style: "{frame}",
            h2 { style: "font-size: 20px; margin: 0 0 12px 0;", "Common Uses" }
            if uses.is_empty() {
                p { "No specific uses listed." }
            } else {
                StatementList { statements: uses }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_start_with_general() {
        let values: Vec<&str> = detail_tabs().iter().map(|tab| tab.value).collect();
        assert_eq!(values, vec!["general", "properties", "structure", "safety", "uses"]);
    }
}
