use dioxus::prelude::*;

use crate::app::{AppServices, Route};
use crate::domain::entities::chemical::ChemicalId;
use crate::domain::entities::query::SortKey;
use crate::ui::components::chemical_card::ChemicalInfoCard;
use crate::ui::components::dropdown::{DropdownId, DropdownOption, DropdownSelect};
use crate::ui::components::pagination::Pagination;
use crate::ui::components::sidebar::Sidebar;
use crate::ui::state::listing_state::ListingState;
use crate::PAGE_SIZE;

pub const FILTER_TAGS: [&str; 2] = ["Flammable", "Toxic"];

pub fn sort_options() -> Vec<DropdownOption> {
    SortKey::ALL
        .into_iter()
        .map(|key| DropdownOption {
            value: key.as_str().to_string(),
            label: key.label().to_string(),
        })
        .collect()
}

#[component]
pub fn ChemicalListing(search: String) -> Element {
    let services = use_context::<AppServices>();
    let ListingState {
        mut session,
        mut open_dropdown,
        dropdown_pos,
    } = ListingState::new(search.clone(), PAGE_SIZE);

    let catalog = use_hook(|| {
        services
            .query
            .list_chemicals()
            .map_err(|err| err.to_string())
    });

    use_hook(|| tracing::info!(search = %search, "chemical listing loaded"));

    // A new `?search=` keeps this component mounted.
    use_effect(use_reactive((&search,), move |(search,)| {
        if session.peek().criteria().search_term != search {
            session.write().set_search_term(search);
        }
    }));

    let catalog = match catalog {
        Ok(catalog) => catalog,
        Err(err) => {
            tracing::error!("failed to list chemicals: {err}");
            return rsx! {
                p { style: "color: #b91c1c;", "Unable to load chemicals: {err}" }
            };
        }
    };

    let snapshot = session.read().clone();
    let result = snapshot.result(&catalog);
    let search_term = snapshot.criteria().search_term.clone();
    let selected_sort = snapshot.criteria().sort_key.as_str().to_string();
    let total_count = result.total_count;
    let total_pages = result.total_pages;
    let current_page = result.page;
    let no_results = result.items.is_empty();

    rsx! {
        div {
            style: "display: flex; gap: 32px;",
            onclick: move |_| open_dropdown.set(None),
            Sidebar {
                div {
                    style: "display: flex; flex-direction: column; gap: 6px;",
                    label { r#for: "refine-search", style: "font-size: 14px; font-weight: 500;", "Refine Search" }
                    input {
                        id: "refine-search",
                        r#type: "search",
                        style: "padding: 8px; border: 1px solid #cbd5e1; border-radius: 6px;",
                        placeholder: "Name, CAS, formula...",
                        value: "{search_term}",
                        oninput: move |event| session.write().set_search_term(event.value()),
                    }
                }
                div {
                    style: "display: flex; flex-direction: column; gap: 8px;",
                    h3 { style: "font-size: 14px; font-weight: 500; margin: 0;", "Filter by Hazard" }
                    for tag in FILTER_TAGS {
                        {
                            let checked = snapshot.is_tag_filter_active(tag);
                            let input_id = format!("filter-{}", tag.to_lowercase());
                            rsx! {
                                div {
                                    key: "{tag}",
                                    style: "display: flex; gap: 8px; align-items: center;",
                                    input {
                                        id: "{input_id}",
                                        r#type: "checkbox",
                                        checked,
                                        onchange: move |_| {
                                            let enabled = !session.peek().is_tag_filter_active(tag);
                                            session.write().set_tag_filter(tag, enabled);
                                        },
                                    }
                                    label { r#for: "{input_id}", style: "font-size: 14px;", "{tag}" }
                                }
                            }
                        }
                    }
                }
                DropdownSelect {
                    id: DropdownId::Sort,
                    label: "Sort By",
                    options: sort_options(),
                    selected: Some(selected_sort),
                    open_dropdown,
                    dropdown_pos,
                    on_select: move |value: String| match value.parse::<SortKey>() {
                        Ok(key) => session.write().set_sort_key(key),
                        Err(err) => tracing::warn!("{err}"),
                    },
                }
            }
            section {
                style: "flex: 1; min-width: 0;",
                h1 { style: "font-size: 28px; margin: 0 0 24px 0;", "Chemicals Found ({total_count})" }
                if no_results {
                    p { style: "text-align: center; color: #64748b; padding: 48px 0;", "No chemicals found matching your criteria." }
                } else {
                    div {
                        style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 24px;",
                        {result.items.into_iter().map(|record| {
                            let key = record.id.to_string();
                            rsx!(
                                ChemicalInfoCard {
                                    key: "{key}",
                                    record,
                                    on_view_details: move |id: ChemicalId| {
                                        navigator().push(Route::ChemicalDetailPage { id: id.0 });
                                    },
                                }
                            )
                        })}
                    }
                }
                Pagination {
                    current: current_page,
                    total_pages,
                    on_change: move |target: usize| {
                        if !session.write().go_to_page(target, total_pages) {
                            tracing::debug!(requested = target, total_pages, "ignored page change");
                        }
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_options_follow_sort_key_order() {
        let values: Vec<String> = sort_options().into_iter().map(|opt| opt.value).collect();
        assert_eq!(values, vec!["name-asc", "name-desc", "mw-asc", "mw-desc"]);
    }
}
