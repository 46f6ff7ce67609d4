use dioxus::prelude::{use_signal, Signal};

use crate::domain::entities::chemical::ChemicalRecord;
use crate::domain::entities::query::{QueryCriteria, ResultPage, SortKey};
use crate::ui::components::dropdown::DropdownId;
use crate::usecase::services::query_service::compute_result_page;

/// Owns the criteria of one listing page visit.
///
/// Search, filter and sort changes send the user back to page 1; page
/// changes outside `1..=total_pages` are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingSession {
    criteria: QueryCriteria,
    page_size: usize,
}

impl ListingSession {
    pub fn new(initial_search: impl Into<String>, page_size: usize) -> Self {
        Self {
            criteria: QueryCriteria {
                search_term: initial_search.into(),
                ..QueryCriteria::default()
            },
            page_size: page_size.max(1),
        }
    }

    pub fn criteria(&self) -> &QueryCriteria {
        &self.criteria
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page(&self) -> usize {
        self.criteria.page
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.criteria.search_term = term.into();
        self.criteria.page = 1;
    }

    pub fn set_tag_filter(&mut self, tag: &str, enabled: bool) {
        if enabled {
            self.criteria.active_tag_filters.insert(tag.to_string());
        } else {
            self.criteria.active_tag_filters.remove(tag);
        }
        self.criteria.page = 1;
    }

    pub fn is_tag_filter_active(&self, tag: &str) -> bool {
        self.criteria.active_tag_filters.contains(tag)
    }

    pub fn set_sort_key(&mut self, sort_key: SortKey) {
        self.criteria.sort_key = sort_key;
        self.criteria.page = 1;
    }

    /// Returns whether the page actually changed.
    pub fn go_to_page(&mut self, target: usize, total_pages: usize) -> bool {
        if target < 1 || target > total_pages {
            return false;
        }
        self.criteria.page = target;
        true
    }

    pub fn result(&self, catalog: &[ChemicalRecord]) -> ResultPage {
        compute_result_page(catalog, &self.criteria, self.page_size)
    }
}

pub struct ListingState {
    pub session: Signal<ListingSession>,
    pub open_dropdown: Signal<Option<DropdownId>>,
    pub dropdown_pos: Signal<Option<(f64, f64)>>,
}

impl ListingState {
    pub fn new(initial_search: String, page_size: usize) -> Self {
        Self {
            session: use_signal(move || ListingSession::new(initial_search, page_size)),
            open_dropdown: use_signal(|| None::<DropdownId>),
            dropdown_pos: use_signal(|| None::<(f64, f64)>),
        }
    }
}
