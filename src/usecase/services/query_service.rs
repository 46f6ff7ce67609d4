use std::cmp::Ordering;
use std::sync::Arc;

use crate::domain::entities::chemical::ChemicalRecord;
use crate::domain::entities::query::{QueryCriteria, ResultPage, SortKey};
use crate::usecase::ports::catalog::{CatalogError, CatalogRepository};

pub struct QueryService {
    repo: Arc<dyn CatalogRepository>,
}

impl QueryService {
    pub fn new(repo: Arc<dyn CatalogRepository>) -> Self {
        Self { repo }
    }

    pub fn list_chemicals(&self) -> Result<Vec<ChemicalRecord>, CatalogError> {
        self.repo.list_chemicals()
    }

    pub fn query_page(
        &self,
        criteria: &QueryCriteria,
        page_size: usize,
    ) -> Result<ResultPage, CatalogError> {
        let catalog = self.repo.list_chemicals()?;
        Ok(compute_result_page(&catalog, criteria, page_size))
    }
}

/// Filter, then sort the whole filtered set, then cut the page window.
///
/// A `page` past the end yields an empty window; a zero `page_size` is
/// treated as one.
pub fn compute_result_page(
    catalog: &[ChemicalRecord],
    criteria: &QueryCriteria,
    page_size: usize,
) -> ResultPage {
    let page_size = page_size.max(1);

    let mut filtered: Vec<ChemicalRecord> = catalog
        .iter()
        .filter(|record| matches_criteria(record, criteria))
        .cloned()
        .collect();
    sort_records(&mut filtered, criteria.sort_key);

    let total_count = filtered.len();
    let total_pages = total_count.div_ceil(page_size);
    let page = criteria.page.max(1);
    let start = (page - 1).saturating_mul(page_size).min(total_count);
    let end = page.saturating_mul(page_size).min(total_count);
    let items = filtered.drain(start..end).collect::<Vec<_>>();

    tracing::debug!(
        search_term = %criteria.search_term,
        tag_filters = ?criteria.active_tag_filters,
        sort_key = criteria.sort_key.as_str(),
        page,
        total_count,
        total_pages,
        "recomputed chemical listing"
    );

    ResultPage {
        items,
        total_count,
        total_pages,
        page,
    }
}

pub fn matches_criteria(record: &ChemicalRecord, criteria: &QueryCriteria) -> bool {
    matches_search_term(record, &criteria.search_term)
        && criteria
            .active_tag_filters
            .iter()
            .all(|tag| record.has_tag(tag))
}

/// Name and formula match case-insensitively; the CAS number matches as a
/// verbatim substring.
pub fn matches_search_term(record: &ChemicalRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let lowered = term.to_lowercase();
    record.name.to_lowercase().contains(&lowered)
        || record
            .cas_number
            .as_deref()
            .is_some_and(|cas| cas.contains(term))
        || record
            .formula
            .as_deref()
            .is_some_and(|formula| formula.to_lowercase().contains(&lowered))
}

/// Stable, so records with equal keys keep their catalog order.
pub fn sort_records(records: &mut [ChemicalRecord], sort_key: SortKey) {
    match sort_key {
        SortKey::NameAsc => records.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortKey::NameDesc => records.sort_by(|a, b| compare_names(&b.name, &a.name)),
        SortKey::MolecularWeightAsc => records.sort_by(|a, b| {
            a.molecular_weight_value()
                .total_cmp(&b.molecular_weight_value())
        }),
        SortKey::MolecularWeightDesc => records.sort_by(|a, b| {
            b.molecular_weight_value()
                .total_cmp(&a.molecular_weight_value())
        }),
    }
}

/// Case-folded order; names equal up to case put the lowercase spelling first.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::chemical::ChemicalId;

    fn record(id: &str, name: &str, weight: Option<&str>) -> ChemicalRecord {
        ChemicalRecord {
            id: ChemicalId::from(id),
            name: name.to_string(),
            formula: None,
            cas_number: None,
            molecular_weight: weight.map(str::to_string),
            tags: Vec::new(),
        }
    }

    #[test]
    fn name_order_ignores_case_and_puts_lowercase_first_on_ties() {
        let mut records = vec![
            record("1", "beta", None),
            record("2", "Alpha", None),
            record("3", "Beta", None),
        ];
        sort_records(&mut records, SortKey::NameAsc);

        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "beta", "Beta"]);
    }

    #[test]
    fn weight_sort_is_stable_for_equal_weights() {
        let mut records = vec![
            record("1", "First", Some("10")),
            record("2", "Missing", None),
            record("3", "Second", Some("10")),
            record("4", "Garbage", Some("abc")),
        ];
        sort_records(&mut records, SortKey::MolecularWeightAsc);

        let ids: Vec<&str> = records.iter().map(|r| r.id.0.as_str()).collect();
        assert_eq!(ids, vec!["2", "4", "1", "3"]);

        sort_records(&mut records, SortKey::MolecularWeightDesc);
        let ids: Vec<&str> = records.iter().map(|r| r.id.0.as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "2", "4"]);
    }

    #[test]
    fn page_beyond_data_yields_empty_window() {
        let catalog = vec![record("1", "Only", None)];
        let criteria = QueryCriteria {
            page: 7,
            ..QueryCriteria::default()
        };

        let result = compute_result_page(&catalog, &criteria, 10);

        assert!(result.items.is_empty());
        assert_eq!(result.total_count, 1);
        assert_eq!(result.total_pages, 1);
    }

    #[test]
    fn huge_page_number_yields_empty_window_without_overflow() {
        let criteria = QueryCriteria {
            page: usize::MAX,
            ..QueryCriteria::default()
        };

        let empty = compute_result_page(&[], &criteria, 10);
        assert!(empty.items.is_empty());
        assert_eq!(empty.total_count, 0);
        assert_eq!(empty.total_pages, 0);
        assert_eq!(empty.page, usize::MAX);

        let catalog = vec![record("1", "Only", None)];
        let result = compute_result_page(&catalog, &criteria, usize::MAX);
        assert!(result.items.is_empty());
        assert_eq!(result.total_count, 1);
        assert_eq!(result.total_pages, 1);
    }

    #[test]
    fn empty_match_has_zero_pages() {
        let catalog = vec![record("1", "Only", None)];
        let criteria = QueryCriteria {
            search_term: "zzz".to_string(),
            ..QueryCriteria::default()
        };

        let result = compute_result_page(&catalog, &criteria, 10);

        assert_eq!(result.total_count, 0);
        assert_eq!(result.total_pages, 0);
        assert!(result.items.is_empty());
    }
}
