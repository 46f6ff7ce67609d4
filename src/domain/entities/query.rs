use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::entities::chemical::ChemicalRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    #[serde(rename = "name-asc")]
    NameAsc,
    #[serde(rename = "name-desc")]
    NameDesc,
    #[serde(rename = "mw-asc")]
    MolecularWeightAsc,
    #[serde(rename = "mw-desc")]
    MolecularWeightDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::NameAsc,
        SortKey::NameDesc,
        SortKey::MolecularWeightAsc,
        SortKey::MolecularWeightDesc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
            SortKey::MolecularWeightAsc => "mw-asc",
            SortKey::MolecularWeightDesc => "mw-desc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::NameAsc => "Name (A-Z)",
            SortKey::NameDesc => "Name (Z-A)",
            SortKey::MolecularWeightAsc => "Molecular Weight (Low to High)",
            SortKey::MolecularWeightDesc => "Molecular Weight (High to Low)",
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == value)
            .ok_or_else(|| format!("unknown sort key: {value}"))
    }
}

/// What the listing page asks the pipeline for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryCriteria {
    pub search_term: String,
    pub active_tag_filters: BTreeSet<String>,
    pub sort_key: SortKey,
    /// 1-indexed.
    pub page: usize,
}

impl Default for QueryCriteria {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            active_tag_filters: BTreeSet::new(),
            sort_key: SortKey::default(),
            page: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultPage {
    pub items: Vec<ChemicalRecord>,
    pub total_count: usize,
    pub total_pages: usize,
    pub page: usize,
}
