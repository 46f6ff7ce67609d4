use thiserror::Error;

use crate::domain::entities::chemical::{ChemicalDetail, ChemicalId, ChemicalRecord};
use crate::domain::entities::element::Element;
use crate::domain::entities::reference::{GlossaryTerm, UnitExplanation};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {source_name}: {source}")]
    Csv {
        source_name: &'static str,
        #[source]
        source: csv::Error,
    },
    #[error("{source_name} is missing column `{column}`")]
    MissingColumn {
        source_name: &'static str,
        column: &'static str,
    },
    #[error("{source_name} row {row} has an empty `{column}`")]
    EmptyField {
        source_name: &'static str,
        row: usize,
        column: &'static str,
    },
    #[error("{source_name} row {row} has an invalid `{column}`: {value}")]
    InvalidNumber {
        source_name: &'static str,
        row: usize,
        column: &'static str,
        value: String,
    },
    #[error("duplicate chemical id `{0}`")]
    DuplicateId(ChemicalId),
    #[error("failed to parse chemical details: {0}")]
    Details(#[from] serde_json::Error),
}

/// Read-only access to the embedded catalog and reference tables.
pub trait CatalogRepository: Send + Sync {
    /// Returns a fresh copy on every call.
    fn list_chemicals(&self) -> Result<Vec<ChemicalRecord>, CatalogError>;
    fn find_detail(&self, id: &ChemicalId) -> Result<Option<ChemicalDetail>, CatalogError>;
    fn list_elements(&self) -> Result<Vec<Element>, CatalogError>;

    fn glossary_terms(&self) -> &'static [GlossaryTerm];
    fn unit_explanations(&self) -> &'static [UnitExplanation];
    fn safety_guidelines(&self) -> &'static [&'static str];
}
