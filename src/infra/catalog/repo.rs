use std::collections::HashMap;

use crate::domain::entities::chemical::{ChemicalDetail, ChemicalId, ChemicalRecord};
use crate::domain::entities::element::Element;
use crate::domain::entities::reference::{GlossaryTerm, UnitExplanation};
use crate::infra::catalog::details::parse_chemical_details;
use crate::infra::catalog::reference::{GLOSSARY_TERMS, SAFETY_GUIDELINES, UNIT_EXPLANATIONS};
use crate::infra::import::csv::{parse_chemicals_csv, parse_elements_csv};
use crate::usecase::ports::catalog::{CatalogError, CatalogRepository};

const CHEMICALS_CSV: &str = include_str!("../../../assets/data/chemicals.csv");
const CHEMICAL_DETAILS_JSON: &str = include_str!("../../../assets/data/chemical_details.json");
const ELEMENTS_CSV: &str = include_str!("../../../assets/data/elements.csv");

/// Catalog compiled into the binary. Parsed once, never mutated.
pub struct StaticCatalogRepo {
    chemicals: Vec<ChemicalRecord>,
    details: HashMap<ChemicalId, ChemicalDetail>,
    elements: Vec<Element>,
}

impl StaticCatalogRepo {
    pub fn load() -> Result<Self, CatalogError> {
        Self::from_sources(CHEMICALS_CSV, CHEMICAL_DETAILS_JSON, ELEMENTS_CSV)
    }

    pub fn from_sources(
        chemicals_csv: &str,
        details_json: &str,
        elements_csv: &str,
    ) -> Result<Self, CatalogError> {
        let chemicals = parse_chemicals_csv(chemicals_csv)?;
        let details = parse_chemical_details(details_json)?;
        let elements = parse_elements_csv(elements_csv)?;

        for id in details.keys() {
            if !chemicals.iter().any(|record| &record.id == id) {
                tracing::warn!(%id, "chemical detail has no catalog entry");
            }
        }
        tracing::info!(
            chemicals = chemicals.len(),
            details = details.len(),
            elements = elements.len(),
            "loaded static catalog"
        );

        Ok(Self {
            chemicals,
            details,
            elements,
        })
    }
}

impl CatalogRepository for StaticCatalogRepo {
    fn list_chemicals(&self) -> Result<Vec<ChemicalRecord>, CatalogError> {
        Ok(self.chemicals.clone())
    }

    fn find_detail(&self, id: &ChemicalId) -> Result<Option<ChemicalDetail>, CatalogError> {
        Ok(self.details.get(id).cloned())
    }

    fn list_elements(&self) -> Result<Vec<Element>, CatalogError> {
        Ok(self.elements.clone())
    }

    fn glossary_terms(&self) -> &'static [GlossaryTerm] {
        GLOSSARY_TERMS
    }

    fn unit_explanations(&self) -> &'static [UnitExplanation] {
        UNIT_EXPLANATIONS
    }

    fn safety_guidelines(&self) -> &'static [&'static str] {
        SAFETY_GUIDELINES
    }
}
