use std::sync::Arc;

use crate::domain::entities::element::{Element, ElementCategory, PeriodicCell};
use crate::domain::entities::reference::{GlossaryTerm, UnitExplanation};
use crate::usecase::ports::catalog::{CatalogError, CatalogRepository};

pub const PERIODIC_COLUMNS: usize = 18;
pub const PERIODIC_ROWS: usize = 7;
const MARKER_GROUP: usize = 3;

pub struct ReferenceService {
    repo: Arc<dyn CatalogRepository>,
}

impl ReferenceService {
    pub fn new(repo: Arc<dyn CatalogRepository>) -> Self {
        Self { repo }
    }

    pub fn periodic_grid(&self) -> Result<Vec<Vec<PeriodicCell>>, CatalogError> {
        let elements = self.repo.list_elements()?;
        Ok(build_periodic_grid(&elements))
    }

    pub fn find_element(&self, symbol: &str) -> Result<Option<Element>, CatalogError> {
        Ok(self
            .repo
            .list_elements()?
            .into_iter()
            .find(|element| element.symbol == symbol))
    }

    pub fn glossary_terms(&self) -> &'static [GlossaryTerm] {
        self.repo.glossary_terms()
    }

    pub fn unit_explanations(&self) -> &'static [UnitExplanation] {
        self.repo.unit_explanations()
    }

    pub fn safety_guidelines(&self) -> &'static [&'static str] {
        self.repo.safety_guidelines()
    }
}

/// Lays elements out by period (row) and group (column), then appends the
/// lanthanide and actinide marker rows.
///
/// Elements with a period or group outside the table are skipped.
pub fn build_periodic_grid(elements: &[Element]) -> Vec<Vec<PeriodicCell>> {
    let periods = elements
        .iter()
        .filter(|element| (1..=PERIODIC_COLUMNS as u32).contains(&element.group))
        .filter(|element| (1..=PERIODIC_ROWS as u32).contains(&element.period))
        .map(|element| element.period as usize)
        .max()
        .unwrap_or(0);

    let mut rows = vec![vec![PeriodicCell::Empty; PERIODIC_COLUMNS]; periods];
    for element in elements {
        let (period, group) = (element.period as usize, element.group as usize);
        if period == 0 || period > PERIODIC_ROWS || group == 0 || group > PERIODIC_COLUMNS {
            tracing::warn!(symbol = %element.symbol, period, group, "element outside periodic grid");
            continue;
        }
        rows[period - 1][group - 1] = PeriodicCell::Element(element.clone());
    }

    for (label, category) in [
        ("*Lanthanides", ElementCategory::Lanthanide),
        ("**Actinides", ElementCategory::Actinide),
    ] {
        let mut row = vec![PeriodicCell::Empty; PERIODIC_COLUMNS];
        row[MARKER_GROUP - 1] = PeriodicCell::Marker { label, category };
        rows.push(row);
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(symbol: &str, period: u32, group: u32) -> Element {
        Element {
            atomic_number: 1,
            symbol: symbol.to_string(),
            name: symbol.to_string(),
            category: ElementCategory::Nonmetal,
            atomic_mass: None,
            period,
            group,
        }
    }

    #[test]
    fn corrupt_period_is_skipped_instead_of_sizing_the_grid() {
        let elements = vec![
            element("H", 1, 1),
            element("Xx", 4_000_000_000, 1),
            element("Yy", 8, 2),
        ];

        let grid = build_periodic_grid(&elements);

        assert_eq!(grid.len(), 1 + 2, "one element row plus two marker rows");
        assert_eq!(grid[0][0], PeriodicCell::Element(element("H", 1, 1)));
        let placed: Vec<&str> = grid
            .iter()
            .flatten()
            .filter_map(|cell| match cell {
                PeriodicCell::Element(element) => Some(element.symbol.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(placed, vec!["H"]);
    }
}
