use std::collections::HashSet;

use csv::StringRecord;

use crate::domain::entities::chemical::{ChemicalId, ChemicalRecord};
use crate::domain::entities::element::{Element, ElementCategory};
use crate::usecase::ports::catalog::CatalogError;

const CHEMICALS_SOURCE: &str = "chemical catalog";
const ELEMENTS_SOURCE: &str = "element table";
const TAG_SEPARATOR: char = ';';

struct Columns<'a> {
    source_name: &'static str,
    headers: &'a StringRecord,
}

impl Columns<'_> {
    fn index(&self, column: &'static str) -> Result<usize, CatalogError> {
        self.headers
            .iter()
            .position(|header| header.trim() == column)
            .ok_or(CatalogError::MissingColumn {
                source_name: self.source_name,
                column,
            })
    }
}

fn cell(record: &StringRecord, idx: usize) -> &str {
    record.get(idx).map(str::trim).unwrap_or("")
}

fn optional_cell(record: &StringRecord, idx: usize) -> Option<String> {
    let value = cell(record, idx);
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn required_cell(
    record: &StringRecord,
    idx: usize,
    source_name: &'static str,
    row: usize,
    column: &'static str,
) -> Result<String, CatalogError> {
    let value = cell(record, idx);
    if value.is_empty() {
        return Err(CatalogError::EmptyField {
            source_name,
            row,
            column,
        });
    }
    Ok(value.to_string())
}

fn numeric_cell(
    record: &StringRecord,
    idx: usize,
    source_name: &'static str,
    row: usize,
    column: &'static str,
) -> Result<u32, CatalogError> {
    let value = required_cell(record, idx, source_name, row, column)?;
    value.parse::<u32>().map_err(|_| CatalogError::InvalidNumber {
        source_name,
        row,
        column,
        value,
    })
}

fn read_headers(
    reader: &mut csv::Reader<&[u8]>,
    source_name: &'static str,
) -> Result<StringRecord, CatalogError> {
    reader
        .headers()
        .cloned()
        .map_err(|source| CatalogError::Csv {
            source_name,
            source,
        })
}

/// Parses `id,name,formula,cas_number,molecular_weight,tags`; tags are
/// `;`-separated and the weight stays text.
pub fn parse_chemicals_csv(text: &str) -> Result<Vec<ChemicalRecord>, CatalogError> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let headers = read_headers(&mut reader, CHEMICALS_SOURCE)?;
    let columns = Columns {
        source_name: CHEMICALS_SOURCE,
        headers: &headers,
    };
    let id_idx = columns.index("id")?;
    let name_idx = columns.index("name")?;
    let formula_idx = columns.index("formula")?;
    let cas_idx = columns.index("cas_number")?;
    let weight_idx = columns.index("molecular_weight")?;
    let tags_idx = columns.index("tags")?;

    let mut seen = HashSet::new();
    let mut records = Vec::new();
    for (row_idx, record) in reader.records().enumerate() {
        let row = row_idx + 1;
        let record = record.map_err(|source| CatalogError::Csv {
            source_name: CHEMICALS_SOURCE,
            source,
        })?;

        let id = ChemicalId(required_cell(&record, id_idx, CHEMICALS_SOURCE, row, "id")?);
        if !seen.insert(id.clone()) {
            return Err(CatalogError::DuplicateId(id));
        }

        let tags = cell(&record, tags_idx)
            .split(TAG_SEPARATOR)
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect();

        records.push(ChemicalRecord {
            id,
            name: required_cell(&record, name_idx, CHEMICALS_SOURCE, row, "name")?,
            formula: optional_cell(&record, formula_idx),
            cas_number: optional_cell(&record, cas_idx),
            molecular_weight: optional_cell(&record, weight_idx),
            tags,
        });
    }

    Ok(records)
}

pub fn parse_elements_csv(text: &str) -> Result<Vec<Element>, CatalogError> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let headers = read_headers(&mut reader, ELEMENTS_SOURCE)?;
    let columns = Columns {
        source_name: ELEMENTS_SOURCE,
        headers: &headers,
    };
    let number_idx = columns.index("atomic_number")?;
    let symbol_idx = columns.index("symbol")?;
    let name_idx = columns.index("name")?;
    let category_idx = columns.index("category")?;
    let mass_idx = columns.index("atomic_mass")?;
    let period_idx = columns.index("period")?;
    let group_idx = columns.index("group")?;

    let mut elements = Vec::new();
    for (row_idx, record) in reader.records().enumerate() {
        let row = row_idx + 1;
        let record = record.map_err(|source| CatalogError::Csv {
            source_name: ELEMENTS_SOURCE,
            source,
        })?;

        elements.push(Element {
            atomic_number: numeric_cell(&record, number_idx, ELEMENTS_SOURCE, row, "atomic_number")?,
            symbol: required_cell(&record, symbol_idx, ELEMENTS_SOURCE, row, "symbol")?,
            name: required_cell(&record, name_idx, ELEMENTS_SOURCE, row, "name")?,
            category: ElementCategory::from_slug(cell(&record, category_idx)),
            atomic_mass: optional_cell(&record, mass_idx),
            period: numeric_cell(&record, period_idx, ELEMENTS_SOURCE, row, "period")?,
            group: numeric_cell(&record, group_idx, ELEMENTS_SOURCE, row, "group")?,
        });
    }

    Ok(elements)
}
