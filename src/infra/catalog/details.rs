use std::collections::HashMap;

use crate::domain::entities::chemical::{ChemicalDetail, ChemicalId};
use crate::usecase::ports::catalog::CatalogError;

pub fn parse_chemical_details(
    text: &str,
) -> Result<HashMap<ChemicalId, ChemicalDetail>, CatalogError> {
    let details: Vec<ChemicalDetail> = serde_json::from_str(text)?;

    let mut by_id = HashMap::with_capacity(details.len());
    for detail in details {
        let id = detail.id.clone();
        if by_id.insert(id.clone(), detail).is_some() {
            return Err(CatalogError::DuplicateId(id));
        }
    }
    Ok(by_id)
}
