use std::sync::Arc;

use crate::domain::entities::chemical::{ChemicalDetail, ChemicalId};
use crate::usecase::ports::catalog::{CatalogError, CatalogRepository};

pub struct DetailService {
    repo: Arc<dyn CatalogRepository>,
}

impl DetailService {
    pub fn new(repo: Arc<dyn CatalogRepository>) -> Self {
        Self { repo }
    }

    pub fn find_detail(&self, id: &ChemicalId) -> Result<Option<ChemicalDetail>, CatalogError> {
        let detail = self.repo.find_detail(id)?;
        if detail.is_none() {
            tracing::warn!(%id, "no chemical detail for id");
        }
        Ok(detail)
    }
}
