use std::sync::Arc;

use dioxus::prelude::*;

use crate::infra::catalog::repo::StaticCatalogRepo;
use crate::ui::components::layout::SiteLayout;
use crate::ui::pages::detail::ChemicalDetailPage;
use crate::ui::pages::glossary::GlossaryInfo;
use crate::ui::pages::home::Home;
use crate::ui::pages::listing::ChemicalListing;
use crate::ui::pages::not_found::PageNotFound;
use crate::ui::pages::periodic_table::PeriodicTable;
use crate::usecase::ports::catalog::{CatalogError, CatalogRepository};
use crate::usecase::services::detail_service::DetailService;
use crate::usecase::services::query_service::QueryService;
use crate::usecase::services::reference_service::ReferenceService;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},
        #[route("/chemical-listing?:search")]
        ChemicalListing { search: String },
        #[route("/chemical-detail/:id")]
        ChemicalDetailPage { id: String },
        #[route("/periodic-table")]
        PeriodicTable {},
        #[route("/glossary-info")]
        GlossaryInfo {},
        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}

/// Services shared with every page through the Dioxus context.
#[derive(Clone)]
pub struct AppServices {
    pub query: Arc<QueryService>,
    pub detail: Arc<DetailService>,
    pub reference: Arc<ReferenceService>,
}

impl AppServices {
    pub fn bootstrap() -> Result<Self, CatalogError> {
        let repo = Arc::new(StaticCatalogRepo::load()?);
        Ok(Self::with_repo(repo))
    }

    pub fn with_repo(repo: Arc<dyn CatalogRepository>) -> Self {
        Self {
            query: Arc::new(QueryService::new(repo.clone())),
            detail: Arc::new(DetailService::new(repo.clone())),
            reference: Arc::new(ReferenceService::new(repo)),
        }
    }
}

impl PartialEq for AppServices {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.query, &other.query)
            && Arc::ptr_eq(&self.detail, &other.detail)
            && Arc::ptr_eq(&self.reference, &other.reference)
    }
}

#[component]
pub fn App() -> Element {
    let services = use_hook(|| AppServices::bootstrap().map_err(|err| err.to_string()));

    match services {
        Ok(services) => rsx! { ServicesProvider { services } },
        Err(err) => {
            tracing::error!("failed to load catalog: {err}");
            rsx! {
                div {
                    p { "Unable to load the chemical catalog: {err}" }
                }
            }
        }
    }
}

#[component]
fn ServicesProvider(services: AppServices) -> Element {
    use_context_provider(|| services);
    rsx! { Router::<Route> {} }
}
