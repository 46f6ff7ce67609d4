pub mod detail_service;
pub mod query_service;
pub mod reference_service;
