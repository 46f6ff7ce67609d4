pub mod details;
pub mod reference;
pub mod repo;
