pub mod catalog;
pub mod import;
