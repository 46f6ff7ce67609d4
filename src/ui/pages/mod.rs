pub mod detail;
pub mod glossary;
pub mod home;
pub mod listing;
pub mod not_found;
pub mod periodic_table;
