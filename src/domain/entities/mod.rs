pub mod chemical;
pub mod element;
pub mod query;
pub mod reference;
