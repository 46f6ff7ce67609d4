pub mod components;
pub mod pages;
pub mod state;
pub mod style;
