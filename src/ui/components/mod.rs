pub mod chemical_card;
pub mod disclosure;
pub mod dropdown;
pub mod layout;
pub mod nfpa;
pub mod pagination;
pub mod periodic_tile;
pub mod pictograms;
pub mod sidebar;
pub mod structure_viewer;
