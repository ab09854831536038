mod bl;
pub mod data_types;
pub mod dom_access;

pub use bl::visibility;
