pub mod adapters;
pub mod fixtures;
