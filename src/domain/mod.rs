//! Core domain types and logic.

pub mod segment;
pub mod intersection;
pub mod curve;
pub mod crossing;
pub mod response;
pub mod price_grid;
pub mod summary;
pub mod analysis;
pub mod config_validation;
pub mod error;
