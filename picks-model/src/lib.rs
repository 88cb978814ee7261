//! Core data model definitions shared across Personalized Picks crates.
#![allow(missing_docs)]

pub mod ids;
pub mod numbers;
pub mod product;

pub use ids::ProductId;
pub use numbers::{Price, Rating};
pub use product::Product;
