//! # Personalized Picks asset host
//!
//! Serves the carousel preview during development: `/` returns the entry
//! document, every other path is looked up under the asset root, and paths
//! with no matching file fall back to the entry document.

pub mod app;

pub use app::{AppState, create_app};
