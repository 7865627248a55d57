//! Melon Catalog Module
//!
//! This module contains the read-only product catalog, including:
//! - Domain models (Item)
//! - The lookup capability handlers depend on (CatalogLookup)
//! - An in-memory catalog loaded from TOML
//! - Catalog loading errors

pub mod errors;
pub mod models;
pub mod store;

// Re-export commonly used types for convenience
pub use errors::CatalogError;
pub use models::{Item, ItemId};
pub use store::{CatalogLookup, InMemoryCatalog};
