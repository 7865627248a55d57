//! Shopping Cart Domain Module
//!
//! This module contains all shopping cart business logic, including:
//! - Domain models (CartLine, CartSummary)
//! - Cart aggregation against the catalog
//! - Cart, add-to-cart and checkout handlers

pub mod handlers;
pub mod helpers;
pub mod models;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use helpers::aggregate_cart;
pub use models::{CartLine, CartSummary};
