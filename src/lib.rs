//! Ubermelon Storefront Library
//!
//! This library provides a small melon shop: catalog browsing, item detail
//! pages and a session-scoped shopping cart, served over HTTP with axum.

// Domain modules
pub mod cart;
pub mod catalog;
pub mod pages;
pub mod session;

// Infrastructure
pub mod config;
pub mod errors;
pub mod router;
pub mod shutdown;
pub mod state;
