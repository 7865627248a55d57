//! Storefront Pages Module
//!
//! This module contains the browsing pages and the login placeholder:
//! - HTML rendering for every view, including the shared layout
//! - Landing, listing, detail and login handlers
//! - The 404 fallback

pub mod handlers;
pub mod render;

// Re-export commonly used types for convenience
pub use handlers::{not_found, routes};
