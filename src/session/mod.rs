//! Browser Session Module
//!
//! This module contains everything needed to give each browser its own
//! server-held state, including:
//! - The typed session state (cart and pending flash notices)
//! - The in-memory session store
//! - Signing and verification of the session cookie
//! - The middleware that attaches a session to every request

pub mod middleware;
pub mod models;
pub mod store;
pub mod token;

// Re-export commonly used types for convenience
pub use middleware::{session_layer, CurrentSession, SESSION_COOKIE};
pub use models::{Session, SessionId};
pub use store::SessionStore;
pub use token::TokenSigner;
