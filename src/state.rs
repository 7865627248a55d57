//! Application State
//!
//! This module wires the catalog, the session store and the cookie signer
//! into the state shared by every handler.

use std::sync::Arc;

use tracing::{info, warn};

use crate::{
    catalog::{CatalogLookup, InMemoryCatalog},
    config::ServerConfig,
    errors::StartupError,
    session::{SessionStore, TokenSigner},
};

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state: the catalog and per-browser sessions
pub struct AppState {
    /// Read-only product catalog.
    pub catalog: Arc<dyn CatalogLookup>,

    /// Server-held session state, keyed by session id.
    pub sessions: SessionStore,

    /// Signs and verifies session cookies.
    pub signer: TokenSigner,
}

impl AppState {
    /// Creates state around a catalog with no sessions yet
    pub fn new(catalog: Arc<dyn CatalogLookup>, signer: TokenSigner) -> Self {
        Self {
            catalog,
            sessions: SessionStore::new(),
            signer,
        }
    }

    /// Builds the state described by the server configuration.
    ///
    /// Loads the configured catalog file, or the built-in catalog when none
    /// is given.
    pub fn from_config(config: &ServerConfig) -> Result<Self, StartupError> {
        let catalog = match &config.catalog {
            Some(path) => InMemoryCatalog::load(path)?,
            None => {
                let catalog = InMemoryCatalog::builtin()?;
                info!(melons = catalog.len(), "using built-in catalog");
                catalog
            }
        };

        if config.uses_default_secret() {
            warn!("SESSION_SECRET is not set; using the development secret");
        }

        let signer =
            TokenSigner::new(&config.session_secret).map_err(StartupError::SessionSecret)?;

        Ok(Self::new(Arc::new(catalog), signer))
    }
}
