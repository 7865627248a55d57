//! Error Types
//!
//! [`StoreError`] covers failures while answering a request and renders
//! itself as an HTTP response. [`StartupError`] covers everything that can
//! stop the server from starting.

use std::io;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use hmac::digest::InvalidLength;
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    catalog::{CatalogError, ItemId},
    pages::render,
};

/// Errors surfaced to shoppers
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("No melon with id {0}")]
    NotFound(ItemId),

    #[error("No page at {0}")]
    PageNotFound(String),

    #[error("{0}")]
    NotImplemented(&'static str),
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        match self {
            StoreError::NotFound(_) | StoreError::PageNotFound(_) => {
                debug!("{self}");
                (
                    StatusCode::NOT_FOUND,
                    Html(render::not_found(&self.to_string())),
                )
                    .into_response()
            }
            StoreError::NotImplemented(message) => {
                info!("unimplemented feature requested: {message}");
                (StatusCode::NOT_IMPLEMENTED, message).into_response()
            }
        }
    }
}

/// Errors that prevent the server from starting
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Invalid session secret: {0}")]
    SessionSecret(InvalidLength),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] io::Error),
}

// Convenience `Result` type for handlers
pub type Result<T> = std::result::Result<T, StoreError>;
