//! Catalog Errors

use std::{io, path::PathBuf};

use thiserror::Error;

use super::models::ItemId;

/// Errors raised while loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("duplicate melon id {0}")]
    DuplicateId(ItemId),

    #[error("melon {0} has a negative price")]
    NegativePrice(ItemId),
}
