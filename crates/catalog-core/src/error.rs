//! Catalog Errors
//!
//! Only startup loading can fail; store intents never return errors.

use thiserror::Error;

/// Common result type for catalog loading
pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Invalid seed data: {0}")]
    Seed(#[from] serde_json::Error),
    #[error("Duplicate item id in seed data: {0}")]
    DuplicateId(u32),
    #[error("Invalid config: {0}")]
    Config(String),
}
