//! Catalog error types

use thiserror::Error;

/// Error type for catalog operations
///
/// Every variant is a local, recoverable condition: the operation is
/// rejected and the catalog is left unchanged (no partial writes). The
/// host is expected to surface the message and allow a retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Operation referenced a category outside the fixed set.
    ///
    /// Category names can arrive as untyped strings from host UI events,
    /// so this is checked defensively at the intent boundary.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// A required field on a create payload was empty
    #[error("validation failed: {field} must not be empty")]
    Validation { field: &'static str },

    /// Seed data could not be parsed
    #[error("invalid seed data: {0}")]
    Seed(String),
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
