//! Error types for catalog loading.
//!
//! Only loading can fail. Filtering, sorting, paging and folder listing are
//! total over well-typed input and never return errors.

use thiserror::Error;

/// The catalog could not be made available to the gallery.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No catalog data was supplied at all.
    #[error("catalog unavailable: {0}")]
    Unavailable(String),

    /// Data was supplied but is not a list of logo records.
    #[error("catalog is malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Two records share the same path.
    #[error("duplicate catalog path '{0}'")]
    DuplicatePath(String),

    /// A record's path does not end with its filename.
    #[error("path '{path}' does not end with filename '{filename}'")]
    FilenameMismatch { path: String, filename: String },
}
