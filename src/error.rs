//! Error types for the web layer.
//!
//! - [`FetchError`] - network failures while loading the catalog
//! - [`CacheError`] - sessionStorage writes
//! - [`LoadError`] - anything that keeps the catalog from becoming available

use logodeck_core::CatalogError;
use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("Browser window not available")]
    NoWindow,
    #[error("Failed to create request")]
    RequestCreationFailed,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("HTTP error: {0}")]
    HttpError(u16),
    #[error("Request timed out")]
    Timeout,
    #[error("Failed to read response body")]
    ResponseReadFailed,
    #[error("Response was not text")]
    InvalidContent,
    #[error("Invalid JSON: {0}")]
    JsonParseError(String),
}

/// Cache operation errors.
#[derive(Debug, Clone, Error)]
pub enum CacheError {
    #[error("sessionStorage not available")]
    StorageUnavailable,
    #[error("Failed to serialize cache entry")]
    SerializationFailed,
    #[error("Failed to write cache entry")]
    WriteFailed,
}

/// Why the catalog could not be shown.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Could not fetch the logo catalog: {0}")]
    Fetch(#[from] FetchError),
    #[error("The logo catalog is invalid: {0}")]
    Catalog(#[from] CatalogError),
}
