//! Application configuration.
//!
//! Centralizes the constants used by the web layer. Catalog engine settings
//! (page size, debounce delay, vocabulary) live in `logodeck_core::config`
//! and are re-exported here.

use logodeck_core::links::RepoLinks;

pub use logodeck_core::config::{DEFAULT_PAGE_SIZE, SEARCH_DEBOUNCE_MS};

// =============================================================================
// Application Metadata
// =============================================================================

/// Title shown in the header.
pub const APP_NAME: &str = "Logo Gallery";

// =============================================================================
// Catalog Source
// =============================================================================

/// Generated data file, relative to the page.
pub const CATALOG_URL: &str = "logo-data.json";

/// Base for raw image bytes. Point this at the repository hosting the logos.
pub const RAW_BASE_URL: &str = "https://raw.githubusercontent.com/logodeck/logos/main";

/// Base for the repository file view.
pub const BLOB_BASE_URL: &str = "https://github.com/logodeck/logos/blob/main";

/// Link builder for the configured repository.
pub fn repo_links() -> RepoLinks {
    RepoLinks::new(RAW_BASE_URL, BLOB_BASE_URL)
}

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// sessionStorage keys.
pub mod cache {
    /// Parsed catalog records for the current tab.
    pub const CATALOG_KEY: &str = "logodeck_catalog";
}

// =============================================================================
// Images
// =============================================================================

/// Shown in place of any logo whose image fails to load.
pub const PLACEHOLDER_IMAGE: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 64 64'%3E%3Crect width='64' height='64' rx='8' fill='%23e5e7eb'/%3E%3Cpath d='M16 46l12-14 8 9 6-7 10 12z' fill='%239ca3af'/%3E%3Ccircle cx='24' cy='22' r='5' fill='%239ca3af'/%3E%3C/svg%3E";

// =============================================================================
// Icon Theme
// =============================================================================

/// Available icon sets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;
