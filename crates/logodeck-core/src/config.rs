//! Catalog engine constants.

// =============================================================================
// Pagination
// =============================================================================

/// Number of cards revealed per "load more".
pub const DEFAULT_PAGE_SIZE: usize = 48;

// =============================================================================
// Input Handling
// =============================================================================

/// Quiet period before a search edit is applied (milliseconds).
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

// =============================================================================
// Vocabulary
// =============================================================================

/// Year sentinel for logos in active use.
pub const YEAR_CURRENT: &str = "current";

/// Year sentinel for retired logos.
pub const YEAR_LEGACY: &str = "legacy";

/// Style filter value that matches every monochrome variant.
pub const STYLE_MONOCHROME: &str = "monochrome";

/// Known style codes with their display labels, in menu order.
pub const STYLE_LABELS: &[(&str, &str)] = &[
    ("full-color", "Full Color"),
    ("monochrome", "Monochrome"),
    ("monochrome-positive", "Monochrome (Positive)"),
    ("monochrome-negative", "Monochrome (Negative)"),
    ("positive", "Positive"),
    ("negative", "Negative"),
];

/// Label of the first breadcrumb.
pub const ROOT_LABEL: &str = "Root";
