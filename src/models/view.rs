//! View state types for the gallery UI.

/// Main view mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Searchable card grid (default)
    #[default]
    Gallery,
    /// Virtual folder browser
    Folders,
}

impl ViewMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Gallery => "Gallery",
            Self::Folders => "Folders",
        }
    }
}

/// Catalog availability.
///
/// Nothing but the status message renders until the catalog is `Ready`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    /// Diagnostic shown instead of the gallery
    Failed(String),
}

impl LoadState {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }
}
