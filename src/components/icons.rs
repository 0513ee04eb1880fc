//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuChevronLeft as ChevronLeft, LuChevronRight as ChevronRight, LuDownload as Download,
        LuExternalLink as ExternalLink, LuFolder as Folder, LuFolderOpen as Explorer,
        LuHouse as Home, LuImage as FileImage, LuLayoutGrid as Grid, LuSearch as Search,
        LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsBoxArrowUpRight as ExternalLink, BsChevronLeft as ChevronLeft,
        BsChevronRight as ChevronRight, BsDownload as Download, BsFileEarmarkImage as FileImage,
        BsFolder2 as Explorer, BsFolderFill as Folder, BsGrid as Grid, BsHouseFill as Home,
        BsSearch as Search, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(HOME, Home);
themed_icon!(FOLDER, Folder);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(SEARCH, Search);
themed_icon!(GRID, Grid);
themed_icon!(EXPLORER, Explorer);
themed_icon!(CLOSE, Close);
themed_icon!(EXTERNAL_LINK, ExternalLink);
themed_icon!(DOWNLOAD, Download);
