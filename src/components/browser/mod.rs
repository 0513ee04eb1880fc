//! Virtual folder browser.
//!
//! Components:
//! - [`FolderBrowser`] - folder tiles and file cards for the current cursor
//! - [`PathBar`] - clickable breadcrumb trail

#[allow(clippy::module_inception)]
mod browser;
mod pathbar;

pub use browser::FolderBrowser;
pub use pathbar::PathBar;
