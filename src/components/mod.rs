//! UI components built with Leptos.
//!
//! - [`Shell`] - header, view switch and load-state gate
//! - [`gallery`] - filter bar, result grid and cards
//! - [`browser`] - virtual folder browser with breadcrumb path bar
//! - [`modal`] - logo detail dialog
//! - [`icons`] - centralized icon definitions (change theme here)

pub mod browser;
pub mod gallery;
pub mod icons;
mod logo_image;
pub mod modal;
mod shell;

pub use logo_image::LogoImage;
pub use shell::Shell;
