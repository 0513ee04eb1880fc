//! Gallery grid UI.
//!
//! Components:
//! - [`GalleryView`] - result summary, card grid and "Load more"
//! - [`FilterBar`] - search, dropdown filters, sort and reset
//! - [`LogoCard`] - one logo tile (also used by the folder browser)

mod filter_bar;
#[allow(clippy::module_inception)]
mod gallery;
mod logo_card;

pub use filter_bar::FilterBar;
pub use gallery::GalleryView;
pub use logo_card::LogoCard;
