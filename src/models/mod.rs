//! UI state types.
//!
//! Catalog data types come from `logodeck_core`; this module only holds
//! what the browser layer adds on top:
//! - [`ViewMode`] - gallery grid or folder browser
//! - [`LoadState`] - catalog availability

mod view;

pub use view::{LoadState, ViewMode};
