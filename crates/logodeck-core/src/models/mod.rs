//! Data model for the logo catalog.
//!
//! - [`LogoRecord`] - one catalog entry, immutable for the session
//! - [`Catalog`] - the shared read-only record list and its derived vocabularies
//! - [`FilterCriteria`], [`SortSpec`] - user-selected query state

mod catalog;
mod criteria;
mod record;

pub use catalog::Catalog;
pub use criteria::{FilterCriteria, FilterField, SortDirection, SortField, SortSpec};
pub use record::{LogoRecord, style_label, year_label};
