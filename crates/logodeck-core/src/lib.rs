//! Catalog engine for the logo gallery.
//!
//! Everything here is synchronous and free of browser APIs so it can be
//! exercised natively:
//!
//! - [`Catalog`] - read-only record collection loaded from the generated data file
//! - [`filter`] / [`sort_records`] - the search and ordering pipeline
//! - [`Paginator`] - incremental "load more" reveal
//! - [`list_children`] / [`breadcrumbs`] - virtual folders rebuilt from flat paths
//! - [`Gallery`] - session state driven by [`Command`]s
//! - [`Debouncer`] - cancellable delay for search input

pub mod collate;
pub mod config;
pub mod debounce;
pub mod error;
mod filter;
pub mod links;
mod models;
mod pagination;
mod session;
mod sort;
mod tree;

pub use debounce::{DelayScheduler, Debouncer};
pub use error::CatalogError;
pub use filter::{filter, matches};
pub use models::{
    Catalog, FilterCriteria, FilterField, LogoRecord, SortDirection, SortField, SortSpec,
    style_label, year_label,
};
pub use pagination::Paginator;
pub use session::{Command, FolderView, Gallery, Outcome, Page};
pub use sort::sort_records;
pub use tree::{Breadcrumb, FolderListing, breadcrumbs, list_children, normalize_cursor, parent_path};
