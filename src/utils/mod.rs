//! Browser-facing utilities.
//!
//! - [`fetch_json_cached`] - catalog fetch with timeout and session cache
//! - [`debouncer`] - search debouncer backed by `setTimeout`
//! - [`format`] - gallery text helpers

pub mod cache;
pub mod dom;
mod fetch;
pub mod format;
mod timer;

pub use fetch::fetch_json_cached;
pub use timer::debouncer;
