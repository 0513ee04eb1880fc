//! Gallery session state and the commands that drive it.
//!
//! The presentation layer owns one [`Gallery`] and turns every user action
//! into a [`Command`]. Each command runs synchronously and returns an
//! [`Outcome`] describing what to render; nothing here touches the UI.

use crate::filter::filter;
use crate::models::{Catalog, FilterCriteria, FilterField, LogoRecord, SortSpec};
use crate::pagination::Paginator;
use crate::sort::sort_records;
use crate::tree::{Breadcrumb, breadcrumbs, list_children, normalize_cursor, parent_path};

/// A user action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Replace the search text (already debounced by the caller)
    Search(String),
    /// Set one dropdown filter; an empty value removes the constraint
    Filter(FilterField, String),
    /// Change the ordering
    Sort(SortSpec),
    /// Reset every filter and the search text
    ClearFilters,
    /// Reveal the next page of results
    LoadMore,
    /// Open a virtual folder
    Browse(String),
    /// Return to the top of the folder tree
    BrowseRoot,
    /// Move to the parent of the current folder
    BrowseUp,
}

/// Counts for one reveal step. The records themselves are read back with
/// [`Gallery::visible`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Page {
    /// Records revealed by this step
    pub added: usize,
    /// Total revealed after this step
    pub shown: usize,
    /// Total matching records
    pub total: usize,
    /// Whether another "load more" would reveal anything
    pub has_more: bool,
}

impl Page {
    /// Index in [`Gallery::visible`] of the first record this step revealed.
    pub fn first_added(&self) -> Option<usize> {
        (self.added > 0).then(|| self.shown - self.added)
    }
}

/// Contents of the folder under the browse cursor.
#[derive(Clone, Debug, PartialEq)]
pub struct FolderView {
    /// Normalized path of this folder; empty at the root
    pub cursor: String,
    /// Trail from the root down to this folder
    pub breadcrumbs: Vec<Breadcrumb>,
    /// Immediate subfolder names, collated
    pub folders: Vec<String>,
    /// Records sitting directly in this folder, collated by file name
    pub files: Vec<LogoRecord>,
}

impl FolderView {
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty() && self.files.is_empty()
    }

    pub fn is_root(&self) -> bool {
        self.cursor.is_empty()
    }

    /// Cursor for a child folder of this view.
    pub fn child_cursor(&self, folder: &str) -> String {
        if self.cursor.is_empty() {
            folder.to_string()
        } else {
            format!("{}/{}", self.cursor, folder)
        }
    }
}

/// What a command changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The result list was recomputed and only its first page is revealed
    Reset(Page),
    /// More of the current result list was revealed
    Appended(Page),
    /// The browse cursor moved to this folder
    Folder(String),
}

/// Per-session gallery state.
#[derive(Clone, Debug)]
pub struct Gallery {
    catalog: Catalog,
    criteria: FilterCriteria,
    sort: SortSpec,
    results: Vec<LogoRecord>,
    pager: Paginator,
    cursor: String,
}

impl Gallery {
    /// Start a session with no filters, default ordering and the first page
    /// revealed.
    pub fn new(catalog: Catalog, page_size: usize) -> Self {
        let mut gallery = Self {
            catalog,
            criteria: FilterCriteria::default(),
            sort: SortSpec::default(),
            results: Vec::new(),
            pager: Paginator::new(page_size),
            cursor: String::new(),
        };
        gallery.refresh();
        gallery
    }

    /// Run one command.
    pub fn apply(&mut self, command: Command) -> Outcome {
        match command {
            Command::Search(text) => {
                self.criteria.search = text;
                Outcome::Reset(self.refresh())
            }
            Command::Filter(field, value) => {
                self.criteria.set(field, value);
                Outcome::Reset(self.refresh())
            }
            Command::Sort(spec) => {
                self.sort = spec;
                Outcome::Reset(self.refresh())
            }
            Command::ClearFilters => {
                self.criteria.clear();
                Outcome::Reset(self.refresh())
            }
            Command::LoadMore => Outcome::Appended(self.load_more()),
            Command::Browse(path) => {
                self.cursor = normalize_cursor(&path);
                Outcome::Folder(self.cursor.clone())
            }
            Command::BrowseRoot => {
                self.cursor.clear();
                Outcome::Folder(String::new())
            }
            Command::BrowseUp => {
                self.cursor = parent_path(&self.cursor);
                Outcome::Folder(self.cursor.clone())
            }
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    pub fn cursor(&self) -> &str {
        &self.cursor
    }

    /// Every matching record in display order.
    pub fn results(&self) -> &[LogoRecord] {
        &self.results
    }

    /// Records revealed so far.
    pub fn visible(&self) -> &[LogoRecord] {
        self.pager.visible(&self.results)
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn has_more(&self) -> bool {
        self.pager.has_more(self.results.len())
    }

    /// Listing for the current browse cursor, recomputed from the catalog.
    pub fn folder_view(&self) -> FolderView {
        let listing = list_children(self.catalog.records(), &self.cursor);
        FolderView {
            cursor: self.cursor.clone(),
            breadcrumbs: breadcrumbs(&self.cursor),
            folders: listing.folders,
            files: listing.files.into_iter().cloned().collect(),
        }
    }

    /// Recompute the result list from scratch and reveal its first page.
    fn refresh(&mut self) -> Page {
        let mut matching = filter(self.catalog.records(), &self.criteria);
        sort_records(&mut matching, self.sort);
        self.results = matching.into_iter().cloned().collect();
        self.pager.reset();
        self.load_more()
    }

    fn load_more(&mut self) -> Page {
        let added = self.pager.reveal_next(&self.results).len();
        Page {
            added,
            shown: self.pager.displayed(),
            total: self.results.len(),
            has_more: self.has_more(),
        }
    }
}
