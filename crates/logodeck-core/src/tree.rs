//! Virtual folders rebuilt from flat record paths.
//!
//! The catalog has no directory entries. A folder exists only because some
//! record path passes through it, so each listing is recomputed from the
//! full record list. Nothing is cached between cursor changes.
//!
//! # Path Convention
//!
//! - Root: empty string `""`
//! - Folder: `"Azure"`, `"Azure/Compute"`
//! - No leading or trailing slashes

use std::collections::HashSet;

use crate::collate;
use crate::config::ROOT_LABEL;
use crate::models::LogoRecord;

/// Immediate children of a virtual folder.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FolderListing<'a> {
    /// Child folder names, deduplicated and alphabetized
    pub folders: Vec<String>,
    /// Records directly inside the folder, ordered by filename
    pub files: Vec<&'a LogoRecord>,
}

impl FolderListing<'_> {
    /// An empty folder is a valid listing, not an error.
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty() && self.files.is_empty()
    }
}

/// List the folders and files directly under `cursor`.
///
/// Records outside `cursor` are skipped entirely.
pub fn list_children<'a>(records: &'a [LogoRecord], cursor: &str) -> FolderListing<'a> {
    let cursor = normalize_cursor(cursor);
    let prefix = if cursor.is_empty() {
        String::new()
    } else {
        format!("{}/", cursor)
    };

    let mut folders: HashSet<&str> = HashSet::new();
    let mut files: Vec<&LogoRecord> = Vec::new();

    for record in records {
        let Some(relative) = record.path.strip_prefix(prefix.as_str()) else {
            continue;
        };
        match relative.split_once('/') {
            Some((folder, _)) => {
                folders.insert(folder);
            }
            None => files.push(record),
        }
    }

    let mut folders: Vec<String> = folders.into_iter().map(str::to_string).collect();
    folders.sort_by(|a, b| collate::compare(a, b));
    files.sort_by(|a, b| collate::compare(&a.filename, &b.filename));

    FolderListing { folders, files }
}

/// Strip leading, trailing and repeated slashes.
pub fn normalize_cursor(cursor: &str) -> String {
    cursor
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Parent folder of a cursor. The root is its own parent.
pub fn parent_path(cursor: &str) -> String {
    let cursor = normalize_cursor(cursor);
    match cursor.rsplit_once('/') {
        Some((parent, _)) => parent.to_string(),
        None => String::new(),
    }
}

/// One step of the breadcrumb trail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Breadcrumb {
    /// Display label
    pub label: String,
    /// Cursor to navigate to when clicked
    pub target: String,
    /// Current location (rendered but not clickable)
    pub current: bool,
}

/// Breadcrumb trail for a cursor: "Root", then one crumb per segment.
///
/// Only the last crumb is marked current; at the root that is "Root" itself.
pub fn breadcrumbs(cursor: &str) -> Vec<Breadcrumb> {
    let cursor = normalize_cursor(cursor);
    let segments: Vec<&str> = cursor.split('/').filter(|s| !s.is_empty()).collect();

    let mut crumbs = Vec::with_capacity(segments.len() + 1);
    crumbs.push(Breadcrumb {
        label: ROOT_LABEL.to_string(),
        target: String::new(),
        current: segments.is_empty(),
    });

    for (idx, segment) in segments.iter().enumerate() {
        crumbs.push(Breadcrumb {
            label: segment.to_string(),
            target: segments[..=idx].join("/"),
            current: idx == segments.len() - 1,
        });
    }

    crumbs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_records() -> Vec<LogoRecord> {
        vec![
            LogoRecord::at_path("Azure/Storage/Blob.png"),
            LogoRecord::at_path("Teams.png"),
            LogoRecord::at_path("Azure/Compute/VM.png"),
            LogoRecord::at_path("Azure/Compute/Batch.svg"),
            LogoRecord::at_path("Azure/azure.svg"),
            LogoRecord::at_path("Azure Stack/Hub.png"),
        ]
    }

    fn filenames(listing: &FolderListing<'_>) -> Vec<String> {
        listing.files.iter().map(|r| r.filename.clone()).collect()
    }

    #[test]
    fn test_list_root() {
        let records = create_test_records();
        let listing = list_children(&records, "");
        assert_eq!(listing.folders, vec!["Azure", "Azure Stack"]);
        assert_eq!(filenames(&listing), vec!["Teams.png"]);
    }

    #[test]
    fn test_list_nested() {
        let records = create_test_records();
        let listing = list_children(&records, "Azure");
        assert_eq!(listing.folders, vec!["Compute", "Storage"]);
        assert_eq!(filenames(&listing), vec!["azure.svg"]);

        let listing = list_children(&records, "Azure/Compute");
        assert!(listing.folders.is_empty());
        assert_eq!(filenames(&listing), vec!["Batch.svg", "VM.png"]);
    }

    #[test]
    fn test_prefix_requires_separator() {
        let records = create_test_records();
        let listing = list_children(&records, "Azure");
        assert!(listing.files.iter().all(|r| !r.path.starts_with("Azure Stack")));
    }

    #[test]
    fn test_unknown_folder_is_empty() {
        let records = create_test_records();
        let listing = list_children(&records, "Dynamics");
        assert!(listing.is_empty());
    }

    #[test]
    fn test_cursor_slashes_are_normalized() {
        let records = create_test_records();
        assert_eq!(
            list_children(&records, "/Azure/Compute/"),
            list_children(&records, "Azure/Compute")
        );
    }

    #[test]
    fn test_normalize_cursor() {
        assert_eq!(normalize_cursor(""), "");
        assert_eq!(normalize_cursor("/"), "");
        assert_eq!(normalize_cursor("//Azure///Compute/"), "Azure/Compute");
    }

    #[test]
    fn test_parent_path() {
        assert_eq!(parent_path("Azure/Compute"), "Azure");
        assert_eq!(parent_path("Azure"), "");
        assert_eq!(parent_path(""), "");
    }

    #[test]
    fn test_breadcrumbs_root() {
        let crumbs = breadcrumbs("");
        assert_eq!(
            crumbs,
            vec![Breadcrumb {
                label: "Root".to_string(),
                target: String::new(),
                current: true,
            }]
        );
    }

    #[test]
    fn test_breadcrumbs_nested() {
        let crumbs = breadcrumbs("Azure/Compute/VMs");
        let labels: Vec<_> = crumbs.iter().map(|c| c.label.as_str()).collect();
        let targets: Vec<_> = crumbs.iter().map(|c| c.target.as_str()).collect();
        let current: Vec<_> = crumbs.iter().map(|c| c.current).collect();

        assert_eq!(labels, vec!["Root", "Azure", "Compute", "VMs"]);
        assert_eq!(targets, vec!["", "Azure", "Azure/Compute", "Azure/Compute/VMs"]);
        assert_eq!(current, vec![false, false, false, true]);
    }
}
