//! Repository walk that collects logo files.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use logodeck_core::LogoRecord;
use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

use crate::parse::parse_logo_path;

/// Folders never scanned.
pub const DEFAULT_EXCLUDES: &[&str] = &["docs", ".git", "node_modules", ".github"];

/// File extensions treated as logos (lowercase, with dot).
pub const LOGO_EXTENSIONS: &[&str] = &[".png", ".svg", ".jpg", ".jpeg", ".ico", ".pdf"];

/// What to scan.
#[derive(Clone, Debug)]
pub struct ScanOptions {
    pub root: PathBuf,
    /// Directory names pruned wherever they appear
    pub exclude: Vec<String>,
}

impl ScanOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            exclude: DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn is_excluded(&self, entry: &DirEntry) -> bool {
        entry.depth() > 0
            && entry.file_type().is_dir()
            && self
                .exclude
                .iter()
                .any(|name| entry.file_name().to_string_lossy() == name.as_str())
    }
}

/// Walk the repository and return one record per logo file.
///
/// Records carry their scan-order `id` and are returned sorted by family,
/// name and path.
pub fn scan(options: &ScanOptions) -> Result<Vec<LogoRecord>> {
    info!("Scanning {} for logo files", options.root.display());

    let mut records = Vec::new();
    let walker = WalkDir::new(&options.root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !options.is_excluded(entry));

    for entry in walker {
        let entry =
            entry.with_context(|| format!("failed to walk {}", options.root.display()))?;
        if !entry.file_type().is_file() || !is_logo(entry.path()) {
            continue;
        }

        let Some(relative) = relative_path(&options.root, entry.path()) else {
            continue;
        };
        debug!(path = %relative, "found logo");

        let mut record = parse_logo_path(&relative);
        record.id = Some(records.len() as u64);
        records.push(record);
    }

    records.sort_by(|a: &LogoRecord, b: &LogoRecord| {
        (&a.family, &a.name, &a.path).cmp(&(&b.family, &b.name, &b.path))
    });

    info!("Found {} logo files", records.len());
    Ok(records)
}

fn is_logo(path: &Path) -> bool {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .is_some_and(|ext| LOGO_EXTENSIONS.contains(&ext.as_str()))
}

/// `root/Azure/VM.png` -> `Azure/VM.png`, always with `/` separators.
fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }

    fn create_test_repo() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(root, "Azure/Compute/VM_256x256.png");
        touch(root, "Azure/Monochrome/VM.svg");
        touch(root, "Viva/zzLEGACY/Viva.PNG");
        touch(root, "Edge.jpg");
        touch(root, "README.md");
        touch(root, "Azure/notes.txt");
        touch(root, "docs/preview.png");
        touch(root, "node_modules/pkg/icon.svg");
        touch(root, ".git/objects/logo.png");
        dir
    }

    #[test]
    fn test_scan_collects_logos() {
        let repo = create_test_repo();
        let records = scan(&ScanOptions::new(repo.path())).unwrap();
        let paths: Vec<_> = records.iter().map(|r| r.path.as_str()).collect();

        assert_eq!(
            paths,
            vec![
                "Azure/Compute/VM_256x256.png",
                "Azure/Monochrome/VM.svg",
                "Edge.jpg",
                "Viva/zzLEGACY/Viva.PNG",
            ]
        );
    }

    #[test]
    fn test_scan_derives_metadata() {
        let repo = create_test_repo();
        let records = scan(&ScanOptions::new(repo.path())).unwrap();

        let mono = records.iter().find(|r| r.path.ends_with("VM.svg")).unwrap();
        assert_eq!(mono.style, "monochrome");
        assert_eq!(mono.family, "Azure");

        let legacy = records.iter().find(|r| r.family == "Viva").unwrap();
        assert_eq!(legacy.year, "legacy");
        assert_eq!(legacy.format, "PNG");
    }

    #[test]
    fn test_scan_assigns_unique_ids() {
        let repo = create_test_repo();
        let records = scan(&ScanOptions::new(repo.path())).unwrap();
        let mut ids: Vec<u64> = records.iter().filter_map(|r| r.id).collect();
        ids.sort();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_custom_excludes() {
        let repo = create_test_repo();
        let mut options = ScanOptions::new(repo.path());
        options.exclude.push("Azure".to_string());
        let records = scan(&options).unwrap();
        assert!(records.iter().all(|r| r.family != "Azure"));
    }

    #[test]
    fn test_is_logo() {
        assert!(is_logo(Path::new("a/b.PNG")));
        assert!(is_logo(Path::new("a/b.jpeg")));
        assert!(!is_logo(Path::new("a/b.gif")));
        assert!(!is_logo(Path::new("a/README")));
    }
}
