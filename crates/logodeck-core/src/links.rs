//! Links from catalog paths to the hosted repository.
//!
//! Each path segment is percent-encoded on its own and the segments are
//! rejoined with a literal `/`, so folder separators survive while spaces,
//! `#`, `?` and non-ASCII names are escaped.

/// Base URLs for a hosted copy of the logo repository.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepoLinks {
    /// Serves raw file bytes (e.g. `https://raw.githubusercontent.com/<owner>/<repo>/<branch>`)
    raw_base: String,
    /// Serves the repository file view (e.g. `https://github.com/<owner>/<repo>/blob/<branch>`)
    blob_base: String,
}

impl RepoLinks {
    pub fn new(raw_base: impl Into<String>, blob_base: impl Into<String>) -> Self {
        Self {
            raw_base: raw_base.into().trim_end_matches('/').to_string(),
            blob_base: blob_base.into().trim_end_matches('/').to_string(),
        }
    }

    /// Direct image URL for a catalog path.
    pub fn raw_url(&self, path: &str) -> String {
        format!("{}/{}", self.raw_base, encode_path(path))
    }

    /// Repository page URL for a catalog path.
    pub fn blob_url(&self, path: &str) -> String {
        format!("{}/{}", self.blob_base, encode_path(path))
    }
}

/// Percent-encode every segment of a `/`-separated path.
pub fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
