//! Derive logo metadata from a repository-relative path.

use std::sync::LazyLock;

use logodeck_core::LogoRecord;
use logodeck_core::config::{YEAR_CURRENT, YEAR_LEGACY};
use regex::Regex;

/// Family used for files sitting directly in the repository root.
///
/// Such files have no top-level folder to name their family, so they are all
/// grouped under this one value instead of each getting its own file name as
/// a family. That keeps the family dropdown limited to real product folders.
pub const ROOT_FAMILY: &str = "Other";

/// Words left as written when capitalizing names.
const KEEP_CASE: &[&str] = &["365", "and", "or", "the", "of", "for"];

static SIZE_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-_]\d+x\d+$").expect("valid regex"));
static ICON_SERVICE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+-icon-service-").expect("valid regex"));
static LEADING_NUMBERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9\-]+").expect("valid regex"));
static SCALABLE_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[-_]scalable$").expect("valid regex"));
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));
static YEAR_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(19|20)\d{2}[-–]\d{4}\b").expect("valid regex"));
static DIMENSIONS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+x\d+").expect("valid regex"));

/// Build a record from a `/`-separated path relative to the repository root.
pub fn parse_logo_path(path: &str) -> LogoRecord {
    let filename = path.rsplit('/').next().unwrap_or(path);
    let family = match path.split_once('/') {
        Some((first, _)) => first,
        None => ROOT_FAMILY,
    };
    let (stem, extension) = split_extension(filename);

    LogoRecord {
        id: None,
        name: clean_name(stem),
        family: family.to_string(),
        style: detect_style(path).to_string(),
        year: detect_year(path).to_string(),
        format: extension.to_uppercase(),
        filename: filename.to_string(),
        path: path.to_string(),
        size: DIMENSIONS.find(filename).map(|m| m.as_str().to_string()),
    }
}

/// Split `"name.tar.png"` into `("name.tar", "png")`. Dotfiles have no extension.
fn split_extension(filename: &str) -> (&str, &str) {
    match filename.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => (stem, ext),
        _ => (filename, ""),
    }
}

/// Turn a file stem like `02681-icon-service-Virtual-Machines_256x256` into
/// `Virtual Machines`.
pub fn clean_name(stem: &str) -> String {
    let name = SIZE_SUFFIX.replace(stem, "");
    let name = ICON_SERVICE_PREFIX.replace(&name, "");
    let name = LEADING_NUMBERS.replace(&name, "");
    let name = SCALABLE_SUFFIX.replace(&name, "");
    let name = name.replace(['_', '-'], " ");
    let name = WHITESPACE.replace_all(&name, " ");

    name.split_whitespace()
        .map(|word| {
            if KEEP_CASE.contains(&word.to_lowercase().as_str()) {
                word.to_string()
            } else {
                capitalize(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercase the first character and lowercase the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Style from folder and file names. More specific variants win.
pub fn detect_style(path: &str) -> &'static str {
    let lower = path.to_lowercase();
    let has = |needle: &str| lower.contains(needle);

    if has("monochrome-negative") || has("monochromatic-negative") {
        "monochrome-negative"
    } else if has("monochrome-positive") || has("monochromatic-positive") {
        "monochrome-positive"
    } else if has("monochrome") || has("monochromatic") {
        "monochrome"
    } else if has("negative") {
        "negative"
    } else if has("positive") {
        "positive"
    } else {
        "full-color"
    }
}

/// `legacy` for archived folders or dated ranges like `2019-2023`, else `current`.
pub fn detect_year(path: &str) -> &'static str {
    let lower = path.to_lowercase();
    if lower.contains("legacy") || YEAR_RANGE.is_match(&lower) {
        YEAR_LEGACY
    } else {
        YEAR_CURRENT
    }
}
