use serde::{Deserialize, Deserializer, Serialize};

use crate::config::{STYLE_LABELS, YEAR_CURRENT, YEAR_LEGACY};

// =============================================================================
// Logo Record
// =============================================================================

/// A single logo file in the catalog.
///
/// Records are produced by the catalog generator and never modified by the
/// gallery. `path` is unique and its last segment is always `filename`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoRecord {
    /// Scan-order identifier assigned by the generator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Human-readable product name
    pub name: String,
    /// Product family (top-level folder)
    pub family: String,
    /// Style code (e.g. "full-color", "monochrome-negative")
    pub style: String,
    /// Literal year, "current" or "legacy"
    pub year: String,
    /// Uppercased file extension
    pub format: String,
    /// Base file name with extension
    pub filename: String,
    /// Repository-relative path with `/` separators
    pub path: String,
    /// Dimension hint such as "256x256"
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub size: Option<String>,
}

impl LogoRecord {
    /// Create a record for a path with every other field derived from it.
    ///
    /// The family is the first folder, the name is the file stem and the
    /// format is the uppercased extension. Style and year take their
    /// default values.
    pub fn at_path(path: impl Into<String>) -> Self {
        let path = path.into();
        let filename = path.rsplit('/').next().unwrap_or_default().to_string();
        let (stem, extension) = match filename.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => (stem.to_string(), ext.to_uppercase()),
            _ => (filename.clone(), String::new()),
        };
        let family = match path.split_once('/') {
            Some((first, _)) => first.to_string(),
            None => "Other".to_string(),
        };

        Self {
            id: None,
            name: stem,
            family,
            style: "full-color".to_string(),
            year: YEAR_CURRENT.to_string(),
            format: extension,
            filename,
            path,
            size: None,
        }
    }

    /// Display label for this record's style.
    pub fn style_label(&self) -> &str {
        style_label(&self.style)
    }

    /// Display label for this record's year.
    pub fn year_label(&self) -> &str {
        year_label(&self.year)
    }
}

impl AsRef<LogoRecord> for LogoRecord {
    fn as_ref(&self) -> &LogoRecord {
        self
    }
}

/// Older data files write a missing size as `""`.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

// =============================================================================
// Display Labels
// =============================================================================

/// Human label for a style code. Unknown codes are returned unchanged.
pub fn style_label(code: &str) -> &str {
    STYLE_LABELS
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, label)| *label)
        .unwrap_or(code)
}

/// Human label for a year value. Literal years are returned unchanged.
pub fn year_label(year: &str) -> &str {
    match year {
        YEAR_CURRENT => "Current",
        YEAR_LEGACY => "Legacy",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_labels() {
        assert_eq!(style_label("full-color"), "Full Color");
        assert_eq!(style_label("monochrome"), "Monochrome");
        assert_eq!(style_label("monochrome-positive"), "Monochrome (Positive)");
        assert_eq!(style_label("monochrome-negative"), "Monochrome (Negative)");
        assert_eq!(style_label("positive"), "Positive");
        assert_eq!(style_label("negative"), "Negative");
        assert_eq!(style_label("sepia"), "sepia");
    }

    #[test]
    fn test_year_labels() {
        assert_eq!(year_label("current"), "Current");
        assert_eq!(year_label("legacy"), "Legacy");
        assert_eq!(year_label("2019"), "2019");
    }

    #[test]
    fn test_at_path_derives_fields() {
        let record = LogoRecord::at_path("Azure/Compute/VM-icon.svg");
        assert_eq!(record.filename, "VM-icon.svg");
        assert_eq!(record.family, "Azure");
        assert_eq!(record.name, "VM-icon");
        assert_eq!(record.format, "SVG");
        assert_eq!(record.year, "current");

        let root = LogoRecord::at_path("Teams.png");
        assert_eq!(root.family, "Other");
        assert_eq!(root.filename, "Teams.png");
    }

    #[test]
    fn test_deserialize_empty_size_as_none() {
        let json = r#"{
            "name": "Teams", "family": "Microsoft 365", "style": "full-color",
            "year": "current", "format": "PNG", "filename": "Teams.png",
            "path": "Microsoft 365/Teams.png", "size": ""
        }"#;
        let record: LogoRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.size, None);
        assert_eq!(record.id, None);
    }

    #[test]
    fn test_deserialize_with_size_and_id() {
        let json = r#"{
            "id": 7, "name": "Teams", "family": "Microsoft 365", "style": "full-color",
            "year": "current", "format": "PNG", "filename": "Teams_256x256.png",
            "path": "Microsoft 365/Teams_256x256.png", "size": "256x256"
        }"#;
        let record: LogoRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.size.as_deref(), Some("256x256"));
        assert_eq!(record.id, Some(7));
    }

    #[test]
    fn test_serialize_skips_absent_size() {
        let record = LogoRecord::at_path("Viva/Viva.svg");
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("size"));
        assert!(!json.contains("\"id\""));
    }
}
