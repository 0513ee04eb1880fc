use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use super::LogoRecord;
use crate::collate;
use crate::config::{STYLE_LABELS, YEAR_CURRENT, YEAR_LEGACY};
use crate::error::CatalogError;

/// The full, read-only list of logo records for a session.
///
/// Cloning is cheap: every clone shares the same record slice. Record order
/// is the order of the data file and is never changed after loading.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    records: Arc<[LogoRecord]>,
}

impl Catalog {
    /// Build a catalog, checking that paths are unique and end with their
    /// filename.
    pub fn new(records: Vec<LogoRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.path.as_str()) {
                return Err(CatalogError::DuplicatePath(record.path.clone()));
            }
            if record.path.rsplit('/').next() != Some(record.filename.as_str()) {
                return Err(CatalogError::FilenameMismatch {
                    path: record.path.clone(),
                    filename: record.filename.clone(),
                });
            }
        }

        Ok(Self {
            records: records.into(),
        })
    }

    /// Catalog with no records.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a JSON array of records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<LogoRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// Parse either a JSON array or a generated `logo-data.js` script
    /// (`const logoData = [...];`).
    pub fn from_source(source: &str) -> Result<Self, CatalogError> {
        let trimmed = source.trim();
        if trimmed.is_empty() {
            return Err(CatalogError::Unavailable("catalog source is empty".into()));
        }
        if trimmed.starts_with('[') {
            return Self::from_json(trimmed);
        }

        let body = trimmed
            .split_once('=')
            .map(|(_, rest)| rest.trim().trim_end_matches(';').trim_end())
            .ok_or_else(|| CatalogError::Unavailable("no record list in catalog source".into()))?;
        Self::from_json(body)
    }

    pub fn records(&self) -> &[LogoRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LogoRecord> {
        self.records.iter()
    }

    // =========================================================================
    // Derived Vocabularies
    // =========================================================================

    /// Distinct families in alphabetical order.
    pub fn families(&self) -> Vec<String> {
        self.distinct(|r| &r.family)
    }

    /// Distinct formats in alphabetical order.
    pub fn formats(&self) -> Vec<String> {
        self.distinct(|r| &r.format)
    }

    /// Distinct styles: known codes in menu order, then any others.
    pub fn styles(&self) -> Vec<String> {
        let mut styles = self.distinct(|r| &r.style);
        styles.sort_by_key(|s| {
            STYLE_LABELS
                .iter()
                .position(|(code, _)| code == s)
                .unwrap_or(STYLE_LABELS.len())
        });
        styles
    }

    /// Distinct years: "current" first, literal years newest first,
    /// "legacy" last.
    pub fn years(&self) -> Vec<String> {
        let mut years = self.distinct(|r| &r.year);
        years.sort_by(|a, b| year_rank(a).cmp(&year_rank(b)).then_with(|| b.cmp(a)));
        years
    }

    /// Record count per family, in family order.
    pub fn family_counts(&self) -> Vec<(String, usize)> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for record in self.records.iter() {
            *counts.entry(record.family.as_str()).or_default() += 1;
        }
        let mut counts: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(family, count)| (family.to_string(), count))
            .collect();
        counts.sort_by(|a, b| collate::compare(&a.0, &b.0));
        counts
    }

    fn distinct(&self, field: impl Fn(&LogoRecord) -> &String) -> Vec<String> {
        let mut values: Vec<String> = self
            .records
            .iter()
            .map(&field)
            .filter(|v| !v.is_empty())
            .collect::<HashSet<_>>()
            .into_iter()
            .cloned()
            .collect();
        values.sort_by(|a, b| collate::compare(a, b));
        values
    }
}

fn year_rank(year: &str) -> u8 {
    match year {
        YEAR_CURRENT => 0,
        YEAR_LEGACY => 2,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(path: &str, style: &str, year: &str) -> LogoRecord {
        LogoRecord {
            style: style.to_string(),
            year: year.to_string(),
            ..LogoRecord::at_path(path)
        }
    }

    fn create_test_catalog() -> Catalog {
        Catalog::new(vec![
            record("Viva/Viva.svg", "negative", "legacy"),
            record("Azure/VM.png", "full-color", "current"),
            record("azure-stack/Hub.png", "monochrome", "2019"),
            record("Azure/Blob.svg", "monochrome-positive", "2021"),
        ])
        .unwrap()
    }

    #[test]
    fn test_rejects_duplicate_path() {
        let result = Catalog::new(vec![
            LogoRecord::at_path("Azure/VM.png"),
            LogoRecord::at_path("Azure/VM.png"),
        ]);
        assert!(matches!(result, Err(CatalogError::DuplicatePath(p)) if p == "Azure/VM.png"));
    }

    #[test]
    fn test_rejects_filename_mismatch() {
        let mut bad = LogoRecord::at_path("Azure/VM.png");
        bad.filename = "Other.png".to_string();
        let result = Catalog::new(vec![bad]);
        assert!(matches!(result, Err(CatalogError::FilenameMismatch { .. })));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"name": "Teams", "family": "Microsoft 365", "style": "full-color",
             "year": "current", "format": "PNG", "filename": "Teams.png",
             "path": "Microsoft 365/Teams.png", "size": ""}
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.records()[0].path, "Microsoft 365/Teams.png");
    }

    #[test]
    fn test_from_source_accepts_script() {
        let script = "// Auto-generated logo data\nconst logoData = [\n  {\"name\": \"Teams\", \"family\": \"Microsoft 365\", \"style\": \"full-color\", \"year\": \"current\", \"format\": \"PNG\", \"filename\": \"Teams.png\", \"path\": \"Teams.png\"}\n];\n";
        let catalog = Catalog::from_source(script).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.records()[0].name, "Teams");
    }

    #[test]
    fn test_from_source_empty_is_unavailable() {
        assert!(matches!(
            Catalog::from_source("  \n"),
            Err(CatalogError::Unavailable(_))
        ));
        assert!(matches!(
            Catalog::from_source("undefined"),
            Err(CatalogError::Unavailable(_))
        ));
    }

    #[test]
    fn test_from_source_malformed() {
        assert!(matches!(
            Catalog::from_source("[{\"name\": 1}]"),
            Err(CatalogError::Malformed(_))
        ));
    }

    #[test]
    fn test_families_sorted_naturally() {
        let catalog = create_test_catalog();
        assert_eq!(catalog.families(), vec!["Azure", "azure-stack", "Viva"]);
    }

    #[test]
    fn test_styles_in_menu_order() {
        let catalog = create_test_catalog();
        assert_eq!(
            catalog.styles(),
            vec!["full-color", "monochrome", "monochrome-positive", "negative"]
        );
    }

    #[test]
    fn test_years_sentinels_bracket_literals() {
        let catalog = create_test_catalog();
        assert_eq!(catalog.years(), vec!["current", "2021", "2019", "legacy"]);
    }

    #[test]
    fn test_formats() {
        let catalog = create_test_catalog();
        assert_eq!(catalog.formats(), vec!["PNG", "SVG"]);
    }

    #[test]
    fn test_family_counts() {
        let catalog = create_test_catalog();
        assert_eq!(
            catalog.family_counts(),
            vec![
                ("Azure".to_string(), 2),
                ("azure-stack".to_string(), 1),
                ("Viva".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_clones_share_records() {
        let catalog = create_test_catalog();
        let clone = catalog.clone();
        assert!(std::ptr::eq(catalog.records(), clone.records()));
    }
}
