//! Catalog data file rendering.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use logodeck_core::LogoRecord;

/// Data file flavor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain JSON array, fetched by the gallery at startup
    #[default]
    Json,
    /// Script defining a global `logoData` constant
    Js,
}

/// Render records in the requested format.
pub fn render(records: &[LogoRecord], format: OutputFormat) -> Result<String> {
    let json = serde_json::to_string_pretty(records).context("failed to serialize catalog")?;
    Ok(match format {
        OutputFormat::Json => format!("{}\n", json),
        OutputFormat::Js => format!("// Auto-generated logo data\nconst logoData = {};\n", json),
    })
}

/// Write the catalog, creating parent folders as needed.
pub fn write_catalog(path: &Path, records: &[LogoRecord], format: OutputFormat) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let content = render(records, format)?;
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use logodeck_core::Catalog;

    fn create_test_records() -> Vec<LogoRecord> {
        vec![
            LogoRecord {
                id: Some(0),
                size: Some("256x256".to_string()),
                ..LogoRecord::at_path("Azure/VM_256x256.png")
            },
            LogoRecord::at_path("Viva/Viva.svg"),
        ]
    }

    #[test]
    fn test_render_json_parses_back() {
        let records = create_test_records();
        let json = render(&records, OutputFormat::Json).unwrap();
        let catalog = Catalog::from_json(&json).unwrap();
        assert_eq!(catalog.records(), records.as_slice());
    }

    #[test]
    fn test_render_script_wrapper() {
        let records = create_test_records();
        let script = render(&records, OutputFormat::Js).unwrap();
        assert!(script.starts_with("// Auto-generated logo data\nconst logoData = [\n"));
        assert!(script.ends_with("];\n"));

        let catalog = Catalog::from_source(&script).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_write_creates_parent_folders() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs/js/logo-data.json");
        write_catalog(&path, &create_test_records(), OutputFormat::Json).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"path\": \"Viva/Viva.svg\""));
    }
}
