//! Formatting helpers for gallery text.

use logodeck_core::LogoRecord;

/// Result counter shown above the grid.
pub fn format_result_summary(shown: usize, total: usize) -> String {
    match total {
        0 => "No logos found".to_string(),
        1 => "Showing 1 logo".to_string(),
        _ if shown >= total => format!("Showing all {} logos", total),
        _ => format!("Showing {} of {} logos", shown, total),
    }
}

/// Catalog size shown in the header.
pub fn format_logo_count(count: usize) -> String {
    if count == 1 {
        "1 logo".to_string()
    } else {
        format!("{} logos", count)
    }
}

/// One-line card caption, e.g. `PNG · Full Color · Current`.
pub fn format_record_meta(record: &LogoRecord) -> String {
    let mut parts = vec![record.format.as_str(), record.style_label(), record.year_label()];
    if let Some(size) = record.size.as_deref() {
        parts.push(size);
    }
    parts.retain(|part| !part.is_empty());
    parts.join(" · ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_result_summary() {
        assert_eq!(format_result_summary(0, 0), "No logos found");
        assert_eq!(format_result_summary(1, 1), "Showing 1 logo");
        assert_eq!(format_result_summary(48, 120), "Showing 48 of 120 logos");
        assert_eq!(format_result_summary(12, 12), "Showing all 12 logos");
    }

    #[test]
    fn test_format_logo_count() {
        assert_eq!(format_logo_count(1), "1 logo");
        assert_eq!(format_logo_count(0), "0 logos");
        assert_eq!(format_logo_count(310), "310 logos");
    }

    #[test]
    fn test_format_record_meta() {
        let mut record = LogoRecord::at_path("Azure/Monochrome/VM.svg");
        record.style = "monochrome-negative".to_string();
        record.year = "legacy".to_string();
        assert_eq!(format_record_meta(&record), "SVG · Monochrome (Negative) · Legacy");

        record.size = Some("256x256".to_string());
        assert_eq!(
            format_record_meta(&record),
            "SVG · Monochrome (Negative) · Legacy · 256x256"
        );
    }

    #[test]
    fn test_format_record_meta_unknown_style_passes_through() {
        let mut record = LogoRecord::at_path("Viva/Viva.png");
        record.style = "outline".to_string();
        assert_eq!(format_record_meta(&record), "PNG · outline · Current");
    }
}
