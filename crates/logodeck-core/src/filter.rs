//! Record filtering.

use crate::config::STYLE_MONOCHROME;
use crate::models::{FilterCriteria, LogoRecord};

/// Select the records that satisfy every active criterion.
///
/// Input order is preserved and the input is left untouched.
pub fn filter<'a>(records: &'a [LogoRecord], criteria: &FilterCriteria) -> Vec<&'a LogoRecord> {
    let query = Query::new(criteria);
    records.iter().filter(|r| query.matches(r)).collect()
}

/// Check a single record against the criteria.
pub fn matches(record: &LogoRecord, criteria: &FilterCriteria) -> bool {
    Query::new(criteria).matches(record)
}

/// Criteria with the search term normalized once per pass.
struct Query<'c> {
    search: String,
    criteria: &'c FilterCriteria,
}

impl<'c> Query<'c> {
    fn new(criteria: &'c FilterCriteria) -> Self {
        Self {
            search: criteria.search.trim().to_lowercase(),
            criteria,
        }
    }

    fn matches(&self, record: &LogoRecord) -> bool {
        self.matches_search(record)
            && exact(&self.criteria.family, &record.family)
            && self.matches_style(record)
            && exact(&self.criteria.year, &record.year)
            && exact(&self.criteria.format, &record.format)
    }

    fn matches_search(&self, record: &LogoRecord) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let haystack =
            format!("{} {} {}", record.name, record.family, record.filename).to_lowercase();
        haystack.contains(&self.search)
    }

    /// "monochrome" selects every monochrome variant.
    fn matches_style(&self, record: &LogoRecord) -> bool {
        match self.criteria.style.as_str() {
            "" => true,
            STYLE_MONOCHROME => record.style.contains(STYLE_MONOCHROME),
            style => record.style == style,
        }
    }
}

fn exact(wanted: &str, actual: &str) -> bool {
    wanted.is_empty() || wanted == actual
}
