//! Record ordering.

use std::cmp::Ordering;

use crate::collate;
use crate::models::{LogoRecord, SortDirection, SortField, SortSpec};

/// Sort records in place.
///
/// Works on owned records, references or shared pointers. The sort is
/// stable, and descending order inverts the comparator, so records that
/// compare equal keep their input order in both directions.
pub fn sort_records<R: AsRef<LogoRecord>>(records: &mut [R], spec: SortSpec) {
    records.sort_by(|a, b| {
        let ordering = compare(a.as_ref(), b.as_ref(), spec.field);
        match spec.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

fn compare(a: &LogoRecord, b: &LogoRecord, field: SortField) -> Ordering {
    let by_name = || collate::compare(&a.name, &b.name);
    match field {
        SortField::Name => by_name(),
        SortField::Family => collate::compare(&a.family, &b.family).then_with(by_name),
        SortField::Format => collate::compare(&a.format, &b.format).then_with(by_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(path: &str, name: &str, family: &str) -> LogoRecord {
        LogoRecord {
            name: name.to_string(),
            family: family.to_string(),
            ..LogoRecord::at_path(path)
        }
    }

    fn names<R: AsRef<LogoRecord>>(records: &[R]) -> Vec<&str> {
        records.iter().map(|r| r.as_ref().name.as_str()).collect()
    }

    #[test]
    fn test_sort_by_name_is_natural() {
        let mut records = vec![
            record("a/1.png", "teams", "M"),
            record("a/2.png", "Azure", "A"),
            record("a/3.png", "Édge", "E"),
            record("a/4.png", "Dynamics", "D"),
        ];
        sort_records(&mut records, SortSpec::asc(SortField::Name));
        assert_eq!(names(&records), vec!["Azure", "Dynamics", "Édge", "teams"]);
    }

    #[test]
    fn test_sort_by_family_then_name() {
        let mut records = vec![
            record("a/1.png", "Word", "Office"),
            record("a/2.png", "VM", "Azure"),
            record("a/3.png", "Excel", "Office"),
            record("a/4.png", "Blob", "Azure"),
        ];
        sort_records(&mut records, SortSpec::asc(SortField::Family));
        assert_eq!(names(&records), vec!["Blob", "VM", "Excel", "Word"]);

        sort_records(&mut records, SortSpec::desc(SortField::Family));
        assert_eq!(names(&records), vec!["Word", "Excel", "VM", "Blob"]);
    }

    #[test]
    fn test_sort_by_format_then_name() {
        let mut records = vec![
            record("a/b.svg", "b", "x"),
            record("a/a.svg", "a", "x"),
            record("a/c.png", "c", "x"),
        ];
        sort_records(&mut records, SortSpec::asc(SortField::Format));
        assert_eq!(names(&records), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_duplicate_names_keep_input_order() {
        let mut records = vec![
            record("x/Teams.png", "Teams", "x"),
            record("y/Teams.png", "Teams", "y"),
            record("z/Azure.png", "Azure", "z"),
        ];
        sort_records(&mut records, SortSpec::desc(SortField::Name));
        let paths: Vec<_> = records.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["x/Teams.png", "y/Teams.png", "z/Azure.png"]);
    }

    #[test]
    fn test_sorts_references() {
        let owned = vec![record("a/2.png", "b", "x"), record("a/1.png", "a", "x")];
        let mut refs: Vec<&LogoRecord> = owned.iter().collect();
        sort_records(&mut refs, SortSpec::asc(SortField::Name));
        assert_eq!(names(&refs), vec!["a", "b"]);
        assert_eq!(names(&owned), vec!["b", "a"]);
    }
}
