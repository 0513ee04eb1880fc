use std::fmt;
use std::str::FromStr;

// =============================================================================
// Filter Criteria
// =============================================================================

/// Active filters for the gallery. Empty fields do not constrain.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search: String,
    pub family: String,
    pub style: String,
    pub year: String,
    pub format: String,
}

impl FilterCriteria {
    /// Criteria that match every record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one dropdown dimension.
    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FilterField::Family => self.family = value,
            FilterField::Style => self.style = value,
            FilterField::Year => self.year = value,
            FilterField::Format => self.format = value,
        }
    }

    /// Current value of one dropdown dimension.
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Family => &self.family,
            FilterField::Style => &self.style,
            FilterField::Year => &self.year,
            FilterField::Format => &self.format,
        }
    }

    /// Reset every field to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when no field constrains the result.
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty()
            && self.family.is_empty()
            && self.style.is_empty()
            && self.year.is_empty()
            && self.format.is_empty()
    }
}

/// Dropdown filter dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FilterField {
    Family,
    Style,
    Year,
    Format,
}

impl FilterField {
    pub const ALL: [FilterField; 4] = [Self::Family, Self::Style, Self::Year, Self::Format];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Family => "family",
            Self::Style => "style",
            Self::Year => "year",
            Self::Format => "format",
        }
    }
}

impl FromStr for FilterField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "family" => Ok(Self::Family),
            "style" => Ok(Self::Style),
            "year" => Ok(Self::Year),
            "format" => Ok(Self::Format),
            _ => Err(()),
        }
    }
}

// =============================================================================
// Sort Specification
// =============================================================================

/// Primary sort key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortField {
    #[default]
    Name,
    Family,
    Format,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Family => "family",
            Self::Format => "format",
        }
    }

    /// Parse a field name, falling back to [`SortField::Name`].
    pub fn parse_or_default(s: &str) -> Self {
        match s {
            "family" => Self::Family,
            "format" => Self::Format,
            _ => Self::Name,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Sort field and direction.
///
/// Encoded for select menus as `"<field>-<direction>"`, e.g. `"family-desc"`.
/// Parsing never fails: unknown parts fall back to name and ascending.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn asc(field: SortField) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    pub fn desc(field: SortField) -> Self {
        Self::new(field, SortDirection::Desc)
    }

    /// All menu choices in display order.
    pub fn choices() -> [SortSpec; 6] {
        [
            Self::asc(SortField::Name),
            Self::desc(SortField::Name),
            Self::asc(SortField::Family),
            Self::desc(SortField::Family),
            Self::asc(SortField::Format),
            Self::desc(SortField::Format),
        ]
    }

    /// Menu label, e.g. "Family (Z-A)".
    pub fn label(&self) -> String {
        let field = match self.field {
            SortField::Name => "Name",
            SortField::Family => "Family",
            SortField::Format => "Format",
        };
        let range = match self.direction {
            SortDirection::Asc => "A-Z",
            SortDirection::Desc => "Z-A",
        };
        format!("{} ({})", field, range)
    }
}

impl FromStr for SortSpec {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, direction) = s.split_once('-').unwrap_or((s, ""));
        let direction = if direction == "desc" {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        Ok(Self::new(SortField::parse_or_default(field), direction))
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.field.as_str(), self.direction.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_spec_parse() {
        let spec: SortSpec = "family-desc".parse().unwrap();
        assert_eq!(spec, SortSpec::desc(SortField::Family));

        let spec: SortSpec = "format".parse().unwrap();
        assert_eq!(spec, SortSpec::asc(SortField::Format));
    }

    #[test]
    fn test_sort_spec_parse_unknown_falls_back() {
        let spec: SortSpec = "popularity-sideways".parse().unwrap();
        assert_eq!(spec, SortSpec::asc(SortField::Name));

        let spec: SortSpec = "".parse().unwrap();
        assert_eq!(spec, SortSpec::default());
    }

    #[test]
    fn test_sort_spec_display_round_trips_choices() {
        for spec in SortSpec::choices() {
            let parsed: SortSpec = spec.to_string().parse().unwrap();
            assert_eq!(parsed, spec);
        }
    }

    #[test]
    fn test_sort_spec_label() {
        assert_eq!(SortSpec::asc(SortField::Name).label(), "Name (A-Z)");
        assert_eq!(SortSpec::desc(SortField::Format).label(), "Format (Z-A)");
    }

    #[test]
    fn test_criteria_set_get_clear() {
        let mut criteria = FilterCriteria::new();
        assert!(criteria.is_empty());

        criteria.set(FilterField::Family, "Azure");
        criteria.search = "vm".to_string();
        assert_eq!(criteria.get(FilterField::Family), "Azure");
        assert!(!criteria.is_empty());

        criteria.clear();
        assert_eq!(criteria, FilterCriteria::default());
    }

    #[test]
    fn test_whitespace_search_is_empty() {
        let criteria = FilterCriteria {
            search: "   ".to_string(),
            ..Default::default()
        };
        assert!(criteria.is_empty());
    }

    #[test]
    fn test_filter_field_parse() {
        for field in FilterField::ALL {
            assert_eq!(field.as_str().parse::<FilterField>(), Ok(field));
        }
        assert!("color".parse::<FilterField>().is_err());
    }
}
