//! Filter criteria for the Operations and Reports views.

use serde::{Deserialize, Serialize};

/// Sentinel value meaning "unconstrained" for the selector fields.
pub const ALL: &str = "All";

/// User-supplied filter predicates.
///
/// Date bounds are ISO-8601 prefixes compared lexicographically against
/// `Case::start_date_time`, not parsed calendar values; an empty bound is
/// unbounded. Selector fields use the literal `"All"` sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default = "unconstrained")]
    pub country: String,
    #[serde(default = "unconstrained")]
    pub service: String,
    #[serde(default = "unconstrained")]
    pub status: String,
}

fn unconstrained() -> String {
    ALL.to_string()
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            start_date: String::new(),
            end_date: String::new(),
            country: unconstrained(),
            service: unconstrained(),
            status: unconstrained(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unconstrained() {
        let c = FilterCriteria::default();
        assert!(c.start_date.is_empty());
        assert!(c.end_date.is_empty());
        assert_eq!(c.country, ALL);
        assert_eq!(c.service, ALL);
        assert_eq!(c.status, ALL);
    }

    #[test]
    fn test_missing_blob_fields_fall_back_to_all() {
        // Older persisted blobs may omit selector fields entirely.
        let c: FilterCriteria = serde_json::from_str(r#"{"startDate":"2024-01-01"}"#).unwrap();
        assert_eq!(c.start_date, "2024-01-01");
        assert_eq!(c.country, ALL);
        assert_eq!(c.status, ALL);
    }
}
