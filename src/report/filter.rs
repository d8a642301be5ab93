//! Filter engine.
//!
//! Pure predicate over the case collection. Matching semantics reproduce
//! the dashboard exactly: selector fields compare by equality with an
//! `"All"` escape hatch, and date bounds compare the ISO strings
//! lexicographically (zero-padded ISO 8601 makes string order and time
//! order agree, and a date-only bound like `2024-06-15` still brackets a
//! case starting at `2024-06-15T08:00`).

use crate::report::criteria::{FilterCriteria, ALL};
use crate::store::models::{Case, CaseStatus, ServiceKind};

/// Filter cases against the criteria, preserving input order.
///
/// Never fails: an unrecognized service/status value behaves as `"All"`,
/// the same as an absent one.
pub fn filter_cases(cases: &[Case], criteria: &FilterCriteria) -> Vec<Case> {
    let service = resolve_service(&criteria.service);
    let status = resolve_status(&criteria.status);

    cases
        .iter()
        .filter(|c| {
            let match_country = criteria.country == ALL || c.country == criteria.country;
            let match_service = service.map_or(true, |s| c.service == s);
            let match_status = status.map_or(true, |s| c.status == s);
            let match_date = (criteria.start_date.is_empty()
                || c.start_date_time >= criteria.start_date)
                && (criteria.end_date.is_empty() || c.start_date_time <= criteria.end_date);
            match_country && match_service && match_status && match_date
        })
        .cloned()
        .collect()
}

/// `None` means unconstrained: either the `"All"` sentinel or a value no
/// known service kind answers to.
fn resolve_service(value: &str) -> Option<ServiceKind> {
    if value == ALL {
        return None;
    }
    ServiceKind::parse(value)
}

fn resolve_status(value: &str) -> Option<CaseStatus> {
    if value == ALL {
        return None;
    }
    CaseStatus::parse(value)
}

/// Quick search over the Operations table: case-insensitive substring match
/// on project number, client name, or primary city. An empty term matches
/// everything.
pub fn search_cases(cases: &[Case], term: &str) -> Vec<Case> {
    let needle = term.to_lowercase();
    cases
        .iter()
        .filter(|c| {
            c.project_number.to_lowercase().contains(&needle)
                || c.client_name.to_lowercase().contains(&needle)
                || c.city.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mock::seed_store;

    fn criteria() -> FilterCriteria {
        FilterCriteria::default()
    }

    #[test]
    fn test_unconstrained_returns_all_in_order() {
        let store = seed_store();
        let out = filter_cases(store.cases(), &criteria());
        assert_eq!(out.len(), 3);
        let ids: Vec<&str> = out.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["c1", "c2", "c3"]);
    }

    #[test]
    fn test_country_filter() {
        let store = seed_store();
        let mut c = criteria();
        c.country = "Brasil".to_string();
        let out = filter_cases(store.cases(), &c);
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|case| case.country == "Brasil"));

        c.country = "México".to_string();
        let out = filter_cases(store.cases(), &c);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "c3");
    }

    #[test]
    fn test_status_and_service_filters() {
        let store = seed_store();
        let mut c = criteria();
        c.status = "Pending".to_string();
        assert_eq!(filter_cases(store.cases(), &c).len(), 2);

        c.service = "Transfer".to_string();
        let out = filter_cases(store.cases(), &c);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "c2");
    }

    #[test]
    fn test_unrecognized_selector_behaves_as_all() {
        let store = seed_store();
        let mut c = criteria();
        c.status = "Archived".to_string();
        c.service = "Charter".to_string();
        assert_eq!(filter_cases(store.cases(), &c).len(), 3);
    }

    #[test]
    fn test_date_bounds_are_string_compared() {
        let store = seed_store();
        let mut cases = store.cases().to_vec();
        cases[0].start_date_time = "2024-06-15T08:00".to_string();
        cases[1].start_date_time = "2024-06-16T09:00".to_string();
        cases[2].start_date_time = "2024-06-20T10:00".to_string();

        let mut c = criteria();
        c.start_date = "2024-06-15".to_string();
        // A date-only end bound excludes same-day cases with a time
        // component, because "2024-06-16T09:00" > "2024-06-16" in string
        // order. Deliberate: the dashboard has always filtered this way.
        c.end_date = "2024-06-16".to_string();
        let out = filter_cases(&cases, &c);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].start_date_time, "2024-06-15T08:00");

        c.end_date = "2024-06-16T23:59".to_string();
        assert_eq!(filter_cases(&cases, &c).len(), 2);
    }

    #[test]
    fn test_concrete_country_scenario() {
        // {Brasil, Pending} and {México, Pending}; country=Brasil, status=All
        // selects exactly the first.
        let store = seed_store();
        let brasil = store.case("c2").unwrap().clone();
        let mexico = store.case("c3").unwrap().clone();
        let cases = vec![brasil, mexico];

        let mut c = criteria();
        c.country = "Brasil".to_string();
        let out = filter_cases(&cases, &c);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].country, "Brasil");
    }

    #[test]
    fn test_search_cases() {
        let store = seed_store();
        let out = search_cases(store.cases(), "gig");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "c2");

        let out = search_cases(store.cases(), "EP-100");
        assert_eq!(out.len(), 3);

        assert_eq!(search_cases(store.cases(), "").len(), 3);
        assert!(search_cases(store.cases(), "zanzibar").is_empty());
    }
}
