//! Report orchestration.
//!
//! Glues the filter engine and the aggregator together for one user action
//! and logs the outcome under an operation context. This is the entry point
//! the Reports view calls on every criteria change.

use crate::logging::structured::LogContext;
use crate::report::aggregate::{summarize, ReportSummary};
use crate::report::criteria::FilterCriteria;
use crate::report::filter::filter_cases;
use crate::store::case_store::CaseStore;
use crate::store::models::Case;

/// Result of one report run: the matching rows plus their totals.
#[derive(Debug)]
pub struct Report {
    pub rows: Vec<Case>,
    pub summary: ReportSummary,
}

/// Filter the store's cases and aggregate the matches.
pub fn run_report(store: &CaseStore, criteria: &FilterCriteria) -> Report {
    let ctx = LogContext::new("report");

    let rows = filter_cases(store.cases(), criteria);
    let summary = summarize(&rows);

    log::info!(
        "{} REPORT_COMPLETE total={} matched={} revenue={} margin={}",
        ctx,
        store.cases().len(),
        rows.len(),
        summary.total_revenue,
        summary.margin
    );

    Report { rows, summary }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mock::seed_store;

    #[test]
    fn test_run_report_unconstrained() {
        let store = seed_store();
        let report = run_report(&store, &FilterCriteria::default());
        assert_eq!(report.rows.len(), 3);
        assert_eq!(report.summary.count, 3);
    }

    #[test]
    fn test_run_report_filtered_totals() {
        let store = seed_store();
        let mut criteria = FilterCriteria::default();
        criteria.country = "México".to_string();
        let report = run_report(&store, &criteria);
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.summary.total_revenue, 3200.0);
        assert_eq!(report.summary.margin, 1700.0);
    }
}
