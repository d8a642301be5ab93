//! Summary statistics over a filtered case set.

use serde::Serialize;

use crate::store::models::Case;

/// Totals the Reports view renders above the table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub count: usize,
    pub total_revenue: f64,
    pub total_cost: f64,
    pub margin: f64,
}

/// Sum revenue and cost over the input. Pure; the empty input yields the
/// all-zero summary, and margin may be negative.
pub fn summarize(cases: &[Case]) -> ReportSummary {
    let total_revenue: f64 = cases.iter().map(|c| c.revenue).sum();
    let total_cost: f64 = cases.iter().map(|c| c.cost).sum();
    ReportSummary {
        count: cases.len(),
        total_revenue,
        total_cost,
        margin: total_revenue - total_cost,
    }
}
