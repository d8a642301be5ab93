//! ExecPro Core - case filtering, aggregation, and export
//!
//! This crate is the data core behind the ExecPro executive-protection
//! operations dashboard. The presentation shell renders controls and
//! tables; every data transformation it shows runs through here:
//!
//! 1. **Filtering** - criteria-driven case selection with exact parity to
//!    the dashboard's string-comparison date semantics
//! 2. **Aggregation** - count/revenue/cost/margin totals
//! 3. **Export** - spreadsheet-ready CSV with BOM and fixed columns
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `store` - case records, fleet/personnel rosters, mock seeding
//! - `report` - filter criteria and engine, aggregation, agenda feed
//! - `export` - CSV serialization and download-filename derivation
//! - `templates` - persisted, named filter presets
//! - `state` - application state and UI settings with a load/save boundary
//! - `persist` - the key-value seam templates and settings write through
//! - `audit` - append-only audit trail
//! - `security` - PII display masking
//! - `logging` - structured logging with operation context
//!
//! Nothing in the report surface fails: malformed persisted blobs fall
//! back to defaults, unresolved references degrade to `"N/A"`, and invalid
//! template names are logged no-ops. The shell has no error path for this
//! module and never needs one.

use chrono::{DateTime, Utc};

pub mod audit;
pub mod export;
pub mod logging;
pub mod persist;
pub mod report;
pub mod security;
pub mod state;
pub mod store;
pub mod templates;

use export::csv::{export_file_name, to_csv_bytes};
use logging::structured::LogContext;
use report::criteria::FilterCriteria;
use report::filter::filter_cases;
use store::case_store::CaseStore;

/// Initialize the module-level logger. Safe to call more than once.
pub fn init_logger() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp_millis()
        .try_init();
}

/// A ready-to-download export: filename plus file contents.
#[derive(Debug)]
pub struct ReportDownload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Filter the store's cases and serialize the matches for download.
///
/// This is the one-call entry point behind the "Exportar CSV" button:
/// `now` supplies the filename timestamp so the shell controls the clock.
pub fn export_full_report(
    store: &CaseStore,
    criteria: &FilterCriteria,
    now: DateTime<Utc>,
) -> ReportDownload {
    let ctx = LogContext::new("download");

    let rows = filter_cases(store.cases(), criteria);
    let bytes = to_csv_bytes(&rows, store);
    let file_name = export_file_name(now);

    log::info!(
        "{} DOWNLOAD_READY file={} rows={}",
        ctx,
        file_name,
        rows.len()
    );

    ReportDownload { file_name, bytes }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    use crate::store::mock::seed_store;

    #[test]
    fn test_export_full_report_filters_before_serializing() {
        let store = seed_store();
        let mut criteria = FilterCriteria::default();
        criteria.country = "México".to_string();

        let now = Utc.with_ymd_and_hms(2024, 6, 15, 8, 30, 0).unwrap();
        let download = export_full_report(&store, &criteria, now);

        assert_eq!(
            download.file_name,
            "exec_pro_full_report_2024-06-15T08-30-00.csv"
        );
        let text = String::from_utf8(download.bytes).unwrap();
        // Header plus the single matching row.
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("EP-10025"));
        assert!(!text.contains("EP-10023"));
    }

    #[test]
    fn test_export_full_report_empty_match() {
        let store = seed_store();
        let mut criteria = FilterCriteria::default();
        criteria.country = "Argentina".to_string();

        let now = Utc.with_ymd_and_hms(2024, 6, 15, 8, 30, 0).unwrap();
        let download = export_full_report(&store, &criteria, now);
        let text = String::from_utf8(download.bytes).unwrap();
        assert_eq!(text.lines().count(), 1);
    }
}
