//! CSV export for the full report.
//!
//! Produces the spreadsheet-ready document the Reports view offers for
//! download: UTF-8 with a BOM so Excel detects the encoding, a fixed
//! English header row, and every data field quoted unconditionally with
//! internal quotes doubled. Vehicle details are resolved through the case
//! store; resolution misses degrade to `"N/A"` rather than failing.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::logging::structured::LogContext;
use crate::store::case_store::CaseStore;
use crate::store::models::Case;

/// UTF-8 byte-order mark, prepended for spreadsheet encoding detection.
const BOM: char = '\u{FEFF}';

/// Placeholder for absent values and unresolved references.
const NOT_AVAILABLE: &str = "N/A";

/// Separator for the multi-city itinerary column.
const CITY_SEPARATOR: &str = " | ";

/// Column order of the exported document. The header row uses these names
/// verbatim, comma-joined and unquoted.
pub const EXPORT_COLUMNS: &[&str] = &[
    "ProjectNumber",
    "Client",
    "Service",
    "PassengerEmail",
    "PassengerPhone",
    "Country",
    "Cities",
    "Hotel",
    "VehicleModel",
    "ArmorType",
    "HasAgent",
    "StartDateTime",
    "EndDateTime",
    "Revenue",
    "Cost",
    "Margin",
    "Status",
    "PaymentMethod",
];

/// Serialize cases to CSV bytes in input order.
pub fn to_csv_bytes(cases: &[Case], store: &CaseStore) -> Vec<u8> {
    let ctx = LogContext::new("export");

    let mut out = String::new();
    out.push(BOM);
    out.push_str(&EXPORT_COLUMNS.join(","));

    for case in cases {
        out.push('\n');
        let fields = row_fields(case, store);
        let quoted: Vec<String> = fields.iter().map(|f| quote(f)).collect();
        out.push_str(&quoted.join(","));
    }

    log::info!("{} EXPORT_COMPLETE rows={} bytes={}", ctx, cases.len(), out.len());

    out.into_bytes()
}

/// Field values for one row, in `EXPORT_COLUMNS` order.
fn row_fields(case: &Case, store: &CaseStore) -> Vec<String> {
    let vehicle = store.vehicle(&case.vehicle_id);
    let vehicle_model = vehicle
        .map(|v| v.model.clone())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let armor = vehicle
        .map(|v| v.armor.as_str().to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    vec![
        case.project_number.clone(),
        case.client_name.clone(),
        case.service.as_str().to_string(),
        case.passenger_email.clone(),
        case.passenger_phone.clone(),
        case.country.clone(),
        case.cities.join(CITY_SEPARATOR),
        case.hotel.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        vehicle_model,
        armor,
        if case.has_agent { "Yes" } else { "No" }.to_string(),
        case.start_date_time.clone(),
        case.end_date_time.clone(),
        fmt_amount(case.revenue),
        fmt_amount(case.cost),
        fmt_amount(case.margin()),
        case.status.as_str().to_string(),
        case.payment_label(),
    ]
}

/// Quote a field unconditionally, doubling internal quotes.
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Shortest display form of an amount: `2500`, `850.5`.
fn fmt_amount(value: f64) -> String {
    format!("{}", value)
}

/// Download filename for an export taken at `now`:
/// `exec_pro_full_report_<stamp>.csv`, where the stamp is the ISO instant
/// with `:` and `.` replaced by `-`, truncated to 19 characters
/// (`2024-06-15T08-30-00`).
pub fn export_file_name(now: DateTime<Utc>) -> String {
    let stamp: String = now
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .chars()
        .map(|c| if c == ':' || c == '.' { '-' } else { c })
        .take(19)
        .collect();
    format!("exec_pro_full_report_{}.csv", stamp)
}
