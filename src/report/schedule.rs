//! Upcoming-engagement feed for the dashboard agenda.
//!
//! Unlike the filter engine, this feed needs real time arithmetic (an
//! imminence window relative to now), so timestamps are parsed here.
//! Unparseable timestamps drop out of the feed silently; they are never an
//! error.

use chrono::{Duration, NaiveDateTime};

use crate::store::models::Case;

/// Parse a local-naive ISO timestamp as stored on cases. Accepts both
/// second and minute precision.
fn parse_stamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .ok()
}

/// Cases starting within `[now, now + window_hours)`, soonest first.
pub fn upcoming_within(cases: &[Case], now: NaiveDateTime, window_hours: i64) -> Vec<Case> {
    let horizon = now + Duration::hours(window_hours);
    let mut upcoming: Vec<(NaiveDateTime, Case)> = cases
        .iter()
        .filter_map(|c| {
            let start = parse_stamp(&c.start_date_time)?;
            if start >= now && start < horizon {
                Some((start, c.clone()))
            } else {
                None
            }
        })
        .collect();
    upcoming.sort_by_key(|(start, _)| *start);
    upcoming.into_iter().map(|(_, c)| c).collect()
}
