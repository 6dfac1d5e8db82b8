//! Date utilities: parsing and fetch-window computation.

use chrono::{Days, Local, NaiveDate, NaiveDateTime};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Fetch window for the shift picker: midnight `days` ago up to now.
pub fn lookback_window(days: i64) -> (NaiveDateTime, NaiveDateTime) {
    let now = Local::now().naive_local();
    let start = now
        .date()
        .checked_sub_days(Days::new(days.max(0) as u64))
        .unwrap_or_else(|| now.date())
        .and_hms_opt(0, 0, 0)
        .unwrap_or(now);
    (start, now)
}

/// Fetch window for one report: the shift date padded by one calendar day on
/// each side, so a night shift's post-midnight submissions are inside it.
pub fn window_around(date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let start = date
        .checked_sub_days(Days::new(1))
        .unwrap_or(date)
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let end = date
        .checked_add_days(Days::new(2))
        .unwrap_or(date)
        .and_hms_opt(0, 0, 0)
        .unwrap();
    (start, end)
}

/// ISO-8601 form the reporting API expects for startTime/endTime.
pub fn to_api_timestamp(dt: NaiveDateTime) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S").to_string()
}
