//! Shift-relative ordering of "HH:MM" submission times.

use crate::utils::time::{minutes_of_day, parse_time};
use std::collections::BTreeMap;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Orders wall-clock times relative to a shift's configured start.
///
/// The start time becomes the lexical zero point, so a night shift starting
/// at 22:00 sorts 23:40 before 00:20 of the next calendar day. Unparsable
/// times fall back to midnight instead of failing; upstream data
/// occasionally has malformed times.
#[derive(Debug, Clone, Copy)]
pub struct ShiftClock {
    start_minutes: i64,
}

impl ShiftClock {
    /// Build the clock for one shift from the configured start-time table.
    /// Unrecognized shift identifiers start at midnight.
    pub fn for_shift(shift_starts: &BTreeMap<String, String>, shift: &str) -> Self {
        let start = shift_starts
            .get(shift)
            .and_then(|s| parse_time(s))
            .map(minutes_of_day)
            .unwrap_or(0);
        Self {
            start_minutes: start,
        }
    }

    /// Minutes elapsed since the shift start, modulo 24h.
    pub fn sort_key(&self, hhmm: &str) -> i64 {
        let m = parse_time(hhmm).map(minutes_of_day).unwrap_or(0);
        (m - self.start_minutes).rem_euclid(MINUTES_PER_DAY)
    }

    /// Stable, total sort of submission times in shift order.
    pub fn sorted(&self, times: Vec<String>) -> Vec<String> {
        let mut out = times;
        out.sort_by_key(|t| self.sort_key(t));
        out
    }
}
