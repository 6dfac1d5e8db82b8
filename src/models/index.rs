use crate::models::key::ShiftKey;
use chrono::NaiveTime;
use serde::Serialize;

/// One selectable (date, shift[, station]) group found in the lookback
/// window, with the latest submission time observed for it.
#[derive(Debug, Clone, Serialize)]
pub struct ShiftIndexEntry {
    pub date: String,
    pub shift: String,
    pub station: Option<String>,
    pub last_time: Option<NaiveTime>,
}

impl ShiftIndexEntry {
    /// The delimited selection key for this entry.
    pub fn key(&self) -> ShiftKey {
        match &self.station {
            Some(station) => ShiftKey::DateShiftStation {
                date: self.date.clone(),
                shift: self.shift.clone(),
                station: station.clone(),
            },
            None => ShiftKey::DateShift {
                date: self.date.clone(),
                shift: self.shift.clone(),
            },
        }
    }

    pub fn last_time_str(&self) -> String {
        match self.last_time {
            Some(t) => t.format("%H:%M").to_string(),
            None => "--:--".to_string(),
        }
    }
}
