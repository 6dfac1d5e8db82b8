use crate::errors::{AppError, AppResult};
use crate::models::record::ChecklistRecord;
use serde::Serialize;
use std::fmt;

/// Identifies exactly one printable report.
///
/// Two arities exist: (date, shift) and (date, shift, station). They are a
/// schema evolution, not two simultaneous features: which one is in force is
/// decided by the `station_aware` configuration flag. The delimited wire form
/// is `date|shift` or `date|shift|station`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ShiftKey {
    DateShift {
        date: String,
        shift: String,
    },
    DateShiftStation {
        date: String,
        shift: String,
        station: String,
    },
}

impl ShiftKey {
    /// Parse a delimited selection key with the configured arity.
    /// Wrong arity or blank components are a caller contract violation.
    pub fn parse(raw: &str, station_aware: bool) -> AppResult<Self> {
        let parts: Vec<&str> = raw.split('|').map(str::trim).collect();

        let key = match (station_aware, parts.as_slice()) {
            (false, [date, shift]) => ShiftKey::DateShift {
                date: date.to_string(),
                shift: shift.to_string(),
            },
            (true, [date, shift, station]) => ShiftKey::DateShiftStation {
                date: date.to_string(),
                shift: shift.to_string(),
                station: station.to_string(),
            },
            (false, _) => {
                return Err(AppError::InvalidSelection(format!(
                    "expected \"date|shift\", got \"{raw}\""
                )));
            }
            (true, _) => {
                return Err(AppError::InvalidSelection(format!(
                    "expected \"date|shift|station\", got \"{raw}\""
                )));
            }
        };

        if key.date().is_empty() || key.shift().is_empty() {
            return Err(AppError::InvalidSelection(format!(
                "empty component in \"{raw}\""
            )));
        }
        if let ShiftKey::DateShiftStation { station, .. } = &key
            && station.is_empty()
        {
            return Err(AppError::InvalidSelection(format!(
                "empty station in \"{raw}\""
            )));
        }

        Ok(key)
    }

    pub fn date(&self) -> &str {
        match self {
            ShiftKey::DateShift { date, .. } => date,
            ShiftKey::DateShiftStation { date, .. } => date,
        }
    }

    pub fn shift(&self) -> &str {
        match self {
            ShiftKey::DateShift { shift, .. } => shift,
            ShiftKey::DateShiftStation { shift, .. } => shift,
        }
    }

    pub fn station(&self) -> Option<&str> {
        match self {
            ShiftKey::DateShift { .. } => None,
            ShiftKey::DateShiftStation { station, .. } => Some(station),
        }
    }

    /// Exact string-equality match on every key component.
    pub fn matches(&self, rec: &ChecklistRecord) -> bool {
        match self {
            ShiftKey::DateShift { date, shift } => {
                rec.shift_date == *date && rec.shift == *shift
            }
            ShiftKey::DateShiftStation {
                date,
                shift,
                station,
            } => {
                rec.shift_date == *date && rec.shift == *shift && rec.station == *station
            }
        }
    }
}

impl fmt::Display for ShiftKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShiftKey::DateShift { date, shift } => write!(f, "{date}|{shift}"),
            ShiftKey::DateShiftStation {
                date,
                shift,
                station,
            } => write!(f, "{date}|{shift}|{station}"),
        }
    }
}
