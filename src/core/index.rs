//! Discovery and ranking of the (date, shift[, station]) groups present in a
//! fetched record set.

use crate::models::index::ShiftIndexEntry;
use crate::models::record::ChecklistRecord;
use crate::utils::date::parse_date;
use crate::utils::time::parse_time;
use std::cmp::Reverse;
use std::collections::HashMap;

/// Group records by selection key and rank the groups most-recent first.
///
/// Records missing any key component or the submission time are ignored.
/// Ranking is (calendar date desc, latest submission time desc); a group
/// whose date or times fail to parse sorts as the earliest possible value,
/// which is what `None < Some` gives us. Ties keep first-seen order.
pub fn build_shift_index(
    records: &[ChecklistRecord],
    station_aware: bool,
) -> Vec<ShiftIndexEntry> {
    let mut entries: Vec<ShiftIndexEntry> = Vec::new();
    let mut seen: HashMap<(String, String, Option<String>), usize> = HashMap::new();

    for rec in records {
        if rec.shift_date.is_empty() || rec.shift.is_empty() || rec.donetime.is_empty() {
            continue;
        }
        let station = if station_aware {
            if rec.station.is_empty() {
                continue;
            }
            Some(rec.station.clone())
        } else {
            None
        };

        let t = parse_time(&rec.donetime);
        let group = (rec.shift_date.clone(), rec.shift.clone(), station.clone());

        match seen.get(&group) {
            Some(&i) => {
                let entry = &mut entries[i];
                if t > entry.last_time {
                    entry.last_time = t;
                }
            }
            None => {
                seen.insert(group, entries.len());
                entries.push(ShiftIndexEntry {
                    date: rec.shift_date.clone(),
                    shift: rec.shift.clone(),
                    station,
                    last_time: t,
                });
            }
        }
    }

    entries.sort_by_key(|e| Reverse((parse_date(&e.date), e.last_time)));
    entries
}
