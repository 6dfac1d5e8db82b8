//! Assembly of the inspection sheet matrix for one selected shift.

use crate::core::clock::ShiftClock;
use crate::core::normalize::normalize_value;
use crate::models::key::ShiftKey;
use crate::models::record::ChecklistRecord;
use crate::models::report::{ReportHeader, ReportRow, ShiftReport};
use std::collections::HashMap;

/// Build the fixed-row, dynamic-column matrix for `key`.
///
/// Returns `None` when no matching record produced a column, so callers can
/// tell "no data at all" from a sheet whose cells are all blank.
///
/// Grouping rules:
/// - records are filtered by exact equality on every key component;
/// - a record with an empty donetime contributes nothing;
/// - header metadata is snapshotted from the first record seen at each
///   donetime, whatever its item name;
/// - only allow-listed items open cells, and the last record in input order
///   wins a (donetime, item) collision.
pub fn build_report(
    records: &[ChecklistRecord],
    key: &ShiftKey,
    items: &[String],
    clock: &ShiftClock,
) -> Option<ShiftReport> {
    // donetime -> item -> normalized value
    let mut submissions: HashMap<String, HashMap<String, String>> = HashMap::new();
    // distinct donetimes with at least one cell, in first-seen order
    let mut order: Vec<String> = Vec::new();
    let mut meta: HashMap<String, ReportHeader> = HashMap::new();

    for rec in records.iter().filter(|r| key.matches(r)) {
        if rec.donetime.is_empty() {
            continue;
        }

        meta.entry(rec.donetime.clone()).or_insert_with(|| ReportHeader {
            operator: rec.operator.clone(),
            product: rec.product_produced.clone(),
            production_order: rec.production_order.clone(),
            factory: rec.factory_name.clone(),
        });

        if !items.contains(&rec.itemname) {
            continue;
        }

        submissions
            .entry(rec.donetime.clone())
            .or_insert_with(|| {
                order.push(rec.donetime.clone());
                HashMap::new()
            })
            .insert(rec.itemname.clone(), normalize_value(&rec.itemresult));
    }

    let columns = clock.sorted(order);
    if columns.is_empty() {
        return None;
    }

    let rows = items
        .iter()
        .map(|item| ReportRow {
            label: item.clone(),
            values: columns
                .iter()
                .map(|t| {
                    submissions
                        .get(t)
                        .and_then(|cells| cells.get(item))
                        .cloned()
                        .unwrap_or_default()
                })
                .collect(),
        })
        .collect();

    let header = columns
        .last()
        .and_then(|t| meta.get(t))
        .cloned()
        .unwrap_or_default();

    Some(ShiftReport {
        key: key.clone(),
        columns,
        rows,
        header,
    })
}
