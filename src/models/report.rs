use crate::models::key::ShiftKey;
use serde::Serialize;

/// Header metadata for one inspection sheet, snapshotted from the
/// chronologically last submission column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportHeader {
    pub operator: String,
    pub product: String,
    pub production_order: String,
    pub factory: String,
}

/// One matrix row: a fixed item label with one value per column.
#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub label: String,
    pub values: Vec<String>,
}

/// The fixed-row, dynamic-column inspection sheet matrix.
///
/// Columns are the distinct submission times of the selected shift, in
/// shift-relative chronological order. Rows follow the configured item list
/// exactly; a missing cell is an empty string. Immutable once built.
#[derive(Debug, Clone, Serialize)]
pub struct ShiftReport {
    pub key: ShiftKey,
    pub columns: Vec<String>,
    pub rows: Vec<ReportRow>,
    pub header: ReportHeader,
}
