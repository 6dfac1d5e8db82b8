// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::csv::export_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::html::export_html;
use crate::export::pdf_export::export_pdf;
use crate::models::report::ShiftReport;
use crate::utils::path::expand_tilde;

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `report` to `file` in the requested format.
    ///
    /// - `format`: html | csv | pdf
    /// - `force`: overwrite an existing file without asking
    pub fn export(
        report: &ShiftReport,
        format: &ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = expand_tilde(file);

        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Html => export_html(report, &path),
            ExportFormat::Csv => export_csv(report, &path),
            ExportFormat::Pdf => export_pdf(report, &path),
        }
    }
}
