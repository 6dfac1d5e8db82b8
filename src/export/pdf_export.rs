// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::export::pdf::PdfManager;
use crate::models::report::ShiftReport;
use crate::ui::messages::info;
use std::io;
use std::path::Path;

/// Export the inspection sheet as a paginated PDF.
pub(crate) fn export_pdf(report: &ShiftReport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let title = format!("Shift inspection sheet {}", report.key);

    let mut meta = vec![
        ("Date".to_string(), report.key.date().to_string()),
        ("Shift".to_string(), report.key.shift().to_string()),
    ];
    if let Some(station) = report.key.station() {
        meta.push(("Station".to_string(), station.to_string()));
    }
    meta.push(("Operator".to_string(), report.header.operator.clone()));
    meta.push(("Product".to_string(), report.header.product.clone()));
    meta.push((
        "Production order".to_string(),
        report.header.production_order.clone(),
    ));
    meta.push(("Factory".to_string(), report.header.factory.clone()));

    let mut headers = vec!["Item".to_string()];
    headers.extend(report.columns.iter().cloned());

    let rows: Vec<Vec<String>> = report
        .rows
        .iter()
        .map(|row| {
            let mut line = vec![row.label.clone()];
            line.extend(row.values.iter().cloned());
            line
        })
        .collect();

    let mut pdf = PdfManager::new();
    pdf.write_sheet(&title, &meta, &headers, &rows);

    pdf.save(path)
        .map_err(|e| AppError::from(io::Error::other(format!("PDF export error: {e}"))))?;

    notify_export_success("PDF", path);
    Ok(())
}
