use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::models::report::ShiftReport;
use crate::ui::messages::info;
use csv::WriterBuilder;
use std::io;
use std::path::Path;

/// Write the inspection sheet as CSV: header metadata lines, a blank
/// separator row, then the matrix with times across the top.
pub(crate) fn export_csv(report: &ShiftReport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    // Metadata rows and matrix rows have different lengths.
    let mut wtr = WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| AppError::from(io::Error::other(format!("CSV open error: {e}"))))?;

    let mut write = |row: &[String]| -> AppResult<()> {
        wtr.write_record(row)
            .map_err(|e| AppError::from(io::Error::other(format!("CSV write error: {e}"))))
    };

    write(&["Shift date".to_string(), report.key.date().to_string()])?;
    write(&["Shift".to_string(), report.key.shift().to_string()])?;
    if let Some(station) = report.key.station() {
        write(&["Station".to_string(), station.to_string()])?;
    }
    write(&["Operator".to_string(), report.header.operator.clone()])?;
    write(&["Product".to_string(), report.header.product.clone()])?;
    write(&[
        "Production order".to_string(),
        report.header.production_order.clone(),
    ])?;
    write(&["Factory".to_string(), report.header.factory.clone()])?;
    write(&[String::new()])?;

    let mut head = vec!["Item".to_string()];
    head.extend(report.columns.iter().cloned());
    write(&head)?;

    for row in &report.rows {
        let mut line = vec![row.label.clone()];
        line.extend(row.values.iter().cloned());
        write(&line)?;
    }

    wtr.flush()
        .map_err(|e| AppError::from(io::Error::other(format!("CSV flush error: {e}"))))?;

    notify_export_success("CSV", path);
    Ok(())
}
