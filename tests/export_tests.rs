mod common;
use common::{items, rec, shift_starts, temp_out, with_operator};
use shiftsheet::core::clock::ShiftClock;
use shiftsheet::core::report::build_report;
use shiftsheet::export::{ExportFormat, ExportLogic, render_html};
use shiftsheet::models::key::ShiftKey;
use shiftsheet::models::report::ShiftReport;
use std::fs;

fn sample_report() -> ShiftReport {
    let key = ShiftKey::DateShiftStation {
        date: "2025-01-01".to_string(),
        shift: "Γ".to_string(),
        station: "LINE 4".to_string(),
    };
    let clock = ShiftClock::for_shift(&shift_starts(&[("Γ", "22:00")]), "Γ");
    let records = vec![
        with_operator(
            rec("2025-01-01", "Γ", "LINE 4", "23:40", "Temp", "39,5"),
            "Maria <QA>",
        ),
        rec("2025-01-01", "Γ", "LINE 4", "00:20", "Gap", "2"),
    ];

    build_report(&records, &key, &items(&["Temp", "Gap"]), &clock).expect("sample report")
}

#[test]
fn test_html_contains_matrix_and_metadata() {
    let html = render_html(&sample_report());

    assert!(html.contains("<th>23:40</th>"));
    assert!(html.contains("<th>00:20</th>"));
    assert!(html.contains("<td>39.5</td>"));
    assert!(html.contains("LINE 4"));
    assert!(html.contains("2025-01-01"));
}

#[test]
fn test_html_escapes_cell_values() {
    let html = render_html(&sample_report());

    // the operator name carries angle brackets; they must be neutralized
    assert!(html.contains("Maria &lt;QA&gt;"));
    assert!(!html.contains("Maria <QA>"));
}

#[test]
fn test_html_export_writes_file() {
    let out = temp_out("html_export", "html");

    ExportLogic::export(&sample_report(), &ExportFormat::Html, &out, true)
        .expect("html export");

    let content = fs::read_to_string(&out).expect("read exported html");
    assert!(content.starts_with("<!DOCTYPE html>"));
    assert!(content.contains("<td>39.5</td>"));
}

#[test]
fn test_csv_export_round_trips_matrix_shape() {
    let out = temp_out("csv_export", "csv");

    ExportLogic::export(&sample_report(), &ExportFormat::Csv, &out, true)
        .expect("csv export");

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("Shift date,2025-01-01"));
    assert!(content.contains("Station,LINE 4"));
    assert!(content.contains("Item,23:40,00:20"));
    assert!(content.contains("Temp,39.5,"));
    assert!(content.contains("Gap,,2"));
}

#[test]
fn test_pdf_export_produces_a_pdf() {
    let out = temp_out("pdf_export", "pdf");

    ExportLogic::export(&sample_report(), &ExportFormat::Pdf, &out, true)
        .expect("pdf export");

    let bytes = fs::read(&out).expect("read exported pdf");
    assert!(bytes.starts_with(b"%PDF"));
}
