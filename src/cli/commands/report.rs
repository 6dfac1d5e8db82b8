use crate::api::ChecklistClient;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::ShiftClock;
use crate::core::index::build_shift_index;
use crate::core::report::build_report;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::models::key::ShiftKey;
use crate::models::report::ShiftReport;
use crate::ui::messages::{header, warning};
use crate::utils::colors::colorize_optional;
use crate::utils::date::{lookback_window, parse_date, window_around};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        key,
        latest,
        format,
        file,
        force,
    } = cmd
    {
        // Contract checks come first so a malformed selection fails before
        // any network traffic.
        let parsed = match key {
            Some(raw) => Some(ShiftKey::parse(raw, cfg.station_aware)?),
            None if *latest => None,
            None => {
                return Err(AppError::InvalidSelection(
                    "pass a selection key or --latest".to_string(),
                ));
            }
        };
        if let Some(k) = &parsed
            && parse_date(k.date()).is_none()
        {
            return Err(AppError::InvalidDate(k.date().to_string()));
        }

        let client = ChecklistClient::new(cfg)?;

        let selection = match parsed {
            Some(k) => k,
            None => {
                let (start, end) = lookback_window(cfg.lookback_days);
                let records = client.fetch_checklists(start, end)?;
                match build_shift_index(&records, cfg.station_aware).first() {
                    Some(entry) => entry.key(),
                    None => {
                        warning(format!(
                            "No shifts with checklist activity in the last {} day(s).",
                            cfg.lookback_days
                        ));
                        return Ok(());
                    }
                }
            }
        };

        let date = parse_date(selection.date())
            .ok_or_else(|| AppError::InvalidDate(selection.date().to_string()))?;

        let (start, end) = window_around(date);
        let records = client.fetch_checklists(start, end)?;

        let clock = ShiftClock::for_shift(&cfg.shift_starts, selection.shift());

        match build_report(&records, &selection, &cfg.items, &clock) {
            None => {
                warning(format!("No checklist submissions found for {selection}."));
            }
            Some(report) => {
                print_sheet(&report);

                if let (Some(fmt), Some(file)) = (format, file) {
                    ExportLogic::export(&report, fmt, file, *force)?;
                }
            }
        }
    }
    Ok(())
}

fn print_sheet(report: &ShiftReport) {
    header(format!("Inspection sheet {}", report.key));

    println!("Operator:         {}", colorize_optional(&report.header.operator));
    println!("Product:          {}", colorize_optional(&report.header.product));
    println!(
        "Production order: {}",
        colorize_optional(&report.header.production_order)
    );
    println!("Factory:          {}", colorize_optional(&report.header.factory));
    println!();

    let mut headers = vec!["ITEM".to_string()];
    headers.extend(report.columns.iter().cloned());
    let mut table = Table::new(headers);

    for row in &report.rows {
        let mut line = vec![row.label.clone()];
        line.extend(row.values.iter().map(|v| {
            if v.is_empty() {
                "·".to_string()
            } else {
                v.clone()
            }
        }));
        table.add_row(line);
    }

    println!("{}", table.render());
}
