use crate::api::ChecklistClient;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::index::build_shift_index;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};
use crate::utils::date::lookback_window;
use crate::utils::table::Table;
use ansi_term::Colour;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Shifts { days } = cmd {
        let days = (*days).unwrap_or(cfg.lookback_days);

        let client = ChecklistClient::new(cfg)?;
        let (start, end) = lookback_window(days);
        let records = client.fetch_checklists(start, end)?;

        let entries = build_shift_index(&records, cfg.station_aware);

        if entries.is_empty() {
            warning(format!(
                "No shifts with checklist activity in the last {days} day(s)."
            ));
            return Ok(());
        }

        let mut table = if cfg.station_aware {
            Table::new(vec!["DATE", "SHIFT", "STATION", "LAST ENTRY", "KEY"])
        } else {
            Table::new(vec!["DATE", "SHIFT", "LAST ENTRY", "KEY"])
        };

        for entry in &entries {
            let mut row = vec![entry.date.clone(), entry.shift.clone()];
            if let Some(station) = &entry.station {
                row.push(station.clone());
            }
            row.push(entry.last_time_str());
            row.push(entry.key().to_string());
            table.add_row(row);
        }

        println!("{}", table.render());

        let latest = &entries[0];
        println!(
            "{} {}",
            Colour::Green.bold().paint("Latest:"),
            latest.key()
        );
        info("Run `shiftsheet report --latest`, or pass one of the KEY values above.");
    }
    Ok(())
}
