use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file with the default item list and shift starts
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = Config::init_all(cli.config.clone(), cli.test)?;
    let cfg = Config::load_from(&path);

    println!("⚙️  Initializing shiftsheet…");
    println!("📄 Config file  : {}", path.display());
    println!("🌐 Reporting API: {}", cfg.api_url);
    println!("📋 Tracked items: {}", cfg.items.len());

    success("shiftsheet initialization completed!");
    info("Add API credentials to the config file, or set SHIFTSHEET_TENANT / SHIFTSHEET_SECRET.");
    Ok(())
}
