use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Default reporting endpoint (Evocon checklist export).
const DEFAULT_API_URL: &str = "https://api.evocon.com/api/reports/checklists_json";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub tenant: String,
    #[serde(default)]
    pub secret: String,
    #[serde(default = "default_lookback_days")]
    pub lookback_days: i64,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_station_aware")]
    pub station_aware: bool,
    #[serde(default = "default_shift_starts")]
    pub shift_starts: BTreeMap<String, String>,
    #[serde(default = "default_items")]
    pub items: Vec<String>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}
fn default_lookback_days() -> i64 {
    3
}
fn default_timeout_seconds() -> u64 {
    45
}
fn default_station_aware() -> bool {
    true
}

fn default_shift_starts() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("A".to_string(), "06:00".to_string()),
        ("B".to_string(), "14:00".to_string()),
        ("Γ".to_string(), "22:00".to_string()),
    ])
}

fn default_items() -> Vec<String> {
    [
        "Θερμοκρασία λαμινατορίου (°C)",
        "Είδος μαργαρίνης",
        "Θερμοκρασία μαργαρίνης (°C)",
        "Λαμάκι μαργαρίνης (mm)",
        "Λαμάκι recupero (mm)",
        "Διάκενο μαχαιριών (cm)",
        "Πάχος extruder (1η)",
        "Πάχος extruder (2η)",
        "Ποσοστό μαργαρίνης (%)",
        "Ποσοστό ανακύκλωσης ζύμης recupero (%)",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            tenant: String::new(),
            secret: String::new(),
            lookback_days: default_lookback_days(),
            timeout_seconds: default_timeout_seconds(),
            station_aware: default_station_aware(),
            shift_starts: default_shift_starts(),
            items: default_items(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("shiftsheet")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".shiftsheet")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("shiftsheet.conf")
    }

    /// Load configuration from the default path, or return defaults if not found
    pub fn load() -> Self {
        Self::load_from(Self::config_file())
    }

    /// Load configuration from an explicit path (used by the global --config flag)
    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if path.exists() {
            let content = fs::read_to_string(path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Initialize the configuration file.
    /// `custom_path` overrides the default location; `is_test` skips writing.
    pub fn init_all(custom_path: Option<String>, is_test: bool) -> io::Result<PathBuf> {
        let path = match custom_path {
            Some(p) => PathBuf::from(p),
            None => Self::config_file(),
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        if !is_test {
            let yaml = serde_yaml::to_string(&Config::default())
                .expect("❌ Failed to serialize default configuration");
            let mut file = fs::File::create(&path)?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(path)
    }

    /// Basic-auth credentials for the reporting API.
    /// Environment variables take precedence over the config file.
    pub fn credentials(&self) -> AppResult<(String, String)> {
        let tenant = env::var("SHIFTSHEET_TENANT").unwrap_or_else(|_| self.tenant.clone());
        let secret = env::var("SHIFTSHEET_SECRET").unwrap_or_else(|_| self.secret.clone());

        if tenant.trim().is_empty() || secret.trim().is_empty() {
            return Err(AppError::MissingCredentials);
        }

        Ok((tenant, secret))
    }
}
