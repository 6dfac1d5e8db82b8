//! Unified application error type.
//! All modules (api, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Upstream API
    // ---------------------------
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API request failed with status {status}: {url}")]
    ApiStatus { status: u16, url: String },

    #[error("Unexpected API response from {url}: {reason}")]
    ApiDecode { url: String, reason: String },

    #[error("Missing API credentials: set tenant/secret in the config file or SHIFTSHEET_TENANT/SHIFTSHEET_SECRET")]
    MissingCredentials,

    // ---------------------------
    // Selection / parsing errors
    // ---------------------------
    #[error("Invalid shift selection: {0}")]
    InvalidSelection(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
