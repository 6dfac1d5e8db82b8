//! Blocking HTTP client for the checklist reporting API.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::record::ChecklistRecord;
use crate::utils::date::to_api_timestamp;
use chrono::NaiveDateTime;
use std::time::Duration;

/// One fetch per command invocation; no pooling, no retries, no caching.
pub struct ChecklistClient {
    http: reqwest::blocking::Client,
    url: String,
    tenant: String,
    secret: String,
}

impl ChecklistClient {
    pub fn new(cfg: &Config) -> AppResult<Self> {
        let (tenant, secret) = cfg.credentials()?;

        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            url: cfg.api_url.clone(),
            tenant,
            secret,
        })
    }

    /// Fetch the raw checklist rows submitted between `start` and `end`.
    ///
    /// The response must be a JSON array; rows with missing or malformed
    /// fields are accepted as-is and cleaned downstream. Failures carry the
    /// target URL and status so a misconfigured credential or endpoint can
    /// be diagnosed from the error alone.
    pub fn fetch_checklists(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> AppResult<Vec<ChecklistRecord>> {
        let response = self
            .http
            .get(&self.url)
            .basic_auth(&self.tenant, Some(&self.secret))
            .header(reqwest::header::ACCEPT, "application/json")
            .query(&[
                ("startTime", to_api_timestamp(start)),
                ("endTime", to_api_timestamp(end)),
            ])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::ApiStatus {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        response
            .json::<Vec<ChecklistRecord>>()
            .map_err(|e| AppError::ApiDecode {
                url: self.url.clone(),
                reason: format!("expected a JSON list of checklist rows ({e})"),
            })
    }
}
