//! Client for the homework status endpoint.

use std::time::Duration;

use log::debug;
use reqwest::header::AUTHORIZATION;

use crate::error::{BotError, Result};
use crate::types::StatusResponse;

/// Production status endpoint, overridable via `STATUS_API_URL`.
pub const DEFAULT_API_URL: &str = "https://praktikum.yandex.ru/ap/user_api/homework_statuses/";

/// A hung connection must not stall the polling cadence indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct ReviewApi {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl ReviewApi {
    pub fn new(base_url: String, token: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    /// Fetch homework statuses reported since `from_date` (Unix seconds).
    ///
    /// Any transport failure, non-2xx status, or undecodable body comes back
    /// as an `Err`; the polling loop treats that as "no update this cycle".
    pub async fn homework_statuses(&self, from_date: i64) -> Result<StatusResponse> {
        debug!("Requesting homework statuses from_date={}", from_date);

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("from_date", from_date)])
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response
                .text()
                .await
                .unwrap_or_else(|e| format!("Failed to read error response: {e}"));
            return Err(BotError::StatusApi { status, message });
        }

        Ok(response.json().await?)
    }
}
