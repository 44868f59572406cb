use std::env;
use std::time::Duration;

use log::{debug, error, info};

use crate::error::{BotError, Result};
use crate::review_api::DEFAULT_API_URL;

/// Seconds between polling cycles when `POLL_INTERVAL_SECS` is not set.
const DEFAULT_POLL_INTERVAL_SECS: u64 = 1200;

#[derive(Debug, Clone)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub chat_id: String,
    pub api_url: String,
    pub poll_interval: Duration,
    pub startup_greeting: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        debug!("Loading configuration from environment");
        dotenvy::dotenv().ok();

        let practicum_token = env::var("PRAKTIKUM_TOKEN").map_err(|e| {
            error!("Failed to load PRAKTIKUM_TOKEN from environment: {}", e);
            e
        })?;

        let telegram_token = env::var("TELEGRAM_TOKEN").map_err(|e| {
            error!("Failed to load TELEGRAM_TOKEN from environment: {}", e);
            e
        })?;

        let chat_id = env::var("TELEGRAM_CHAT_ID").map_err(|e| {
            error!("Failed to load TELEGRAM_CHAT_ID from environment: {}", e);
            e
        })?;

        let api_url =
            env::var("STATUS_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let poll_interval = match env::var("POLL_INTERVAL_SECS") {
            Ok(value) => parse_poll_interval(&value).map_err(|e| {
                error!("Invalid POLL_INTERVAL_SECS: {}", e);
                e
            })?,
            Err(_) => Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
        };

        let startup_greeting = match env::var("STARTUP_GREETING") {
            Ok(value) => parse_bool(&value).map_err(|e| {
                error!("Invalid STARTUP_GREETING: {}", e);
                e
            })?,
            Err(_) => true,
        };

        info!("Configuration loaded successfully");
        debug!("Practicum token length: {} characters", practicum_token.len());
        debug!("Telegram token length: {} characters", telegram_token.len());
        debug!("Destination chat id: {}", chat_id);
        debug!("Status API URL: {}", api_url);
        debug!("Poll interval: {}s", poll_interval.as_secs());
        debug!("Startup greeting: {}", startup_greeting);

        Ok(Self {
            practicum_token,
            telegram_token,
            chat_id,
            api_url,
            poll_interval,
            startup_greeting,
        })
    }
}

fn parse_poll_interval(value: &str) -> Result<Duration> {
    let secs: u64 = value
        .trim()
        .parse()
        .map_err(|_| BotError::Config(format!("not a valid number of seconds: {value:?}")))?;
    if secs == 0 {
        return Err(BotError::Config(
            "poll interval must be at least one second".to_string(),
        ));
    }
    Ok(Duration::from_secs(secs))
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(BotError::Config(format!("not a valid boolean: {value:?}"))),
    }
}
