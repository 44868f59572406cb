//! Homework review status bot.
//!
//! Polls the review status API on a fixed interval and relays verdicts for
//! freshly reviewed homework to a Telegram chat. Strictly sequential: one
//! fetch, at most one message, one sleep per cycle, with a single timestamp
//! cursor carried between cycles.

pub mod config;
pub mod error;
pub mod review_api;
pub mod telegram;
pub mod types;
pub mod verdict;

#[cfg(test)]
pub(crate) mod test_support;

use chrono::Utc;
use log::{debug, error, info};

use config::Config;
use error::Result;
use review_api::ReviewApi;
use telegram::Notifier;

const GREETING: &str = "Hi! I'm now keeping an eye on your homework.";

/// Run the bot: load configuration, greet the chat, then poll forever.
///
/// Only startup can fail; once the loop is entered, every per-cycle fault is
/// contained by [`run_cycle`] and the process runs until externally killed.
pub async fn run() -> Result<()> {
    info!("Initializing bot");
    let config = Config::from_env()?;

    let api = ReviewApi::new(config.api_url.clone(), config.practicum_token.clone())?;
    let notifier = Notifier::new(&config.telegram_token, config.chat_id.clone())?;

    if config.startup_greeting {
        notifier.notify(GREETING).await;
    }

    let mut cursor = Utc::now().timestamp();
    info!(
        "Entering polling loop, cursor={} interval={}s",
        cursor,
        config.poll_interval.as_secs()
    );

    loop {
        cursor = run_cycle(&api, &notifier, cursor).await;
        tokio::time::sleep(config.poll_interval).await;
    }
}

/// One fetch → format → notify cycle; returns the cursor for the next cycle.
///
/// Fetch failures are logged and relayed to the chat as text, data-shape
/// failures are logged and skipped, and the cursor only advances when the
/// server reports a `current_date`.
pub async fn run_cycle(api: &ReviewApi, notifier: &Notifier, cursor: i64) -> i64 {
    let response = match api.homework_statuses(cursor).await {
        Ok(response) => response,
        Err(e) => {
            error!("Status fetch failed: {}", e);
            notifier
                .notify(&format!("The bot hit an error: {e}"))
                .await;
            return cursor;
        }
    };

    // Only the most recent entry is reported; the rest of the batch is
    // intentionally dropped this cycle.
    if let Some(homework) = response.homeworks.first() {
        match verdict::review_message(homework) {
            Ok(message) => notifier.notify(&message).await,
            Err(e) => error!("Skipping notification: {}", e),
        }
    } else {
        debug!("No homework updates this cycle");
    }

    response.current_date.unwrap_or(cursor)
}
