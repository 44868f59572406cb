//! Message delivery over the Telegram Bot API.
//!
//! Plain `sendMessage` calls to a single fixed chat; no gateway, no polling
//! for inbound updates. Docs: <https://core.telegram.org/bots/api>

use std::time::Duration;

use log::{error, info};
use serde::Serialize;

use crate::error::{BotError, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

pub struct Notifier {
    client: reqwest::Client,
    base_url: String,
    chat_id: String,
}

impl Notifier {
    pub fn new(token: &str, chat_id: String) -> Result<Self> {
        let base_url = format!("https://api.telegram.org/bot{token}");
        Self::with_base_url(base_url, chat_id)
    }

    /// Build a notifier against an explicit API base URL.
    pub fn with_base_url(base_url: String, chat_id: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            base_url,
            chat_id,
        })
    }

    /// Send `text` to the configured chat, propagating delivery failures.
    pub async fn send(&self, text: &str) -> Result<()> {
        let request = SendMessageRequest {
            chat_id: &self.chat_id,
            text,
        };

        let response = self
            .client
            .post(format!("{}/sendMessage", self.base_url))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response
                .text()
                .await
                .unwrap_or_else(|e| format!("Failed to read error response: {e}"));
            return Err(BotError::TelegramApi { status, message });
        }

        Ok(())
    }

    /// Best-effort delivery: failures are logged and never propagated, so a
    /// broken notification channel cannot take down the polling loop.
    pub async fn notify(&self, text: &str) {
        info!("Sending message to chat {}", self.chat_id);
        if let Err(e) = self.send(text).await {
            error!("Failed to deliver message: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{capture_request, local_listener};

    #[tokio::test]
    async fn send_posts_chat_id_and_text() {
        let (listener, base_url) = local_listener().await;
        let server = tokio::spawn(capture_request(listener, "200 OK", r#"{"ok":true}"#));

        let notifier =
            Notifier::with_base_url(base_url, "12345".to_string()).expect("client builds");
        notifier.send("hello\n\nworld").await.expect("send succeeds");

        let request = server.await.expect("server task").expect("one request");
        assert!(request.starts_with("POST /sendMessage"));
        assert!(request.contains(r#""chat_id":"12345""#));
        assert!(request.contains(r#""text":"hello\n\nworld""#));
    }

    #[tokio::test]
    async fn notify_swallows_delivery_failure() {
        // Nothing is listening on this address after the listener drops.
        let (listener, base_url) = local_listener().await;
        drop(listener);

        let notifier = Notifier::with_base_url(base_url, "12345".to_string()).expect("client builds");
        // Must not panic or propagate.
        notifier.notify("unreachable").await;
    }

    #[tokio::test]
    async fn non_2xx_reply_is_a_telegram_api_error() {
        let (listener, base_url) = local_listener().await;
        let server = tokio::spawn(capture_request(
            listener,
            "403 Forbidden",
            r#"{"ok":false,"description":"bot was blocked by the user"}"#,
        ));

        let notifier =
            Notifier::with_base_url(base_url, "12345".to_string()).expect("client builds");
        let err = notifier.send("hello").await.expect_err("expected failure");
        assert!(matches!(err, crate::error::BotError::TelegramApi { .. }));

        server.await.expect("server task");
    }
}
