//! Telegram Bot API client
//!
//! Talks to the Bot API over plain HTTP: `getUpdates` long polling for
//! inbound messages and `sendMessage` for replies, optionally with a reply
//! keyboard. No webhook support.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::time::Duration;

use crate::errors::BotError;

const BOT_API_BASE: &str = "https://api.telegram.org";
const POLL_TIMEOUT_SECS: u64 = 30;

// The HTTP timeout must outlive the long-poll window, or every idle poll
// ends in a client-side timeout error.
const HTTP_TIMEOUT_SECS: u64 = POLL_TIMEOUT_SECS + 10;

#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<IncomingMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IncomingMessage {
    pub chat: Chat,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct ReplyKeyboardMarkup {
    keyboard: Vec<Vec<KeyboardButton>>,
    resize_keyboard: bool,
}

#[derive(Debug, Serialize)]
struct KeyboardButton {
    text: String,
}

impl ReplyKeyboardMarkup {
    /// Build a keyboard from rows of button labels.
    #[must_use]
    pub fn from_rows(rows: &[Vec<String>]) -> Self {
        Self {
            keyboard: rows
                .iter()
                .map(|row| {
                    row.iter()
                        .map(|label| KeyboardButton {
                            text: label.clone(),
                        })
                        .collect()
                })
                .collect(),
            resize_keyboard: true,
        }
    }
}

/// Envelope every Bot API method responds with.
#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
}

pub struct TelegramClient {
    token: String,
    api_base: String,
    client: Client,
}

impl TelegramClient {
    pub fn new(token: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            token,
            api_base: BOT_API_BASE.to_string(),
            client,
        }
    }

    /// Point the client at a different API host (used by tests).
    #[must_use]
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_base, self.token, method)
    }

    /// Long-poll for new updates. `offset` must be one past the last
    /// confirmed `update_id` so delivered updates are not replayed.
    pub async fn get_updates(&self, offset: i64) -> Result<Vec<Update>, BotError> {
        let response = self
            .client
            .get(self.method_url("getUpdates"))
            .query(&[("timeout", POLL_TIMEOUT_SECS as i64), ("offset", offset)])
            .send()
            .await?;

        let body: ApiResponse<Vec<Update>> = response.json().await?;
        if !body.ok {
            return Err(BotError::TelegramError(
                body.description
                    .unwrap_or_else(|| "getUpdates returned ok=false".to_string()),
            ));
        }

        Ok(body.result.unwrap_or_default())
    }

    /// Send a text message, optionally attaching a reply keyboard.
    pub async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        keyboard: Option<&ReplyKeyboardMarkup>,
    ) -> Result<(), BotError> {
        let mut payload = json!({
            "chat_id": chat_id,
            "text": text,
        });
        if let Some(markup) = keyboard {
            payload["reply_markup"] = serde_json::to_value(markup)
                .map_err(|e| BotError::TelegramError(e.to_string()))?;
        }

        let response = self
            .client
            .post(self.method_url("sendMessage"))
            .json(&payload)
            .send()
            .await?;

        let body: ApiResponse<Value> = response.json().await?;
        if !body.ok {
            return Err(BotError::TelegramError(
                body.description
                    .unwrap_or_else(|| "sendMessage returned ok=false".to_string()),
            ));
        }

        Ok(())
    }
}
