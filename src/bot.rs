//! Bot runtime: the long-polling loop and effect execution.
//!
//! All I/O lives here. Inbound messages are routed through the pure
//! transition functions in [`crate::dialogue`]; the resulting effects are
//! executed in order against the Telegram transport and the session store.

use std::collections::HashMap;
use std::time::Duration;

use tracing::{debug, error, info, warn};

use crate::clients::news::NewsClient;
use crate::clients::summarizer::SummaryClient;
use crate::clients::telegram::{ReplyKeyboardMarkup, TelegramClient};
use crate::core::config::AppConfig;
use crate::dialogue::{self, ChatState, Effect, Outcome};
use crate::digest;
use crate::errors::BotError;
use crate::sessions::SessionStore;

const POLL_RETRY_SECS: u64 = 5;

pub struct NewsBot {
    telegram: TelegramClient,
    news: NewsClient,
    summarizer: SummaryClient,
    sessions: SessionStore,
    states: HashMap<i64, ChatState>,
    pacing: Duration,
}

impl NewsBot {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        let mut telegram = TelegramClient::new(config.telegram_bot_token.clone());
        if let Some(base) = &config.telegram_api_base {
            telegram = telegram.with_api_base(base.clone());
        }

        let mut news = NewsClient::new(config.news_api_key.clone());
        if let Some(base) = &config.news_api_base {
            news = news.with_api_base(base.clone());
        }

        let mut summarizer = SummaryClient::new(
            config.summarizer_api_key.clone(),
            config.summarizer_model.clone(),
        );
        if let Some(base) = &config.summarizer_api_base {
            summarizer = summarizer.with_api_base(base.clone());
        }

        Self {
            telegram,
            news,
            summarizer,
            sessions: SessionStore::new(),
            states: HashMap::new(),
            pacing: Duration::from_millis(config.pacing_ms),
        }
    }

    /// Poll for updates forever. A failed poll is logged and retried after
    /// a short sleep; a failure while handling one chat's message never
    /// takes the loop down.
    pub async fn run(mut self) -> Result<(), BotError> {
        info!("Telegram news bot is running");
        let mut offset = 0i64;

        loop {
            let updates = match self.telegram.get_updates(offset).await {
                Ok(updates) => updates,
                Err(e) => {
                    warn!(error = %e, "Polling failed, retrying shortly");
                    tokio::time::sleep(Duration::from_secs(POLL_RETRY_SECS)).await;
                    continue;
                }
            };

            for update in updates {
                offset = offset.max(update.update_id + 1);

                let Some(message) = update.message else {
                    continue;
                };
                // Stickers, photos and the like carry no text; ignore them.
                let Some(text) = message.text else {
                    continue;
                };

                let chat_id = message.chat.id;
                debug!(chat_id, text = %text, "Handling inbound message");
                if let Err(e) = self.handle_message(chat_id, &text).await {
                    error!(chat_id, error = %e, "Failed to handle message");
                }
            }
        }
    }

    async fn handle_message(&mut self, chat_id: i64, text: &str) -> Result<(), BotError> {
        let trimmed = text.trim();

        let outcome = if trimmed.starts_with("/start") {
            // Entry resets any topic left over from a previous conversation.
            self.sessions.clear(chat_id);
            Some(dialogue::start())
        } else if trimmed.starts_with("/cancel") {
            if self.states.contains_key(&chat_id) {
                Some(dialogue::cancel())
            } else {
                None
            }
        } else if let Some(state) = self.states.get(&chat_id).copied() {
            Some(dialogue::step(state, trimmed, self.sessions.get(chat_id)))
        } else {
            // No active conversation; only /start opens one.
            None
        };

        match outcome {
            Some(outcome) => self.apply(chat_id, outcome).await,
            None => Ok(()),
        }
    }

    async fn apply(&mut self, chat_id: i64, outcome: Outcome) -> Result<(), BotError> {
        for effect in outcome.effects {
            match effect {
                Effect::Reply { text, keyboard } => {
                    let markup = keyboard
                        .as_deref()
                        .map(ReplyKeyboardMarkup::from_rows);
                    self.telegram
                        .send_message(chat_id, &text, markup.as_ref())
                        .await?;
                }
                Effect::SetTopic(topic) => self.sessions.set(chat_id, topic),
                Effect::Fetch { topic, count } => {
                    self.stream_digest(chat_id, &topic, count).await?;
                }
            }
        }

        match outcome.next {
            Some(state) => {
                self.states.insert(chat_id, state);
            }
            None => {
                self.states.remove(&chat_id);
                self.sessions.clear(chat_id);
            }
        }

        Ok(())
    }

    /// Run one fetch-and-summarize pass and stream the results, one
    /// message per article with a pacing delay between sends. A search
    /// failure becomes a user-facing error message rather than a stalled
    /// conversation.
    async fn stream_digest(
        &self,
        chat_id: i64,
        topic: &str,
        count: usize,
    ) -> Result<(), BotError> {
        let lines = match digest::fetch_digest(&self.news, &self.summarizer, topic, count).await {
            Ok(lines) => lines,
            Err(e) => {
                error!(chat_id, topic, error = %e, "News fetch failed");
                self.telegram
                    .send_message(
                        chat_id,
                        "⚠️ Couldn’t fetch the news right now. Please try again later.",
                        None,
                    )
                    .await?;
                return Ok(());
            }
        };

        for line in lines {
            self.telegram
                .send_message(chat_id, &line.render(), None)
                .await?;
            tokio::time::sleep(self.pacing).await;
        }

        Ok(())
    }
}
