use thiserror::Error;

#[derive(Debug, Error)]
pub enum BotError {
    #[error("Failed to access Telegram API: {0}")]
    TelegramError(String),

    #[error("Failed to access news API: {0}")]
    NewsError(String),

    #[error("Failed to access summarization API: {0}")]
    SummarizeError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),
}

impl From<reqwest::Error> for BotError {
    fn from(error: reqwest::Error) -> Self {
        BotError::HttpError(error.to_string())
    }
}
