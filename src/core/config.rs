use std::env;

const DEFAULT_SUMMARIZER_MODEL: &str = "command-r-plus";
const DEFAULT_PACING_MS: u64 = 500;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub telegram_bot_token: String,
    pub summarizer_api_key: String,
    pub news_api_key: String,
    pub summarizer_model: String,
    pub telegram_api_base: Option<String>,
    pub news_api_base: Option<String>,
    pub summarizer_api_base: Option<String>,
    /// Delay between consecutive result messages, in milliseconds.
    pub pacing_ms: u64,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            telegram_bot_token: env::var("TELEGRAM_BOT_TOKEN")
                .map_err(|e| format!("TELEGRAM_BOT_TOKEN: {}", e))?,
            summarizer_api_key: env::var("SUMMARIZER_API_KEY")
                .map_err(|e| format!("SUMMARIZER_API_KEY: {}", e))?,
            news_api_key: env::var("NEWS_API_KEY").map_err(|e| format!("NEWS_API_KEY: {}", e))?,
            summarizer_model: env::var("SUMMARIZER_MODEL")
                .unwrap_or_else(|_| DEFAULT_SUMMARIZER_MODEL.to_string()),
            telegram_api_base: env::var("TELEGRAM_API_BASE").ok(),
            news_api_base: env::var("NEWS_API_BASE").ok(),
            summarizer_api_base: env::var("SUMMARIZER_API_BASE").ok(),
            pacing_ms: env::var("PACING_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PACING_MS),
        })
    }
}
