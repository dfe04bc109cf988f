//! News search API client
//!
//! Queries the `/v2/everything` search endpoint for recent English-language
//! headlines matching a free-text topic.

use reqwest::Client;
use serde::Deserialize;

use crate::core::models::Article;
use crate::errors::BotError;

const NEWS_API_BASE: &str = "https://newsapi.org";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    articles: Vec<ArticleJson>,
}

#[derive(Debug, Deserialize)]
struct ArticleJson {
    title: String,
    url: String,
}

pub struct NewsClient {
    api_key: String,
    api_base: String,
    client: Client,
}

impl NewsClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            api_base: NEWS_API_BASE.to_string(),
            client: Client::new(),
        }
    }

    /// Point the client at a different API host (used by tests).
    #[must_use]
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    /// Fetch up to `limit` of the most recent English articles matching
    /// `topic`. Fewer results than `limit` is not an error; the caller gets
    /// whatever the search returned.
    pub async fn search(&self, topic: &str, limit: usize) -> Result<Vec<Article>, BotError> {
        let url = format!("{}/v2/everything", self.api_base);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", topic),
                ("sortBy", "publishedAt"),
                ("language", "en"),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(BotError::NewsError(format!(
                "search returned HTTP {}",
                response.status()
            )));
        }

        let body: SearchResponse = response.json().await?;
        Ok(body
            .articles
            .into_iter()
            .take(limit)
            .map(|a| Article {
                headline: a.title,
                link: a.url,
            })
            .collect())
    }
}
