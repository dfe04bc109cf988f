//! Summarization API client
//!
//! Sends a single chat-style request per headline and returns the trimmed
//! response text. Errors propagate to the caller; the digest layer decides
//! what a failed summary means for the batch.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::BotError;

const SUMMARIZER_API_BASE: &str = "https://api.cohere.com";

/// Seam between the digest orchestration and the real API, so the
/// partial-failure policy can be exercised without a live endpoint.
#[async_trait]
pub trait Summarize: Send + Sync {
    async fn summarize(&self, headline: &str) -> Result<String, BotError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    message: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    text: String,
}

pub struct SummaryClient {
    api_key: String,
    api_base: String,
    model: String,
    client: Client,
}

impl SummaryClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            api_key,
            api_base: SUMMARIZER_API_BASE.to_string(),
            model,
            client: Client::new(),
        }
    }

    /// Point the client at a different API host (used by tests).
    #[must_use]
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }
}

#[async_trait]
impl Summarize for SummaryClient {
    async fn summarize(&self, headline: &str) -> Result<String, BotError> {
        let request = ChatRequest {
            model: self.model.clone(),
            message: format!(
                "Summarize this news headline with emotion (happy/sad/serious): {}",
                headline
            ),
        };

        let response = self
            .client
            .post(format!("{}/v1/chat", self.api_base))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(BotError::SummarizeError(format!(
                "chat endpoint returned HTTP {}",
                response.status()
            )));
        }

        let body: ChatResponse = response.json().await?;
        Ok(body.text.trim().to_string())
    }
}
