//! Shared data types passed between the fetch and formatting steps.

/// A single headline as returned by the news search API. Transient; lives
/// only for the duration of one fetch-and-summarize pass.
#[derive(Debug, Clone)]
pub struct Article {
    pub headline: String,
    pub link: String,
}

/// One line of the outgoing digest. The partial-failure policy is part of
/// the contract: a failed summarization yields a placeholder referencing
/// the original headline instead of aborting the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewsLine {
    Summarized { summary: String, link: String },
    Failed { headline: String },
}

impl NewsLine {
    /// Render the line as it is sent to the chat.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            NewsLine::Summarized { summary, link } => format!("📰 {}\n🔗 {}", summary, link),
            NewsLine::Failed { headline } => format!("❌ Couldn’t summarize: {}", headline),
        }
    }
}
