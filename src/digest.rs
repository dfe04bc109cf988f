//! Fetch-and-summarize pass over the news search results.

use tracing::warn;

use crate::clients::news::NewsClient;
use crate::clients::summarizer::Summarize;
use crate::core::models::NewsLine;
use crate::errors::BotError;

/// Fetch up to `limit` articles for `topic` and summarize each headline.
///
/// One failed summary never blocks the rest of the batch: the failing
/// article becomes a [`NewsLine::Failed`] placeholder and processing
/// continues. A failure of the search call itself propagates as `Err`.
pub async fn fetch_digest(
    news: &NewsClient,
    summarizer: &dyn Summarize,
    topic: &str,
    limit: usize,
) -> Result<Vec<NewsLine>, BotError> {
    let articles = news.search(topic, limit).await?;

    let mut lines = Vec::with_capacity(articles.len());
    for article in articles {
        match summarizer.summarize(&article.headline).await {
            Ok(summary) => lines.push(NewsLine::Summarized {
                summary,
                link: article.link,
            }),
            Err(e) => {
                warn!(headline = %article.headline, error = %e, "Failed to summarize headline");
                lines.push(NewsLine::Failed {
                    headline: article.headline,
                });
            }
        }
    }

    Ok(lines)
}
