/// newsmood - A Telegram bot that delivers emotion-tagged news summaries.
///
/// A user picks a region ("India" or "World"), optionally an Indian state,
/// and an article count. The bot fetches matching headlines from a news
/// search API, asks a chat-style LLM for an emotion-flavored one-line
/// summary of each headline, and streams the results back one message at
/// a time.
///
/// # Architecture
///
/// The system uses:
/// - Long polling against the Telegram Bot API (no webhook, no framework)
/// - A pure per-chat state machine in [`dialogue`] driving the conversation
/// - reqwest for all three external HTTP services
/// - Tokio for the async runtime
///
/// The state machine returns effects (replies, topic writes, fetch
/// requests) rather than performing I/O, so the whole conversation flow is
/// unit-testable without a live transport. Only [`bot::NewsBot`] touches
/// the network.
// Module declarations
pub mod bot;
pub mod clients;
pub mod core;
pub mod dialogue;
pub mod digest;
pub mod errors;
pub mod sessions;

/// Configure structured logging for the bot process.
///
/// Sets up tracing-subscriber with a plain fmt layer; verbosity is
/// controlled through the standard `RUST_LOG` environment variable and
/// defaults to `info`.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
