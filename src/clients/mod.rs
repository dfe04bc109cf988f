//! HTTP clients for the three external services the bot talks to.

pub mod news;
pub mod summarizer;
pub mod telegram;
