//! Per-chat session storage.
//!
//! Maps a chat identifier to the currently selected topic. Owned by the
//! single bot task, so there is no locking; lifecycle is explicit — the
//! entry command creates a session, the terminal transition clears it.

use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct SessionStore {
    topics: HashMap<i64, String>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, chat_id: i64) -> Option<&str> {
        self.topics.get(&chat_id).map(String::as_str)
    }

    /// At most one topic per session; a re-selection overwrites.
    pub fn set(&mut self, chat_id: i64, topic: String) {
        self.topics.insert(chat_id, topic);
    }

    pub fn clear(&mut self, chat_id: i64) {
        self.topics.remove(&chat_id);
    }
}
