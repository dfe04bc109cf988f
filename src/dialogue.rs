//! Conversation state machine
//!
//! Pure transition logic: `(state, input, stored topic) -> Outcome`. The
//! machine never performs I/O; it returns an ordered list of effects
//! (replies, topic writes, a fetch request) that the runtime executes
//! against the transport. This keeps the whole conversation flow testable
//! without a live bot.

/// The three non-terminal stages of a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatState {
    /// Waiting for the top-level region choice ("India" or "World").
    SelectMain,
    /// Waiting for an Indian state name.
    SelectState,
    /// Waiting for an article count.
    SelectCount,
}

/// A side effect requested by a transition, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send one message, optionally with a reply keyboard given as rows of
    /// button labels.
    Reply {
        text: String,
        keyboard: Option<Vec<Vec<String>>>,
    },
    /// Store the session topic.
    SetTopic(String),
    /// Fetch and stream `count` articles for `topic`.
    Fetch { topic: String, count: usize },
}

/// Result of a transition: the next state (`None` means terminal) plus the
/// effects to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub next: Option<ChatState>,
    pub effects: Vec<Effect>,
}

const REGION_ROWS: &[&[&str]] = &[&["India 🌏"], &["World 🌐"]];

const INDIAN_STATE_ROWS: &[&[&str]] = &[
    &["Andhra Pradesh", "Tamil Nadu"],
    &["Karnataka", "Telangana"],
    &["Maharashtra", "Kerala"],
    &["Uttar Pradesh", "Delhi"],
    &["West Bengal", "Punjab"],
];

/// Topic used when the count step finds no stored topic. Intentional
/// permissive fallback, not an error path.
pub const DEFAULT_TOPIC: &str = "India";

fn rows_to_keyboard(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.iter().map(|label| (*label).to_string()).collect())
        .collect()
}

/// Entry transition for `/start`: present the region keyboard.
#[must_use]
pub fn start() -> Outcome {
    Outcome {
        next: Some(ChatState::SelectMain),
        effects: vec![Effect::Reply {
            text: "🌍 Choose your region:".to_string(),
            keyboard: Some(rows_to_keyboard(REGION_ROWS)),
        }],
    }
}

/// Fallback transition for `/cancel` from any non-terminal state.
#[must_use]
pub fn cancel() -> Outcome {
    Outcome {
        next: None,
        effects: vec![Effect::Reply {
            text: "❌ Cancelled.".to_string(),
            keyboard: None,
        }],
    }
}

/// Advance the conversation on a free-text message. `topic` is the
/// session's currently stored topic, if any; it is only read in
/// `SelectCount`.
#[must_use]
pub fn step(state: ChatState, text: &str, topic: Option<&str>) -> Outcome {
    match state {
        ChatState::SelectMain => select_main(text),
        ChatState::SelectState => select_state(text),
        ChatState::SelectCount => select_count(text, topic),
    }
}

fn select_main(text: &str) -> Outcome {
    if text.to_lowercase().contains("india") {
        Outcome {
            next: Some(ChatState::SelectState),
            effects: vec![
                Effect::SetTopic("India".to_string()),
                Effect::Reply {
                    text: "📍 Choose a state:".to_string(),
                    keyboard: Some(rows_to_keyboard(INDIAN_STATE_ROWS)),
                },
            ],
        }
    } else {
        Outcome {
            next: Some(ChatState::SelectCount),
            effects: vec![
                Effect::SetTopic("World".to_string()),
                Effect::Reply {
                    text: "🌐 How many articles do you want? (e.g., 5)".to_string(),
                    keyboard: None,
                },
            ],
        }
    }
}

// Any text is accepted as a topic here, keyboard option or not. Strict
// whitelisting is an explicit non-goal.
fn select_state(text: &str) -> Outcome {
    Outcome {
        next: Some(ChatState::SelectCount),
        effects: vec![
            Effect::SetTopic(text.to_string()),
            Effect::Reply {
                text: format!("📥 How many articles for {}?", text),
                keyboard: None,
            },
        ],
    }
}

fn select_count(text: &str, topic: Option<&str>) -> Outcome {
    let count: usize = match text.trim().parse() {
        Ok(count) => count,
        Err(_) => {
            return Outcome {
                next: Some(ChatState::SelectCount),
                effects: vec![Effect::Reply {
                    text: "❗ Please enter a valid number.".to_string(),
                    keyboard: None,
                }],
            };
        }
    };

    let topic = topic.unwrap_or(DEFAULT_TOPIC).to_string();
    Outcome {
        next: None,
        effects: vec![
            Effect::Reply {
                text: format!("🕵️ Fetching {} latest news for: {}...", count, topic),
                keyboard: None,
            },
            Effect::Fetch { topic, count },
        ],
    }
}
