use newsmood::dialogue::{self, ChatState, DEFAULT_TOPIC, Effect};

// Pull the single Reply text out of an effect list, panicking if the
// effect at `idx` is not a Reply.
fn reply_text(effects: &[Effect], idx: usize) -> &str {
    match &effects[idx] {
        Effect::Reply { text, .. } => text,
        other => panic!("expected Reply at index {idx}, got {other:?}"),
    }
}

#[test]
fn start_presents_region_keyboard() {
    let outcome = dialogue::start();

    assert_eq!(outcome.next, Some(ChatState::SelectMain));
    assert_eq!(outcome.effects.len(), 1);
    match &outcome.effects[0] {
        Effect::Reply { text, keyboard } => {
            assert!(text.contains("Choose your region"));
            let rows = keyboard.as_ref().expect("region keyboard expected");
            assert_eq!(rows.len(), 2);
            assert_eq!(rows[0], vec!["India 🌏".to_string()]);
            assert_eq!(rows[1], vec!["World 🌐".to_string()]);
        }
        other => panic!("expected Reply, got {other:?}"),
    }
}

#[test]
fn india_input_moves_to_state_selection() {
    let outcome = dialogue::step(ChatState::SelectMain, "India 🌏", None);

    assert_eq!(outcome.next, Some(ChatState::SelectState));
    assert_eq!(outcome.effects[0], Effect::SetTopic("India".to_string()));
    match &outcome.effects[1] {
        Effect::Reply { keyboard, .. } => {
            let rows = keyboard.as_ref().expect("state keyboard expected");
            // Ten states in five rows of two.
            assert_eq!(rows.len(), 5);
            assert!(rows.iter().all(|row| row.len() == 2));
            assert!(rows.iter().flatten().any(|label| label == "Tamil Nadu"));
        }
        other => panic!("expected Reply, got {other:?}"),
    }
}

#[test]
fn india_match_is_case_insensitive_substring() {
    let outcome = dialogue::step(ChatState::SelectMain, "give me INDIA news", None);

    assert_eq!(outcome.next, Some(ChatState::SelectState));
    assert_eq!(outcome.effects[0], Effect::SetTopic("India".to_string()));
}

#[test]
fn other_input_selects_world() {
    let outcome = dialogue::step(ChatState::SelectMain, "World 🌐", None);

    assert_eq!(outcome.next, Some(ChatState::SelectCount));
    assert_eq!(outcome.effects[0], Effect::SetTopic("World".to_string()));
    assert!(reply_text(&outcome.effects, 1).contains("How many articles"));

    // Any non-India text goes the same way, not just the keyboard label.
    let outcome = dialogue::step(ChatState::SelectMain, "whatever", None);
    assert_eq!(outcome.next, Some(ChatState::SelectCount));
    assert_eq!(outcome.effects[0], Effect::SetTopic("World".to_string()));
}

#[test]
fn state_text_is_accepted_verbatim() {
    let outcome = dialogue::step(ChatState::SelectState, "Tamil Nadu", Some("India"));

    assert_eq!(outcome.next, Some(ChatState::SelectCount));
    assert_eq!(outcome.effects[0], Effect::SetTopic("Tamil Nadu".to_string()));
    assert!(reply_text(&outcome.effects, 1).contains("Tamil Nadu"));

    // No whitelist: nonsense is stored as-is.
    let outcome = dialogue::step(ChatState::SelectState, "Narnia", Some("India"));
    assert_eq!(outcome.effects[0], Effect::SetTopic("Narnia".to_string()));
}

#[test]
fn non_numeric_count_reprompts_in_place() {
    for input in ["five", "", "3.5", "-2"] {
        let outcome = dialogue::step(ChatState::SelectCount, input, Some("World"));

        assert_eq!(outcome.next, Some(ChatState::SelectCount), "input {input:?}");
        assert_eq!(outcome.effects.len(), 1, "input {input:?}");
        assert!(reply_text(&outcome.effects, 0).contains("valid number"));
    }
}

#[test]
fn numeric_count_triggers_fetch_and_ends() {
    let outcome = dialogue::step(ChatState::SelectCount, "3", Some("Tamil Nadu"));

    assert_eq!(outcome.next, None);
    assert!(reply_text(&outcome.effects, 0).contains("Fetching 3"));
    assert!(reply_text(&outcome.effects, 0).contains("Tamil Nadu"));
    assert_eq!(
        outcome.effects[1],
        Effect::Fetch {
            topic: "Tamil Nadu".to_string(),
            count: 3,
        }
    );
}

#[test]
fn zero_count_is_valid() {
    let outcome = dialogue::step(ChatState::SelectCount, "0", Some("World"));

    assert_eq!(outcome.next, None);
    assert_eq!(
        outcome.effects[1],
        Effect::Fetch {
            topic: "World".to_string(),
            count: 0,
        }
    );
}

#[test]
fn missing_topic_falls_back_to_india() {
    let outcome = dialogue::step(ChatState::SelectCount, "2", None);

    match &outcome.effects[1] {
        Effect::Fetch { topic, count } => {
            assert_eq!(topic, DEFAULT_TOPIC);
            assert_eq!(topic, "India");
            assert_eq!(*count, 2);
        }
        other => panic!("expected Fetch, got {other:?}"),
    }
}

#[test]
fn cancel_ends_without_fetch() {
    let outcome = dialogue::cancel();

    assert_eq!(outcome.next, None);
    assert_eq!(outcome.effects.len(), 1);
    assert!(reply_text(&outcome.effects, 0).contains("Cancelled"));
    assert!(
        !outcome
            .effects
            .iter()
            .any(|e| matches!(e, Effect::Fetch { .. }))
    );
}

// Full happy path: /start -> "India 🌏" -> "Tamil Nadu" -> "3", tracking
// the stored topic the way the runtime would.
#[test]
fn full_india_state_scenario() {
    fn apply(outcome: &dialogue::Outcome, topic: &mut Option<String>) {
        for effect in &outcome.effects {
            if let Effect::SetTopic(t) = effect {
                *topic = Some(t.clone());
            }
        }
    }

    let mut topic: Option<String> = None;

    let outcome = dialogue::start();
    apply(&outcome, &mut topic);
    let state = outcome.next.unwrap();

    let outcome = dialogue::step(state, "India 🌏", topic.as_deref());
    apply(&outcome, &mut topic);
    assert_eq!(topic.as_deref(), Some("India"));
    let state = outcome.next.unwrap();

    let outcome = dialogue::step(state, "Tamil Nadu", topic.as_deref());
    apply(&outcome, &mut topic);
    assert_eq!(topic.as_deref(), Some("Tamil Nadu"));
    let state = outcome.next.unwrap();

    let outcome = dialogue::step(state, "3", topic.as_deref());
    assert_eq!(outcome.next, None);
    assert_eq!(
        outcome.effects[1],
        Effect::Fetch {
            topic: "Tamil Nadu".to_string(),
            count: 3,
        }
    );
}
