use super::*;

// =============================================================
// start_new
// =============================================================

#[test]
fn start_new_creates_an_empty_current_conversation() {
    let mut state = AiState::default();
    let id = state.start_new(Some("T"));

    assert_eq!(state.conversations.len(), 1);
    assert_eq!(state.current.as_deref(), Some(id.as_str()));
    let current = state.current().unwrap();
    assert_eq!(current.title, "T");
    assert!(current.messages.is_empty());
}

#[test]
fn start_new_appears_in_the_list_exactly_once() {
    let mut state = AiState::default();
    let id = state.start_new(Some("T"));
    let occurrences = state.conversations.iter().filter(|c| c.id == id).count();
    assert_eq!(occurrences, 1);
}

#[test]
fn start_new_defaults_blank_titles() {
    let mut state = AiState::default();
    state.start_new(None);
    state.start_new(Some("   "));
    assert!(state.conversations.iter().all(|c| c.title == "New Conversation"));
}

#[test]
fn start_new_switches_current_from_any_state() {
    let mut state = AiState::default();
    let first = state.start_new(Some("First"));
    let second = state.start_new(Some("Second"));
    assert_ne!(first, second);
    assert_eq!(state.current.as_deref(), Some(second.as_str()));
    assert_eq!(state.conversations.len(), 2);
}

// =============================================================
// append_message
// =============================================================

#[test]
fn append_without_current_is_rejected_and_changes_nothing() {
    let mut state = AiState::default();
    let result = state.append_message(ChatMessage::new("hi", Sender::User));
    assert_eq!(result, Err(StoreError::NoActiveConversation));
    assert!(state.conversations.is_empty());
    assert!(state.current.is_none());
}

#[test]
fn append_targets_the_current_conversation() {
    let mut state = AiState::default();
    let first = state.start_new(Some("First"));
    state.start_new(Some("Second"));
    state.select(&first).unwrap();

    state.append_message(ChatMessage::new("hello", Sender::User)).unwrap();

    let first_conv = state.conversations.iter().find(|c| c.id == first).unwrap();
    assert_eq!(first_conv.messages.len(), 1);
    let second_conv = state.conversations.iter().find(|c| c.id != first).unwrap();
    assert!(second_conv.messages.is_empty());
}

#[test]
fn messages_append_in_order() {
    let mut state = AiState::default();
    state.start_new(Some("T"));
    state.append_message(ChatMessage::new("one", Sender::User)).unwrap();
    state.append_message(ChatMessage::new("two", Sender::Ai)).unwrap();

    let contents: Vec<&str> = state.current().unwrap().messages.iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents, vec!["one", "two"]);
}

#[test]
fn first_conversation_first_message() {
    let mut state = AiState::default();
    state.start_new(Some("T"));
    state.append_message(ChatMessage::new("hi", Sender::User)).unwrap();

    assert_eq!(state.conversations.len(), 1);
    assert_eq!(state.conversations[0].messages.len(), 1);
    assert_eq!(state.conversations[0].messages[0].content, "hi");
}

// =============================================================
// select
// =============================================================

#[test]
fn select_unknown_id_is_an_error_and_keeps_current() {
    let mut state = AiState::default();
    let id = state.start_new(Some("T"));
    let result = state.select("missing");
    assert_eq!(result, Err(StoreError::ConversationNotFound("missing".to_owned())));
    assert_eq!(state.current.as_deref(), Some(id.as_str()));
}

#[test]
fn message_ids_are_unique() {
    let a = ChatMessage::new("x", Sender::User);
    let b = ChatMessage::new("x", Sender::User);
    assert_ne!(a.id, b.id);
}

#[test]
fn sender_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Sender::User).unwrap(), "\"user\"");
    assert_eq!(serde_json::to_string(&Sender::Ai).unwrap(), "\"ai\"");
}
