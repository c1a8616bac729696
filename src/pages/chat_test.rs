use super::*;

// =============================================================
// user_message_content
// =============================================================

#[test]
fn typed_text_wins_over_the_attachment_name() {
    assert_eq!(user_message_content("analyze this", Some("report.txt")), "analyze this");
}

#[test]
fn attachment_name_stands_in_for_empty_input() {
    assert_eq!(user_message_content("   ", Some("report.txt")), "report.txt");
}

#[test]
fn typed_text_is_trimmed() {
    assert_eq!(user_message_content("  hi  ", None), "hi");
}

#[test]
fn nothing_provided_yields_empty_content() {
    assert_eq!(user_message_content("", None), "");
}

// =============================================================
// next_chat_title
// =============================================================

#[test]
fn next_chat_title_counts_from_the_existing_list() {
    assert_eq!(next_chat_title(0), "Chat 1");
    assert_eq!(next_chat_title(3), "Chat 4");
}

// =============================================================
// render_markdown_html
// =============================================================

#[test]
fn markdown_renders_basic_formatting() {
    let out = render_markdown_html("**bold** and `code`");
    assert!(out.contains("<strong>bold</strong>"));
    assert!(out.contains("<code>code</code>"));
}

#[test]
fn raw_html_in_model_output_is_dropped() {
    let out = render_markdown_html("before <script>alert(1)</script> after");
    assert!(!out.contains("<script>"));
    assert!(out.contains("before"));
    assert!(out.contains("after"));
}

// =============================================================
// Send-path store semantics
// =============================================================

#[test]
fn optimistic_user_message_then_reply_keeps_order() {
    let mut state = AiState::default();
    state.start_new(Some("Security Analysis Chat"));
    state
        .append_message(ChatMessage::new(user_message_content("hello", None), Sender::User))
        .unwrap();
    state.loading = true;

    // Reply resolves later; sequential await guarantees this ordering.
    state
        .append_message(ChatMessage::new(crate::net::api::echo_reply("hello"), Sender::Ai))
        .unwrap();
    state.loading = false;

    let senders: Vec<Sender> = state.current().unwrap().messages.iter().map(|m| m.sender).collect();
    assert_eq!(senders, vec![Sender::User, Sender::Ai]);
}
