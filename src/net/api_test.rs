use super::*;

#[test]
fn echo_reply_quotes_the_input() {
    assert_eq!(echo_reply("scan my network"), "Bot: You said: \"scan my network\"");
}

#[test]
fn echo_reply_keeps_empty_input_visible() {
    assert_eq!(echo_reply(""), "Bot: You said: \"\"");
}

#[test]
fn generate_endpoint_carries_the_key_as_query_parameter() {
    let url = generate_endpoint("secret-key");
    assert!(url.starts_with("https://generativelanguage.googleapis.com/"));
    assert!(url.ends_with("generateContent?key=secret-key"));
}

#[test]
fn fallback_replies_are_distinct() {
    assert_ne!(EMPTY_RESPONSE_REPLY, REQUEST_FAILED_REPLY);
}
