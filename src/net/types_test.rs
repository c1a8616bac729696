use super::*;

#[test]
fn request_envelope_matches_the_wire_shape() {
    let request = GenerateRequest::from_prompt("hello");
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "contents": [ { "parts": [ { "text": "hello" } ] } ]
        })
    );
}

#[test]
fn extract_candidate_text_reads_the_nested_path() {
    let body = serde_json::json!({
        "candidates": [
            { "content": { "parts": [ { "text": "reply" } ] } }
        ]
    });
    assert_eq!(extract_candidate_text(&body), Some("reply"));
}

#[test]
fn extract_candidate_text_tolerates_missing_links() {
    for body in [
        serde_json::json!({}),
        serde_json::json!({ "candidates": [] }),
        serde_json::json!({ "candidates": [ {} ] }),
        serde_json::json!({ "candidates": [ { "content": {} } ] }),
        serde_json::json!({ "candidates": [ { "content": { "parts": [] } } ] }),
        serde_json::json!({ "candidates": [ { "content": { "parts": [ { "text": 7 } ] } } ] }),
    ] {
        assert_eq!(extract_candidate_text(&body), None, "body: {body}");
    }
}

#[test]
fn extract_candidate_text_uses_the_first_candidate() {
    let body = serde_json::json!({
        "candidates": [
            { "content": { "parts": [ { "text": "first" } ] } },
            { "content": { "parts": [ { "text": "second" } ] } }
        ]
    });
    assert_eq!(extract_candidate_text(&body), Some("first"));
}
