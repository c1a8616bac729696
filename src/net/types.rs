//! Wire DTOs for the generative-text endpoint.
//!
//! The request body follows the Gemini `generateContent` schema. The response
//! is read as loose JSON because only one nested path matters and every
//! missing link on that path degrades to the same fallback reply.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Serialize;

/// Request body: `{ "contents": [ { "parts": [ { "text": ... } ] } ] }`.
#[derive(Clone, Debug, Serialize)]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
}

#[derive(Clone, Debug, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Clone, Debug, Serialize)]
pub struct Part {
    pub text: String,
}

impl GenerateRequest {
    /// Wrap a single prompt in the nested envelope the endpoint expects.
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: prompt.to_owned() }],
            }],
        }
    }
}

/// Pull `candidates[0].content.parts[0].text` out of a response body.
/// Any missing link yields `None`.
pub fn extract_candidate_text(body: &serde_json::Value) -> Option<&str> {
    body.get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()
}
