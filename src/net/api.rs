//! The outbound text-generation call for the chat view.
//!
//! Client-side (csr): a real HTTP POST via `gloo-net` to the Gemini
//! `generateContent` endpoint, with the configured key forwarded as a query
//! parameter. Without a configured key, or off-browser, the local echo bot
//! answers instead.
//!
//! ERROR HANDLING
//! ==============
//! No retry, timeout, or streaming. Any fetch/decode failure or a response
//! missing the candidate path collapses to a fixed user-visible string; the
//! caller never sees an error value, only a reply to append.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "csr")]
use super::types::{GenerateRequest, extract_candidate_text};

/// Reply substituted when the endpoint answers without a candidate text.
pub const EMPTY_RESPONSE_REPLY: &str = "No response from Gemini.";

/// Reply substituted when the request itself fails.
pub const REQUEST_FAILED_REPLY: &str = "Error contacting Gemini API.";

/// Build-time API key. A CSR bundle has no runtime environment, so the key is
/// inlined at compile time or absent.
fn api_key() -> Option<&'static str> {
    option_env!("SHERPA_GEMINI_API_KEY")
}

#[cfg(any(test, feature = "csr"))]
fn generate_endpoint(key: &str) -> String {
    format!(
        "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent?key={key}"
    )
}

/// The local bot used when no generation endpoint is configured.
pub fn echo_reply(input: &str) -> String {
    format!("Bot: You said: \"{input}\"")
}

/// Resolve an assistant reply for `prompt`. Always yields a displayable
/// string; failures surface as the fixed fallback replies.
pub async fn generate_reply(prompt: &str) -> String {
    let Some(key) = api_key() else {
        return echo_reply(prompt);
    };

    #[cfg(feature = "csr")]
    {
        let url = generate_endpoint(key);
        let payload = GenerateRequest::from_prompt(prompt);
        let response = match gloo_net::http::Request::post(&url).json(&payload) {
            Ok(request) => request.send().await,
            Err(e) => Err(e),
        };
        match response {
            Ok(resp) => match resp.json::<serde_json::Value>().await {
                Ok(body) => extract_candidate_text(&body)
                    .map_or_else(|| EMPTY_RESPONSE_REPLY.to_owned(), str::to_owned),
                Err(e) => {
                    log::warn!("generate response decode failed: {e}");
                    REQUEST_FAILED_REPLY.to_owned()
                }
            },
            Err(e) => {
                log::warn!("generate request failed: {e}");
                REQUEST_FAILED_REPLY.to_owned()
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        echo_reply(prompt)
    }
}
