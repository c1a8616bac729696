//! Conversation state for the conversational AI view.
//!
//! DESIGN
//! ======
//! Many conversations, one "current" pointer. `start_new` always switches the
//! pointer to the fresh conversation; `append_message` targets whatever is
//! current and refuses (with [`StoreError::NoActiveConversation`]) when
//! nothing is, so a message can never be dropped silently. Conversations are
//! never removed; the list only grows within a session.
//!
//! Identifiers are UUIDv4 strings generated by this module rather than
//! wall-clock values, so rapid successive sends cannot collide.

#[cfg(test)]
#[path = "ai_test.rs"]
mod ai_test;

use serde::{Deserialize, Serialize};

use super::StoreError;
use crate::util::time;

/// Who authored a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

/// A single chat message. Append-only within its conversation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub content: String,
    pub sender: Sender,
    pub timestamp: String,
}

impl ChatMessage {
    /// Build a message with a fresh id and the current wall-clock timestamp.
    pub fn new(content: impl Into<String>, sender: Sender) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            content: content.into(),
            sender,
            timestamp: time::now_iso(),
        }
    }
}

/// A titled, ordered message thread.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub title: String,
    pub messages: Vec<ChatMessage>,
    pub created_at: String,
}

/// Conversation store plus the typing indicator for the in-flight reply.
#[derive(Clone, Debug, Default)]
pub struct AiState {
    pub conversations: Vec<Conversation>,
    /// Id of the conversation currently receiving appended messages.
    pub current: Option<String>,
    /// True while an assistant reply is being awaited.
    pub loading: bool,
}

impl AiState {
    /// Create an empty conversation, append it to the list, and make it
    /// current. Returns the new conversation's id. An empty or missing title
    /// falls back to "New Conversation".
    pub fn start_new(&mut self, title: Option<&str>) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        let title = match title {
            Some(t) if !t.trim().is_empty() => t.trim().to_owned(),
            _ => "New Conversation".to_owned(),
        };
        self.conversations.push(Conversation {
            id: id.clone(),
            title,
            messages: Vec::new(),
            created_at: time::now_iso(),
        });
        self.current = Some(id.clone());
        id
    }

    /// Switch the current pointer to an existing conversation.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ConversationNotFound`] (pointer unchanged) when
    /// the id does not name a known conversation.
    pub fn select(&mut self, id: &str) -> Result<(), StoreError> {
        if self.conversations.iter().any(|c| c.id == id) {
            self.current = Some(id.to_owned());
            Ok(())
        } else {
            Err(StoreError::ConversationNotFound(id.to_owned()))
        }
    }

    /// Append a message to the current conversation.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NoActiveConversation`] (store unchanged) when no
    /// conversation is current.
    pub fn append_message(&mut self, message: ChatMessage) -> Result<(), StoreError> {
        let current = self.current.as_deref().ok_or(StoreError::NoActiveConversation)?;
        let conversation = self
            .conversations
            .iter_mut()
            .find(|c| c.id == current)
            .ok_or(StoreError::NoActiveConversation)?;
        conversation.messages.push(message);
        Ok(())
    }

    /// The conversation currently receiving messages, if any.
    pub fn current(&self) -> Option<&Conversation> {
        let current = self.current.as_deref()?;
        self.conversations.iter().find(|c| c.id == current)
    }
}
