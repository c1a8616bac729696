//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `vulnerabilities`, `projects`, `ai`,
//! `settings`) so individual pages can depend on small focused models. Each
//! store is a plain struct with explicit transition methods; the composition
//! root wraps one instance of each in an `RwSignal` context. No store reads
//! another store's data.
//!
//! ERROR HANDLING
//! ==============
//! Transitions that can miss their target (`update` by id, `append_message`
//! with no current conversation, `select` of an unknown conversation) return
//! `Result<_, StoreError>` and leave the store untouched on failure. Callers
//! decide whether to surface the miss; the stores never silently swallow it.

pub mod ai;
pub mod auth;
pub mod projects;
pub mod research;
pub mod settings;
pub mod ui;
pub mod vulnerabilities;

use thiserror::Error;

/// A store transition that could not be applied. The originating store is
/// unchanged whenever one of these is returned.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// `ProjectsState::update` found no project with the given id.
    #[error("no project with id {0}")]
    ProjectNotFound(u64),
    /// `AiState::select` found no conversation with the given id.
    #[error("no conversation with id {0}")]
    ConversationNotFound(String),
    /// `AiState::append_message` was called while no conversation is current.
    #[error("no conversation is currently active")]
    NoActiveConversation,
}
