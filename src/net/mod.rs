//! Networking modules for the outbound generate call.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the single HTTP request this app makes (the chat
//! text-generation call) and `types` defines its wire schema. Everything
//! else in the app is local state.

pub mod api;
pub mod types;
