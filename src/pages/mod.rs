//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (signals, dialogs, store
//! dispatch) and delegates shared chrome to `components`. Interaction logic
//! that does not need the DOM lives in free functions with sibling tests.

pub mod chat;
pub mod dashboard;
pub mod feed;
pub mod landing;
pub mod login;
pub mod projects;
pub mod research;
pub mod settings;

/// Uniform notice for the product's placeholder actions. These stubs perform
/// no state change.
pub(crate) const NOT_IMPLEMENTED_NOTICE: &str = "This feature isn't implemented yet.";
