//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the fixed page chrome (navbar, sidebar) while reading
//! shared state from Leptos context providers. Navigation stays client-side
//! so the in-memory stores survive view changes.

pub mod navbar;
pub mod sidebar;
