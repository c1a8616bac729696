//! Local UI chrome state.
//!
//! Keeps transient presentation concerns (dark mode) out of domain state so
//! the theme toggle can evolve independently of the stores.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state shared by the navbar and page shells.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
}
