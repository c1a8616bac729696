use super::*;

#[test]
fn default_is_light_mode() {
    assert!(!UiState::default().dark_mode);
}
