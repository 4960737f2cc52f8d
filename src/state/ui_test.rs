use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_is_desktop_closed_menu() {
    let state = UiState::default();
    assert!(!state.menu_open);
    assert!(!state.install_available);
    assert!(state.online);
    assert!(!state.is_mobile(&PortalConfig::default()));
}

// =============================================================
// Responsive menu
// =============================================================

#[test]
fn narrow_viewport_is_mobile() {
    let config = PortalConfig::default();
    let mut state = UiState::default();
    state.set_viewport_width(768.0, &config);
    assert!(state.is_mobile(&config));
}

#[test]
fn toggle_menu_opens_and_closes() {
    let mut state = UiState::default();
    state.toggle_menu();
    assert!(state.menu_open);
    state.toggle_menu();
    assert!(!state.menu_open);
}

#[test]
fn close_menu_is_idempotent() {
    let mut state = UiState::default();
    state.close_menu();
    assert!(!state.menu_open);
    state.toggle_menu();
    state.close_menu();
    state.close_menu();
    assert!(!state.menu_open);
}

#[test]
fn growing_past_breakpoint_closes_menu() {
    let config = PortalConfig::default();
    let mut state = UiState::default();
    state.set_viewport_width(400.0, &config);
    state.toggle_menu();
    state.set_viewport_width(500.0, &config);
    assert!(state.menu_open);
    state.set_viewport_width(1200.0, &config);
    assert!(!state.menu_open);
}
