#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn current_navigation_state_is_empty_outside_browser() {
    let state = current_navigation_state();
    assert_eq!(state, NavigationState::default());
    assert!(state.required_token().is_none());
}
