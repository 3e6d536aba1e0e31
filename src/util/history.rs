//! Read the state attached to the current history entry.
//!
//! The login step navigates here with `{ token }` as router state, which the
//! router stores on `window.history.state`. Outside the browser there is no
//! history, so the state is always empty.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use crate::state::checkpoint::NavigationState;

/// Navigation state of the current history entry.
pub fn current_navigation_state() -> NavigationState {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return NavigationState::default();
        };
        let Ok(history) = window.history() else {
            return NavigationState::default();
        };
        history
            .state()
            .map(|state| navigation_state_from_js(&state))
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        NavigationState::default()
    }
}

#[cfg(feature = "hydrate")]
fn navigation_state_from_js(state: &wasm_bindgen::JsValue) -> NavigationState {
    if !state.is_object() {
        return NavigationState::default();
    }
    let token = js_sys::Reflect::get(state, &wasm_bindgen::JsValue::from_str("token"))
        .ok()
        .and_then(|v| v.as_string());
    NavigationState { token }
}
