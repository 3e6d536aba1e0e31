//! Flash notification store shared by auth screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one `RwSignal<FlashState>` through context for the lifetime
//! of the shell. Screens never touch it directly when reporting failures; they
//! receive it as an [`ErrorSink`] so the failure path can be tested with a
//! recorder.

#[cfg(test)]
#[path = "flash_test.rs"]
mod flash_test;

use leptos::prelude::*;

use crate::net::error::ApiError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Info,
    Warning,
    #[default]
    Error,
}

impl FlashKind {
    /// CSS modifier used when rendering.
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlashMessage {
    /// Scope the message belongs to; `None` is the global scope.
    pub key: Option<String>,
    pub kind: FlashKind,
    pub title: Option<String>,
    pub message: String,
}

/// Ordered list of pending flash messages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlashState {
    pub messages: Vec<FlashMessage>,
}

impl FlashState {
    pub fn add(&mut self, message: FlashMessage) {
        self.messages.push(message);
    }

    /// Drop every message in the given scope.
    pub fn clear(&mut self, key: Option<&str>) {
        self.messages.retain(|m| m.key.as_deref() != key);
    }

    /// Replace the scope's messages with a single error describing `error`.
    pub fn clear_and_add_http_error(&mut self, key: Option<&str>, error: &ApiError) {
        self.clear(key);
        self.add(FlashMessage {
            key: key.map(str::to_owned),
            kind: FlashKind::Error,
            title: Some("Error".to_owned()),
            message: error.human_message(),
        });
    }

    pub fn for_key(&self, key: Option<&str>) -> Vec<FlashMessage> {
        self.messages
            .iter()
            .filter(|m| m.key.as_deref() == key)
            .cloned()
            .collect()
    }
}

/// Destination for user-visible failure reports.
pub trait ErrorSink {
    fn report_error(&self, error: &ApiError);
}

impl ErrorSink for RwSignal<FlashState> {
    fn report_error(&self, error: &ApiError) {
        self.update(|state| state.clear_and_add_http_error(None, error));
    }
}
