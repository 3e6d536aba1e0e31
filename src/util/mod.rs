//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (history, location) from page and
//! component logic to improve reuse and testability.

pub mod history;
pub mod navigation;
