//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the auth card chrome and form controls; screen-specific
//! orchestration stays in `pages`.

pub mod field;
pub mod flash_messages;
pub mod login_form_container;
pub mod submit_button;
