//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`checkpoint` form, `flash` notifications) so
//! components depend on small focused models with plain-method transitions.

pub mod checkpoint;
pub mod flash;
