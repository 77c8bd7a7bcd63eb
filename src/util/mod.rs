//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep routing, validation, table math and browser clock
//! access out of page and component code so they stay testable.

pub mod auth;
pub mod clock;
pub mod table;
pub mod validation;
