//! Reusable UI components shared by the route pages.

pub mod data_table;
pub mod form_field;
pub mod modal;
pub mod navbar;
pub mod require_auth;
