//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` exposes the session to components, `records` holds page-local
//! copies of server collections and `form` drives the create/edit modals.

pub mod auth;
pub mod form;
pub mod records;
