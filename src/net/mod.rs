//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `client` is the shared request pipeline, `transport` abstracts the wire,
//! `error` defines the failure taxonomy and `types` the JSON schema.

pub mod client;
pub mod error;
#[cfg(test)]
pub(crate) mod mock;
pub mod transport;
pub mod types;

pub use client::ApiClient;
pub use error::ApiError;
