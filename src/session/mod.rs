//! Client-side session layer: token persistence, claim decoding and the
//! authentication state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! Claims decoded here are advisory. They drive navigation and route gating
//! only; the server remains the authority for every access decision.

pub mod auth_store;
pub mod claims;
pub mod token_store;

pub use auth_store::{AuthStore, Session, SubscriptionId};
pub use claims::{Claims, DecodeError, decode, is_expired};
pub use token_store::{MemoryTokenStore, TokenStore};
