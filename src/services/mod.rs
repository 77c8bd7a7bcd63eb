//! Resource services mapping domain operations onto REST calls.
//!
//! DESIGN
//! ======
//! Each service is a direct pass-through to one [`ApiClient`](crate::net::ApiClient)
//! call. No caching, no optimistic updates; pages resynchronize their own
//! lists after every confirmed mutation.

pub mod auth;
pub mod cars;
pub mod categories;

pub use auth::AuthService;
pub use cars::CarService;
pub use categories::CategoryService;
