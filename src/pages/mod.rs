//! Route pages. Each page keeps its network flow in a plain async helper so
//! it can be driven without a reactive runtime.

pub mod cars;
pub mod categories;
pub mod dashboard;
pub mod sign_in;
pub mod sign_up;
