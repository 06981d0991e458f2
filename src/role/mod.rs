//! Roles, their URL segments and per-role page expectations.

pub mod types;

pub use types::*;
