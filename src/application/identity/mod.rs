//! Identity module: registration, login and the current user
//!
//! Contains the `IdentityService`. Token signing and password hashing live
//! in `infrastructure::crypto`.

pub mod service;

pub use service::{AuthResult, IdentityService};
