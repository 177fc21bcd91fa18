//! `hearth-auth` — pure authentication/authorization boundary (zero-trust).
//!
//! This crate is intentionally decoupled from HTTP and storage.

pub mod capabilities;
pub mod error;
pub mod roles;
pub mod token;

pub use capabilities::{Capabilities, capabilities_of};
pub use error::{AccessError, AccessResult};
pub use roles::Role;
pub use token::{IdentityToken, TokenValidationError, validate_token};
