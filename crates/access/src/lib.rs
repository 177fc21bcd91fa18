//! `hearth-access` — household-scoped access control at the request boundary.
//!
//! Wires token claims, impersonation state, and household status into an
//! explicit per-request [`EffectiveContext`], and enforces the suspension
//! gate on every mutation.

pub mod context;
pub mod gate;
pub mod resolve;
pub mod service;

pub use context::EffectiveContext;
pub use gate::check_write_allowed;
pub use resolve::resolve_household;
pub use service::{AccessControl, ContextError};
