//! `hearth-impersonation` — operator impersonation with an audit trail.
//!
//! A platform operator can act as another user for support/debugging. Every
//! session is an append-only audit record; starting, acting, and ending are
//! the only transitions.

pub mod history;
pub mod manager;
pub mod session;
pub mod store;

pub use history::{HistoryEntry, HistoryPage, ImpersonationHistory};
pub use manager::ImpersonationManager;
pub use session::{ImpersonationSession, NewSession};
pub use store::{SessionStore, SessionStoreError, UserDirectory};
