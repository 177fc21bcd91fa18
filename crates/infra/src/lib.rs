//! `hearth-infra` — backing-store implementations.
//!
//! In-memory implementations of the core's storage and directory seams,
//! suitable for tests and development. A database-backed deployment swaps
//! these behind the same traits.

pub mod directory;
pub mod session_store;

pub use directory::{InMemoryHouseholdDirectory, InMemoryUserDirectory};
pub use session_store::InMemorySessionStore;
