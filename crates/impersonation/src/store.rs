//! Storage and directory seams for the impersonation core.
//!
//! Both traits are deliberately small: the core is single-round-trip reads
//! and writes, and the backing store owns the consistency guarantees.

use chrono::{DateTime, Utc};
use thiserror::Error;

use hearth_auth::Role;
use hearth_core::{HouseholdId, UserId};

use crate::session::{ImpersonationSession, NewSession};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionStoreError {
    /// The at-most-one-active-session-per-operator constraint was hit.
    #[error("operator {0} already has an active session")]
    ActiveSessionExists(UserId),

    /// No active session for the operator.
    #[error("operator {0} has no active session")]
    NoActiveSession(UserId),
}

/// Persistence accessor for impersonation session records.
///
/// Implementations must make `insert_active` atomic: two concurrent inserts
/// for the same operator must not both succeed (uniqueness over
/// `(operator_id) WHERE ended_at IS NULL`, or an equivalent single critical
/// section). An application-level read-then-write check is not enough.
pub trait SessionStore: Send + Sync {
    /// Atomically insert a new active session, assigning `id` and `seq`.
    fn insert_active(
        &self,
        session: NewSession,
    ) -> Result<ImpersonationSession, SessionStoreError>;

    /// The operator's active session, if any.
    fn find_active(&self, operator_id: UserId) -> Option<ImpersonationSession>;

    /// Atomically increment the active session's action counter.
    ///
    /// Returns `false` (rather than an error) when no session is active:
    /// callers treat this as a no-op.
    fn record_action(&self, operator_id: UserId) -> bool;

    /// Close the operator's active session.
    fn end_active(
        &self,
        operator_id: UserId,
        ended_at: DateTime<Utc>,
    ) -> Result<ImpersonationSession, SessionStoreError>;

    /// Page of sessions ordered by `seq` descending (most recent first),
    /// together with the total record count.
    fn list_desc(&self, limit: usize, offset: usize) -> (Vec<ImpersonationSession>, usize);
}

impl<S> SessionStore for std::sync::Arc<S>
where
    S: SessionStore + ?Sized,
{
    fn insert_active(
        &self,
        session: NewSession,
    ) -> Result<ImpersonationSession, SessionStoreError> {
        (**self).insert_active(session)
    }

    fn find_active(&self, operator_id: UserId) -> Option<ImpersonationSession> {
        (**self).find_active(operator_id)
    }

    fn record_action(&self, operator_id: UserId) -> bool {
        (**self).record_action(operator_id)
    }

    fn end_active(
        &self,
        operator_id: UserId,
        ended_at: DateTime<Utc>,
    ) -> Result<ImpersonationSession, SessionStoreError> {
        (**self).end_active(operator_id, ended_at)
    }

    fn list_desc(&self, limit: usize, offset: usize) -> (Vec<ImpersonationSession>, usize) {
        (**self).list_desc(limit, offset)
    }
}

/// Read-only user lookup consumed when starting an impersonation.
pub trait UserDirectory: Send + Sync {
    fn exists(&self, user_id: UserId) -> bool;
    fn role_of(&self, user_id: UserId) -> Option<Role>;
    /// Current household binding of the user (snapshot source).
    fn household_of(&self, user_id: UserId) -> Option<HouseholdId>;
}

impl<D> UserDirectory for std::sync::Arc<D>
where
    D: UserDirectory + ?Sized,
{
    fn exists(&self, user_id: UserId) -> bool {
        (**self).exists(user_id)
    }

    fn role_of(&self, user_id: UserId) -> Option<Role> {
        (**self).role_of(user_id)
    }

    fn household_of(&self, user_id: UserId) -> Option<HouseholdId> {
        (**self).household_of(user_id)
    }
}
