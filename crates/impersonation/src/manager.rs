use chrono::{DateTime, Utc};

use hearth_auth::{AccessError, AccessResult, Role};
use hearth_core::UserId;

use crate::session::{ImpersonationSession, NewSession};
use crate::store::{SessionStore, SessionStoreError, UserDirectory};

/// Impersonation session state machine.
///
/// Per operator: `NONE → ACTIVE → ENDED`. `ENDED` is terminal — a new
/// `start` creates a fresh session, it never reopens an ended one.
pub struct ImpersonationManager<S, U> {
    store: S,
    users: U,
}

impl<S, U> ImpersonationManager<S, U>
where
    S: SessionStore,
    U: UserDirectory,
{
    pub fn new(store: S, users: U) -> Self {
        Self { store, users }
    }

    /// Start impersonating `target_user_id` as `operator_id`.
    ///
    /// Preconditions, each with its own error:
    /// - the target must not be the operator (`SelfImpersonation`);
    /// - the operator must be a platform operator (`NotAuthorized`);
    /// - the target must exist (`TargetNotFound`);
    /// - no session may already be active for the operator
    ///   (`AlreadyImpersonating` — enforced atomically by the store).
    ///
    /// On success the target's *current* household is snapshotted into the
    /// session so the audit record stays stable even if the target later
    /// moves households.
    pub fn start(
        &self,
        operator_id: UserId,
        target_user_id: UserId,
        now: DateTime<Utc>,
    ) -> AccessResult<ImpersonationSession> {
        if target_user_id == operator_id {
            return Err(AccessError::SelfImpersonation);
        }
        if self.users.role_of(operator_id) != Some(Role::SuperAdmin) {
            return Err(AccessError::NotAuthorized);
        }
        if !self.users.exists(target_user_id) {
            return Err(AccessError::TargetNotFound);
        }
        let target_household_id = self
            .users
            .household_of(target_user_id)
            .ok_or(AccessError::MissingTenant)?;

        let session = self
            .store
            .insert_active(NewSession {
                operator_id,
                target_user_id,
                target_household_id,
                started_at: now,
            })
            .map_err(|e| match e {
                SessionStoreError::ActiveSessionExists(_) => AccessError::AlreadyImpersonating,
                SessionStoreError::NoActiveSession(_) => AccessError::NoActiveSession,
            })?;

        tracing::info!(
            session_id = %session.id,
            operator_id = %operator_id,
            target_user_id = %target_user_id,
            target_household_id = %session.target_household_id,
            "impersonation started"
        );

        Ok(session)
    }

    /// Record one mutating action performed under impersonation.
    ///
    /// Best-effort audit: a no-op when no session is active, and never an
    /// error — this must not break the request it is attached to. Returns
    /// whether a counter was actually incremented.
    pub fn record_action(&self, operator_id: UserId) -> bool {
        self.store.record_action(operator_id)
    }

    /// End the operator's active session, making it terminal.
    ///
    /// A second `end` in rapid succession observes `NoActiveSession` rather
    /// than double-closing.
    pub fn end(&self, operator_id: UserId, now: DateTime<Utc>) -> AccessResult<ImpersonationSession> {
        let session = self.store.end_active(operator_id, now).map_err(|e| match e {
            SessionStoreError::NoActiveSession(_) => AccessError::NoActiveSession,
            SessionStoreError::ActiveSessionExists(_) => AccessError::AlreadyImpersonating,
        })?;

        tracing::info!(
            session_id = %session.id,
            operator_id = %operator_id,
            actions_count = session.actions_count,
            duration_minutes = ?session.duration_minutes(),
            "impersonation ended"
        );

        Ok(session)
    }

    /// The operator's active session, if any (consulted by the household
    /// context resolver on every request).
    pub fn active_session(&self, operator_id: UserId) -> Option<ImpersonationSession> {
        self.store.find_active(operator_id)
    }
}
