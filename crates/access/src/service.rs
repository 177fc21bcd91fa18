//! Request-boundary facade over the access-control core.
//!
//! Controllers call this before any domain logic runs; its outcome (a
//! context, or a typed error) decides whether the request proceeds. Domain
//! modules never call the suspension gate themselves — [`AccessControl::begin_mutation`]
//! is the single choke point every mutation entry point goes through, so a
//! module cannot forget the check.

use chrono::{DateTime, Utc};
use thiserror::Error;

use hearth_auth::{
    AccessResult, IdentityToken, Role, TokenValidationError, validate_token,
};
use hearth_core::UserId;
use hearth_households::{HouseholdDirectory, HouseholdStatus};
use hearth_impersonation::{
    HistoryPage, ImpersonationHistory, ImpersonationManager, ImpersonationSession, SessionStore,
    UserDirectory,
};

use crate::context::EffectiveContext;
use crate::gate::check_write_allowed;
use crate::resolve::resolve_household;

/// Failure to derive a request context.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContextError {
    #[error(transparent)]
    InvalidToken(#[from] TokenValidationError),

    #[error(transparent)]
    Access(#[from] hearth_auth::AccessError),
}

/// Access-control service wired over the backing store and directories.
pub struct AccessControl<S, U, H> {
    manager: ImpersonationManager<S, U>,
    history: ImpersonationHistory<S>,
    households: H,
}

impl<S, U, H> AccessControl<S, U, H>
where
    S: SessionStore + Clone,
    U: UserDirectory,
    H: HouseholdDirectory,
{
    pub fn new(store: S, users: U, households: H) -> Self {
        Self {
            manager: ImpersonationManager::new(store.clone(), users),
            history: ImpersonationHistory::new(store),
            households,
        }
    }

    /// Derive the effective context for a request.
    ///
    /// Computed fresh on every call: token claims are validated, the
    /// caller's active impersonation session (if any) is consulted, the
    /// effective household resolved, and the household status read.
    pub fn resolve_effective_context(
        &self,
        token: &IdentityToken,
        now: DateTime<Utc>,
    ) -> Result<EffectiveContext, ContextError> {
        validate_token(token, now)?;

        let active = self.manager.active_session(token.subject_id);
        let effective_household_id = resolve_household(token, active.as_ref())?;

        let is_read_only = matches!(
            self.households.status_of(effective_household_id),
            Some((HouseholdStatus::Suspended, _))
        ) && token.role != Role::SuperAdmin;

        Ok(EffectiveContext::new(
            token.subject_id,
            token.role,
            effective_household_id,
            active.is_some(),
            is_read_only,
        ))
    }

    /// Gate a state-mutating operation.
    ///
    /// Checks the suspension gate against the household's *current* status,
    /// then (best-effort) records the action on any active impersonation
    /// session. Queries must not go through here — reads are never gated.
    pub fn begin_mutation(&self, ctx: &EffectiveContext) -> AccessResult<()> {
        check_write_allowed(
            &self.households,
            ctx.effective_household_id(),
            ctx.acting_role(),
        )?;

        if ctx.is_impersonating() {
            self.manager.record_action(ctx.acting_user_id());
        }

        Ok(())
    }

    /// Start impersonating `target_user_id` as `operator_id`.
    pub fn start_impersonation(
        &self,
        operator_id: UserId,
        target_user_id: UserId,
    ) -> AccessResult<ImpersonationSession> {
        self.manager.start(operator_id, target_user_id, Utc::now())
    }

    /// End the operator's active impersonation session.
    pub fn end_impersonation(&self, operator_id: UserId) -> AccessResult<ImpersonationSession> {
        self.manager.end(operator_id, Utc::now())
    }

    /// Paginated impersonation history, most recent first.
    ///
    /// Callers must hold the `view_admin_panel` capability; this service
    /// does no further filtering.
    pub fn list_impersonation_history(&self, limit: usize, offset: usize) -> HistoryPage {
        self.history.list(limit, offset)
    }
}
