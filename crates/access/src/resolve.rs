//! Household context resolution.
//!
//! Determines the effective household a request acts against, reconciling
//! the token's binding with any active impersonation session.

use hearth_auth::{AccessError, AccessResult, IdentityToken};
use hearth_core::HouseholdId;
use hearth_impersonation::ImpersonationSession;

/// Resolve the effective household for a request.
///
/// Resolution order:
/// 1. An active impersonation session wins regardless of the token's own
///    household — impersonation means acting *as* the target.
/// 2. Otherwise the token's household binding.
/// 3. Otherwise (an operator token with no binding and no impersonation)
///    `MissingTenant`: the operator must select a household explicitly.
///    There is no implicit "first household" fallback.
pub fn resolve_household(
    token: &IdentityToken,
    active_session: Option<&ImpersonationSession>,
) -> AccessResult<HouseholdId> {
    if let Some(session) = active_session {
        return Ok(session.target_household_id);
    }
    token.household_id.ok_or(AccessError::MissingTenant)
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use hearth_auth::Role;
    use hearth_core::{SessionId, UserId};

    use super::*;

    fn token(role: Role, household_id: Option<HouseholdId>) -> IdentityToken {
        let now = Utc::now();
        IdentityToken {
            subject_id: UserId::new(),
            role,
            household_id,
            issued_at: now,
            expires_at: now + Duration::minutes(15),
        }
    }

    fn active_session(target_household_id: HouseholdId) -> ImpersonationSession {
        ImpersonationSession {
            id: SessionId::new(),
            seq: 1,
            operator_id: UserId::new(),
            target_user_id: UserId::new(),
            target_household_id,
            started_at: Utc::now(),
            ended_at: None,
            actions_count: 0,
        }
    }

    #[test]
    fn impersonated_household_wins_over_token() {
        let own = HouseholdId::new();
        let target = HouseholdId::new();
        let t = token(Role::SuperAdmin, Some(own));
        let session = active_session(target);

        assert_eq!(resolve_household(&t, Some(&session)), Ok(target));
    }

    #[test]
    fn token_household_used_without_impersonation() {
        let own = HouseholdId::new();
        let t = token(Role::Parent, Some(own));

        assert_eq!(resolve_household(&t, None), Ok(own));
    }

    #[test]
    fn unbound_operator_must_select_explicitly() {
        let t = token(Role::SuperAdmin, None);

        assert_eq!(resolve_household(&t, None), Err(AccessError::MissingTenant));
    }
}
