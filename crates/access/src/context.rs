use hearth_auth::{Capabilities, Role, capabilities_of};
use hearth_core::{HouseholdId, UserId};

/// Effective request context.
///
/// Derived fresh per request from the identity token, any active
/// impersonation session, and the household status. Never cached across
/// requests and never persisted — there is deliberately no process-wide
/// identity state.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EffectiveContext {
    acting_user_id: UserId,
    acting_role: Role,
    effective_household_id: HouseholdId,
    is_impersonating: bool,
    is_read_only: bool,
}

impl EffectiveContext {
    pub(crate) fn new(
        acting_user_id: UserId,
        acting_role: Role,
        effective_household_id: HouseholdId,
        is_impersonating: bool,
        is_read_only: bool,
    ) -> Self {
        Self {
            acting_user_id,
            acting_role,
            effective_household_id,
            is_impersonating,
            is_read_only,
        }
    }

    /// The real authenticated actor. Under impersonation this stays the
    /// operator, never the target — the audit trail must name who acted.
    pub fn acting_user_id(&self) -> UserId {
        self.acting_user_id
    }

    pub fn acting_role(&self) -> Role {
        self.acting_role
    }

    /// The household this request acts against (the impersonated household
    /// when a session is active).
    pub fn effective_household_id(&self) -> HouseholdId {
        self.effective_household_id
    }

    pub fn is_impersonating(&self) -> bool {
        self.is_impersonating
    }

    /// Whether the acting household is suspended for this actor. Reads
    /// proceed regardless; mutations are denied at the gate.
    pub fn is_read_only(&self) -> bool {
        self.is_read_only
    }

    /// Capability set of the acting role (pure table lookup).
    pub fn capabilities(&self) -> Capabilities {
        capabilities_of(self.acting_role)
    }
}
