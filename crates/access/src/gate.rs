//! Suspension enforcement gate.
//!
//! Decides, per mutating operation, whether the acting household's status
//! permits the write. Reads are never gated: suspension is write-only
//! enforcement.

use hearth_auth::{AccessError, AccessResult, Role};
use hearth_core::HouseholdId;
use hearth_households::{HouseholdDirectory, HouseholdStatus};

/// Check whether a write against `household_id` is allowed for `acting_role`.
///
/// `Active` households allow everyone. `Suspended` households allow only
/// platform operators; everyone else is denied with the suspension reason
/// attached for display. A household unknown to the directory is left to the
/// domain layer (this gate enforces suspension, not existence).
pub fn check_write_allowed<H: HouseholdDirectory>(
    households: &H,
    household_id: HouseholdId,
    acting_role: Role,
) -> AccessResult<()> {
    match households.status_of(household_id) {
        Some((HouseholdStatus::Suspended, reason)) => {
            if acting_role == Role::SuperAdmin {
                Ok(())
            } else {
                tracing::debug!(
                    household_id = %household_id,
                    role = %acting_role,
                    "write denied: household suspended"
                );
                Err(AccessError::HouseholdSuspended { reason })
            }
        }
        Some((HouseholdStatus::Active, _)) | None => Ok(()),
    }
}
