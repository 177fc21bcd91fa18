use serde::{Deserialize, Serialize};

use hearth_core::{DomainError, HouseholdId};

/// Household lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum HouseholdStatus {
    /// Household is active; members can read and write.
    #[default]
    Active,
    /// Household is read-only. Writes are blocked for everyone except
    /// platform operators.
    Suspended,
}

impl core::fmt::Display for HouseholdStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            HouseholdStatus::Active => write!(f, "Active"),
            HouseholdStatus::Suspended => write!(f, "Suspended"),
        }
    }
}

/// Household record.
///
/// # Invariants
/// - `suspension_reason` is only meaningful while `status` is `Suspended`;
///   reinstating clears it.
/// - Only the platform admin module mutates this record. The access-control
///   core reads `status` and never writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Household {
    pub id: HouseholdId,
    pub name: String,
    pub status: HouseholdStatus,
    pub suspension_reason: Option<String>,
}

impl Household {
    pub fn new(id: HouseholdId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            status: HouseholdStatus::Active,
            suspension_reason: None,
        }
    }

    /// Put the household into read-only mode.
    pub fn suspend(&mut self, reason: Option<String>) -> Result<(), DomainError> {
        if self.status == HouseholdStatus::Suspended {
            return Err(DomainError::invariant("household already suspended"));
        }
        self.status = HouseholdStatus::Suspended;
        self.suspension_reason = reason;
        Ok(())
    }

    /// Lift a suspension.
    pub fn reinstate(&mut self) -> Result<(), DomainError> {
        if self.status == HouseholdStatus::Active {
            return Err(DomainError::invariant("household already active"));
        }
        self.status = HouseholdStatus::Active;
        self.suspension_reason = None;
        Ok(())
    }
}

/// Read-only household status accessor consumed by the access-control core.
///
/// Returns the status together with the suspension reason so a write denial
/// can surface the reason without a second lookup.
pub trait HouseholdDirectory: Send + Sync {
    fn status_of(&self, household_id: HouseholdId) -> Option<(HouseholdStatus, Option<String>)>;
}

impl<D> HouseholdDirectory for std::sync::Arc<D>
where
    D: HouseholdDirectory + ?Sized,
{
    fn status_of(&self, household_id: HouseholdId) -> Option<(HouseholdStatus, Option<String>)> {
        (**self).status_of(household_id)
    }
}
