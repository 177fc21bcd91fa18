use serde::{Deserialize, Serialize};

/// Role of an authenticated user.
///
/// The role set is closed: authorization is derived from it via a fixed
/// capability table (see [`crate::capabilities`]), never from ad-hoc flags.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Platform-wide operator. Not bound to any household by default.
    SuperAdmin,
    /// Household owner/manager.
    Admin,
    /// Household co-manager.
    Parent,
    /// Household participant.
    Member,
    /// View-only household participant.
    Staff,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "SUPER_ADMIN",
            Role::Admin => "ADMIN",
            Role::Parent => "PARENT",
            Role::Member => "MEMBER",
            Role::Staff => "STAFF",
        }
    }

    /// Whether identities with this role must be bound to a household.
    ///
    /// Only `SUPER_ADMIN` may exist without a household binding.
    pub fn is_household_scoped(&self) -> bool {
        !matches!(self, Role::SuperAdmin)
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
