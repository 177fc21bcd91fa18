//! Role → capability mapping.
//!
//! Capabilities are cumulative by seniority (`SUPER_ADMIN ⊇ ADMIN ⊇ PARENT`;
//! `MEMBER` and `STAFF` hold nothing), but the mapping is expressed as a flat
//! lookup table so the contract stays auditable per-role.

use serde::Serialize;

use crate::Role;

/// Capability set granted to a role.
///
/// This is the authoritative authorization contract: any controller or UI
/// gating must be re-derivable from these four flags alone.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    /// Manage the acting household's settings and data.
    pub manage_household: bool,
    /// Manage users within the acting household.
    pub manage_users: bool,
    /// Access the administration panel (includes impersonation history).
    pub view_admin_panel: bool,
    /// Operate across all households (platform operators only).
    pub manage_all_households: bool,
}

/// Pure, total mapping from role to capability set.
///
/// No error path: every role maps to exactly one row of the table.
pub const fn capabilities_of(role: Role) -> Capabilities {
    match role {
        Role::SuperAdmin => Capabilities {
            manage_household: true,
            manage_users: true,
            view_admin_panel: true,
            manage_all_households: true,
        },
        Role::Admin => Capabilities {
            manage_household: true,
            manage_users: true,
            view_admin_panel: true,
            manage_all_households: false,
        },
        Role::Parent => Capabilities {
            manage_household: true,
            manage_users: false,
            view_admin_panel: false,
            manage_all_households: false,
        },
        Role::Member | Role::Staff => Capabilities {
            manage_household: false,
            manage_users: false,
            view_admin_panel: false,
            manage_all_households: false,
        },
    }
}
