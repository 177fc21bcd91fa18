//! In-memory user/household directories for tests/dev.

use std::collections::HashMap;
use std::sync::RwLock;

use hearth_auth::Role;
use hearth_core::{HouseholdId, UserId};
use hearth_households::{Household, HouseholdDirectory, HouseholdStatus};
use hearth_impersonation::UserDirectory;

#[derive(Debug, Clone)]
struct UserRecord {
    role: Role,
    household_id: Option<HouseholdId>,
}

/// In-memory user directory.
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    users: RwLock<HashMap<UserId, UserRecord>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert(&self, user_id: UserId, role: Role, household_id: Option<HouseholdId>) {
        if let Ok(mut users) = self.users.write() {
            users.insert(user_id, UserRecord { role, household_id });
        }
    }
}

impl UserDirectory for InMemoryUserDirectory {
    fn exists(&self, user_id: UserId) -> bool {
        self.users
            .read()
            .map(|u| u.contains_key(&user_id))
            .unwrap_or(false)
    }

    fn role_of(&self, user_id: UserId) -> Option<Role> {
        let users = self.users.read().ok()?;
        users.get(&user_id).map(|r| r.role)
    }

    fn household_of(&self, user_id: UserId) -> Option<HouseholdId> {
        let users = self.users.read().ok()?;
        users.get(&user_id).and_then(|r| r.household_id)
    }
}

/// In-memory household directory.
#[derive(Debug, Default)]
pub struct InMemoryHouseholdDirectory {
    households: RwLock<HashMap<HouseholdId, Household>>,
}

impl InMemoryHouseholdDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert(&self, household: Household) {
        if let Ok(mut households) = self.households.write() {
            households.insert(household.id, household);
        }
    }

    /// Run a mutation against a stored household (admin-module stand-in).
    pub fn update<F>(&self, household_id: HouseholdId, f: F) -> bool
    where
        F: FnOnce(&mut Household),
    {
        match self.households.write() {
            Ok(mut households) => match households.get_mut(&household_id) {
                Some(h) => {
                    f(h);
                    true
                }
                None => false,
            },
            Err(_) => false,
        }
    }
}

impl HouseholdDirectory for InMemoryHouseholdDirectory {
    fn status_of(&self, household_id: HouseholdId) -> Option<(HouseholdStatus, Option<String>)> {
        let households = self.households.read().ok()?;
        households
            .get(&household_id)
            .map(|h| (h.status, h.suspension_reason.clone()))
    }
}
