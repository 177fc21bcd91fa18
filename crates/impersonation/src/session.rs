use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use hearth_core::{HouseholdId, SessionId, UserId};

/// Impersonation session record.
///
/// Append-only audit record: created by `start`, mutated only by
/// `record_action` (counter) and `end` (terminal timestamp), never deleted.
///
/// # Invariants
/// - At most one session with `ended_at = None` exists per `operator_id`.
/// - `target_household_id` is a snapshot taken at start time; it does not
///   change if the target later moves households (audit stability).
/// - `seq` is assigned by the store, immutable, and strictly monotonic.
///   History pagination orders on it so pages stay stable under concurrent
///   inserts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpersonationSession {
    pub id: SessionId,
    pub seq: u64,
    pub operator_id: UserId,
    pub target_user_id: UserId,
    pub target_household_id: HouseholdId,
    pub started_at: DateTime<Utc>,
    /// `None` while the session is active.
    pub ended_at: Option<DateTime<Utc>>,
    /// Count of mutating requests performed while impersonating.
    pub actions_count: u64,
}

impl ImpersonationSession {
    pub fn is_active(&self) -> bool {
        self.ended_at.is_none()
    }

    /// Duration in whole minutes, for display.
    ///
    /// `None` while the session is active: callers must render "active",
    /// never zero.
    pub fn duration_minutes(&self) -> Option<i64> {
        self.ended_at.map(|ended| (ended - self.started_at).num_minutes())
    }
}

/// A session as handed to the store for insertion.
///
/// The store assigns `id` and `seq`; everything else is fixed at start time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSession {
    pub operator_id: UserId,
    pub target_user_id: UserId,
    pub target_household_id: HouseholdId,
    pub started_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn session(started_at: DateTime<Utc>, ended_at: Option<DateTime<Utc>>) -> ImpersonationSession {
        ImpersonationSession {
            id: SessionId::new(),
            seq: 1,
            operator_id: UserId::new(),
            target_user_id: UserId::new(),
            target_household_id: HouseholdId::new(),
            started_at,
            ended_at,
            actions_count: 0,
        }
    }

    #[test]
    fn active_session_has_no_duration() {
        let s = session(Utc::now(), None);
        assert!(s.is_active());
        assert_eq!(s.duration_minutes(), None);
    }

    #[test]
    fn ended_session_duration_in_minutes() {
        let started = Utc::now();
        let s = session(started, Some(started + Duration::minutes(42)));
        assert!(!s.is_active());
        assert_eq!(s.duration_minutes(), Some(42));
    }

    #[test]
    fn sub_minute_session_rounds_down_not_to_none() {
        let started = Utc::now();
        let s = session(started, Some(started + Duration::seconds(30)));
        // Ended but short: duration is Some(0), distinct from "active".
        assert_eq!(s.duration_minutes(), Some(0));
    }
}
