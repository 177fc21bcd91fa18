//! Paginated read access to the impersonation audit trail.
//!
//! Read-only by construction: this module never writes sessions. Callers are
//! expected to gate access on the `view_admin_panel` capability; no
//! filtering happens here.

use chrono::{DateTime, Utc};
use serde::Serialize;

use hearth_core::{HouseholdId, SessionId, UserId};

use crate::session::ImpersonationSession;
use crate::store::SessionStore;

/// One row of impersonation history, most-recent-first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub session_id: SessionId,
    pub operator_id: UserId,
    pub target_user_id: UserId,
    pub target_household_id: HouseholdId,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub actions_count: u64,
    /// `None` while the session is still active ("active", never zero).
    pub duration_minutes: Option<i64>,
}

impl From<ImpersonationSession> for HistoryEntry {
    fn from(session: ImpersonationSession) -> Self {
        let duration_minutes = session.duration_minutes();
        Self {
            session_id: session.id,
            operator_id: session.operator_id,
            target_user_id: session.target_user_id,
            target_household_id: session.target_household_id,
            started_at: session.started_at,
            ended_at: session.ended_at,
            actions_count: session.actions_count,
            duration_minutes,
        }
    }
}

/// A page of history plus the total record count (for pagination UIs).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryPage {
    pub entries: Vec<HistoryEntry>,
    pub total: usize,
}

/// Read-only history query over a session store.
pub struct ImpersonationHistory<S> {
    store: S,
}

impl<S: SessionStore> ImpersonationHistory<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// List sessions most-recent-first.
    ///
    /// Ordering is on the store-assigned immutable sequence, so an
    /// already-fetched page neither duplicates nor skips entries when new
    /// sessions start concurrently.
    pub fn list(&self, limit: usize, offset: usize) -> HistoryPage {
        let (sessions, total) = self.store.list_desc(limit, offset);
        HistoryPage {
            entries: sessions.into_iter().map(HistoryEntry::from).collect(),
            total,
        }
    }
}
