use std::sync::RwLock;

use chrono::{DateTime, Utc};

use hearth_core::{SessionId, UserId};
use hearth_impersonation::{
    ImpersonationSession, NewSession, SessionStore, SessionStoreError,
};

#[derive(Debug, Default)]
struct Inner {
    sessions: Vec<ImpersonationSession>,
    next_seq: u64,
}

/// In-memory append-only session store.
///
/// Intended for tests/dev. The at-most-one-active-session-per-operator
/// constraint is enforced inside a single write-lock critical section, so
/// concurrent `insert_active` calls for the same operator cannot both
/// succeed — the equivalent of a partial uniqueness constraint over
/// `(operator_id) WHERE ended_at IS NULL`.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    inner: RwLock<Inner>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn insert_active(
        &self,
        session: NewSession,
    ) -> Result<ImpersonationSession, SessionStoreError> {
        let mut inner = self.inner.write().expect("session store lock poisoned");

        if inner
            .sessions
            .iter()
            .any(|s| s.operator_id == session.operator_id && s.is_active())
        {
            return Err(SessionStoreError::ActiveSessionExists(session.operator_id));
        }

        inner.next_seq += 1;
        let stored = ImpersonationSession {
            id: SessionId::new(),
            seq: inner.next_seq,
            operator_id: session.operator_id,
            target_user_id: session.target_user_id,
            target_household_id: session.target_household_id,
            started_at: session.started_at,
            ended_at: None,
            actions_count: 0,
        };
        inner.sessions.push(stored.clone());
        Ok(stored)
    }

    fn find_active(&self, operator_id: UserId) -> Option<ImpersonationSession> {
        let inner = self.inner.read().expect("session store lock poisoned");
        inner
            .sessions
            .iter()
            .find(|s| s.operator_id == operator_id && s.is_active())
            .cloned()
    }

    fn record_action(&self, operator_id: UserId) -> bool {
        let mut inner = self.inner.write().expect("session store lock poisoned");
        match inner
            .sessions
            .iter_mut()
            .find(|s| s.operator_id == operator_id && s.is_active())
        {
            Some(s) => {
                s.actions_count += 1;
                true
            }
            None => false,
        }
    }

    fn end_active(
        &self,
        operator_id: UserId,
        ended_at: DateTime<Utc>,
    ) -> Result<ImpersonationSession, SessionStoreError> {
        let mut inner = self.inner.write().expect("session store lock poisoned");
        match inner
            .sessions
            .iter_mut()
            .find(|s| s.operator_id == operator_id && s.is_active())
        {
            Some(s) => {
                s.ended_at = Some(ended_at);
                Ok(s.clone())
            }
            None => Err(SessionStoreError::NoActiveSession(operator_id)),
        }
    }

    fn list_desc(&self, limit: usize, offset: usize) -> (Vec<ImpersonationSession>, usize) {
        let inner = self.inner.read().expect("session store lock poisoned");
        let total = inner.sessions.len();
        // Sessions are appended in seq order; reading back-to-front gives
        // seq-descending without a sort.
        let page = inner
            .sessions
            .iter()
            .rev()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();
        (page, total)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use hearth_core::HouseholdId;

    use super::*;

    fn new_session(operator_id: UserId) -> NewSession {
        NewSession {
            operator_id,
            target_user_id: UserId::new(),
            target_household_id: HouseholdId::new(),
            started_at: Utc::now(),
        }
    }

    #[test]
    fn concurrent_starts_for_same_operator_race_to_one_winner() {
        let store = Arc::new(InMemorySessionStore::new());
        let operator = UserId::new();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                std::thread::spawn(move || store.insert_active(new_session(operator)).is_ok())
            })
            .collect();

        let wins = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|won| *won)
            .count();
        assert_eq!(wins, 1);
    }

    #[test]
    fn seq_is_monotonic_across_operators() {
        let store = InMemorySessionStore::new();
        let a = store.insert_active(new_session(UserId::new())).unwrap();
        let b = store.insert_active(new_session(UserId::new())).unwrap();
        let c = store.insert_active(new_session(UserId::new())).unwrap();
        assert!(a.seq < b.seq && b.seq < c.seq);
    }

    #[test]
    fn operator_can_start_again_after_ending() {
        let store = InMemorySessionStore::new();
        let operator = UserId::new();

        let first = store.insert_active(new_session(operator)).unwrap();
        store.end_active(operator, Utc::now()).unwrap();
        let second = store.insert_active(new_session(operator)).unwrap();

        assert_ne!(first.id, second.id);
        assert!(second.seq > first.seq);
    }

    #[test]
    fn fetched_page_is_stable_under_concurrent_inserts() {
        let store = InMemorySessionStore::new();
        let mut ops = Vec::new();
        for _ in 0..5 {
            let op = UserId::new();
            store.insert_active(new_session(op)).unwrap();
            ops.push(op);
        }

        // Fetch the second page (entries 3 and 2 by seq).
        let (page_before, _) = store.list_desc(2, 2);

        // A new session starts after the page was fetched.
        store.insert_active(new_session(UserId::new())).unwrap();

        // The same offset now shows shifted data, but the previously fetched
        // page still identifies the same records by seq — no entry within it
        // was duplicated or skipped.
        let (all, total) = store.list_desc(10, 0);
        assert_eq!(total, 6);
        let seqs: Vec<u64> = all.iter().map(|s| s.seq).collect();
        assert_eq!(seqs, vec![6, 5, 4, 3, 2, 1]);
        assert_eq!(
            page_before.iter().map(|s| s.seq).collect::<Vec<_>>(),
            vec![3, 2]
        );
    }

    #[test]
    fn record_action_increments_only_active() {
        let store = InMemorySessionStore::new();
        let operator = UserId::new();
        store.insert_active(new_session(operator)).unwrap();

        assert!(store.record_action(operator));
        assert!(store.record_action(operator));
        assert_eq!(store.find_active(operator).unwrap().actions_count, 2);

        store.end_active(operator, Utc::now()).unwrap();
        assert!(!store.record_action(operator));
    }
}
