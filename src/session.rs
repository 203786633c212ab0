//! In-memory session state
//!
//! Sessions live only for the process lifetime; there is no persistence.
//! Tokens are random UUIDs handed out at login and checked by the auth
//! middleware. Expired entries are swept by a background loop.

use dashmap::DashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;
use uuid::Uuid;

/// Interval between expired-session sweeps
const CLEANUP_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Debug, Clone)]
pub struct Session {
    pub email: String,
    created_at: Instant,
}

#[derive(Debug)]
pub struct SessionStore {
    sessions: DashMap<String, Session>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            ttl,
        }
    }

    /// Create a session for a logged-in user and return its token
    pub fn create(&self, email: &str) -> String {
        let token = Uuid::new_v4().to_string();
        self.sessions.insert(
            token.clone(),
            Session {
                email: email.to_string(),
                created_at: Instant::now(),
            },
        );
        token
    }

    /// Look up a session by token, removing it if expired
    pub fn validate(&self, token: &str) -> Option<Session> {
        // Clone under the guard, drop it before removing
        let session = {
            let entry = self.sessions.get(token)?;
            if entry.created_at.elapsed() > self.ttl {
                None
            } else {
                Some(entry.value().clone())
            }
        };

        if session.is_none() {
            self.sessions.remove(token);
        }
        session
    }

    /// Remove a session, returning true if it existed
    pub fn revoke(&self, token: &str) -> bool {
        self.sessions.remove(token).is_some()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn purge_expired(&self) {
        let before = self.sessions.len();
        self.sessions
            .retain(|_, session| session.created_at.elapsed() <= self.ttl);
        let removed = before - self.sessions.len();
        if removed > 0 {
            debug!("Purged {} expired sessions", removed);
        }
    }

    /// Background loop removing expired sessions
    pub async fn cleanup_loop(self: Arc<Self>) {
        let mut interval = tokio::time::interval(CLEANUP_INTERVAL);
        loop {
            interval.tick().await;
            self.purge_expired();
        }
    }
}

/// Tracks sessions with an analysis currently pending, so a session cannot
/// submit overlapping analyses while one is still "computing".
#[derive(Debug, Default)]
pub struct InFlightAnalyses {
    pending: DashMap<String, ()>,
}

impl InFlightAnalyses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the analysis slot for a session. Returns `None` if one is
    /// already running. The returned guard frees the slot on drop, which
    /// also covers the client disconnecting mid-analysis.
    pub fn begin(self: &Arc<Self>, session_key: &str) -> Option<AnalysisGuard> {
        match self.pending.entry(session_key.to_string()) {
            dashmap::mapref::entry::Entry::Occupied(_) => None,
            dashmap::mapref::entry::Entry::Vacant(vacant) => {
                vacant.insert(());
                Some(AnalysisGuard {
                    analyses: Arc::clone(self),
                    session_key: session_key.to_string(),
                })
            }
        }
    }

    pub fn is_pending(&self, session_key: &str) -> bool {
        self.pending.contains_key(session_key)
    }
}

#[derive(Debug)]
pub struct AnalysisGuard {
    analyses: Arc<InFlightAnalyses>,
    session_key: String,
}

impl Drop for AnalysisGuard {
    fn drop(&mut self) {
        self.analyses.pending.remove(&self.session_key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_validate() {
        let store = SessionStore::new(Duration::from_secs(60));
        let token = store.create("demo@example.com");

        let session = store.validate(&token).unwrap();
        assert_eq!(session.email, "demo@example.com");
        assert_eq!(store.len(), 1);

        // Validation does not consume the session
        assert!(store.validate(&token).is_some());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_validate_unknown_token() {
        let store = SessionStore::new(Duration::from_secs(60));
        assert!(store.validate("not-a-token").is_none());
    }

    #[test]
    fn test_expired_session_is_removed() {
        let store = SessionStore::new(Duration::ZERO);
        let token = store.create("demo@example.com");

        assert!(store.validate(&token).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_revoke() {
        let store = SessionStore::new(Duration::from_secs(60));
        let token = store.create("demo@example.com");

        assert!(store.revoke(&token));
        assert!(!store.revoke(&token));
        assert!(store.validate(&token).is_none());
    }

    #[test]
    fn test_purge_expired() {
        let store = SessionStore::new(Duration::ZERO);
        store.create("a@example.com");
        store.create("b@example.com");

        store.purge_expired();
        assert!(store.is_empty());
    }

    #[test]
    fn test_in_flight_guard_blocks_overlap() {
        let analyses = Arc::new(InFlightAnalyses::new());

        let guard = analyses.begin("token-1").unwrap();
        assert!(analyses.is_pending("token-1"));
        assert!(analyses.begin("token-1").is_none());

        // A different session is unaffected
        assert!(analyses.begin("token-2").is_some());

        drop(guard);
        assert!(!analyses.is_pending("token-1"));
        assert!(analyses.begin("token-1").is_some());
    }
}
