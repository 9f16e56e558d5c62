//! Bounded store of live quiz sessions
//!
//! Every analysis cycle opens a session. Clients are expected to discard the
//! previous one (`previous_session_id` or DELETE) but nothing forces them to,
//! so each insert prunes:
//! 1. Sessions older than the TTL
//! 2. While at capacity: completed sessions first, then the oldest of the rest

use super::{QuizSession, QuizState};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use uuid::Uuid;

pub const DEFAULT_MAX_SESSIONS: usize = 256;
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(30 * 60);

/// Size and age limits for [`QuizSessionStore`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionLimits {
    pub max_sessions: usize,
    pub ttl: Duration,
}

impl Default for SessionLimits {
    fn default() -> Self {
        Self {
            max_sessions: DEFAULT_MAX_SESSIONS,
            ttl: DEFAULT_SESSION_TTL,
        }
    }
}

#[derive(Debug)]
struct StoredSession {
    session: QuizSession,
    created_at: Instant,
}

#[derive(Debug, Default)]
pub struct QuizSessionStore {
    sessions: HashMap<Uuid, StoredSession>,
    limits: SessionLimits,
}

impl QuizSessionStore {
    pub fn new(limits: SessionLimits) -> Self {
        Self {
            sessions: HashMap::new(),
            limits: SessionLimits {
                max_sessions: limits.max_sessions.max(1),
                ttl: limits.ttl,
            },
        }
    }

    pub fn limits(&self) -> SessionLimits {
        self.limits
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn contains(&self, id: &Uuid) -> bool {
        self.sessions.contains_key(id)
    }

    pub fn get(&self, id: &Uuid) -> Option<&QuizSession> {
        self.sessions.get(id).map(|stored| &stored.session)
    }

    pub fn get_mut(&mut self, id: &Uuid) -> Option<&mut QuizSession> {
        self.sessions.get_mut(id).map(|stored| &mut stored.session)
    }

    pub fn remove(&mut self, id: &Uuid) -> Option<QuizSession> {
        self.sessions.remove(id).map(|stored| stored.session)
    }

    /// Store a new session, pruning first; returns how many were evicted
    pub fn insert(&mut self, id: Uuid, session: QuizSession) -> usize {
        self.insert_at(id, session, Instant::now())
    }

    fn insert_at(&mut self, id: Uuid, session: QuizSession, now: Instant) -> usize {
        let ttl = self.limits.ttl;
        let before = self.sessions.len();
        self.sessions
            .retain(|_, stored| now.saturating_duration_since(stored.created_at) < ttl);
        let expired = before - self.sessions.len();

        let mut evicted = 0;
        while self.sessions.len() >= self.limits.max_sessions {
            let Some(victim) = self.eviction_candidate() else {
                break;
            };
            self.sessions.remove(&victim);
            evicted += 1;
        }

        if expired + evicted > 0 {
            tracing::debug!(
                "Pruned quiz sessions: {} expired, {} over capacity ({} max)",
                expired,
                evicted,
                self.limits.max_sessions
            );
        }

        self.sessions.insert(
            id,
            StoredSession {
                session,
                created_at: now,
            },
        );
        expired + evicted
    }

    /// Completed sessions go before live ones; oldest first within each group
    fn eviction_candidate(&self) -> Option<Uuid> {
        self.sessions
            .iter()
            .min_by_key(|(_, stored)| {
                (
                    stored.session.state() != QuizState::Complete,
                    stored.created_at,
                )
            })
            .map(|(id, _)| *id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::QuizQuestion;

    fn session() -> QuizSession {
        QuizSession::new(
            "oak",
            vec![QuizQuestion {
                question: "Q?".to_string(),
                options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
                correct: 0,
                explanation: "because".to_string(),
            }],
        )
    }

    fn completed() -> QuizSession {
        let mut quiz = session();
        quiz.start().unwrap();
        quiz.answer(0).unwrap();
        quiz.advance().unwrap();
        quiz
    }

    fn store(max_sessions: usize) -> QuizSessionStore {
        QuizSessionStore::new(SessionLimits {
            max_sessions,
            ttl: Duration::from_secs(60),
        })
    }

    #[test]
    fn test_capacity_is_never_exceeded() {
        let mut sessions = store(3);
        let t0 = Instant::now();
        for i in 0..10 {
            sessions.insert_at(Uuid::new_v4(), session(), t0 + Duration::from_millis(i));
        }
        assert_eq!(sessions.len(), 3);
    }

    #[test]
    fn test_oldest_live_session_is_evicted() {
        let mut sessions = store(2);
        let t0 = Instant::now();
        let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());

        sessions.insert_at(a, session(), t0);
        sessions.insert_at(b, session(), t0 + Duration::from_secs(1));
        assert_eq!(sessions.insert_at(c, session(), t0 + Duration::from_secs(2)), 1);

        assert!(!sessions.contains(&a));
        assert!(sessions.contains(&b));
        assert!(sessions.contains(&c));
    }

    #[test]
    fn test_completed_sessions_are_evicted_first() {
        let mut sessions = store(2);
        let t0 = Instant::now();
        let (old, done, new) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());

        sessions.insert_at(old, session(), t0);
        sessions.insert_at(done, completed(), t0 + Duration::from_secs(1));
        sessions.insert_at(new, session(), t0 + Duration::from_secs(2));

        assert!(sessions.contains(&old));
        assert!(!sessions.contains(&done));
        assert!(sessions.contains(&new));
    }

    #[test]
    fn test_expired_sessions_are_dropped() {
        let mut sessions = store(10);
        let t0 = Instant::now();
        let (stale, fresh) = (Uuid::new_v4(), Uuid::new_v4());

        sessions.insert_at(stale, session(), t0);
        sessions.insert_at(fresh, session(), t0 + Duration::from_secs(61));

        assert!(!sessions.contains(&stale));
        assert_eq!(sessions.len(), 1);
    }

    #[test]
    fn test_zero_capacity_still_holds_the_newest() {
        let mut sessions = store(0);
        let id = Uuid::new_v4();
        sessions.insert(Uuid::new_v4(), session());
        sessions.insert(id, session());
        assert_eq!(sessions.len(), 1);
        assert!(sessions.get(&id).is_some());
    }
}
