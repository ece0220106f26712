// src/tracker/mod.rs
//! # Search session tracking
//!
//! Turns a stream of intercepted search pages into one accumulated result set.
//!
//! Every intercepted response is reduced to a [`Payload`]: the query, the raw
//! `key:value` filter tokens, the page offset and size, and the page's records.
//! [`SearchTracker::observe`] then decides two things:
//!
//! 1. **Is this the same search?** The query and a sorted copy of the tokens form
//!    a [`SessionId`]. A different id replaces the session: new query, filters
//!    rebuilt, results cleared, expected offset back to 0.
//! 2. **Is this the next page?** Only a batch whose offset equals the expected
//!    offset is appended, whole. Anything else (re-delivery, out of order,
//!    unknown offset) is dropped without touching the session.
//!
//! Unknown numbers (`None`) never raise errors; they just fail the offset gate,
//! or, for the page size, keep the expected offset where it is.
//!
//! The tracker is a single-owner handle; readers borrow a [`SessionView`] and
//! cannot keep it across the next `observe`.

pub mod modifiers;
pub mod session;

use serde_json::Value;

pub use modifiers::Modifiers;
pub use session::{Session, SessionId, SessionView};

/// One intercepted page of search results, already pulled out of the response body.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Payload {
    pub query: String,
    pub modifier_tokens: Vec<String>,
    pub offset: Option<u64>,
    pub page_size: Option<u64>,
    pub results: Vec<Value>,
}

/// What a single `observe` did. Informational only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Observation {
    /// The payload started a new session.
    pub reset: bool,
    pub outcome: Outcome,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Appended { count: usize },
    Dropped { expected: u64, got: Option<u64> },
}

#[derive(Debug, Default)]
pub struct SearchTracker {
    session: Session,
}

impl SearchTracker {
    pub fn new() -> Self { Self::default() }

    pub fn observe(&mut self, payload: Payload) -> Observation {
        let Payload { query, modifier_tokens, offset, page_size, results } = payload;

        let id = SessionId::compute(&query, &modifier_tokens);
        let reset = id != self.session.id;
        if reset {
            logd!("Tracker: New search id={:?} (was {:?})", id.as_str(), self.session.id.as_str());
            self.session = Session::start(id, &query, &modifier_tokens);
        }

        let expected = self.session.next_offset;
        let outcome = match offset {
            Some(off) if off == expected => {
                let count = results.len();
                self.session.results.extend(results);
                // saturates: an absurd page size pins the gate instead of wrapping
                self.session.next_offset = off.saturating_add(page_size.unwrap_or(0));
                Outcome::Appended { count }
            }
            got => {
                logd!("Tracker: Dropped batch offset={:?}, expected {}", got, expected);
                Outcome::Dropped { expected, got }
            }
        };

        Observation { reset, outcome }
    }

    pub fn current_session(&self) -> SessionView<'_> { self.session.view() }

    /// Offset the next accepted batch must carry.
    pub fn next_expected_offset(&self) -> u64 { self.session.next_offset }

    /// Supersede the live session with the initial empty one (observed tab went away).
    pub fn clear(&mut self) {
        logd!("Tracker: Cleared (had {} result(s))", self.session.results.len());
        self.session = Session::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn page(q: &str, mods: &[&str], off: Option<u64>, num: Option<u64>, n: usize) -> Payload {
        Payload {
            query: s!(q),
            modifier_tokens: mods.iter().map(|m| s!(*m)).collect(),
            offset: off,
            page_size: num,
            results: (0..n).map(|i| json!({ "n": i })).collect(),
        }
    }

    #[test]
    fn initial_state_is_empty() {
        let t = SearchTracker::new();
        let view = t.current_session();
        assert_eq!(view.query, "");
        assert!(view.modifiers.is_empty());
        assert!(view.results.is_empty());
        assert_eq!(t.next_expected_offset(), 0);
    }

    #[test]
    fn first_payload_for_blank_id_is_a_continuation() {
        // The initial session already has the blank id.
        let mut t = SearchTracker::new();
        let obs = t.observe(page("", &[], Some(0), Some(10), 10));
        assert!(!obs.reset);
        assert_eq!(obs.outcome, Outcome::Appended { count: 10 });
    }

    #[test]
    fn unknown_page_size_keeps_offset() {
        let mut t = SearchTracker::new();
        t.observe(page("heart", &[], Some(0), None, 3));
        assert_eq!(t.next_expected_offset(), 0);
        t.observe(page("heart", &[], Some(0), None, 2));
        assert_eq!(t.current_session().results.len(), 5);
    }

    #[test]
    fn unknown_offset_is_dropped() {
        let mut t = SearchTracker::new();
        let obs = t.observe(page("heart", &[], None, Some(10), 10));
        assert!(obs.reset);
        assert_eq!(obs.outcome, Outcome::Dropped { expected: 0, got: None });
        assert!(t.current_session().results.is_empty());
    }

    #[test]
    fn huge_page_size_saturates_instead_of_overflowing() {
        let mut t = SearchTracker::new();
        t.observe(page("heart", &[], Some(0), Some(u64::MAX), 1));
        assert_eq!(t.next_expected_offset(), u64::MAX);

        let obs = t.observe(page("heart", &[], Some(u64::MAX), Some(10), 2));
        assert_eq!(obs.outcome, Outcome::Appended { count: 2 });
        assert_eq!(t.next_expected_offset(), u64::MAX);
        assert_eq!(t.current_session().results.len(), 3);
    }

    #[test]
    fn clear_returns_to_initial_state() {
        let mut t = SearchTracker::new();
        t.observe(page("heart", &["a:1"], Some(0), Some(10), 10));
        t.clear();
        assert_eq!(t.current_session().query, "");
        assert!(t.current_session().results.is_empty());
        assert_eq!(t.next_expected_offset(), 0);
    }

    #[test]
    fn session_id_joins_query_and_sorted_tokens() {
        assert_eq!(SessionId::compute("q", &["b:2", "a:1"]).as_str(), "q;a:1;b:2");
        assert_eq!(SessionId::compute("q", &[] as &[&str]).as_str(), "q");
        assert_eq!(SessionId::compute("", &["a:1"]).as_str(), "a:1");
        assert!(SessionId::compute("", &[] as &[&str]).is_blank());
    }
}
