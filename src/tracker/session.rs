// src/tracker/session.rs
use serde_json::Value;

use super::modifiers::Modifiers;

/// Identity of one search: the query plus its filter tokens.
/// Only ever compared for equality.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionId(String);

impl SessionId {
    /// Sorts a copy of `tokens`, so the same filter set in any order yields the same id.
    pub fn compute<S: AsRef<str>>(query: &str, tokens: &[S]) -> Self {
        let mut sorted: Vec<&str> = tokens.iter().map(|t| t.as_ref()).collect();
        sorted.sort_unstable();
        let mods = sorted.join(";");

        let id = match (query.is_empty(), mods.is_empty()) {
            (false, false) => join!(query, ";", &mods),
            (false, true) => s!(query),
            (true, false) => mods,
            (true, true) => s!(),
        };
        Self(id)
    }

    pub fn as_str(&self) -> &str { &self.0 }

    /// The empty id: no query and no filters.
    pub fn is_blank(&self) -> bool { self.0.is_empty() }
}

/// The live search. Replaced wholesale when the identity changes.
#[derive(Clone, Debug, Default)]
pub struct Session {
    pub(super) id: SessionId,
    pub(super) query: String,
    pub(super) modifiers: Modifiers,
    pub(super) next_offset: u64,
    pub(super) results: Vec<Value>,
}

impl Session {
    pub(super) fn start<S: AsRef<str>>(id: SessionId, query: &str, tokens: &[S]) -> Self {
        Self {
            id,
            query: s!(query),
            modifiers: Modifiers::from_tokens(tokens),
            next_offset: 0,
            results: Vec::new(),
        }
    }

    pub fn view(&self) -> SessionView<'_> {
        SessionView {
            query: &self.query,
            modifiers: &self.modifiers,
            results: &self.results,
        }
    }
}

/// Read-only borrow of the live session handed to export and rendering.
#[derive(Clone, Copy, Debug)]
pub struct SessionView<'a> {
    pub query: &'a str,
    pub modifiers: &'a Modifiers,
    pub results: &'a [Value],
}

impl SessionView<'_> {
    /// Nothing worth showing or exporting: no results, or no query to name the files after.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty() || self.query.is_empty()
    }
}
