//! Last-rendered state cache
//!
//! The single source of truth for "do we need to touch the element".
//! Owned by the dispatcher, created once per running display session,
//! entries are never deleted; only a process restart resets it. An entry
//! is written only after the corresponding render succeeded.

use std::collections::HashMap;

use crate::resolvers::DisplayState;

/// Element identifier -> last rendered display state.
#[derive(Debug, Default)]
pub struct StateCache {
    entries: HashMap<String, DisplayState>,
}

impl StateCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the cached state for `id` equals `state`, i.e. the
    /// element already shows it.
    pub fn matches(&self, id: &str, state: &DisplayState) -> bool {
        self.entries.get(id) == Some(state)
    }

    /// Record `state` as rendered for `id`.
    pub fn store(&mut self, id: &str, state: DisplayState) {
        self.entries.insert(id.to_string(), state);
    }

    pub fn get(&self, id: &str) -> Option<&DisplayState> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
