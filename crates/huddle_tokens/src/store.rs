// --- File: crates/huddle_tokens/src/store.rs ---
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Process-wide registry of user id to bearer token.
///
/// Readers share the lock; a write holds it exclusively for one map insert.
/// Records are never evicted. Callers clone the token out and release the
/// lock before doing any I/O with it.
#[derive(Debug, Default)]
pub struct TokenStore {
    tokens: RwLock<HashMap<String, String>>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the token for `user_id`. Last write wins.
    pub fn set(&self, user_id: impl Into<String>, token: impl Into<String>) {
        let (user_id, token) = (user_id.into(), token.into());
        // No code inside the critical sections can panic, so a poisoned lock
        // still guards a consistent map.
        let mut tokens = self.tokens.write().unwrap_or_else(PoisonError::into_inner);
        tokens.insert(user_id, token);
    }

    /// Returns the current token for `user_id`, or `None` when the user has
    /// never saved one.
    pub fn get(&self, user_id: &str) -> Option<String> {
        let tokens = self.tokens.read().unwrap_or_else(PoisonError::into_inner);
        tokens.get(user_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.tokens
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
