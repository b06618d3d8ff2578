//! Persistent slot holding the single bearer token.
//!
//! DESIGN
//! ======
//! Stores take `&self` because the real backing store (`localStorage`) is
//! already shared, interior-mutable state. Storage that is unavailable behaves
//! as an empty slot: reads yield `None` and writes are dropped.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use std::cell::RefCell;
use std::rc::Rc;

/// Read/write access to the stored bearer token.
pub trait TokenStore {
    /// Current token, or `None` when nothing (or an empty string) is stored.
    fn get(&self) -> Option<String>;
    /// Replace the stored token.
    fn set(&self, token: &str);
    /// Remove the stored token.
    fn clear(&self);
}

/// Treat blank stored values as absent.
#[must_use]
pub fn non_empty(raw: Option<String>) -> Option<String> {
    raw.filter(|token| !token.is_empty())
}

/// In-process token store. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `token`.
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.set(token);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        non_empty(self.slot.borrow().clone())
    }

    fn set(&self, token: &str) {
        *self.slot.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        self.slot.borrow_mut().take();
    }
}
