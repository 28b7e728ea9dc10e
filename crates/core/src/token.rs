//! Credential-provider capability
//!
//! The bearer token lives in a browser-scoped key-value store owned by the
//! login/logout flows. Everything in this workspace reads it through the
//! [`TokenStore`] capability instead of reaching into ambient storage, so
//! the HTTP client and the router can be exercised against an in-memory
//! store in tests.

use std::sync::{Arc, Mutex};

use tracing::debug;

/// Capability exposing the current bearer credential.
///
/// Contract: `get` returns `None` for an absent token, an empty stored
/// value, or an inaccessible backing store. Absence is a normal condition,
/// never an error.
pub trait TokenStore: Send + Sync {
    /// Read the current token, if any
    fn get(&self) -> Option<String>;

    /// Replace the current token
    fn set(&self, token: &str);

    /// Remove the current token
    fn clear(&self);

    /// Whether a non-empty token is currently present
    fn has_token(&self) -> bool {
        self.get().is_some()
    }
}

/// Process-wide in-memory token store
///
/// Clones share the same cell, mirroring how every part of the page sees
/// the same localStorage entry.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with a token
    pub fn with_token(token: impl Into<String>) -> Self {
        let store = Self::new();
        store.set(&token.into());
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        // A poisoned lock reads as an inaccessible store: absent, not an error.
        self.token
            .lock()
            .ok()
            .and_then(|guard| guard.clone())
            .filter(|token| !token.is_empty())
    }

    fn set(&self, token: &str) {
        if let Ok(mut guard) = self.token.lock() {
            *guard = Some(token.to_string());
            debug!("token updated");
        }
    }

    fn clear(&self) {
        if let Ok(mut guard) = self.token.lock() {
            *guard = None;
            debug!("token cleared");
        }
    }
}

// Mock implementation for testing
#[cfg(test)]
pub mod mock {
    use super::*;
    use mockall::mock;

    mock! {
        pub TokenStore {}

        impl TokenStore for TokenStore {
            fn get(&self) -> Option<String>;
            fn set(&self, token: &str);
            fn clear(&self);
        }
    }
}
