//! localStorage-backed token store for wasm32 builds

use web_sys::Storage;

use crate::token::TokenStore;

/// Well-known localStorage key holding the bearer token
pub const TOKEN_KEY: &str = "token";

/// Token store over the browser's localStorage
///
/// Reads the same `token` entry the login/logout views write. An
/// inaccessible storage area (sandboxed frames, disabled cookies) reads as
/// an absent token.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

impl BrowserTokenStore {
    pub fn new() -> Self {
        Self
    }
}

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

impl TokenStore for BrowserTokenStore {
    fn get(&self) -> Option<String> {
        local_storage()
            .and_then(|storage| storage.get_item(TOKEN_KEY).ok().flatten())
            .filter(|token| !token.is_empty())
    }

    fn set(&self, token: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
