//! `localStorage`-backed bearer token slot.
//!
//! TRADE-OFFS
//! ==========
//! Storage access is best-effort browser-only behavior. Private-mode or
//! disabled storage reads as "no token" and writes are dropped; SSR paths
//! no-op so server rendering always sees a signed-out, still-loading tab.
//! The slot is shared by every tab of the origin, but changes made by another
//! tab are only noticed on this tab's next mount or refresh.

use session::TokenStore;

/// Token store over `window.localStorage[key]`.
#[derive(Clone, Debug)]
pub struct BrowserTokenStore {
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    key: String,
}

impl BrowserTokenStore {
    pub fn new(key: &str) -> Self {
        Self { key: key.to_owned() }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl TokenStore for BrowserTokenStore {
    fn get(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let raw = local_storage()?.get_item(&self.key).ok().flatten();
            session::token::non_empty(raw)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                if storage.set_item(&self.key, token).is_err() {
                    log::warn!("auth: failed to persist token");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(&self.key);
            }
        }
    }
}
