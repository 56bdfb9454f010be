//! Bearer token persistence in browser `localStorage`.
//!
//! TRADE-OFFS
//! ==========
//! Storage is browser-only; SSR paths report no token so server renders stay
//! in the pending auth state until hydration reads the real value.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

/// Storage key shared with any other tab of the app.
pub const TOKEN_KEY: &str = "token";

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Treat blank stored values as absent.
#[cfg(any(test, feature = "hydrate"))]
fn normalize_token(raw: Option<String>) -> Option<String> {
    raw.map(|t| t.trim().to_owned()).filter(|t| !t.is_empty())
}

/// Read the stored bearer token, if any.
pub fn load_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let raw = storage()?.get_item(TOKEN_KEY).ok().flatten();
        normalize_token(raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the bearer token for later page loads.
pub fn save_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage()
            && storage.set_item(TOKEN_KEY, token).is_err()
        {
            log::warn!("failed to persist auth token");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Forget the stored bearer token.
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
