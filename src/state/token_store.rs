//! Persistent storage for the session across page reloads.
//!
//! A flat key/value layer over `localStorage` with last-write-wins
//! semantics: keys `token`, `user_id`, and `email`. Requires a browser
//! environment; on the server every read comes back absent.

use crate::state::auth::Session;

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "token";
#[cfg(feature = "hydrate")]
const USER_ID_KEY: &str = "user_id";
#[cfg(feature = "hydrate")]
const EMAIL_KEY: &str = "email";

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the persisted token, if any.
pub fn token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        storage().and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Load the persisted session.
///
/// Without a token the identity fields carry no authority, so an absent
/// token yields an entirely empty session.
pub fn load() -> Session {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = storage() else {
            return Session::default();
        };
        let token = storage.get_item(TOKEN_KEY).ok().flatten();
        if token.is_none() {
            return Session::default();
        }
        Session {
            token,
            user_id: storage.get_item(USER_ID_KEY).ok().flatten(),
            email: storage.get_item(EMAIL_KEY).ok().flatten(),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Session::default()
    }
}

/// Persist the session. Absent fields are removed rather than left stale.
pub fn save(session: &Session) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = storage() else {
            return;
        };
        set_or_remove(&storage, TOKEN_KEY, session.token.as_deref());
        set_or_remove(&storage, USER_ID_KEY, session.user_id.as_deref());
        set_or_remove(&storage, EMAIL_KEY, session.email.as_deref());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

/// Remove every persisted session field.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_ID_KEY);
            let _ = storage.remove_item(EMAIL_KEY);
        }
    }
}

#[cfg(feature = "hydrate")]
fn set_or_remove(storage: &web_sys::Storage, key: &str, value: Option<&str>) {
    match value {
        Some(value) => {
            let _ = storage.set_item(key, value);
        }
        None => {
            let _ = storage.remove_item(key);
        }
    }
}
