//! Browser `localStorage` mirror of the login session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session survives reloads through three keys: `token`, `user` (JSON),
//! and `email`. Only `state::session` reads or writes them.

use crate::net::types::User;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";
pub const EMAIL_KEY: &str = "email";

/// Raw values as found in storage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoredSession {
    pub token: Option<String>,
    pub user: Option<User>,
    pub email: Option<String>,
}

/// Read the stored session. Missing or malformed entries come back as `None`.
pub fn load() -> StoredSession {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = local_storage() else {
            return StoredSession::default();
        };
        let read = |key: &str| storage.get_item(key).ok().flatten();
        StoredSession {
            token: read(TOKEN_KEY),
            user: read(USER_KEY).and_then(|raw| serde_json::from_str(&raw).ok()),
            email: read(EMAIL_KEY),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        StoredSession::default()
    }
}

/// Write every present field; absent fields are removed.
pub fn save(stored: &StoredSession) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        let user_json = stored.user.as_ref().and_then(|u| serde_json::to_string(u).ok());
        for (key, value) in [(TOKEN_KEY, stored.token.as_deref()), (USER_KEY, user_json.as_deref()), (EMAIL_KEY, stored.email.as_deref())] {
            let _ = match value {
                Some(v) => storage.set_item(key, v),
                None => storage.remove_item(key),
            };
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = stored;
    }
}

pub fn clear() {
    save(&StoredSession::default());
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}
