//! Login session for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root component owns one `RwSignal<Session>` and passes it down as a
//! prop to the pages and the navbar. The session is populated at login,
//! cleared at logout, and mirrored to `localStorage` in between.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;
use crate::util::session_storage::{self, StoredSession};

/// Name shown in the welcome banner when nobody is logged in.
pub const FALLBACK_DISPLAY_NAME: &str = "Coder";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub user: Option<User>,
    pub token: Option<String>,
    pub email: Option<String>,
}

impl Session {
    /// Rebuild the session persisted by a previous page load.
    pub fn restore() -> Self {
        let session = Self::from_stored(session_storage::load());
        if session.is_authenticated() {
            log::info!("restored session for {}", session.display_name());
        }
        session
    }

    pub(crate) fn from_stored(stored: StoredSession) -> Self {
        let non_empty = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        let user = stored.user;
        let email = non_empty(stored.email).or_else(|| user.as_ref().map(|u| u.email.clone()).filter(|e| !e.is_empty()));
        Self { user, token: non_empty(stored.token), email }
    }

    /// Start a session after a successful login.
    pub fn begin(&mut self, user: User, token: String, email: String) {
        let token = Some(token).filter(|t| !t.is_empty());
        log::info!("session started for {}", user.email);
        *self = Self { user: Some(user), token, email: Some(email) };
        session_storage::save(&self.to_stored());
    }

    /// Drop the session from memory and storage.
    pub fn end(&mut self) {
        log::info!("session ended");
        *self = Self::default();
        session_storage::clear();
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn display_name(&self) -> &str {
        self.user
            .as_ref()
            .map(|u| u.name.trim())
            .filter(|name| !name.is_empty())
            .unwrap_or(FALLBACK_DISPLAY_NAME)
    }

    fn to_stored(&self) -> StoredSession {
        StoredSession { token: self.token.clone(), user: self.user.clone(), email: self.email.clone() }
    }
}
