//! Route guards shared by pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages that need a login or an admin role install the same redirect effect
//! so sign-out anywhere bounces the user off protected screens.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::Session;

pub fn should_redirect_unauth(session: &Session) -> bool {
    !session.is_authenticated()
}

pub fn should_redirect_non_admin(session: &Session) -> bool {
    !session.is_admin()
}

/// Redirect to `/login` whenever no user is signed in.
pub fn install_unauth_redirect<F>(session: RwSignal<Session>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if session.with(should_redirect_unauth) {
            navigate("/login", NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Redirect to `/` whenever the signed-in user is not an admin.
pub fn install_admin_redirect<F>(session: RwSignal<Session>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if session.with(should_redirect_non_admin) {
            navigate("/", NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
