use super::*;
use crate::net::types::User;

fn session_with_role(role: &str) -> Session {
    Session {
        user: Some(User { id: "u1".to_owned(), name: "Alice".to_owned(), email: "a@x.io".to_owned(), role: role.to_owned() }),
        token: Some("t".to_owned()),
        email: Some("a@x.io".to_owned()),
    }
}

#[test]
fn anonymous_session_is_redirected_everywhere() {
    let session = Session::default();
    assert!(should_redirect_unauth(&session));
    assert!(should_redirect_non_admin(&session));
}

#[test]
fn regular_user_passes_login_guard_only() {
    let session = session_with_role("user");
    assert!(!should_redirect_unauth(&session));
    assert!(should_redirect_non_admin(&session));
}

#[test]
fn admin_passes_both_guards() {
    let session = session_with_role("admin");
    assert!(!should_redirect_unauth(&session));
    assert!(!should_redirect_non_admin(&session));
}
