use super::*;

fn user(role: &str) -> User {
    User { id: "u1".to_owned(), name: "Alice".to_owned(), email: "alice@x.io".to_owned(), role: role.to_owned() }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_session_is_anonymous() {
    let session = Session::default();
    assert!(!session.is_authenticated());
    assert!(!session.is_admin());
    assert_eq!(session.token(), None);
    assert_eq!(session.display_name(), "Coder");
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn begin_populates_user_and_token() {
    let mut session = Session::default();
    session.begin(user("user"), "tok".to_owned(), "alice@x.io".to_owned());
    assert!(session.is_authenticated());
    assert_eq!(session.token(), Some("tok"));
    assert_eq!(session.email.as_deref(), Some("alice@x.io"));
    assert_eq!(session.display_name(), "Alice");
}

#[test]
fn begin_with_empty_token_stores_none() {
    let mut session = Session::default();
    session.begin(user("user"), String::new(), "alice@x.io".to_owned());
    assert_eq!(session.token(), None);
}

#[test]
fn end_clears_everything() {
    let mut session = Session::default();
    session.begin(user("admin"), "tok".to_owned(), "alice@x.io".to_owned());
    session.end();
    assert_eq!(session, Session::default());
}

#[test]
fn admin_role_is_detected() {
    let mut session = Session::default();
    session.begin(user("admin"), "tok".to_owned(), "alice@x.io".to_owned());
    assert!(session.is_admin());
}

#[test]
fn blank_name_falls_back_to_coder() {
    let mut u = user("user");
    u.name = "  ".to_owned();
    let session = Session { user: Some(u), ..Session::default() };
    assert_eq!(session.display_name(), "Coder");
}

// =============================================================
// Restore
// =============================================================

#[test]
fn from_stored_drops_blank_token() {
    let stored = StoredSession { token: Some(" ".to_owned()), user: Some(user("user")), email: None };
    let session = Session::from_stored(stored);
    assert_eq!(session.token(), None);
    assert!(session.is_authenticated());
}

#[test]
fn from_stored_uses_user_email_when_key_missing() {
    let stored = StoredSession { token: Some("t".to_owned()), user: Some(user("user")), email: None };
    assert_eq!(Session::from_stored(stored).email.as_deref(), Some("alice@x.io"));
}

#[test]
fn from_stored_without_user_is_anonymous() {
    let stored = StoredSession { token: Some("t".to_owned()), user: None, email: Some("a@b.c".to_owned()) };
    let session = Session::from_stored(stored);
    assert!(!session.is_authenticated());
    assert_eq!(session.token(), Some("t"));
}

#[test]
fn restore_on_host_is_anonymous() {
    assert_eq!(Session::restore(), Session::default());
}
