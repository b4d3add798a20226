use super::*;
use crate::net::types::User;

#[test]
fn anonymous_visitor_is_welcomed_as_coder() {
    assert_eq!(welcome_message(&Session::default()), "Welcome, Coder");
}

#[test]
fn signed_in_user_is_welcomed_by_name() {
    let session = Session {
        user: Some(User {
            id: "u1".to_owned(),
            name: "Grace".to_owned(),
            email: "grace@x.io".to_owned(),
            role: "user".to_owned(),
        }),
        token: Some("tok".to_owned()),
        email: Some("grace@x.io".to_owned()),
    };
    assert_eq!(welcome_message(&session), "Welcome, Grace");
}
