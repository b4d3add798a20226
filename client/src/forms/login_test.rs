use super::*;

#[test]
fn validate_trims_email_and_keeps_password_verbatim() {
    let form = LoginForm { email: "  a@b.com ".to_owned(), password: " pw ".to_owned() };
    assert_eq!(
        form.validate(),
        Ok(LoginPayload { email: "a@b.com".to_owned(), password: " pw ".to_owned() })
    );
}

#[test]
fn validate_requires_email() {
    let form = LoginForm { email: "   ".to_owned(), password: "pw".to_owned() };
    assert_eq!(form.validate(), Err(FormError::Required("Email")));
}

#[test]
fn validate_rejects_email_without_at() {
    let form = LoginForm { email: "alice".to_owned(), password: "pw".to_owned() };
    assert_eq!(form.validate(), Err(FormError::InvalidEmail));
}

#[test]
fn validate_requires_password() {
    let form = LoginForm { email: "a@b.com".to_owned(), password: String::new() };
    assert_eq!(form.validate(), Err(FormError::Required("Password")));
}

#[test]
fn payload_serializes_expected_fields() {
    let payload = LoginPayload { email: "a@b.com".to_owned(), password: "pw".to_owned() };
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        serde_json::json!({ "email": "a@b.com", "password": "pw" })
    );
}

#[test]
fn error_messages_are_user_facing() {
    assert_eq!(FormError::Required("Email").to_string(), "Email is required.");
    assert_eq!(FormError::InvalidEmail.to_string(), "Enter a valid email address.");
}
