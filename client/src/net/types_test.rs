use super::*;

// =============================================================
// User
// =============================================================

#[test]
fn user_deserializes_mongo_id() {
    let user: User =
        serde_json::from_str(r#"{"_id":"u1","name":"Alice","email":"a@b.com","role":"admin"}"#).unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.email, "a@b.com");
    assert!(user.is_admin());
}

#[test]
fn user_missing_role_is_not_admin() {
    let user: User = serde_json::from_str(r#"{"_id":"u1","name":"Bob"}"#).unwrap();
    assert!(user.role.is_empty());
    assert!(!user.is_admin());
}

#[test]
fn user_round_trips_through_storage_json() {
    let user = User { id: "u1".to_owned(), name: "Ann".to_owned(), email: "ann@x.io".to_owned(), role: "user".to_owned() };
    let raw = serde_json::to_string(&user).unwrap();
    assert!(raw.contains("\"_id\":\"u1\""));
    assert_eq!(serde_json::from_str::<User>(&raw).unwrap(), user);
}

// =============================================================
// Auth responses
// =============================================================

#[test]
fn login_response_reads_user_message_and_token() {
    let body = r#"{"user":{"_id":"u1","name":"A","email":"a@b.c","role":"user"},"message":"Login successfully","token":"t-1"}"#;
    let resp: LoginResponse = serde_json::from_str(body).unwrap();
    assert_eq!(resp.user.name, "A");
    assert_eq!(resp.message, "Login successfully");
    assert_eq!(resp.token, "t-1");
}

#[test]
fn message_response_tolerates_missing_message() {
    let resp: MessageResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(resp.message, None);
}

// =============================================================
// Contests
// =============================================================

#[test]
fn contest_accepts_contest_name_alias() {
    let body = r#"{"_id":"c1","contestName":"Weekly 1","description":"d","startDate":"2024-01-01T10:00","endDate":"2024-01-01T12:00"}"#;
    let contest: Contest = serde_json::from_str(body).unwrap();
    assert_eq!(contest.name, "Weekly 1");
    assert_eq!(contest.start_date, "2024-01-01T10:00");
    assert_eq!(contest.end_date, "2024-01-01T12:00");
}

#[test]
fn contest_list_defaults_to_empty() {
    let list: ContestList = serde_json::from_str("{}").unwrap();
    assert!(list.contest.is_empty());
}

// =============================================================
// Admin users
// =============================================================

#[test]
fn admin_user_list_parses_users() {
    let body = r#"{"users":[{"_id":"1","name":"A","email":"a@x"},{"_id":"2","name":"B","email":"b@x"}]}"#;
    let list: AdminUserList = serde_json::from_str(body).unwrap();
    assert_eq!(list.users.len(), 2);
    assert_eq!(list.users[1].id, "2");
}
