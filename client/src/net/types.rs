//! Wire DTOs for the REST boundary.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's JSON (`_id`, camelCase) through serde
//! attributes so the rest of the client can use Rust naming.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

pub use problemset::Problem;

/// Role value that unlocks admin screens.
pub const ADMIN_ROLE: &str = "admin";

/// Authenticated user as returned by the login endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

/// Body of a successful `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub user: User,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub token: String,
}

/// Generic `{ message }` body used by register, delete, and error replies.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// A contest listing entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contest {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(alias = "contestName", default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
}

/// Body of `GET /api/get-contest`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ContestList {
    #[serde(default)]
    pub contest: Vec<Contest>,
}

/// Row of the admin user table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUser {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Body of `GET /api/admin/getuser`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AdminUserList {
    #[serde(default)]
    pub users: Vec<AdminUser>,
}
