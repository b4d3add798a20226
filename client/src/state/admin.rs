//! Admin user-management table state.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use crate::net::types::AdminUser;

#[derive(Clone, Debug, Default)]
pub struct AdminUsersState {
    pub users: Vec<AdminUser>,
    pub loading: bool,
    /// Id of the row whose delete request is in flight.
    pub deleting: Option<String>,
}

impl AdminUsersState {
    /// Drop a user after the backend confirmed the delete.
    pub fn remove(&mut self, user_id: &str) {
        self.users.retain(|u| u.id != user_id);
        if self.deleting.as_deref() == Some(user_id) {
            self.deleting = None;
        }
    }
}
