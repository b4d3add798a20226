//! Admin user-management page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::toast_host::{notify, use_toasts};
use crate::net::types::AdminUser;
use crate::state::admin::AdminUsersState;
use crate::state::session::Session;
use crate::state::toast::ToastKind;
use crate::util::auth::install_admin_redirect;

#[component]
pub fn AdminPage(session: RwSignal<Session>) -> impl IntoView {
    install_admin_redirect(session, use_navigate());

    let state = RwSignal::new(AdminUsersState { loading: true, ..AdminUsersState::default() });
    let toasts = use_toasts();

    if session.with_untracked(Session::is_admin) {
        let token = session.with_untracked(|s| s.token.clone());
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_admin_users(token.as_deref()).await {
                Ok(users) => state.update(|s| {
                    s.users = users;
                    s.loading = false;
                }),
                Err(e) => {
                    log::warn!("user list load failed: {e}");
                    state.update(|s| s.loading = false);
                    notify(toasts, ToastKind::Error, e.user_message());
                }
            }
        });
    }

    let on_delete = Callback::new(move |user_id: String| {
        if state.with_untracked(|s| s.deleting.is_some()) {
            return;
        }
        state.update(|s| s.deleting = Some(user_id.clone()));
        let token = session.with_untracked(|s| s.token.clone());
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_user(&user_id, token.as_deref()).await {
                Ok(message) => {
                    log::info!("deleted user {user_id}");
                    state.update(|s| s.remove(&user_id));
                    notify(toasts, ToastKind::Success, message);
                }
                Err(e) => {
                    log::warn!("delete user {user_id} failed: {e}");
                    state.update(|s| s.deleting = None);
                    notify(toasts, ToastKind::Error, e.user_message());
                }
            }
        });
    });

    let rows = move || {
        state.with(|s| {
            if s.users.is_empty() {
                let text = if s.loading { "Loading..." } else { "No users found" };
                return view! {
                    <tr>
                        <td colspan="3" class="admin-table__empty">{text}</td>
                    </tr>
                }
                .into_any();
            }
            s.users
                .iter()
                .cloned()
                .map(|user| user_row(user, state, on_delete))
                .collect::<Vec<_>>()
                .into_any()
        })
    };

    view! {
        <div class="admin-page">
            <div class="admin-page__header">
                <h2 class="page-title">"Manage Users"</h2>
                <a href="/" class="btn btn--primary">"Back to Home"</a>
            </div>
            <table class="admin-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th class="admin-table__action">"Action"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}

fn user_row(user: AdminUser, state: RwSignal<AdminUsersState>, on_delete: Callback<String>) -> impl IntoView {
    let id = user.id.clone();
    let busy_id = user.id.clone();
    view! {
        <tr class="admin-table__row">
            <td>{user.name}</td>
            <td>{user.email}</td>
            <td class="admin-table__action">
                <button
                    class="btn btn--danger"
                    disabled=move || state.with(|s| s.deleting.as_deref() == Some(busy_id.as_str()))
                    on:click=move |_| on_delete.run(id.clone())
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
