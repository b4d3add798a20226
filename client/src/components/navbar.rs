//! Top navigation bar with section links and the user menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by `HomeLayout` on every signed-in screen. Admin-only links are
//! derived from the session passed down from `App`.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::toast_host::{notify, use_toasts};
use crate::state::session::Session;
use crate::state::toast::ToastKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
}

const SECTION_ITEMS: [NavItem; 3] = [
    NavItem { href: "/get-problem", label: "Problems" },
    NavItem { href: "/contest", label: "Compete" },
    NavItem { href: "/blog", label: "Blogs" },
];

const ADMIN_ITEMS: [NavItem; 2] = [
    NavItem { href: "/problem/new", label: "Add Problem" },
    NavItem { href: "/admin", label: "Manage Users" },
];

/// Links shown for the given role, sections first.
pub fn nav_items(is_admin: bool) -> Vec<NavItem> {
    let mut items = SECTION_ITEMS.to_vec();
    if is_admin {
        items.extend(ADMIN_ITEMS);
    }
    items
}

/// A link is active on its own path and on any nested path below it.
pub fn is_active(current_path: &str, href: &str) -> bool {
    current_path == href || current_path.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn Navbar(session: RwSignal<Session>) -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();
    let toasts = use_toasts();
    let menu_open = RwSignal::new(false);

    let on_sign_out = move |_: leptos::ev::MouseEvent| {
        menu_open.set(false);
        let token = session.with_untracked(|s| s.token.clone());
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::logout(token.as_deref()).await;
            session.update(Session::end);
            navigate("/login", NavigateOptions::default());
            match result {
                Ok(()) => notify(toasts, ToastKind::Success, "Successfully logged out"),
                Err(e) => notify(toasts, ToastKind::Error, format!("Signed out locally: {}", e.user_message())),
            }
        });
    };

    view! {
        <nav class="navbar">
            <a href="/" class="navbar__brand">"Code Practice"</a>
            <div class="navbar__links">
                {move || {
                    nav_items(session.with(Session::is_admin))
                        .into_iter()
                        .map(|item| {
                            view! {
                                <a
                                    href=item.href
                                    class="navbar__link"
                                    class:navbar__link--active=move || is_active(&location.pathname.get(), item.href)
                                >
                                    {item.label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
            <div class="navbar__user">
                <button
                    class="navbar__user-toggle"
                    class:navbar__user-toggle--open=move || menu_open.get()
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                    title="Account"
                >
                    {move || session.with(|s| s.display_name().to_owned())}
                    " ▾"
                </button>
                <ul class="navbar__menu" class:navbar__menu--hidden=move || !menu_open.get()>
                    <li class="navbar__menu-email">
                        {move || session.with(|s| s.email.clone().unwrap_or_default())}
                    </li>
                    <li class="navbar__menu-item" on:click=on_sign_out>
                        "Sign Out"
                    </li>
                </ul>
            </div>
        </nav>
    }
}
