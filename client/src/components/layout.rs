//! Page shell: navbar plus the welcome banner on the home route.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::navbar::Navbar;
use crate::state::session::Session;

pub fn welcome_message(session: &Session) -> String {
    format!("Welcome, {}", session.display_name())
}

#[component]
pub fn HomeLayout(session: RwSignal<Session>, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    let location = use_location();
    let is_home = move || location.pathname.get() == "/";

    view! {
        <Navbar session/>
        <Show when=is_home>
            <section class="home-hero">
                <div class="home-hero__card">
                    <h2 class="home-hero__title">{move || session.with(welcome_message)}</h2>
                    <p class="home-hero__tagline">"Make it work, make it right, make it fast"</p>
                    <a href="/get-problem" class="btn btn--practice">
                        "Practice"
                    </a>
                    <Show when=move || session.with(Session::is_admin)>
                        <a href="/admin" class="btn btn--admin">
                            "Go To Admin"
                        </a>
                    </Show>
                </div>
            </section>
        </Show>
        <main class="page-body">{children.map(|c| c())}</main>
    }
}
