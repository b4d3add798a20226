//! Landing route: the layout shell renders the welcome banner on `/`.

use leptos::prelude::*;

use crate::components::layout::HomeLayout;
use crate::state::session::Session;

#[component]
pub fn HomePage(session: RwSignal<Session>) -> impl IntoView {
    view! { <HomeLayout session/> }
}
