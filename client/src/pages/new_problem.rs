//! Admin-only add-problem page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::layout::HomeLayout;
use crate::components::problem_form::ProblemFormView;
use crate::state::session::Session;
use crate::util::auth::install_admin_redirect;

#[component]
pub fn NewProblemPage(session: RwSignal<Session>) -> impl IntoView {
    install_admin_redirect(session, use_navigate());

    view! {
        <HomeLayout session>
            <section class="editor-page">
                <h2 class="page-title">"Add Problem"</h2>
                <ProblemFormView session/>
            </section>
        </HomeLayout>
    }
}
