//! Problem list page: sortable table or card grid over the problem store.
//!
//! DESIGN
//! ======
//! Sort and view-mode state live in a `ProblemListView` owned by this page
//! and reset on every mount. Rows are derived from the store on every read;
//! nothing holds a sorted copy between renders.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use problemset::{ProblemListView, ViewMode};

use crate::components::layout::HomeLayout;
use crate::components::problem_grid::ProblemGrid;
use crate::components::problem_table::ProblemTable;
use crate::components::toast_host::{notify, use_toasts};
use crate::state::problems::ProblemsState;
use crate::state::session::Session;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::auth::install_unauth_redirect;

/// Fetch the problem collection into the shared store.
pub fn refresh_problems(problems: RwSignal<ProblemsState>, toasts: RwSignal<ToastState>) {
    problems.update(ProblemsState::begin_load);
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_problems().await.map_err(|e| e.user_message());
        if let Err(message) = &result {
            log::warn!("problem list load failed: {message}");
            notify(toasts, ToastKind::Error, format!("Could not load problems: {message}"));
        }
        problems.update(|p| p.finish_load(result));
    });
}

#[component]
pub fn ProblemsPage(session: RwSignal<Session>) -> impl IntoView {
    install_unauth_redirect(session, use_navigate());

    let problems = expect_context::<RwSignal<ProblemsState>>();
    let toasts = use_toasts();
    if problems.with_untracked(ProblemsState::needs_fetch) {
        refresh_problems(problems, toasts);
    }

    let list = RwSignal::new(ProblemListView::default());
    let view_mode = Memo::new(move |_| list.with(|l| l.view_mode));
    let rows = Signal::derive(move || problems.with(|p| list.with(|l| l.ordering(&p.items))));
    let has_rows = move || problems.with(|p| !p.is_empty());

    view! {
        <HomeLayout session>
            <section class="problem-list">
                <h2 class="page-title">"Problem Set"</h2>
                <Show when=has_rows fallback=move || view! { <ListPlaceholder problems toasts/> }>
                    <div class="problem-list__toolbar">
                        <button
                            class="btn btn--toggle"
                            on:click=move |_| list.update(ProblemListView::toggle_view_mode)
                        >
                            {move || view_mode.get().toggle_label()}
                        </button>
                    </div>
                    {move || match view_mode.get() {
                        ViewMode::Table => view! { <ProblemTable list rows/> }.into_any(),
                        ViewMode::Grid => view! { <ProblemGrid rows/> }.into_any(),
                    }}
                </Show>
            </section>
        </HomeLayout>
    }
}

/// Shown while the store is empty: a retry prompt after a failed load,
/// otherwise the loading text.
#[component]
fn ListPlaceholder(problems: RwSignal<ProblemsState>, toasts: RwSignal<ToastState>) -> impl IntoView {
    move || match problems.with(|p| p.empty_after_failure().map(str::to_owned)) {
        Some(message) => view! {
            <div class="empty-state">
                <p class="empty-state__error">{format!("Could not load problems: {message}")}</p>
                <button class="btn btn--primary" on:click=move |_| refresh_problems(problems, toasts)>
                    "Retry"
                </button>
            </div>
        }
        .into_any(),
        None => view! { <div class="loading">"Loading..."</div> }.into_any(),
    }
}
