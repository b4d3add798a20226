//! Contest page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Admins get the contest editor plus the problem editor; problems created
//! here are attached to the pending contest. Everyone else sees upcoming and
//! previous contests bucketed against the current time.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use problemset::Problem;

use crate::components::layout::HomeLayout;
use crate::components::problem_form::ProblemFormView;
use crate::components::toast_host::{notify, use_toasts};
use crate::forms::contest::ContestForm;
use crate::net::types::Contest;
use crate::state::contests::{ContestsState, format_contest_time, partition_contests};
use crate::state::session::Session;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::auth::install_unauth_redirect;

fn load_contests(contests: RwSignal<ContestsState>, toasts: RwSignal<ToastState>) {
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_contests().await {
            Ok(items) => {
                log::debug!("loaded {} contests", items.len());
                contests.update(|c| {
                    c.items = items;
                    c.loading = false;
                });
            }
            Err(e) => {
                log::warn!("contest list load failed: {e}");
                contests.update(|c| c.loading = false);
                notify(toasts, ToastKind::Error, format!("Could not load contests: {}", e.user_message()));
            }
        }
    });
}

#[component]
pub fn ContestPage(session: RwSignal<Session>) -> impl IntoView {
    install_unauth_redirect(session, use_navigate());

    let contests = RwSignal::new(ContestsState::default());
    let toasts = use_toasts();
    load_contests(contests, toasts);

    view! {
        <HomeLayout session>
            <section class="contest-page">
                <h2 class="page-title">"Contest Page"</h2>
                <Show when=move || !contests.with(|c| c.loading) fallback=|| view! { <div class="loading">"Loading..."</div> }>
                    <Show
                        when=move || session.with(Session::is_admin)
                        fallback=move || view! { <ContestBoard contests/> }
                    >
                        <ContestEditor session contests/>
                    </Show>
                </Show>
                <footer class="contest-page__footer">
                    <p>"Explore more contests and challenges!"</p>
                </footer>
            </section>
        </HomeLayout>
    }
}

#[component]
fn ContestEditor(session: RwSignal<Session>, contests: RwSignal<ContestsState>) -> impl IntoView {
    let form = RwSignal::new(ContestForm::default());
    let busy = RwSignal::new(false);
    let toasts = use_toasts();

    let on_problem_created = Callback::new(move |problem: Problem| form.update(|f| f.add_problem(&problem.id)));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let payload = match form.with_untracked(ContestForm::validate) {
            Ok(payload) => payload,
            Err(e) => {
                notify(toasts, ToastKind::Error, e.to_string());
                return;
            }
        };
        busy.set(true);
        let token = session.with_untracked(|s| s.token.clone());
        leptos::task::spawn_local(async move {
            let result = crate::net::api::create_contest(&payload, token.as_deref()).await;
            busy.set(false);
            match result {
                Ok(()) => {
                    log::info!("created contest {}", payload.contest_name);
                    form.set(ContestForm::default());
                    notify(toasts, ToastKind::Success, "Contest created");
                    load_contests(contests, toasts);
                }
                Err(e) => {
                    log::warn!("create contest failed: {e}");
                    notify(toasts, ToastKind::Error, format!("Failed to create contest: {}", e.user_message()));
                }
            }
        });
    };

    view! {
        <form class="contest-form" on:submit=on_submit>
            <input
                class="form-field__input"
                type="text"
                placeholder="Contest Name"
                required
                prop:value=move || form.with(|f| f.name.clone())
                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
            />
            <textarea
                class="form-field__input form-field__input--multiline"
                placeholder="Contest Description"
                prop:value=move || form.with(|f| f.description.clone())
                on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
            ></textarea>
            <input
                class="form-field__input"
                type="datetime-local"
                required
                prop:value=move || form.with(|f| f.start_date.clone())
                on:input=move |ev| form.update(|f| f.start_date = event_target_value(&ev))
            />
            <input
                class="form-field__input"
                type="datetime-local"
                required
                prop:value=move || form.with(|f| f.end_date.clone())
                on:input=move |ev| form.update(|f| f.end_date = event_target_value(&ev))
            />
            <p class="contest-form__problems">
                {move || form.with(|f| format!("Problems attached: {}", f.problems.len()))}
            </p>
            <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                "Create Contest"
            </button>
        </form>
        <ProblemFormView session on_created=on_problem_created/>
    }
}

#[component]
fn ContestBoard(contests: RwSignal<ContestsState>) -> impl IntoView {
    let buckets = move || contests.with(|c| partition_contests(&c.items, chrono::Utc::now()));

    view! {
        <div class="contest-grid">
            <div class="contest-card">
                <h3 class="contest-card__title">"Upcoming Contests"</h3>
                {move || buckets().upcoming.into_iter().map(upcoming_entry).collect::<Vec<_>>()}
            </div>
            <div class="contest-card">
                <h3 class="contest-card__title">"Previous Contests"</h3>
                <ul class="contest-card__list">
                    {move || buckets().previous.into_iter().map(previous_entry).collect::<Vec<_>>()}
                </ul>
            </div>
        </div>
    }
}

fn upcoming_entry(contest: Contest) -> impl IntoView {
    view! {
        <div class="contest-entry">
            <h4 class="contest-entry__name">{contest.name}</h4>
            <p class="contest-entry__description">{contest.description}</p>
            <p class="contest-entry__date">{format!("Start: {}", format_contest_time(&contest.start_date))}</p>
            <p class="contest-entry__date">{format!("End: {}", format_contest_time(&contest.end_date))}</p>
        </div>
    }
}

fn previous_entry(contest: Contest) -> impl IntoView {
    view! {
        <li class="contest-entry contest-entry--previous">
            <span class="contest-entry__name">{contest.name}</span>
            <span class="contest-entry__date">{format!("End: {}", format_contest_time(&contest.end_date))}</span>
        </li>
    }
}
