//! Single-problem page resolved from the store by route id.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use problemset::Problem;

use crate::components::difficulty_badge::DifficultyBadge;
use crate::components::layout::HomeLayout;
use crate::state::problems::ProblemsState;
use crate::state::session::Session;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn ProblemDetailPage(session: RwSignal<Session>) -> impl IntoView {
    install_unauth_redirect(session, use_navigate());

    let params = use_params_map();
    let problems = expect_context::<RwSignal<ProblemsState>>();

    let body = move || {
        let id = params.with(|p| p.get("id").unwrap_or_default());
        problems.with(|store| match store.find(&id) {
            Some(problem) => problem_view(problem.clone()).into_any(),
            None if store.loading => view! { <div class="loading">"Loading..."</div> }.into_any(),
            None => view! { <div class="empty-state">"Problem not found."</div> }.into_any(),
        })
    };

    view! {
        <HomeLayout session>
            <article class="problem-detail">{body}</article>
        </HomeLayout>
    }
}

fn problem_view(problem: Problem) -> impl IntoView {
    let sections = [
        ("Description", problem.description),
        ("Constraints", problem.constraints),
        ("Input Format", problem.input_format),
        ("Output Format", problem.output_format),
        ("Sample Input", problem.sample_input),
        ("Sample Output", problem.sample_output),
        ("Explanation", problem.explanation),
    ];

    view! {
        <header class="problem-detail__header">
            <h2 class="problem-detail__title">{problem.problem_name}</h2>
            <DifficultyBadge difficulty=problem.difficulty/>
            <span class="problem-detail__meta">{format!("Marks: {}", problem.marks)}</span>
            <span class="problem-detail__meta">{format!("Submissions: {}", problem.submissions)}</span>
            <span class="problem-detail__meta">{format!("Author: {}", problem.author)}</span>
        </header>
        {sections
            .into_iter()
            .filter(|(_, text)| !text.trim().is_empty())
            .map(|(title, text)| {
                view! {
                    <section class="problem-detail__section">
                        <h3>{title}</h3>
                        <pre class="problem-detail__text">{text}</pre>
                    </section>
                }
            })
            .collect::<Vec<_>>()}
    }
}
