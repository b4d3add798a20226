//! Card grid rendering of the problem list.

use leptos::prelude::*;
use problemset::{Problem, truncate_description};

use crate::components::difficulty_badge::DifficultyBadge;

#[component]
pub fn ProblemGrid(rows: Signal<Vec<Problem>>) -> impl IntoView {
    view! {
        <div class="problem-grid">
            {move || {
                rows.get()
                    .into_iter()
                    .map(|problem| {
                        let href = format!("/get-problem/{}", problem.id);
                        let summary = truncate_description(&problem.description);
                        view! {
                            <div class="problem-card">
                                <h3 class="problem-card__title">
                                    <a href=href>{problem.problem_name}</a>
                                </h3>
                                <p class="problem-card__description">{summary}</p>
                                <div class="problem-card__info">
                                    <span>"Difficulty: " <DifficultyBadge difficulty=problem.difficulty/></span>
                                    <span>{format!("Submissions: {}", problem.submissions)}</span>
                                    <span>{format!("Marks: {}", problem.marks)}</span>
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
