//! Sortable problem table.
//!
//! Each header click calls `ProblemListView::request_sort`; the rows come
//! from the caller's derived ordering.

#[cfg(test)]
#[path = "problem_table_test.rs"]
mod problem_table_test;

use leptos::prelude::*;
use problemset::{Problem, ProblemListView, SortKey};

use crate::components::difficulty_badge::DifficultyBadge;

pub fn header_class(list: &ProblemListView, column: SortKey) -> String {
    match list.header_class(column) {
        Some(direction) => format!("problem-table__head problem-table__head--{direction}"),
        None => "problem-table__head".to_owned(),
    }
}

#[component]
pub fn ProblemTable(list: RwSignal<ProblemListView>, rows: Signal<Vec<Problem>>) -> impl IntoView {
    view! {
        <div class="problem-table__wrap">
            <table class="problem-table">
                <thead>
                    <tr>
                        {SortKey::COLUMNS
                            .into_iter()
                            .map(|column| view! { <SortHeader column list/> })
                            .collect::<Vec<_>>()}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        rows.get()
                            .into_iter()
                            .map(|problem| {
                                let href = format!("/get-problem/{}", problem.id);
                                view! {
                                    <tr class="problem-table__row">
                                        <td>
                                            <a href=href class="problem-table__link">{problem.problem_name}</a>
                                        </td>
                                        <td>{problem.marks}</td>
                                        <td>{problem.submissions}</td>
                                        <td>
                                            <DifficultyBadge difficulty=problem.difficulty/>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn SortHeader(column: SortKey, list: RwSignal<ProblemListView>) -> impl IntoView {
    view! {
        <th
            data-field=column.field()
            class=move || list.with(|l| header_class(l, column))
            on:click=move |_| list.update(|l| l.request_sort(column))
        >
            {column.header()}
            " "
            <span class="problem-table__sort-icon">{move || list.with(|l| l.icon_for(column)).glyph()}</span>
        </th>
    }
}
