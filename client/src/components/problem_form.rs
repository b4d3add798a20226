//! New-problem editor shared by the add-problem and contest pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submits through `api::create_problem`, inserts the stored record into the
//! problem store, and reports the new record to the optional `on_created`
//! callback so the contest editor can attach it.

use leptos::prelude::*;
use problemset::Problem;

use crate::components::toast_host::{notify, use_toasts};
use crate::forms::problem::{ProblemForm, TestCaseField};
use crate::state::problems::ProblemsState;
use crate::state::session::Session;
use crate::state::toast::ToastKind;

type Getter = fn(&ProblemForm) -> &str;
type Setter = fn(&mut ProblemForm, String);

const DIFFICULTIES: [&str; 3] = ["Easy", "Medium", "Hard"];

#[component]
pub fn ProblemFormView(
    session: RwSignal<Session>,
    #[prop(optional)] on_created: Option<Callback<Problem>>,
) -> impl IntoView {
    let form = RwSignal::new(ProblemForm::default());
    let busy = RwSignal::new(false);
    let problems = expect_context::<RwSignal<ProblemsState>>();
    let toasts = use_toasts();
    let row_count = Memo::new(move |_| form.with(|f| f.hidden_test_cases.len()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let payload = match form.with_untracked(ProblemForm::validate) {
            Ok(payload) => payload,
            Err(e) => {
                notify(toasts, ToastKind::Error, e.to_string());
                return;
            }
        };
        busy.set(true);
        let token = session.with_untracked(|s| s.token.clone());
        leptos::task::spawn_local(async move {
            let result = crate::net::api::create_problem(&payload, token.as_deref()).await;
            busy.set(false);
            match result {
                Ok(created) => {
                    log::info!("created problem {}", created.id);
                    problems.update(|p| p.add_problem(created.clone()));
                    form.set(ProblemForm::default());
                    notify(toasts, ToastKind::Success, "Problem Added Successfully!");
                    if let Some(callback) = on_created {
                        callback.run(created);
                    }
                }
                Err(e) => {
                    log::warn!("create problem failed: {e}");
                    notify(toasts, ToastKind::Error, format!("Failed to add problem: {}", e.user_message()));
                }
            }
        });
    };

    view! {
        <form class="problem-form" on:submit=on_submit>
            {text_input(form, "Problem Name", |f| &f.problem_name, |f, v| f.problem_name = v)}
            {text_area(form, "Description", |f| &f.description, |f, v| f.description = v)}
            <label class="form-field">
                <span class="form-field__label">"Difficulty"</span>
                <select
                    class="form-field__input"
                    prop:value=move || form.with(|f| f.difficulty.clone())
                    on:change=move |ev| form.update(|f| f.difficulty = event_target_value(&ev))
                >
                    <option value="">"Select difficulty"</option>
                    {DIFFICULTIES
                        .into_iter()
                        .map(|d| view! { <option value=d>{d}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            {number_input(form, "Submissions", |f| &f.submissions, |f, v| f.submissions = v)}
            {number_input(form, "Marks", |f| &f.marks, |f, v| f.marks = v)}
            {text_input(form, "Author", |f| &f.author, |f, v| f.author = v)}
            {text_area(form, "Constraints", |f| &f.constraints, |f, v| f.constraints = v)}
            {text_area(form, "Input Format", |f| &f.input_format, |f, v| f.input_format = v)}
            {text_area(form, "Output Format", |f| &f.output_format, |f, v| f.output_format = v)}
            {text_area(form, "Sample Input", |f| &f.sample_input, |f, v| f.sample_input = v)}
            {text_area(form, "Sample Output", |f| &f.sample_output, |f, v| f.sample_output = v)}
            {text_area(form, "Explanation", |f| &f.explanation, |f, v| f.explanation = v)}

            <fieldset class="problem-form__tests">
                <legend>"Hidden Test Cases"</legend>
                {move || (0..row_count.get()).map(|index| test_case_row(form, index)).collect::<Vec<_>>()}
                <button
                    type="button"
                    class="btn btn--secondary"
                    on:click=move |_| form.update(ProblemForm::add_test_case)
                >
                    "Add Test Case"
                </button>
            </fieldset>

            <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                "Add Problem"
            </button>
        </form>
    }
}

fn text_input(form: RwSignal<ProblemForm>, label: &'static str, get: Getter, set: Setter) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <input
                class="form-field__input"
                type="text"
                prop:value=move || form.with(|f| get(f).to_owned())
                on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
            />
        </label>
    }
}

fn number_input(form: RwSignal<ProblemForm>, label: &'static str, get: Getter, set: Setter) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <input
                class="form-field__input"
                type="number"
                min="0"
                prop:value=move || form.with(|f| get(f).to_owned())
                on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
            />
        </label>
    }
}

fn text_area(form: RwSignal<ProblemForm>, label: &'static str, get: Getter, set: Setter) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <textarea
                class="form-field__input form-field__input--multiline"
                prop:value=move || form.with(|f| get(f).to_owned())
                on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
            ></textarea>
        </label>
    }
}

fn test_case_row(form: RwSignal<ProblemForm>, index: usize) -> impl IntoView {
    let cell = move |field: TestCaseField| {
        form.with(|f| {
            f.hidden_test_cases
                .get(index)
                .map(|row| match field {
                    TestCaseField::Input => row.input.clone(),
                    TestCaseField::ExpectedOutput => row.expected_output.clone(),
                })
                .unwrap_or_default()
        })
    };

    view! {
        <div class="problem-form__test-row">
            <textarea
                class="form-field__input"
                placeholder="Input"
                prop:value=move || cell(TestCaseField::Input)
                on:input=move |ev| form.update(|f| f.set_test_case(index, TestCaseField::Input, event_target_value(&ev)))
            ></textarea>
            <textarea
                class="form-field__input"
                placeholder="Expected Output"
                prop:value=move || cell(TestCaseField::ExpectedOutput)
                on:input=move |ev| {
                    form.update(|f| f.set_test_case(index, TestCaseField::ExpectedOutput, event_target_value(&ev)));
                }
            ></textarea>
        </div>
    }
}
