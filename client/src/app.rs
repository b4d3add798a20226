//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_host::ToastHost;
use crate::pages::{
    admin::AdminPage, blogs::BlogsPage, contest::ContestPage, home::HomePage, login::LoginPage,
    new_problem::NewProblemPage, problem_detail::ProblemDetailPage, problems::ProblemsPage,
    problems::refresh_problems, register::RegisterPage,
};
use crate::state::{problems::ProblemsState, session::Session, toast::ToastState};

/// Root application component.
///
/// Owns the session (restored from browser storage) and passes it to every
/// route. The problem store and toast queue are shared through context; the
/// problem collection is fetched once on mount.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(Session::restore());
    let problems = RwSignal::new(ProblemsState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(problems);
    provide_context(toasts);

    refresh_problems(problems, toasts);

    view! {
        <Title text="Code Practice"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=move || view! { <HomePage session/> }/>
                <Route path=StaticSegment("login") view=move || view! { <LoginPage session/> }/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("get-problem") view=move || view! { <ProblemsPage session/> }/>
                <Route
                    path=(StaticSegment("get-problem"), ParamSegment("id"))
                    view=move || view! { <ProblemDetailPage session/> }
                />
                <Route
                    path=(StaticSegment("problem"), StaticSegment("new"))
                    view=move || view! { <NewProblemPage session/> }
                />
                <Route path=StaticSegment("contest") view=move || view! { <ContestPage session/> }/>
                <Route path=StaticSegment("blog") view=move || view! { <BlogsPage session/> }/>
                <Route path=StaticSegment("admin") view=move || view! { <AdminPage session/> }/>
            </Routes>
            <ToastHost/>
        </Router>
    }
}
