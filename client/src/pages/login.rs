//! Login page with a Login / Signup toggle.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::toast_host::{notify, use_toasts};
use crate::forms::login::LoginForm;
use crate::pages::register::RegisterFields;
use crate::state::session::Session;
use crate::state::toast::ToastKind;

#[component]
pub fn LoginPage(session: RwSignal<Session>) -> impl IntoView {
    let show_login = RwSignal::new(true);

    view! {
        <div class="auth-page">
            <div class="auth-tabs">
                <button
                    class="auth-tab"
                    class:auth-tab--active=move || show_login.get()
                    on:click=move |_| show_login.set(true)
                >
                    "Login"
                </button>
                <button
                    class="auth-tab"
                    class:auth-tab--active=move || !show_login.get()
                    on:click=move |_| show_login.set(false)
                >
                    "Signup"
                </button>
            </div>
            <div class="auth-card">
                <Show
                    when=move || show_login.get()
                    fallback=|| {
                        view! {
                            <h1 class="auth-card__title">"Register"</h1>
                            <RegisterFields/>
                        }
                    }
                >
                    <h1 class="auth-card__title">"Login"</h1>
                    <LoginFields session/>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn LoginFields(session: RwSignal<Session>) -> impl IntoView {
    let form = RwSignal::new(LoginForm::default());
    let busy = RwSignal::new(false);
    let toasts = use_toasts();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let payload = match form.with_untracked(LoginForm::validate) {
            Ok(payload) => payload,
            Err(e) => {
                notify(toasts, ToastKind::Error, e.to_string());
                return;
            }
        };
        busy.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::login(&payload).await;
            busy.set(false);
            match result {
                Ok(resp) => {
                    session.update(|s| s.begin(resp.user, resp.token, payload.email));
                    notify(toasts, ToastKind::Success, resp.message);
                    navigate("/", NavigateOptions { replace: true, ..NavigateOptions::default() });
                }
                Err(e) => {
                    log::warn!("login failed: {e}");
                    notify(toasts, ToastKind::Error, "Failed to login. Please try again.");
                }
            }
        });
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <input
                class="auth-input"
                type="email"
                placeholder="Email"
                required
                prop:value=move || form.with(|f| f.email.clone())
                on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
            />
            <input
                class="auth-input"
                type="password"
                placeholder="Password"
                required
                prop:value=move || form.with(|f| f.password.clone())
                on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
            />
            <button class="auth-button" type="submit" disabled=move || busy.get()>
                "Log In"
            </button>
        </form>
        <p class="auth-card__footer">
            "No account yet? "
            <a href="/register">"Register here"</a>
        </p>
    }
}
