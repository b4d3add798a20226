//! Account registration form, standalone and embedded in the login page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::toast_host::{notify, use_toasts};
use crate::forms::register::RegisterForm;
use crate::state::toast::ToastKind;

const REGISTERED_FALLBACK: &str = "User successfully registered!";

/// Username / email / password fields with submit handling.
#[component]
pub fn RegisterFields() -> impl IntoView {
    let form = RwSignal::new(RegisterForm::default());
    let busy = RwSignal::new(false);
    let toasts = use_toasts();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let payload = match form.with_untracked(RegisterForm::validate) {
            Ok(payload) => payload,
            Err(e) => {
                notify(toasts, ToastKind::Error, e.to_string());
                return;
            }
        };
        busy.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::register(&payload).await;
            busy.set(false);
            match result {
                Ok(message) => {
                    notify(toasts, ToastKind::Success, message.unwrap_or_else(|| REGISTERED_FALLBACK.to_owned()));
                    navigate("/", NavigateOptions { replace: true, ..NavigateOptions::default() });
                }
                Err(e) => {
                    log::warn!("registration failed: {e}");
                    notify(toasts, ToastKind::Error, "Failed to register. Please try again.");
                }
            }
        });
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <input
                class="auth-input"
                type="text"
                placeholder="Username"
                required
                prop:value=move || form.with(|f| f.name.clone())
                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
            />
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
                "Register"
            </button>
        </form>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Register"</h1>
                <p class="auth-card__subtitle">"Signup for a new account"</p>
                <RegisterFields/>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <a href="/login">"Login here"</a>
                </p>
            </div>
        </div>
    }
}
