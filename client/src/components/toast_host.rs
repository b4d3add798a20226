//! Toast stack rendered once at the app root.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// Queue a toast and schedule its auto-dismissal.
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let Some(id) = toasts.try_update(|t| t.push(kind, message)).flatten() else {
        return;
    };
    #[cfg(feature = "csr")]
    gloo_timers::callback::Timeout::new(crate::state::toast::TOAST_LIFETIME_MS, move || {
        toasts.update(|t| t.dismiss(id));
    })
    .forget();
    #[cfg(not(feature = "csr"))]
    let _ = id;
}

/// Toast context provided by `App`.
pub fn use_toasts() -> RwSignal<ToastState> {
    expect_context::<RwSignal<ToastState>>()
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toast-host" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .items
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div
                                class=toast.kind.css_class()
                                role="status"
                                title="Dismiss"
                                on:click=move |_| toasts.update(|t| t.dismiss(id))
                            >
                                {toast.message}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
