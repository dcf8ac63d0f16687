//! Login page component
//!
//! The login entry point the logged-out prompt sends users to. Redirects
//! home once a session exists.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::ui::auth::{AuthState, User, use_auth_context};

/// Login page component
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth_context();

    let email = RwSignal::new(String::new());
    let email_error = RwSignal::new(None::<String>);

    // Redirect if already authenticated
    Effect::new(move |_| {
        if matches!(auth.state.get(), AuthState::Authenticated(_)) {
            let navigate = use_navigate();
            navigate("/", Default::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let value = email.get().trim().to_string();
        if !value.contains('@') {
            email_error.set(Some("Please enter a valid email".to_string()));
            return;
        }
        email_error.set(None);
        auth.sign_in(User { email: value });
    };

    view! {
        <Title text="Log in - CopyTrade"/>

        <div class="min-h-screen bg-theme-primary flex items-center justify-center p-4">
            <form class="w-full max-w-md card p-6 space-y-4" on:submit=on_submit>
                <h1 class="title-lg">"Log in"</h1>

                <label class="block space-y-1">
                    <span class="text-sm text-theme-secondary">"Email"</span>
                    <input
                        type="email"
                        class="input-base w-full"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>

                {move || email_error.get().map(|e| view! {
                    <p class="text-sm text-red-400">{e}</p>
                })}

                <button type="submit" class="btn-primary w-full">"Continue"</button>
            </form>
        </div>
    }
}
