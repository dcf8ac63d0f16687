//! Home page component
//!
//! Entry point for the copy-trading app: shows who is signed in and links
//! to the login page otherwise.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::session::LOGIN_PATH;
use crate::ui::auth::{AuthState, use_auth_context};

/// Home page component
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth_context();

    view! {
        <Title text="CopyTrade"/>

        <div class="min-h-screen bg-theme-primary flex flex-col items-center justify-center p-4">
            <div class="w-full max-w-md card p-6 space-y-4 text-center">
                <h1 class="text-3xl font-bold text-theme-primary">"CopyTrade"</h1>

                {move || match auth.state.get() {
                    AuthState::Loading => view! {
                        <p class="text-theme-secondary">"Checking your session..."</p>
                    }.into_any(),
                    AuthState::Authenticated(user) => view! {
                        <div class="space-y-4">
                            <p class="text-theme-secondary">"Signed in as " <strong>{user.email}</strong></p>
                            <button class="btn-secondary" on:click=move |_| auth.sign_out()>
                                "Sign out"
                            </button>
                        </div>
                    }.into_any(),
                    AuthState::Unauthenticated => view! {
                        <div class="space-y-4">
                            <p class="text-theme-secondary">"Follow top traders automatically."</p>
                            <A href=LOGIN_PATH attr:class="btn-primary inline-block">
                                "Log in"
                            </A>
                        </div>
                    }.into_any(),
                }}
            </div>
        </div>
    }
}
