//! Logged-out prompt
//!
//! `SessionContext` hands the logout bus to the component tree.
//! `LoggedOutBridge` forwards `app:logged-out` window events dispatched by
//! foreign code onto that bus, and `LoggedOutModal` shows the re-login
//! prompt driven by a `SessionNotifier`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::core::session::{
    LogoutBus, LogoutReason, LogoutSignal, Navigator, NotifierState, SessionNotifier,
};
use crate::ui::auth::use_auth_context;
use crate::ui::common::BaseModal;
use crate::ui::icon::{Icon, icons};

/// Context carrying the process-wide logout bus
#[derive(Clone, Copy)]
pub struct SessionContext {
    bus: StoredValue<LogoutBus>,
}

impl SessionContext {
    pub fn bus(&self) -> LogoutBus {
        self.bus.get_value()
    }

    /// Force the logged-out prompt; `None` shows the plain signed-out copy
    pub fn notify_logged_out(&self, reason: Option<LogoutReason>) {
        let signal = LogoutSignal { reason };
        let reached = self.bus.with_value(|bus| bus.publish(&signal));
        leptos::logging::log!("Logged-out broadcast ({:?}) reached {} listeners", reason, reached);
    }
}

/// Provide the logout bus to the component tree
pub fn provide_session_context() -> SessionContext {
    let ctx = SessionContext {
        bus: StoredValue::new(LogoutBus::new()),
    };
    provide_context(ctx);
    ctx
}

/// Get session context from the component tree
pub fn use_session_context() -> SessionContext {
    expect_context::<SessionContext>()
}

/// Read a logout signal out of a `CustomEvent` detail.
///
/// Accepts nothing, a string (see `LogoutSignal::from_detail_str`), or a
/// plain object with a `reason` property.
#[cfg(not(feature = "ssr"))]
fn signal_from_detail(detail: wasm_bindgen::JsValue) -> LogoutSignal {
    use crate::core::session::LogoutDetail;

    if detail.is_undefined() || detail.is_null() {
        return LogoutSignal::default();
    }

    if let Some(text) = detail.as_string() {
        return LogoutSignal::from_detail_str(&text);
    }

    match serde_wasm_bindgen::from_value::<LogoutDetail>(detail) {
        Ok(raw) => raw.into_signal(),
        Err(e) => {
            leptos::logging::warn!("Unreadable logged-out detail: {}", e);
            LogoutSignal::default()
        }
    }
}

/// Forwards `app:logged-out` window events onto the logout bus
#[component]
pub fn LoggedOutBridge() -> impl IntoView {
    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::session::LOGGED_OUT_EVENT;
        use wasm_bindgen::JsCast;

        let session = use_session_context();

        let handle = window_event_listener_untyped(LOGGED_OUT_EVENT, move |ev: web_sys::Event| {
            let signal = ev
                .dyn_ref::<web_sys::CustomEvent>()
                .map(|custom| signal_from_detail(custom.detail()))
                .unwrap_or_default();
            session.notify_logged_out(signal.reason);
        });

        on_cleanup(move || handle.remove());
    }

    #[cfg(feature = "ssr")]
    {
        // No window events on the server
    }
}

/// `Navigator` over the leptos router
struct RouterNavigator<F> {
    pathname: Memo<String>,
    navigate: F,
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn current_path(&self) -> String {
        self.pathname.get_untracked()
    }

    fn navigate_to(&self, path: &str) {
        (self.navigate)(path, NavigateOptions::default());
    }
}

/// Re-login prompt. Mount once, inside the router.
#[component]
pub fn LoggedOutModal() -> impl IntoView {
    let session = use_session_context();
    let auth = use_auth_context();
    let pathname = use_location().pathname;

    let state = RwSignal::new(NotifierState::default());

    let notifier = SessionNotifier::new(&session.bus(), auth.events());
    notifier.set_on_change(move |next| {
        let _ = state.try_set(next);
    });
    let notifier = StoredValue::new(Some(notifier));

    // Dropping the notifier releases both subscriptions
    on_cleanup(move || {
        let _ = notifier.try_update_value(|n| n.take());
    });

    let on_dismiss = Callback::new(move |_| {
        notifier.with_value(|n| {
            if let Some(n) = n {
                n.dismiss();
            }
        });
    });

    let on_log_in = Callback::new(move |_| {
        let navigator = RouterNavigator {
            pathname,
            navigate: use_navigate(),
        };
        notifier.with_value(|n| {
            if let Some(n) = n {
                n.log_back_in(&navigator);
            }
        });
    });

    let title = Signal::derive(move || state.get().copy().title.to_string());
    let description = Signal::derive(move || state.get().copy().description.to_string());
    let is_open = Signal::derive(move || state.get().visible);

    view! {
        <BaseModal
            title=title
            description=description
            is_open=is_open
            on_close=on_dismiss
            close_on_backdrop=false
        >
            <div class="space-y-4">
                <div class="flex items-center gap-3 text-theme-secondary">
                    <Icon name=icons::LOCK class="w-5 h-5"/>
                    <p>"Your copy-trading settings are saved. Log in to pick up where you left off."</p>
                </div>

                <div class="flex items-center justify-end gap-2 divider-top pt-4">
                    <button
                        class="btn-secondary"
                        on:click=move |_| on_dismiss.run(())
                    >
                        "Dismiss"
                    </button>
                    <button
                        class="btn-primary flex items-center gap-2"
                        on:click=move |_| on_log_in.run(())
                    >
                        <Icon name=icons::LOG_IN class="w-4 h-4"/>
                        "Log back in"
                    </button>
                </div>
            </div>
        </BaseModal>
    }
}
