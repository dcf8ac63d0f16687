//! Session expiry notifier
//!
//! Watches the logged-out broadcast bus and the auth-state stream and keeps a
//! single `{visible, reason}` state for the re-login prompt. Every transition
//! overwrites the previous one; nothing is queued.
//!
//! Subscriptions are taken in `SessionNotifier::new` and released by
//! `teardown` (or on drop). Once torn down, signals no longer touch the state.
//!
//! In the browser every transition runs on the one UI thread. On a
//! multi-threaded host, racing transitions are numbered when committed and a
//! change older than one already delivered is never handed to the observer,
//! so it always ends on the latest state.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use super::auth::{AuthChangeEvent, AuthStateSource};
use super::bus::SubscriptionId;
use super::navigation::{LOGIN_PATH, Navigator, same_path};
use super::reason::{LogoutReason, ReasonCopy};
use super::signal::{LogoutBus, LogoutSignal};

/// What the prompt should show right now
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NotifierState {
    pub visible: bool,
    pub reason: LogoutReason,
}

impl NotifierState {
    pub fn copy(&self) -> &'static ReasonCopy {
        self.reason.copy()
    }

    /// Logged-out broadcast: show, with the payload reason or `signed_out`
    pub fn apply_signal(&mut self, signal: &LogoutSignal) {
        self.reason = signal.effective_reason();
        self.visible = true;
    }

    /// Auth stream event; only `SIGNED_OUT` and `SIGNED_IN` matter
    pub fn apply_auth(&mut self, event: AuthChangeEvent) {
        match event {
            AuthChangeEvent::SignedOut => {
                self.reason = LogoutReason::SignedOut;
                self.visible = true;
            }
            AuthChangeEvent::SignedIn => self.visible = false,
            _ => {}
        }
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}

/// Notifier settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifierConfig {
    /// Where "log back in" sends the user
    pub login_path: String,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            login_path: LOGIN_PATH.to_string(),
        }
    }
}

type ChangeCallback = Arc<dyn Fn(NotifierState) + Send + Sync>;

/// State plus the sequence number of the change that produced it
#[derive(Default)]
struct Versioned {
    state: NotifierState,
    seq: u64,
}

struct Shared {
    state: Mutex<Versioned>,
    /// Highest sequence number handed to the observer
    delivered: AtomicU64,
    attached: AtomicBool,
    on_change: Mutex<Option<ChangeCallback>>,
}

impl Shared {
    /// Apply a transition and report the new state to the observer if it
    /// changed. Locks are released before the observer runs.
    fn transition(&self, source: &'static str, f: impl FnOnce(&mut NotifierState)) {
        if let Some((seq, after)) = self.commit(f) {
            leptos::logging::log!(
                "Session notifier ({}): visible={} reason={}",
                source,
                after.visible,
                after.reason
            );
            self.deliver(seq, after);
        }
    }

    /// Apply `f` under the state lock. Returns the new state and its
    /// sequence number, or `None` if nothing changed.
    fn commit(&self, f: impl FnOnce(&mut NotifierState)) -> Option<(u64, NotifierState)> {
        let mut current = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let before = current.state;
        f(&mut current.state);
        if current.state == before {
            return None;
        }
        current.seq += 1;
        Some((current.seq, current.state))
    }

    /// Hand a committed state to the observer unless a newer one already
    /// went out.
    fn deliver(&self, seq: u64, state: NotifierState) {
        if self.delivered.fetch_max(seq, Ordering::AcqRel) > seq {
            return;
        }

        let callback = self
            .on_change
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        if let Some(callback) = callback {
            callback(state);
        }
    }

    fn signal_transition(&self, source: &'static str, f: impl FnOnce(&mut NotifierState)) {
        if self.attached.load(Ordering::Acquire) {
            self.transition(source, f);
        }
    }
}

/// Re-login prompt state bound to a logout bus and an auth-state source
pub struct SessionNotifier {
    shared: Arc<Shared>,
    config: NotifierConfig,
    logout_bus: LogoutBus,
    logout_sub: Option<SubscriptionId>,
    auth: Box<dyn AuthStateSource>,
    auth_sub: Option<SubscriptionId>,
}

impl SessionNotifier {
    /// Subscribe to both signal sources with the default login path
    pub fn new(logout_bus: &LogoutBus, auth: impl AuthStateSource + 'static) -> Self {
        Self::with_config(logout_bus, auth, NotifierConfig::default())
    }

    pub fn with_config(
        logout_bus: &LogoutBus,
        auth: impl AuthStateSource + 'static,
        config: NotifierConfig,
    ) -> Self {
        let shared = Arc::new(Shared {
            state: Mutex::new(Versioned::default()),
            delivered: AtomicU64::new(0),
            attached: AtomicBool::new(true),
            on_change: Mutex::new(None),
        });

        let on_signal = Arc::clone(&shared);
        let logout_sub = logout_bus.subscribe(move |signal: &LogoutSignal| {
            on_signal.signal_transition("broadcast", |state| state.apply_signal(signal));
        });

        let on_auth = Arc::clone(&shared);
        let auth_sub = auth.subscribe(Box::new(move |event: AuthChangeEvent| {
            on_auth.signal_transition("auth", |state| state.apply_auth(event));
        }));

        Self {
            shared,
            config,
            logout_bus: logout_bus.clone(),
            logout_sub: Some(logout_sub),
            auth: Box::new(auth),
            auth_sub: Some(auth_sub),
        }
    }

    /// Observer invoked with the new state after every change
    pub fn set_on_change(&self, callback: impl Fn(NotifierState) + Send + Sync + 'static) {
        *self
            .shared
            .on_change
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(callback));
    }

    pub fn state(&self) -> NotifierState {
        self.shared
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .state
    }

    pub fn is_visible(&self) -> bool {
        self.state().visible
    }

    pub fn reason(&self) -> LogoutReason {
        self.state().reason
    }

    pub fn config(&self) -> &NotifierConfig {
        &self.config
    }

    pub fn is_attached(&self) -> bool {
        self.shared.attached.load(Ordering::Acquire)
    }

    /// Close the prompt without navigating
    pub fn dismiss(&self) {
        self.shared.transition("dismiss", NotifierState::hide);
    }

    /// Send the user to the login path unless already there, then close the
    /// prompt. Returns whether a navigation was issued.
    pub fn log_back_in(&self, navigator: &dyn Navigator) -> bool {
        let login_path = &self.config.login_path;
        let navigate = !same_path(&navigator.current_path(), login_path);
        if navigate {
            leptos::logging::log!("Redirecting to {}", login_path);
            navigator.navigate_to(login_path);
        }
        self.shared.transition("log_back_in", NotifierState::hide);
        navigate
    }

    /// Release both subscriptions. Safe to call more than once.
    pub fn teardown(&mut self) {
        self.shared.attached.store(false, Ordering::Release);

        if let Some(id) = self.logout_sub.take() {
            self.logout_bus.unsubscribe(id);
        }
        if let Some(id) = self.auth_sub.take() {
            self.auth.unsubscribe(id);
        }
        self.shared
            .on_change
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
    }
}

impl Drop for SessionNotifier {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl std::fmt::Debug for SessionNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionNotifier")
            .field("state", &self.state())
            .field("config", &self.config)
            .field("attached", &self.is_attached())
            .finish()
    }
}
