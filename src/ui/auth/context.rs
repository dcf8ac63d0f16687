//! Auth context for the client-side session record
//!
//! This module provides a reactive authentication context that:
//! - Stores the signed-in user
//! - Persists the session record to localStorage
//! - Publishes every auth transition on an `AuthEvents` stream
//! - Follows sign-in/sign-out in other tabs through `storage` events
//!
//! Session issuance and token checks belong to the auth backend; this
//! context only mirrors their outcome on the client.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::session::{AuthChangeEvent, AuthEvents};
#[cfg(not(feature = "ssr"))]
use crate::core::session::LogoutReason;
use crate::ui::session::SessionContext;

/// Signed-in user as stored on the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub email: String,
}

/// Authentication state
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuthState {
    /// Initial state, checking localStorage
    #[default]
    Loading,
    /// User is not authenticated
    Unauthenticated,
    /// User is authenticated
    Authenticated(User),
}

/// Auth context providing authentication state and actions
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Current authentication state
    pub state: RwSignal<AuthState>,
    events: StoredValue<AuthEvents>,
}

impl AuthContext {
    /// Check if user is authenticated
    pub fn is_authenticated(&self) -> bool {
        matches!(self.state.get(), AuthState::Authenticated(_))
    }

    /// Get current user (if authenticated)
    pub fn user(&self) -> Option<User> {
        match self.state.get() {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// Auth-state stream for subscribers such as the logged-out modal
    pub fn events(&self) -> AuthEvents {
        self.events.get_value()
    }

    /// Record a successful sign-in and announce it
    pub fn sign_in(&self, user: User) {
        save_to_storage(&user);
        self.state.set(AuthState::Authenticated(user));
        self.emit(AuthChangeEvent::SignedIn);
    }

    /// Drop the session record and announce the sign-out
    pub fn sign_out(&self) {
        clear_storage();
        self.state.set(AuthState::Unauthenticated);
        self.emit(AuthChangeEvent::SignedOut);
    }

    fn emit(&self, event: AuthChangeEvent) {
        leptos::logging::log!("Auth state changed: {}", event);
        self.events.with_value(|events| events.publish(&event));
    }
}

#[allow(dead_code)]
const STORAGE_KEY_SESSION: &str = "copytrade_session";

/// Provide auth context to the component tree
///
/// A stored session record that can't be read is cleared and reported on
/// the logout bus as `session_missing`.
pub fn provide_auth_context(session: SessionContext) -> AuthContext {
    // Start with Unauthenticated on both server and client to avoid hydration mismatch
    let state = RwSignal::new(AuthState::Unauthenticated);
    let ctx = AuthContext {
        state,
        events: StoredValue::new(AuthEvents::new()),
    };

    #[cfg(not(feature = "ssr"))]
    {
        // Restore after hydration
        Effect::new(move |_| {
            state.set(AuthState::Loading);
            match load_from_storage() {
                Ok(Some(user)) => state.set(AuthState::Authenticated(user)),
                Ok(None) => state.set(AuthState::Unauthenticated),
                Err(e) => {
                    leptos::logging::warn!("Discarding stored session: {}", e);
                    clear_storage();
                    state.set(AuthState::Unauthenticated);
                    session.notify_logged_out(Some(LogoutReason::SessionMissing));
                }
            }
            ctx.emit(AuthChangeEvent::InitialSession);
        });

        // Another tab signed in or out
        let handle = window_event_listener(leptos::ev::storage, move |ev| {
            if ev.key().as_deref() != Some(STORAGE_KEY_SESSION) {
                return;
            }
            match ev.new_value().map(|v| serde_json::from_str::<User>(&v)) {
                Some(Ok(user)) => {
                    state.set(AuthState::Authenticated(user));
                    ctx.emit(AuthChangeEvent::SignedIn);
                }
                Some(Err(e)) => {
                    leptos::logging::warn!("Unreadable session from another tab: {}", e);
                }
                None => {
                    state.set(AuthState::Unauthenticated);
                    ctx.emit(AuthChangeEvent::SignedOut);
                }
            }
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(feature = "ssr")]
    {
        let _ = session;
    }

    provide_context(ctx);
    ctx
}

/// Get auth context from the component tree
pub fn use_auth_context() -> AuthContext {
    expect_context::<AuthContext>()
}

#[cfg(not(feature = "ssr"))]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Read the session record; `Ok(None)` when there is none
#[cfg(not(feature = "ssr"))]
fn load_from_storage() -> Result<Option<User>, serde_json::Error> {
    let Some(raw) = local_storage().and_then(|s| s.get_item(STORAGE_KEY_SESSION).ok().flatten())
    else {
        return Ok(None);
    };
    serde_json::from_str(&raw).map(Some)
}

/// Save user to localStorage
#[cfg(not(feature = "ssr"))]
fn save_to_storage(user: &User) {
    if let Some(storage) = local_storage() {
        match serde_json::to_string(user) {
            Ok(json) => {
                let _ = storage.set_item(STORAGE_KEY_SESSION, &json);
            }
            Err(e) => leptos::logging::warn!("Failed to serialize session: {}", e),
        }
    }
}

/// Clear auth data from localStorage
#[cfg(not(feature = "ssr"))]
fn clear_storage() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(STORAGE_KEY_SESSION);
    }
}

#[cfg(feature = "ssr")]
fn save_to_storage(_user: &User) {}

#[cfg(feature = "ssr")]
fn clear_storage() {}
