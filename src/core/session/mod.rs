//! Session expiry notification
//!
//! Framework-independent pieces of the logged-out prompt:
//! - `reason`: logout reasons and their display copy
//! - `bus`: the in-process event bus signals travel on
//! - `signal`: the logged-out broadcast payload
//! - `auth`: auth-state stream vocabulary and capability trait
//! - `navigation`: router capability and the login path
//! - `notifier`: the state machine tying them together

pub mod auth;
pub mod bus;
pub mod navigation;
pub mod notifier;
pub mod reason;
pub mod signal;

pub use auth::{AuthCallback, AuthChangeEvent, AuthEvents, AuthStateSource};
pub use bus::{EventBus, SubscriptionId};
pub use navigation::{LOGIN_PATH, Navigator, same_path};
pub use notifier::{NotifierConfig, NotifierState, SessionNotifier};
pub use reason::{LogoutReason, ReasonCopy};
pub use signal::{LOGGED_OUT_EVENT, LogoutBus, LogoutDetail, LogoutSignal};

/// Errors from decoding session signals
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Unknown logout reason: {0}")]
    UnknownReason(String),

    #[error("Invalid logout payload: {0}")]
    Payload(#[from] serde_json::Error),
}
