//! Authentication state-change stream
//!
//! The notifier depends on `AuthStateSource` only, so any auth client (or a
//! test double) can feed it. `AuthEvents` is the bus-backed implementation
//! the app provides through context.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::bus::{EventBus, SubscriptionId};

/// Discrete authentication lifecycle transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthChangeEvent {
    #[display("INITIAL_SESSION")]
    InitialSession,
    #[display("SIGNED_IN")]
    SignedIn,
    #[display("SIGNED_OUT")]
    SignedOut,
    #[display("TOKEN_REFRESHED")]
    TokenRefreshed,
    #[display("USER_UPDATED")]
    UserUpdated,
    #[display("PASSWORD_RECOVERY")]
    PasswordRecovery,
}

pub type AuthCallback = Box<dyn Fn(AuthChangeEvent) + Send + Sync>;

/// Subscription capability over an auth-state stream
pub trait AuthStateSource: Send + Sync {
    fn subscribe(&self, callback: AuthCallback) -> SubscriptionId;
    fn unsubscribe(&self, handle: SubscriptionId);
}

/// Bus carrying auth state changes
pub type AuthEvents = EventBus<AuthChangeEvent>;

impl AuthStateSource for EventBus<AuthChangeEvent> {
    fn subscribe(&self, callback: AuthCallback) -> SubscriptionId {
        EventBus::subscribe(self, move |event: &AuthChangeEvent| callback(*event))
    }

    fn unsubscribe(&self, handle: SubscriptionId) {
        EventBus::unsubscribe(self, handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_wire_names() {
        assert_eq!(
            serde_json::to_string(&AuthChangeEvent::SignedOut).unwrap(),
            "\"SIGNED_OUT\""
        );
        let parsed: AuthChangeEvent = serde_json::from_str("\"TOKEN_REFRESHED\"").unwrap();
        assert_eq!(parsed, AuthChangeEvent::TokenRefreshed);
        assert_eq!(AuthChangeEvent::SignedIn.to_string(), "SIGNED_IN");
    }

    #[test]
    fn test_auth_events_as_source() {
        let events = AuthEvents::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let source: &dyn AuthStateSource = &events;
        let handle = source.subscribe(Box::new(move |e: AuthChangeEvent| {
            sink.lock().unwrap().push(e)
        }));

        events.publish(&AuthChangeEvent::SignedIn);
        source.unsubscribe(handle);
        events.publish(&AuthChangeEvent::SignedOut);

        assert_eq!(*seen.lock().unwrap(), vec![AuthChangeEvent::SignedIn]);
    }
}
