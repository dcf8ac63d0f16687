#[cfg(test)]
mod tests {
    use crate::core::session::{
        AuthChangeEvent, AuthEvents, LOGIN_PATH, LogoutBus, LogoutReason, LogoutSignal,
        Navigator, NotifierState, SessionNotifier,
    };
    use std::sync::{Arc, Mutex};

    /// Router double that actually moves when asked
    struct TestRouter {
        path: Mutex<String>,
        navigations: Mutex<usize>,
    }

    impl TestRouter {
        fn new(path: &str) -> Self {
            Self {
                path: Mutex::new(path.to_string()),
                navigations: Mutex::new(0),
            }
        }
    }

    impl Navigator for TestRouter {
        fn current_path(&self) -> String {
            self.path.lock().unwrap().clone()
        }

        fn navigate_to(&self, path: &str) {
            *self.path.lock().unwrap() = path.to_string();
            *self.navigations.lock().unwrap() += 1;
        }
    }

    #[test]
    fn test_expired_session_round_trip() {
        let bus = LogoutBus::new();
        let auth = AuthEvents::new();
        let notifier = SessionNotifier::new(&bus, auth.clone());
        let router = TestRouter::new("/copy-trading/setup");

        // An API call somewhere finds the session gone
        let payload = LogoutSignal::from_json(r#"{"reason":"session_missing"}"#).unwrap();
        bus.publish(&payload);
        assert_eq!(notifier.state().copy().title, "Session expired");

        // User follows the prompt
        assert!(notifier.log_back_in(&router));
        assert_eq!(router.current_path(), LOGIN_PATH);
        assert!(!notifier.is_visible());

        // A second prompt while already on the login page does not navigate
        auth.publish(&AuthChangeEvent::SignedOut);
        assert!(notifier.is_visible());
        assert!(!notifier.log_back_in(&router));
        assert_eq!(*router.navigations.lock().unwrap(), 1);

        // Signing in keeps it closed
        auth.publish(&AuthChangeEvent::SignedIn);
        assert!(!notifier.is_visible());
    }

    #[test]
    fn test_two_notifiers_share_buses() {
        let bus = LogoutBus::new();
        let auth = AuthEvents::new();
        let first = SessionNotifier::new(&bus, auth.clone());
        let mut second = SessionNotifier::new(&bus, auth.clone());

        bus.publish(&LogoutSignal::new(LogoutReason::Unauthorized));
        assert!(first.is_visible());
        assert!(second.is_visible());

        second.teardown();
        first.dismiss();
        bus.publish(&LogoutSignal::new(LogoutReason::AuthError));

        assert_eq!(first.reason(), LogoutReason::AuthError);
        assert_eq!(second.reason(), LogoutReason::Unauthorized);
        assert_eq!(bus.listener_count(), 1);
    }

    #[test]
    fn test_interleaved_sources_last_write_wins() {
        let bus = LogoutBus::new();
        let auth = AuthEvents::new();
        let notifier = SessionNotifier::new(&bus, auth.clone());
        let seen = Arc::new(Mutex::new(Vec::<NotifierState>::new()));
        let sink = Arc::clone(&seen);
        notifier.set_on_change(move |state| sink.lock().unwrap().push(state));

        bus.publish(&LogoutSignal::new(LogoutReason::AuthError));
        auth.publish(&AuthChangeEvent::SignedOut);
        auth.publish(&AuthChangeEvent::SignedIn);
        bus.publish(&LogoutSignal::default());

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 4);
        assert_eq!(
            *seen.last().unwrap(),
            NotifierState {
                visible: true,
                reason: LogoutReason::SignedOut
            }
        );
    }
}
