//! Logged-out broadcast payload

use serde::{Deserialize, Serialize};

use super::bus::EventBus;
use super::reason::LogoutReason;
use super::SessionError;

/// Name of the broadcast event that forces the logged-out prompt
pub const LOGGED_OUT_EVENT: &str = "app:logged-out";

/// Payload of a logged-out broadcast; a missing reason means `signed_out`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LogoutSignal {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<LogoutReason>,
}

/// Bus carrying logged-out broadcasts
pub type LogoutBus = EventBus<LogoutSignal>;

/// Loose form of the payload, so an unknown reason string doesn't reject
/// the whole event. Also the shape decoded from JS object details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LogoutDetail {
    #[serde(default)]
    pub reason: Option<String>,
}

impl LogoutDetail {
    pub fn into_signal(self) -> LogoutSignal {
        self.reason
            .map(|reason| LogoutSignal::from_reason_str(reason.trim()))
            .unwrap_or_default()
    }
}

/// Any JSON a string detail may hold
#[derive(Deserialize)]
#[serde(untagged)]
enum DetailText {
    Reason(String),
    Detail(Option<LogoutDetail>),
}

impl LogoutSignal {
    pub fn new(reason: LogoutReason) -> Self {
        Self {
            reason: Some(reason),
        }
    }

    /// Reason to display, defaulting to `signed_out`
    pub fn effective_reason(&self) -> LogoutReason {
        self.reason.unwrap_or_default()
    }

    /// Decode a JSON payload.
    ///
    /// Blank input, `null` and objects without a `reason` field give an
    /// empty signal. An unrecognized reason is dropped with a warning.
    /// Only malformed JSON is an error.
    pub fn from_json(payload: &str) -> Result<Self, SessionError> {
        let payload = payload.trim();
        if payload.is_empty() {
            return Ok(Self::default());
        }

        let raw: Option<LogoutDetail> = serde_json::from_str(payload)?;
        Ok(raw.map(LogoutDetail::into_signal).unwrap_or_default())
    }

    /// Decode a string event detail, which is never rejected.
    ///
    /// Takes a JSON object payload, a JSON string holding a reason, or a
    /// bare reason. Anything else gives an empty signal.
    pub fn from_detail_str(detail: &str) -> Self {
        let detail = detail.trim();
        if detail.is_empty() {
            return Self::default();
        }

        match serde_json::from_str::<DetailText>(detail) {
            Ok(DetailText::Reason(reason)) => Self::from_reason_str(reason.trim()),
            Ok(DetailText::Detail(raw)) => raw.map(LogoutDetail::into_signal).unwrap_or_default(),
            Err(_) => Self::from_reason_str(detail),
        }
    }

    /// Build a signal from a bare reason string, as found in event details
    pub fn from_reason_str(reason: &str) -> Self {
        match reason.parse::<LogoutReason>() {
            Ok(reason) => Self::new(reason),
            Err(e) => {
                leptos::logging::warn!("Ignoring logout reason: {}", e);
                Self::default()
            }
        }
    }
}

impl From<LogoutReason> for LogoutSignal {
    fn from(reason: LogoutReason) -> Self {
        Self::new(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_reason_defaults() {
        assert_eq!(
            LogoutSignal::default().effective_reason(),
            LogoutReason::SignedOut
        );
        assert_eq!(
            LogoutSignal::new(LogoutReason::AuthError).effective_reason(),
            LogoutReason::AuthError
        );
    }

    #[test]
    fn test_from_json_with_reason() {
        let signal = LogoutSignal::from_json(r#"{"reason":"session_missing"}"#).unwrap();
        assert_eq!(signal.reason, Some(LogoutReason::SessionMissing));
    }

    #[test]
    fn test_from_json_without_reason() {
        for payload in ["", "   ", "null", "{}", r#"{"other":1}"#, r#"{"reason":null}"#] {
            let signal = LogoutSignal::from_json(payload).unwrap();
            assert_eq!(signal.reason, None, "payload: {payload:?}");
        }
    }

    #[test]
    fn test_from_json_unknown_reason_falls_back() {
        let signal = LogoutSignal::from_json(r#"{"reason":"cosmic_rays"}"#).unwrap();
        assert_eq!(signal.reason, None);
        assert_eq!(signal.effective_reason(), LogoutReason::SignedOut);
    }

    #[test]
    fn test_from_json_malformed() {
        let result = LogoutSignal::from_json("{reason:");
        assert!(matches!(result, Err(SessionError::Payload(_))));
    }

    #[test]
    fn test_from_detail_str_bare_reason() {
        let signal = LogoutSignal::from_detail_str("auth_error");
        assert_eq!(signal.reason, Some(LogoutReason::AuthError));

        let signal = LogoutSignal::from_detail_str("  session_missing\n");
        assert_eq!(signal.reason, Some(LogoutReason::SessionMissing));
    }

    #[test]
    fn test_from_detail_str_json_string() {
        // JSON.stringify("unauthorized")
        let signal = LogoutSignal::from_detail_str("\"unauthorized\"");
        assert_eq!(signal.reason, Some(LogoutReason::Unauthorized));
    }

    #[test]
    fn test_from_detail_str_json_object() {
        let signal = LogoutSignal::from_detail_str("{\"reason\":\"session_missing\"}");
        assert_eq!(signal.reason, Some(LogoutReason::SessionMissing));

        let signal = LogoutSignal::from_detail_str("{}");
        assert_eq!(signal.reason, None);
    }

    #[test]
    fn test_from_detail_str_garbage() {
        for detail in ["", "null", "{reason:", "42", "\"expired\"", "not a reason"] {
            let signal = LogoutSignal::from_detail_str(detail);
            assert_eq!(signal.reason, None, "detail: {detail:?}");
            assert_eq!(signal.effective_reason(), LogoutReason::SignedOut);
        }
    }

    #[test]
    fn test_detail_into_signal() {
        let detail = LogoutDetail {
            reason: Some("unauthorized".to_string()),
        };
        assert_eq!(detail.into_signal().reason, Some(LogoutReason::Unauthorized));
        assert_eq!(LogoutDetail::default().into_signal(), LogoutSignal::default());
    }

    #[test]
    fn test_serialize_omits_missing_reason() {
        assert_eq!(serde_json::to_string(&LogoutSignal::default()).unwrap(), "{}");
        assert_eq!(
            serde_json::to_string(&LogoutSignal::new(LogoutReason::Unauthorized)).unwrap(),
            r#"{"reason":"unauthorized"}"#
        );
    }
}
