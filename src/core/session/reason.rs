//! Logout reasons and the copy shown for each of them.

use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::SessionError;

/// Why the user's session ended
///
/// Only used to pick display copy; carries no behavior of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogoutReason {
    #[default]
    #[display("signed_out")]
    SignedOut,
    #[display("session_missing")]
    SessionMissing,
    #[display("auth_error")]
    AuthError,
    #[display("unauthorized")]
    Unauthorized,
}

impl LogoutReason {
    /// Every reason, in declaration order
    pub const ALL: [LogoutReason; 4] = [
        LogoutReason::SignedOut,
        LogoutReason::SessionMissing,
        LogoutReason::AuthError,
        LogoutReason::Unauthorized,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogoutReason::SignedOut => "signed_out",
            LogoutReason::SessionMissing => "session_missing",
            LogoutReason::AuthError => "auth_error",
            LogoutReason::Unauthorized => "unauthorized",
        }
    }

    /// Title and description displayed in the logged-out modal
    pub fn copy(&self) -> &'static ReasonCopy {
        match self {
            LogoutReason::SignedOut => &SIGNED_OUT_COPY,
            LogoutReason::SessionMissing => &SESSION_MISSING_COPY,
            LogoutReason::AuthError => &AUTH_ERROR_COPY,
            LogoutReason::Unauthorized => &UNAUTHORIZED_COPY,
        }
    }
}

impl FromStr for LogoutReason {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "signed_out" => Ok(LogoutReason::SignedOut),
            "session_missing" => Ok(LogoutReason::SessionMissing),
            "auth_error" => Ok(LogoutReason::AuthError),
            "unauthorized" => Ok(LogoutReason::Unauthorized),
            other => Err(SessionError::UnknownReason(other.to_string())),
        }
    }
}

/// Static display copy for a logout reason
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReasonCopy {
    pub title: &'static str,
    pub description: &'static str,
}

const SIGNED_OUT_COPY: ReasonCopy = ReasonCopy {
    title: "You're logged out",
    description: "Your session has ended. Log back in to keep copying trades.",
};

const SESSION_MISSING_COPY: ReasonCopy = ReasonCopy {
    title: "Session expired",
    description: "We couldn't find an active session. Please log in again to continue.",
};

const AUTH_ERROR_COPY: ReasonCopy = ReasonCopy {
    title: "Authentication problem",
    description: "Something went wrong while verifying your account. Log in again to retry.",
};

const UNAUTHORIZED_COPY: ReasonCopy = ReasonCopy {
    title: "Access denied",
    description: "Your session is no longer authorized for this page. Log in again to continue.",
};
