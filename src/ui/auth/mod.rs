//! Authentication UI module
//!
//! Client-side auth state and the auth-state event stream it publishes.

mod context;

pub use context::{AuthContext, AuthState, User, provide_auth_context, use_auth_context};
