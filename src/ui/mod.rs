pub mod auth;
pub mod common;
pub mod icon;
pub mod pages;
pub mod session;

pub use icon::{Icon, icons};
pub use session::{
    LoggedOutBridge, LoggedOutModal, SessionContext, provide_session_context, use_session_context,
};
