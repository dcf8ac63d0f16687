//! Core session logic, independent of the UI framework

#[cfg(feature = "ssr")]
pub mod config;
pub mod session;
#[cfg(test)]
mod tests;

pub use session::*;
