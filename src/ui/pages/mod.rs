//! Application pages module
//!
//! Thin pages around the logged-out prompt: home, login and 404.

mod home;
mod login;
mod not_found;

pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
