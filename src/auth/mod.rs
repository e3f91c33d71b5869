//! Authentication module
//!
//! Two credentials exist:
//!
//! - the API key, attached by the `Authenticator` as
//!   `<header>: <prefix> <key>` on every request;
//! - the per-user `UserToken`, obtained through the username/password
//!   exchange and passed explicitly to every user-scoped call.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::UserToken;

#[cfg(test)]
mod tests;
