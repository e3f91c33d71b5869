//! Credential types

use std::fmt;

/// Opaque per-user credential returned by the token exchange
///
/// It has no client-visible expiry and is never refreshed automatically.
/// When a user-scoped call fails with `Error::Auth`, obtain a new one.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct UserToken(String);

impl UserToken {
    /// Wrap a token obtained earlier (e.g. from a cache the caller keeps)
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the raw token string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for UserToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for UserToken {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl fmt::Debug for UserToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("UserToken(<redacted>)")
    }
}
