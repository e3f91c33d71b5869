//! Authenticator implementation
//!
//! Applies the API key header to outgoing requests.

use crate::config::Configuration;
use crate::error::{Error, Result};
use reqwest::header::{HeaderName, HeaderValue};
use reqwest::RequestBuilder;
use std::fmt;

/// Authenticator applies the configured API key to HTTP requests
///
/// The header is parsed once at construction so a malformed name or key
/// fails before any request is sent.
#[derive(Clone)]
pub struct Authenticator {
    header_name: HeaderName,
    header_value: HeaderValue,
}

impl Authenticator {
    /// Create an authenticator from a configuration
    pub fn new(config: &Configuration) -> Result<Self> {
        config.validate()?;

        let header_name = HeaderName::from_bytes(config.header_name().as_bytes()).map_err(|e| {
            Error::config(format!("invalid header name '{}': {e}", config.header_name()))
        })?;

        let mut header_value = HeaderValue::from_str(&config.auth_value())
            .map_err(|_| Error::config("API key contains characters not allowed in a header"))?;
        header_value.set_sensitive(true);

        Ok(Self {
            header_name,
            header_value,
        })
    }

    /// Apply authentication to a request builder
    pub fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        req.header(self.header_name.clone(), self.header_value.clone())
    }

    /// Header the key is sent under
    pub fn header_name(&self) -> &HeaderName {
        &self.header_name
    }
}

impl fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authenticator")
            .field("header_name", &self.header_name)
            .finish_non_exhaustive()
    }
}
