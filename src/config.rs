//! Client configuration
//!
//! Holds the API key and connection defaults. A `Configuration` is built
//! once per logical session and shared read-only by every request.

use crate::error::{Error, Result};
use std::fmt;
use std::time::Duration;
use url::Url;

/// Default base URL of the v3 API
pub const DEFAULT_BASE_URL: &str = "https://rebrickable.com/api/v3";

/// Default header carrying the API key
pub const DEFAULT_HEADER_NAME: &str = "Authorization";

/// Default scheme prefix placed before the key value
pub const DEFAULT_PREFIX: &str = "key";

/// Environment variable holding the API key
pub const ENV_API_KEY: &str = "REBRICKABLE_API_KEY";

/// Environment variable overriding the base URL
pub const ENV_BASE_URL: &str = "REBRICKABLE_BASE_URL";

/// Validated client configuration
#[derive(Clone)]
pub struct Configuration {
    api_key: String,
    header_name: String,
    prefix: String,
    base_url: Url,
    timeout: Duration,
    user_agent: String,
}

impl Configuration {
    /// Create a configuration with defaults for everything but the key
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder(api_key).build()
    }

    /// Create a new config builder
    pub fn builder(api_key: impl Into<String>) -> ConfigurationBuilder {
        ConfigurationBuilder::new(api_key)
    }

    /// Load from `REBRICKABLE_API_KEY` and optional `REBRICKABLE_BASE_URL`
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(ENV_API_KEY).map_err(|_| Error::missing_field(ENV_API_KEY))?;
        let mut builder = Self::builder(api_key);
        if let Ok(base_url) = std::env::var(ENV_BASE_URL) {
            builder = builder.base_url(base_url);
        }
        builder.build()
    }

    /// The API key value
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Header the key is sent under
    pub fn header_name(&self) -> &str {
        &self.header_name
    }

    /// Scheme prefix placed before the key
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Base URL every path template is appended to
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Default deadline for a single request
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// User agent string
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Full header value: `<prefix> <key>`, or the bare key without a prefix
    pub fn auth_value(&self) -> String {
        if self.prefix.is_empty() {
            self.api_key.clone()
        } else {
            format!("{} {}", self.prefix, self.api_key)
        }
    }

    /// Check the invariants a request relies on
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(Error::config("API key must not be empty"));
        }
        if self.header_name.trim().is_empty() {
            return Err(Error::config("API key header name must not be empty"));
        }
        if self.base_url.cannot_be_a_base() {
            return Err(Error::config(format!(
                "base URL '{}' cannot be used as a base",
                self.base_url
            )));
        }
        Ok(())
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("api_key", &"<redacted>")
            .field("header_name", &self.header_name)
            .field("prefix", &self.prefix)
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Builder for [`Configuration`]
#[derive(Debug, Clone)]
pub struct ConfigurationBuilder {
    api_key: String,
    header_name: String,
    prefix: String,
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl ConfigurationBuilder {
    fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            header_name: DEFAULT_HEADER_NAME.to_string(),
            prefix: DEFAULT_PREFIX.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("rebrickable-api/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the header carrying the key
    #[must_use]
    pub fn header_name(mut self, name: impl Into<String>) -> Self {
        self.header_name = name.into();
        self
    }

    /// Set the scheme prefix (empty for none)
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the base URL
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the default request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set user agent
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Build and validate the config
    pub fn build(self) -> Result<Configuration> {
        let base_url = Url::parse(self.base_url.trim())?;
        let config = Configuration {
            api_key: self.api_key.trim().to_string(),
            header_name: self.header_name.trim().to_string(),
            prefix: self.prefix.trim().to_string(),
            base_url,
            timeout: self.timeout,
            user_agent: self.user_agent,
        };
        config.validate()?;
        Ok(config)
    }
}
