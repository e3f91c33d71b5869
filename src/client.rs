//! Client facade
//!
//! Owns the transport and hands out the resource proxies. Proxies are
//! cheap clones sharing one connection pool.

use crate::api::{LegoApi, UsersApi};
use crate::config::Configuration;
use crate::error::Result;
use crate::http::HttpClient;
use tracing::debug;

/// Entry point to the Rebrickable API
///
/// ```rust,ignore
/// use rebrickable_api::{ApiClient, Configuration};
///
/// let client = ApiClient::new(Configuration::from_env()?)?;
/// let color = client.lego().get_color(72).await?;
/// assert_eq!(color.name, "Dark Bluish Gray");
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: HttpClient,
}

impl ApiClient {
    /// Create a client from an explicit configuration
    pub fn new(config: Configuration) -> Result<Self> {
        let http = HttpClient::new(config)?;
        debug!(base_url = %http.config().base_url(), "Created API client");
        Ok(Self { http })
    }

    /// Create a client configured from `REBRICKABLE_API_KEY` and
    /// `REBRICKABLE_BASE_URL`
    pub fn from_env() -> Result<Self> {
        Self::new(Configuration::from_env()?)
    }

    /// Create a client over an existing transport
    pub fn from_http(http: HttpClient) -> Self {
        Self { http }
    }

    /// Catalog operations
    pub fn lego(&self) -> LegoApi {
        LegoApi::new(self.http.clone())
    }

    /// User-scoped operations
    pub fn users(&self) -> UsersApi {
        UsersApi::new(self.http.clone())
    }

    /// The shared transport
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// The configuration in use
    pub fn config(&self) -> &Configuration {
        self.http.config()
    }

    /// Release this handle's share of the connection pool
    ///
    /// The pool closes once every clone and proxy is gone; dropping has
    /// the same effect.
    pub fn close(self) {
        debug!("Closing API client");
        drop(self);
    }
}
