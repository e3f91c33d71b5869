//! HTTP client (transport)
//!
//! Turns an `ApiRequest` into one HTTP exchange:
//! - Resolves the path template against the configured base URL
//! - Attaches the API key header
//! - Maps non-success statuses and network failures to typed errors
//! - Decodes the body into the type the operation expects
//!
//! There is no retry, no rate limiting and no caching here; the reqwest
//! connection pool is the only state shared between calls.

use super::request::ApiRequest;
use crate::auth::Authenticator;
use crate::codec;
use crate::config::Configuration;
use crate::error::{Error, Result};
use crate::types::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE, RETRY_AFTER};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Transport shared by all resource proxies
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: Arc<Configuration>,
    authenticator: Authenticator,
}

impl HttpClient {
    /// Create a transport with its own connection pool
    pub fn new(config: Configuration) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent())
            .build()
            .map_err(|e| Error::config(format!("failed to build HTTP client: {e}")))?;
        Self::with_client(config, client)
    }

    /// Create a transport over an existing reqwest client
    pub fn with_client(config: Configuration, client: Client) -> Result<Self> {
        let authenticator = Authenticator::new(&config)?;
        Ok(Self {
            client,
            config: Arc::new(config),
            authenticator,
        })
    }

    /// The configuration this transport was built from
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Resolve a request into its absolute URL
    pub fn build_url(&self, request: &ApiRequest) -> Result<Url> {
        let segments = request.path_segments()?;

        let mut url = self.config.base_url().clone();
        url.path_segments_mut()
            .map_err(|()| Error::config("base URL cannot be used as a base"))?
            .pop_if_empty()
            .extend(segments.iter());

        if !request.query_pairs().is_empty() {
            url.query_pairs_mut().extend_pairs(request.query_pairs());
        }
        Ok(url)
    }

    /// Execute a request and decode the response body into `T`
    pub async fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let url = self.build_url(&request)?;
        let body = self
            .send(
                request.operation(),
                request.path(),
                request.method(),
                url,
                request.form_pairs(),
                request.timeout_override(),
            )
            .await?;
        codec::decode_json(request.operation(), &body)
    }

    /// Execute a request whose response carries no content (deletes)
    pub async fn execute_unit(&self, request: ApiRequest) -> Result<()> {
        let url = self.build_url(&request)?;
        self.send(
            request.operation(),
            request.path(),
            request.method(),
            url,
            request.form_pairs(),
            request.timeout_override(),
        )
        .await?;
        Ok(())
    }

    /// GET an absolute URL handed out by the server (pagination cursors)
    ///
    /// The URL must share scheme, host and port with the base URL so the
    /// API key never leaves the configured service.
    pub(crate) async fn execute_url<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        url: &str,
        timeout: Option<Duration>,
    ) -> Result<T> {
        let url = Url::parse(url)
            .map_err(|e| Error::pagination(operation, format!("invalid cursor URL: {e}")))?;
        if url.origin() != self.config.base_url().origin() {
            return Err(Error::pagination(
                operation,
                format!(
                    "cursor points to {} instead of {}",
                    url.origin().ascii_serialization(),
                    self.config.base_url().origin().ascii_serialization()
                ),
            ));
        }

        let body = self
            .send(operation, "<next page>", Method::GET, url, None, timeout)
            .await?;
        codec::decode_json(operation, &body)
    }

    /// Send one request and return the body of a successful response
    ///
    /// `target` is the path template, logged instead of the URL because
    /// user-scoped URLs embed the user token.
    async fn send(
        &self,
        operation: &str,
        target: &str,
        method: Method,
        url: Url,
        form: Option<&[(String, String)]>,
        timeout: Option<Duration>,
    ) -> Result<String> {
        let timeout = timeout.unwrap_or_else(|| self.config.timeout());

        let mut req = self
            .client
            .request(method.into(), url)
            .timeout(timeout)
            .header(ACCEPT, "application/json");

        if let Some(pairs) = form {
            req = req
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(codec::form_body(pairs));
        }

        req = self.authenticator.apply(req);

        debug!(operation, %method, target, "Sending request");

        let response = req
            .send()
            .await
            .map_err(|e| transport_error(operation, e, timeout))?;

        let status = response.status();
        let retry_after = extract_retry_after(&response);
        let body = response
            .text()
            .await
            .map_err(|e| transport_error(operation, e, timeout))?;

        if status.is_success() {
            debug!(operation, status = status.as_u16(), "Request succeeded");
            return Ok(body);
        }

        warn!(
            operation,
            %method,
            target,
            status = status.as_u16(),
            "Request failed"
        );
        Err(Error::from_status(
            operation,
            status.as_u16(),
            body,
            retry_after,
        ))
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("authenticator", &self.authenticator)
            .finish_non_exhaustive()
    }
}

/// Classify a reqwest failure
///
/// The URL is stripped from the source since user-scoped paths carry the
/// user token.
#[allow(clippy::cast_possible_truncation)]
fn transport_error(operation: &str, error: reqwest::Error, timeout: Duration) -> Error {
    if error.is_timeout() {
        Error::Timeout {
            operation: operation.to_string(),
            timeout_ms: timeout.as_millis() as u64,
        }
    } else {
        Error::Transport {
            operation: operation.to_string(),
            source: error.without_url(),
        }
    }
}

/// Extract the retry-after header value in seconds, if given as a number
fn extract_retry_after(response: &Response) -> Option<u64> {
    response
        .headers()
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse().ok())
}
