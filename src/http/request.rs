//! Logical request description
//!
//! An `ApiRequest` is what a resource proxy hands to the transport: the
//! operation name, method, path template with its parameters, query
//! parameters, an optional form body and an optional deadline. Nothing is
//! resolved against the base URL until the transport executes it.

use crate::codec;
use crate::error::{Error, Result};
use crate::template;
use crate::types::{Method, Pairs};
use serde::Serialize;
use std::time::Duration;

/// A logical API request
#[derive(Debug, Clone)]
pub struct ApiRequest {
    operation: &'static str,
    method: Method,
    path: &'static str,
    path_params: Vec<(&'static str, String)>,
    query: Pairs,
    form: Option<Pairs>,
    timeout: Option<Duration>,
    /// Encoding failure recorded while building; reported on execution
    deferred_error: Option<String>,
}

impl ApiRequest {
    /// Create a request for `operation` against a path template
    pub fn new(operation: &'static str, method: Method, path: &'static str) -> Self {
        Self {
            operation,
            method,
            path,
            path_params: Vec::new(),
            query: Vec::new(),
            form: None,
            timeout: None,
            deferred_error: None,
        }
    }

    /// Create a GET request
    pub fn get(operation: &'static str, path: &'static str) -> Self {
        Self::new(operation, Method::GET, path)
    }

    /// Create a POST request
    pub fn post(operation: &'static str, path: &'static str) -> Self {
        Self::new(operation, Method::POST, path)
    }

    /// Create a PUT request
    pub fn put(operation: &'static str, path: &'static str) -> Self {
        Self::new(operation, Method::PUT, path)
    }

    /// Create a PATCH request
    pub fn patch(operation: &'static str, path: &'static str) -> Self {
        Self::new(operation, Method::PATCH, path)
    }

    /// Create a DELETE request
    pub fn delete(operation: &'static str, path: &'static str) -> Self {
        Self::new(operation, Method::DELETE, path)
    }

    /// Bind a path placeholder
    #[must_use]
    pub fn path_param(mut self, name: &'static str, value: impl ToString) -> Self {
        self.path_params.push((name, value.to_string()));
        self
    }

    /// Add query parameters from a serializable struct
    #[must_use]
    pub fn query<T: Serialize + ?Sized>(mut self, params: &T) -> Self {
        match codec::encode_pairs(self.operation, params) {
            Ok(pairs) => self.query.extend(pairs),
            Err(e) => self.defer(e),
        }
        self
    }

    /// Set a form body from a serializable struct
    #[must_use]
    pub fn form<T: Serialize + ?Sized>(mut self, body: &T) -> Self {
        match codec::encode_pairs(self.operation, body) {
            Ok(pairs) => self.form = Some(pairs),
            Err(e) => self.defer(e),
        }
        self
    }

    /// Set (or clear) the deadline for this request
    #[must_use]
    pub fn timeout(mut self, timeout: impl Into<Option<Duration>>) -> Self {
        self.timeout = timeout.into();
        self
    }

    fn defer(&mut self, error: Error) {
        if self.deferred_error.is_none() {
            self.deferred_error = Some(match error {
                Error::Encode { message, .. } => message,
                other => other.to_string(),
            });
        }
    }

    /// Operation name, used in logs and errors
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// HTTP method
    pub fn method(&self) -> Method {
        self.method
    }

    /// Unrendered path template
    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Encoded query parameters
    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    /// Encoded form body, if any
    pub fn form_pairs(&self) -> Option<&[(String, String)]> {
        self.form.as_deref()
    }

    /// Deadline override, if any
    pub fn timeout_override(&self) -> Option<Duration> {
        self.timeout
    }

    /// Validate the request and render its path segments
    ///
    /// Fails with `Error::Encode` if a parameter struct could not be
    /// encoded, or `Error::Validation` if a path parameter is missing.
    pub fn path_segments(&self) -> Result<Vec<String>> {
        if let Some(message) = &self.deferred_error {
            return Err(Error::encode(self.operation, message.clone()));
        }
        if self.form.is_some() && !self.method.has_body() {
            return Err(Error::encode(
                self.operation,
                format!("{} requests cannot carry a body", self.method),
            ));
        }
        template::render_segments(self.operation, self.path, &self.path_params)
    }
}
