//! HTTP transport module
//!
//! Executes one logical request end to end.
//!
//! # Features
//!
//! - **Path templates**: `{name}` placeholders filled and percent-encoded
//! - **Canonical query encoding**: unset params omitted, booleans as `1`/`0`
//! - **Authentication**: API key header on every request
//! - **Error classification**: status codes mapped to typed errors, never retried
//! - **Deadlines**: per-request timeout overriding the configured default

mod client;
mod request;

pub use client::HttpClient;
pub use request::ApiRequest;
