// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Rebrickable API client
//!
//! A typed async client for the Rebrickable LEGO catalog and user API.
//!
//! ## Features
//!
//! - **Catalog**: colors, parts, elements, sets, minifigs, themes, categories
//! - **User data**: part lists, set lists, owned parts, lost parts, build checks
//! - **Typed entities**: optional fields stay `None`, vendor id groups included
//! - **Lazy pagination**: first page, item stream, or everything at once
//! - **Typed errors**: auth, not found, rate limited, server, decode, timeout
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rebrickable_api::{ApiClient, Configuration, SetPartsQuery};
//! use futures::StreamExt;
//!
//! #[tokio::main]
//! async fn main() -> rebrickable_api::Result<()> {
//!     let client = ApiClient::new(Configuration::from_env()?)?;
//!     let lego = client.lego();
//!
//!     let set = lego.get_set("31124-1").await?;
//!     println!("{} ({}), {} parts", set.name, set.year, set.num_parts);
//!
//!     let mut parts = lego
//!         .list_set_parts("60458-1", &SetPartsQuery::minifig_parts(true))
//!         .into_stream();
//!     while let Some(part) = parts.next().await {
//!         let part = part?;
//!         println!("{} x{}", part.part.name, part.quantity);
//!     }
//!
//!     let users = client.users();
//!     let token = users.create_user_token("me", "secret").await?;
//!     let lists = users.list_setlists(&token, &Default::default()).fetch_all().await?;
//!     println!("{} set lists", lists.count);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                       ApiClient                         │
//! │              lego() → LegoApi   users() → UsersApi      │
//! └─────────────────────────────────────────────────────────┘
//!                            │
//! ┌──────────┬───────────────┴──┬──────────────┬────────────┐
//! │   Auth   │       HTTP       │   Paginate   │   Codec    │
//! ├──────────┼──────────────────┼──────────────┼────────────┤
//! │ API key  │ Path templates   │ next cursor  │ JSON → T   │
//! │ User     │ Status → Error   │ Lazy stream  │ Params →   │
//! │ token    │ Deadlines        │ Same origin  │ query/form │
//! └──────────┴──────────────────┴──────────────┴────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration
pub mod config;

/// API key header and user tokens
pub mod auth;

/// Path template rendering
pub mod template;

/// Wire encoding and decoding
pub mod codec;

/// Typed entities
pub mod models;

/// HTTP transport
pub mod http;

/// Page following
pub mod pagination;

/// Resource proxies
pub mod api;

/// Client facade
pub mod client;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use api::{
    DetailsQuery, LegoApi, ListUpdate, MinifigsQuery, NewList, NewLostPart, NewPartListPart,
    NewSetListSet, PageQuery, PartsQuery, SetListSetUpdate, SetPartsQuery, SetsQuery,
    UserPartsQuery, UsersApi,
};
pub use auth::UserToken;
pub use client::ApiClient;
pub use config::Configuration;
pub use error::{Error, Result};
pub use models::*;
pub use pagination::{ItemStream, Page, Pager};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
