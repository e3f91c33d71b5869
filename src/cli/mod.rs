//! CLI module
//!
//! Command-line interface over the client.
//!
//! # Commands
//!
//! - `check` - Test the API key
//! - `color`, `part`, `part-colors`, `set`, `sets`, `set-parts`,
//!   `set-minifigs`, `themes` - Catalog lookups
//! - `token` - Exchange credentials for a user token
//! - `my-sets`, `part-lists`, `set-lists`, `build` - User data

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat, UserArgs};
pub use runner::Runner;
