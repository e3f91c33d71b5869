//! CLI commands and argument parsing

use clap::{Parser, Subcommand};

/// Rebrickable API command-line client
#[derive(Parser, Debug)]
#[command(name = "rebrickable")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API key
    #[arg(long, env = "REBRICKABLE_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Base URL of the API
    #[arg(long, env = "REBRICKABLE_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// User credentials, used by commands that touch user data
#[derive(clap::Args, Debug, Clone, Default)]
pub struct UserArgs {
    /// User token from an earlier `token` call
    #[arg(long, env = "REBRICKABLE_USER_TOKEN", hide_env_values = true)]
    pub user_token: Option<String>,

    /// Username or email, exchanged for a token when none is given
    #[arg(long, env = "REBRICKABLE_USERNAME")]
    pub username: Option<String>,

    /// Password, exchanged for a token when none is given
    #[arg(long, env = "REBRICKABLE_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Test the API key against the catalog
    Check,

    /// Show a color
    Color {
        /// Color id
        id: i64,
    },

    /// Show a part
    Part {
        /// Part number
        part_num: String,
    },

    /// Show the colors a part comes in
    PartColors {
        /// Part number
        part_num: String,
    },

    /// Show a set
    Set {
        /// Set number, e.g. 31124-1
        set_num: String,
    },

    /// Search the set catalog
    Sets {
        /// Search text
        #[arg(long)]
        search: Option<String>,

        /// Theme id
        #[arg(long)]
        theme_id: Option<i64>,

        /// Earliest release year
        #[arg(long)]
        min_year: Option<i32>,

        /// Latest release year
        #[arg(long)]
        max_year: Option<i32>,

        /// Maximum records to print
        #[arg(long)]
        max_records: Option<usize>,
    },

    /// List a set's inventory
    SetParts {
        /// Set number
        set_num: String,

        /// Include the parts of the set's minifigs
        #[arg(long)]
        minifig_parts: bool,

        /// Maximum records to print
        #[arg(long)]
        max_records: Option<usize>,
    },

    /// List the minifigs in a set
    SetMinifigs {
        /// Set number
        set_num: String,
    },

    /// List all themes
    Themes,

    /// Exchange username and password for a user token
    Token {
        #[command(flatten)]
        user: UserArgs,
    },

    /// List the sets the user owns
    MySets {
        #[command(flatten)]
        user: UserArgs,
    },

    /// List the user's part lists
    PartLists {
        #[command(flatten)]
        user: UserArgs,
    },

    /// List the user's set lists
    SetLists {
        #[command(flatten)]
        user: UserArgs,
    },

    /// Check how much of a set the user can build
    Build {
        /// Set number
        set_num: String,

        #[command(flatten)]
        user: UserArgs,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one record per line)
    Json,
    /// Human-readable output
    Pretty,
}
