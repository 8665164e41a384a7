//! Main CLI parser and top-level argument handling.
//!
//! Connection and behaviour options are global and fall back to
//! `TROVOLIO_*` environment variables, which `main` loads from `.env`
//! before parsing.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the Trovolio dashboard.
#[derive(Parser)]
#[command(name = "trovolio")]
#[command(about = "Browse and manage your Trovolio dashboard from the terminal")]
#[command(version)]
pub struct Cli {
    /// Base URL of the managed backend
    #[arg(long = "backend-url", env = "TROVOLIO_BACKEND_URL", global = true)]
    pub backend_url: Option<String>,

    /// Public API key sent with every request
    #[arg(long = "api-key", env = "TROVOLIO_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Signed-in user's access token
    #[arg(
        long = "access-token",
        env = "TROVOLIO_ACCESS_TOKEN",
        hide_env_values = true,
        global = true
    )]
    pub access_token: Option<String>,

    /// Maximum rows fetched per list
    #[arg(long = "fetch-limit", env = "TROVOLIO_FETCH_LIMIT", global = true)]
    pub fetch_limit: Option<u32>,

    /// Undo the local change when an integration action fails
    #[arg(long = "rollback-on-failure", env = "TROVOLIO_ROLLBACK_ON_FAILURE", global = true)]
    pub rollback_on_failure: bool,

    /// Request timeout in seconds
    #[arg(long = "timeout", env = "TROVOLIO_TIMEOUT_SECS", global = true)]
    pub timeout_secs: Option<u64>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
