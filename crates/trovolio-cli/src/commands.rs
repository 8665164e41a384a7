//! Subcommands of the `trovolio` binary.

use clap::{Args, Subcommand};
use trovolio_core::QrFormat;
use trovolio_core::qr::{DEFAULT_QR_MARGIN, DEFAULT_QR_SIZE};
use trovolio_core::site::DEFAULT_SITE_TOOL;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Browse the Knowledge Library
    Knowledge(ListFilter),

    /// Show monthly performance reports
    Reports,

    /// Browse the tools catalog
    Tools(ListFilter),

    /// List, connect or sync integrations
    Integrations {
        #[command(subcommand)]
        command: IntegrationsCommand,
    },

    /// Build a QR code image URL
    Qr(QrArgs),

    /// Fetch a generated site and print sandboxed iframe markup
    Site {
        /// Owner of the site
        owner: String,
        /// Site identifier
        site_id: String,
        /// Tool that generated the site
        #[arg(long, default_value = DEFAULT_SITE_TOOL)]
        tool: String,
        /// Write the raw HTML to this file instead of printing the iframe
        #[arg(long)]
        output: Option<std::path::PathBuf>,
    },

    /// Cycle through the "Why Choose Us" highlights
    Highlights {
        /// Number of advances to wait for before exiting
        #[arg(long, default_value_t = 3)]
        ticks: usize,
    },
}

/// Client-side filter options shared by list commands.
#[derive(Args, Debug, Clone, Default)]
pub struct ListFilter {
    /// Case-insensitive text search over title and description
    #[arg(short, long)]
    pub query: Option<String>,
    /// Category tab to show ("All" shows everything)
    #[arg(short, long)]
    pub category: Option<String>,
}

#[derive(Subcommand)]
pub enum IntegrationsCommand {
    /// List integrations and their connection state
    List,
    /// Connect or disconnect an integration
    Toggle {
        /// Integration id
        id: String,
    },
    /// Sync a connected integration now
    Sync {
        /// Integration id
        id: String,
    },
}

#[derive(Args, Debug, Clone)]
pub struct QrArgs {
    /// Text or URL to encode
    pub text: String,
    /// Edge length in pixels (64-1024)
    #[arg(long, default_value_t = DEFAULT_QR_SIZE)]
    pub size: u32,
    /// Quiet-zone margin in pixels (0-50)
    #[arg(long, default_value_t = DEFAULT_QR_MARGIN)]
    pub margin: u32,
    /// Foreground colour as hex
    #[arg(long = "fg", default_value = "000000")]
    pub foreground: String,
    /// Background colour as hex
    #[arg(long = "bg", default_value = "ffffff")]
    pub background: String,
    /// Image format: png, svg or jpg
    #[arg(long, default_value = "png")]
    pub format: QrFormat,
}
