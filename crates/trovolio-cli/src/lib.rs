//! Terminal surface for the Trovolio dashboard.
//!
//! `main` is the composition root: it loads `.env`, parses arguments,
//! initialises logging and hands a [`CliContext`] to the handlers.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use tokio_test as _;

// Used by the binary target only
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::{Commands, IntegrationsCommand, ListFilter, QrArgs};
pub use error::CliError;
pub use parser::Cli;
