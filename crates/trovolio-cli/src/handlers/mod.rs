//! Command handlers that delegate to the dashboard.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Parse/validate CLI-specific input
//!   2. Call `Dashboard` methods
//!   3. Format output for the terminal
//!
//! Every list view a handler mounts is torn down before it returns.

pub mod highlights;
pub mod integrations;
pub mod knowledge;
pub mod qr;
pub mod reports;
pub mod site;
pub mod tools;
