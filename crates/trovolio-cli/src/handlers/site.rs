//! Generated-site viewer command handler.

use std::path::Path;

use anyhow::Result;
use trovolio_core::GeneratedSiteRef;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Fetch a generated site. Prints sandboxed iframe markup, or writes the
/// raw HTML to `output` when given.
pub async fn execute(
    ctx: &CliContext,
    site: &GeneratedSiteRef,
    output: Option<&Path>,
) -> Result<()> {
    let document = ctx.dashboard().site(site).await.map_err(CliError::from)?;

    if !document.is_signed() {
        eprintln!("Note: signed link unavailable, loaded from the public URL.");
    }

    match output {
        Some(path) => {
            std::fs::write(path, document.html()).map_err(CliError::from)?;
            println!("Saved {} bytes to {}", document.html().len(), path.display());
        }
        None => println!("{}", document.to_iframe(&format!("Site {}", site.site_id))),
    }
    Ok(())
}
