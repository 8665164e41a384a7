//! QR generator command handler.

use anyhow::Result;
use trovolio_core::QrRequest;

use crate::bootstrap::CliContext;
use crate::commands::QrArgs;
use crate::error::CliError;

pub fn execute(ctx: &CliContext, args: &QrArgs) -> Result<()> {
    let request = QrRequest::new(args.text.clone())
        .with_size(args.size)
        .with_margin(args.margin)
        .with_foreground(args.foreground.clone())
        .with_background(args.background.clone())
        .with_format(args.format);

    let url = ctx.dashboard().qr_url(&request).map_err(CliError::from)?;

    println!("{url}");
    println!("Save as: {}", request.suggested_file_name());
    Ok(())
}
