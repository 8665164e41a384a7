//! "Why Choose Us" rotation command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;

/// Print the current highlight, then each of the next `ticks` advances.
pub async fn execute(ctx: &CliContext, ticks: usize) -> Result<()> {
    let highlights = ctx.dashboard().highlights();
    let mut changes = highlights.subscribe();

    print_current(&highlights);
    for _ in 0..ticks {
        if changes.changed().await.is_err() {
            break;
        }
        print_current(&highlights);
    }

    highlights.teardown().await;
    Ok(())
}

fn print_current(highlights: &trovolio_dashboard::HighlightsView) {
    if let Some(item) = highlights.current() {
        let stat = item.stat.as_deref().unwrap_or("");
        println!(
            "[{}/{}] {:<16} {:>10}  {}",
            highlights.index() + 1,
            highlights.items().len(),
            item.title,
            stat,
            item.description
        );
    }
}
