//! Knowledge Library command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::commands::ListFilter;
use crate::presentation::{print_load_notice, print_separator, truncate_string};

/// Load the Knowledge Library and print the entries matching `filter`.
pub async fn execute(ctx: &CliContext, filter: &ListFilter) -> Result<()> {
    let mut view = ctx.dashboard().knowledge_library();
    view.mount();
    let state = view.wait_settled().await;
    print_load_notice(&state, ctx.verbose());

    println!("Categories: {}\n", view.categories().join(" | "));

    view.set_query(filter.query.clone().unwrap_or_default());
    view.set_category(filter.category.as_deref().unwrap_or_default());
    let entries = view.filtered();

    if entries.is_empty() {
        println!("No articles match your search.");
    } else {
        println!("{:<32} {:<12} {:<6} Summary", "Title", "Category", "Read");
        print_separator(100);
        for entry in entries {
            let minutes = entry
                .read_minutes
                .map_or_else(|| "--".to_string(), |m| format!("{m}m"));
            println!(
                "{:<32} {:<12} {:<6} {}",
                truncate_string(&entry.title, 31),
                truncate_string(entry.category.as_deref().unwrap_or("--"), 11),
                minutes,
                truncate_string(&entry.description, 48),
            );
        }
    }

    view.teardown();
    Ok(())
}
