//! Tools catalog command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::commands::ListFilter;
use crate::presentation::{print_load_notice, print_separator, truncate_string};

pub async fn execute(ctx: &CliContext, filter: &ListFilter) -> Result<()> {
    let mut view = ctx.dashboard().tools_catalog();
    view.mount();
    let state = view.wait_settled().await;
    print_load_notice(&state, ctx.verbose());

    view.set_query(filter.query.clone().unwrap_or_default());
    view.set_category(filter.category.as_deref().unwrap_or_default());
    let tools = view.filtered();

    if tools.is_empty() {
        println!("No tools match your search.");
    } else {
        println!("{:<24} {:<12} Description", "Tool", "Category");
        print_separator(90);
        for tool in tools {
            let name = if tool.is_new {
                format!("{} (new)", tool.name)
            } else {
                tool.name.clone()
            };
            println!(
                "{:<24} {:<12} {}",
                truncate_string(&name, 23),
                truncate_string(tool.category.as_deref().unwrap_or("--"), 11),
                truncate_string(&tool.description, 52),
            );
        }
    }

    view.teardown();
    Ok(())
}
