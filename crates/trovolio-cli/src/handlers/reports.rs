//! Monthly Reports command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::presentation::{format_optional, print_load_notice, print_separator, truncate_string};

pub async fn execute(ctx: &CliContext) -> Result<()> {
    let mut view = ctx.dashboard().monthly_reports();
    view.mount();
    let state = view.wait_settled().await;
    print_load_notice(&state, ctx.verbose());

    let reports = state.visible_items();
    if reports.is_empty() {
        println!("No reports yet.");
    } else {
        println!(
            "{:<8} {:<28} {:>8} {:>6} {:>7}",
            "Period", "Title", "Visits", "Leads", "Conv %"
        );
        print_separator(62);
        for report in reports {
            let conversion = report
                .conversion_rate
                .map_or_else(|| "--".to_string(), |rate| format!("{rate:.1}"));
            println!(
                "{:<8} {:<28} {:>8} {:>6} {:>7}",
                report.period,
                truncate_string(&report.title, 27),
                format_optional(report.visits.as_ref(), "--"),
                format_optional(report.leads.as_ref(), "--"),
                conversion,
            );
        }
    }

    view.teardown();
    Ok(())
}
