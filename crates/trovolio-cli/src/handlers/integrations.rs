//! Integrations command handlers.

use anyhow::Result;
use trovolio_core::ActionOutcome;
use trovolio_dashboard::IntegrationsView;
use trovolio_dashboard::types::Integration;

use crate::bootstrap::CliContext;
use crate::commands::IntegrationsCommand;
use crate::error::CliError;
use crate::presentation::{print_load_notice, print_separator, truncate_string};

pub async fn execute(ctx: &CliContext, command: IntegrationsCommand) -> Result<()> {
    let mut integrations = ctx.dashboard().integrations();
    integrations.view_mut().mount();
    let state = integrations.view_mut().wait_settled().await;

    let result = match command {
        IntegrationsCommand::List => {
            print_load_notice(&state, ctx.verbose());
            list(state.visible_items());
            Ok(())
        }
        IntegrationsCommand::Toggle { id } => match integrations.toggle(&id).await {
            Ok(outcome) => report(&integrations, &id, outcome),
            Err(e) => Err(CliError::from(e).into()),
        },
        IntegrationsCommand::Sync { id } => match integrations.sync(&id).await {
            Ok(outcome) => report(&integrations, &id, outcome),
            Err(e) => Err(CliError::from(e).into()),
        },
    };

    integrations.view().teardown();
    result
}

fn list(items: &[Integration]) {
    if items.is_empty() {
        println!("No integrations available.");
        return;
    }

    println!("{:<20} {:<22} {:<14} Last sync", "Id", "Name", "Status");
    print_separator(80);
    for item in items {
        let synced = item
            .last_synced_at
            .map_or_else(|| "never".to_string(), |at| at.format("%Y-%m-%d %H:%M").to_string());
        println!(
            "{:<20} {:<22} {:<14} {}",
            truncate_string(&item.id, 19),
            truncate_string(&item.name, 21),
            item.status_label(),
            synced,
        );
    }
}

fn report(integrations: &IntegrationsView, id: &str, outcome: ActionOutcome) -> Result<()> {
    match outcome {
        ActionOutcome::Completed { completed_at } => {
            let name = integrations
                .view()
                .store()
                .item(id)
                .map_or_else(|| id.to_string(), |item| format!("{} ({})", item.name, item.status_label()));
            println!("Updated {name} at {}", completed_at.format("%Y-%m-%d %H:%M:%S"));
            Ok(())
        }
        ActionOutcome::Failed {
            message,
            rolled_back,
        } => {
            if rolled_back {
                println!("Change to {id} was undone.");
            }
            Err(CliError::Unavailable(message).into())
        }
        ActionOutcome::Busy => Err(CliError::Arguments(format!("{id} is already being updated")).into()),
        ActionOutcome::NotFound => Err(CliError::NotFound(format!("integration not found: {id}")).into()),
    }
}
