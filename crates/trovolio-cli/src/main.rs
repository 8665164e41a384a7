//! CLI entry point - the composition root.
//!
//! Command dispatch routes to handlers which delegate to the dashboard.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;
use trovolio_cli::{Cli, CliConfig, CliContext, CliError, Commands, bootstrap, handlers};
use trovolio_core::GeneratedSiteRef;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn dispatch(ctx: &CliContext, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Knowledge(filter) => handlers::knowledge::execute(ctx, &filter).await,
        Commands::Reports => handlers::reports::execute(ctx).await,
        Commands::Tools(filter) => handlers::tools::execute(ctx, &filter).await,
        Commands::Integrations { command } => handlers::integrations::execute(ctx, command).await,
        Commands::Qr(args) => handlers::qr::execute(ctx, &args),
        Commands::Site {
            owner,
            site_id,
            tool,
            output,
        } => {
            let site = GeneratedSiteRef::new(owner, tool, site_id);
            handlers::site::execute(ctx, &site, output.as_deref()).await
        }
        Commands::Highlights { ticks } => handlers::highlights::execute(ctx, ticks).await,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before parsing so clap sees TROVOLIO_* variables
    dotenvy::dotenv().ok();

    let mut cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = cli.command.take() else {
        // No command provided - show help
        return match Cli::command().print_help() {
            Ok(()) => ExitCode::SUCCESS,
            Err(_) => ExitCode::FAILURE,
        };
    };

    let result = match bootstrap(CliConfig::from_cli(&cli)) {
        Ok(ctx) => dispatch(&ctx, command).await,
        Err(e) => Err(e.into()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            let code = e.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
