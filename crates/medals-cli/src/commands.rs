use super::args::{Cli, Commands};
use super::context::ExecutionContext;
use super::handlers;
use super::logging;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let ctx = ExecutionContext::from_cli(&cli)?;
    let command = cli.command.unwrap_or(Commands::Tui);

    match &command {
        Commands::Tui => logging::init_file(cli.log_level, &ctx.log_path())?,
        _ => logging::init_stderr(cli.log_level),
    }

    // Single-threaded: every request completion is applied on this thread.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(dispatch(&ctx, command))
}

async fn dispatch(ctx: &ExecutionContext, command: Commands) -> Result<()> {
    match command {
        Commands::Tui => handlers::tui::handle(ctx).await,
        Commands::List => handlers::list::handle(ctx).await,
        Commands::Add {
            name,
            gold,
            silver,
            bronze,
        } => handlers::add::handle(ctx, &name, gold, silver, bronze).await,
        Commands::Delete { id } => handlers::delete::handle(ctx, id.into()).await,
        Commands::Total => handlers::total::handle(ctx).await,
        Commands::Medals => handlers::medals::handle(ctx),
        Commands::Config { command } => handlers::config::handle(ctx, command),
    }
}
