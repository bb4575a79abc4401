use anyhow::Result;
use shopfront_runtime::OpenOptions;

use super::args::{Cli, Commands};
use super::context::ExecutionContext;
use super::handlers;
use super::logging;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = shopfront_core::resolve_data_path(cli.data_dir.as_deref())?;
    let command = cli.command.unwrap_or(Commands::Browse { route: None });

    // The storefront owns the terminal, so it logs to a file
    match &command {
        Commands::Browse { .. } => logging::init_file(cli.log_level, &data_dir)?,
        _ => logging::init_stderr(cli.log_level),
    }

    let options = OpenOptions {
        base_url: cli.base_url,
        timeout_secs: cli.timeout_secs,
    };
    let mut ctx = ExecutionContext::new(data_dir, options);

    match command {
        Commands::Browse { route } => handlers::browse::handle(&mut ctx, route),

        Commands::Products {
            category,
            search,
            compact,
        } => handlers::products::handle(&ctx, category, search, compact, cli.format),

        Commands::Show { id } => handlers::show::handle(&ctx, id, cli.format),

        Commands::Categories => handlers::categories::handle(&ctx, cli.format),

        Commands::Favorites { command } => {
            handlers::favorites::handle(&mut ctx, command, cli.format)
        }

        Commands::Theme { command } => handlers::theme::handle(&mut ctx, command, cli.format),
    }
}
