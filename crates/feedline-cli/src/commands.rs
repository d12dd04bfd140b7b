use super::args::{Cli, Commands};
use super::handlers;
use crate::context::ExecutionContext;
use crate::logging;
use crate::presentation::view_models::ViewMode;
use anyhow::Result;
use chrono::Utc;

pub fn run(cli: Cli) -> Result<()> {
    let interactive = matches!(cli.command, None | Some(Commands::Tui));
    logging::init(cli.log_level, cli.log_file.as_deref(), interactive)?;

    let ctx = ExecutionContext::from_cli(&cli)?;
    tracing::debug!(data_dir = %ctx.data_dir().display(), "resolved data directory");

    match cli.command {
        None | Some(Commands::Tui) => handlers::tui::handle(&ctx),

        Some(Commands::Render {
            format,
            now,
            compact,
        }) => {
            let mode = if compact {
                ViewMode::Compact
            } else {
                ViewMode::Standard
            };
            handlers::render::handle(&ctx, format.into(), now.unwrap_or_else(Utc::now), mode)
        }

        Some(Commands::Init { force }) => handlers::init::handle(&ctx, force),

        Some(Commands::Posts) => handlers::posts::handle(&ctx),
    }
}
