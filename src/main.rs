//! projectwiz CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use projectwiz::cli::{Cli, CommandDispatcher, Commands, GlobalOptions};
use projectwiz::ui::create_ui;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN, so logs don't interleave with the menu
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("projectwiz=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("projectwiz=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("projectwiz starting with args: {:?}", cli);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Only the menu and exec talk to a person; the rest is for pipes.
    let interactive = matches!(cli.command, None | Some(Commands::Menu | Commands::Exec(_)));
    let mut ui = create_ui(interactive);

    let dispatcher = CommandDispatcher::new(GlobalOptions::from_cli(&cli));

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(u8::try_from(result.exit_code).unwrap_or(1)),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
