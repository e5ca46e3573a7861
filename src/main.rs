//! checkrun CLI entry point.

use std::process::ExitCode;

use checkrun::cli::{Cli, CommandDispatcher};
use checkrun::config::find_project_root;
use checkrun::shell::is_ci;
use checkrun::ui::{create_ui, OutputMode};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN, so tool output stays readable
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("checkrun=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("checkrun=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("checkrun starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Explicit --project wins; otherwise walk up to the nearest config or repo root.
    let cwd = std::env::current_dir().unwrap_or_default();
    let project_root = match &cli.project {
        Some(path) => path.clone(),
        None => find_project_root(&cwd).unwrap_or(cwd),
    };
    tracing::debug!("Project root: {}", project_root.display());

    let mut ui = create_ui(!is_ci(), output_mode);

    let dispatcher = CommandDispatcher::new(project_root).with_config(cli.config.clone());

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
