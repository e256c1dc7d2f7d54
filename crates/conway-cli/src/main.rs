//! Terminal front end for Conway's Game of Life.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `conway-config.yaml` (or `CONWAY_CONFIG`)
//! 2. Initialize structured logging (tracing) on stderr
//! 3. Apply positional arguments: `conway [DIMENSION] [WAIT_MS]`
//! 4. Create the board and seed any configured cells
//! 5. Run the interactive menu until the user quits or starts the run
//! 6. Run the paced generation loop until interrupted or a bound is hit
//! 7. Log the result

mod args;
mod error;
mod menu;
mod render;
mod runner;

use std::io;
use std::path::PathBuf;

use conway_core::{Board, LifeConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::args::LaunchArgs;
use crate::error::CliError;
use crate::menu::{Menu, MenuOutcome};
use crate::runner::TerminalRenderer;

/// Configuration file looked up in the working directory.
const CONFIG_FILE: &str = "conway-config.yaml";

/// Environment variable naming an alternative configuration file.
const CONFIG_ENV: &str = "CONWAY_CONFIG";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, board construction, terminal I/O, or
/// the run loop fails.
fn main() -> Result<(), CliError> {
    // 1. Load configuration.
    let (mut config, config_path) = load_config()?;

    // 2. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_writer(io::stderr)
        .with_target(true)
        .init();

    info!("conway starting");
    match config_path {
        Some(path) => info!(path = %path.display(), "Configuration loaded"),
        None => info!("Config file not found, using defaults"),
    }

    // 3. Apply positional arguments.
    LaunchArgs::parse(std::env::args_os().skip(1)).apply(&mut config);

    // 4. Create the board.
    let initial_cells = config.board.initial_cells.iter().map(|&[x, y]| (x, y));
    let mut board = Board::with_live_cells(config.board.dimension, initial_cells)?;
    info!(
        dimension = board.dimension(),
        population = board.population(),
        tick_interval_ms = config.run.tick_interval_ms,
        "Board created"
    );

    // 5. Interactive menu.
    let outcome = {
        let mut menu = Menu::new(io::stdin().lock(), io::stdout().lock());
        menu.welcome()?;
        loop {
            match menu.step(&mut board)? {
                MenuOutcome::Continue => {}
                other => break other,
            }
        }
    };
    if outcome == MenuOutcome::Quit {
        info!("conway exiting");
        return Ok(());
    }

    // 6. Run loop.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let mut renderer = TerminalRenderer::new(io::stdout(), config.render.show_coordinates);
    let result = runtime.block_on(runner::run(
        &mut board,
        &config.run,
        &mut renderer,
        shutdown_signal(),
    ))?;

    // 7. Log results.
    runner::log_run_end(&result);
    info!("conway shutdown complete");
    Ok(())
}

/// Load configuration from `CONWAY_CONFIG` or `conway-config.yaml`.
///
/// Returns the path that was read, or `None` when no file exists and the
/// defaults are used.
fn load_config() -> Result<(LifeConfig, Option<PathBuf>), CliError> {
    let path = std::env::var_os(CONFIG_ENV).map_or_else(|| PathBuf::from(CONFIG_FILE), PathBuf::from);
    if path.exists() {
        let config = LifeConfig::from_file(&path)?;
        Ok((config, Some(path)))
    } else {
        Ok((LifeConfig::default(), None))
    }
}

/// Complete on Ctrl-C. If the handler cannot be installed, never complete.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl-C, run will not stop on interrupt");
        std::future::pending::<()>().await;
    }
}
