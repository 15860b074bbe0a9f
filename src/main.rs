//! startorrent CLI
//!
//! Browse a simulated torrent client from the terminal.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;

use startorrent::progress::RngPercentSource;
use startorrent::tui::run::run;

#[derive(Parser)]
#[command(name = "startorrent")]
#[command(about = "Browse a simulated torrent client from the terminal")]
#[command(version)]
struct Cli {
    /// Seed for the synthetic download percentages (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Write diagnostic logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _log_guard = match cli.log_file.as_deref().map(init_logging).transpose() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match cmd_browse(cli.seed) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// LOGGING
// ============================================================================

/// Send tracing output to `path`. The terminal belongs to the TUI, so
/// logs never go to stdout or stderr.
fn init_logging(path: &Path) -> Result<WorkerGuard, String> {
    let file_name = path
        .file_name()
        .ok_or_else(|| format!("Invalid log file path: {}", path.display()))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| format!("Failed to initialize logging: {}", e))?;

    tracing::info!("logging to {}", path.display());
    Ok(guard)
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_browse(seed: Option<u64>) -> Result<(), String> {
    let mut percents = match seed {
        Some(seed) => {
            tracing::info!(seed, "seeded percentages");
            RngPercentSource::seeded(seed)
        }
        None => RngPercentSource::from_entropy(),
    };

    tracing::info!("app starting");
    let app = run(&mut percents).map_err(|e| format!("Terminal failure: {}", e))?;

    if let Some(message) = app.farewell() {
        println!("{}", message);
    }
    tracing::info!("app exiting");
    Ok(())
}
