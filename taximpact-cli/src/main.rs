use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, error};

use taximpact_cli::{app, logging};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Guided tax simulator.
///
/// Asks for your T4 employment income, tax deducted, RRSP contribution,
/// donations and an estimated tax rate, then shows how the RRSP and
/// donations change your estimated refund or balance owing.
#[derive(Debug, Parser)]
#[command(name = "taximpact", version)]
struct Cli {
    /// Log filter: a level ("error", "warn", "info", "debug", "trace") or any
    /// EnvFilter directive. `RUST_LOG` takes precedence when set.
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Also append log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_logging(&cli.log_level)?;
    if let Some(path) = &cli.log_file {
        logging::enable_file_logging(path)
            .with_context(|| format!("failed to enable file logging at {}", path.display()))?;
    }

    debug!("starting interactive session");
    let stdin = io::stdin();
    let stdout = io::stdout();

    if let Err(err) = app::run(stdin.lock(), stdout.lock()) {
        error!(error = %err, "session aborted");
        return Err(err.into());
    }

    Ok(())
}
