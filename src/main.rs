// src/main.rs
mod extractors;
mod models;
mod output;
mod pdf;
mod utils;

use std::path::PathBuf;

use clap::Parser;
use utils::AppError;

/// Converts a swim meet entry list PDF into master data JSON
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the entry list PDF
    pdf_path: PathBuf,
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var, writes to stderr)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments (usage errors exit with status 2)
    let args = Args::parse();
    tracing::debug!("Starting with args: {:?}", args);

    // 3. Extract events and entries
    let data = extractors::parse_pdf(&args.pdf_path)?;

    // 4. Emit JSON on stdout
    let stdout = std::io::stdout();
    output::write_master_data(&data, stdout.lock())?;

    Ok(())
}
