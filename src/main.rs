use anyhow::Result;
use clap::Parser;
use standings::{cli::Args, logging, pipeline};
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> ExitCode {
    let args = Args::parse();

    // ─── 1) init logging ─────────────────────────────────────────────
    if let Err(e) = logging::init(Some(&args.log_file)) {
        eprintln!("{:#}", e);
        return ExitCode::FAILURE;
    }

    // ─── 2) resolve settings, then load → rank → render → write ──────
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = args.resolve()?;
    let summary = pipeline::run(&config)?;
    info!(
        loaded = summary.loaded,
        skipped = summary.skipped,
        selected = summary.selected,
        destination = %summary.destination,
        "done"
    );
    Ok(())
}
