use anyhow::{bail, Context, Result};
use std::{
    fmt, fs,
    io::{self, Write},
    path::{Path, PathBuf},
};
use tracing::info;

use crate::{load, rank, render, render::OutputFormat};

pub const DEFAULT_TOP_N: usize = 3;

/// Everything one run needs: where to read, how many to keep, how to render
/// and where to put the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input: PathBuf,
    pub top_n: usize,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

impl RunConfig {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            top_n: DEFAULT_TOP_N,
            format: OutputFormat::default(),
            output: None,
        }
    }

    pub fn destination(&self) -> Destination {
        match &self.output {
            Some(path) => Destination::File(path.clone()),
            None => Destination::Stdout,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Stdout => f.write_str("stdout"),
            Destination::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Counts from a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub loaded: usize,
    pub skipped: usize,
    pub selected: usize,
    pub destination: Destination,
}

/// Load, rank and render `config.input`, then deliver the document.
///
/// An input with no valid rows is an error here even though the loader
/// itself only warns about it.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    let document = render_file(config)?;
    let destination = config.destination();
    deliver(&document.text, &destination, &mut io::stdout().lock())?;

    Ok(RunSummary {
        loaded: document.loaded,
        skipped: document.skipped,
        selected: document.selected,
        destination,
    })
}

/// A rendered document plus the counts that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub text: String,
    pub loaded: usize,
    pub skipped: usize,
    pub selected: usize,
}

/// The load → rank → render part of [`run`], without any output side effects.
pub fn render_file(config: &RunConfig) -> Result<RenderedDocument> {
    info!("Processing file: {}", config.input.display());
    let report = load::load_records(&config.input)?;
    if report.records.is_empty() {
        bail!("No valid records found in {}", config.input.display());
    }
    info!(
        "Successfully read {} records from {}",
        report.records.len(),
        config.input.display()
    );

    let top = rank::top_records(&report.records, config.top_n);
    info!("Selected top {} records for output.", config.top_n);

    let text = render::render(&top, config.format)?;
    info!("Formatted output as {}.", config.format);

    Ok(RenderedDocument {
        text,
        loaded: report.records.len(),
        skipped: report.skipped.len(),
        selected: top.len(),
    })
}

/// Write `document` to a file, or to `stdout` followed by a newline.
pub fn deliver<W: Write>(document: &str, destination: &Destination, stdout: &mut W) -> Result<()> {
    match destination {
        Destination::File(path) => {
            write_document(path, document)?;
            info!("Output written to {}", path.display());
        }
        Destination::Stdout => {
            writeln!(stdout, "{}", document).context("writing output to stdout")?;
            stdout.flush().context("flushing stdout")?;
            info!("Output printed to stdout.");
        }
    }
    Ok(())
}

fn write_document(path: &Path, document: &str) -> Result<()> {
    fs::write(path, document)
        .with_context(|| format!("failed to write output to file {}", path.display()))
}
