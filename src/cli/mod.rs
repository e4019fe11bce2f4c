pub mod prompt;

use anyhow::Result;
use clap::Parser;
use std::{io, path::PathBuf};

use crate::{
    logging::DEFAULT_LOG_FILE,
    pipeline::{RunConfig, DEFAULT_TOP_N},
    render::OutputFormat,
};

#[derive(Parser, Debug)]
#[command(
    name = "standings",
    author,
    version,
    about = "Rank CSV performance records and print the top entries as YAML or JSON"
)]
pub struct Args {
    /// CSV file with firstname, lastname, date, division, points and summary columns.
    /// Prompts interactively when omitted.
    pub input: Option<PathBuf>,

    /// Number of top records to output.
    #[arg(short = 'n', long = "top", default_value_t = DEFAULT_TOP_N)]
    pub top_n: usize,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,

    /// Write the document here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Append diagnostics to this file as well as stderr.
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Ask for every setting on the terminal, ignoring the other flags.
    #[arg(short, long)]
    pub interactive: bool,
}

impl Args {
    /// Turn flags into a run configuration, falling back to the interactive
    /// prompt when no input file was given.
    pub fn resolve(self) -> Result<RunConfig> {
        match self.input {
            Some(input) if !self.interactive => Ok(RunConfig {
                input,
                top_n: self.top_n,
                format: self.format,
                output: self.output,
            }),
            _ => prompt::interactive_config(&mut io::stdin().lock(), &mut io::stdout()),
        }
    }
}
