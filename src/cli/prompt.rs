use anyhow::{bail, Context, Result};
use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

use crate::{
    pipeline::{RunConfig, DEFAULT_TOP_N},
    render::OutputFormat,
};

/// Ask for input path, record count, format and destination, in that order.
///
/// Blank or unparsable counts fall back to the default; any format choice
/// other than `2` means YAML; only `y` asks for an output path.
pub fn interactive_config<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<RunConfig> {
    let path = ask(input, out, "Enter the path to the CSV file: ")?;
    if path.is_empty() {
        bail!("no CSV file path given");
    }

    let count = ask(
        input,
        out,
        &format!("Enter the number of top records to display (default is {DEFAULT_TOP_N}): "),
    )?;
    let top_n = if count.is_empty() {
        DEFAULT_TOP_N
    } else {
        match count.parse::<usize>() {
            Ok(n) => n,
            Err(_) => {
                writeln!(out, "Invalid input. Defaulting to {DEFAULT_TOP_N}.")?;
                DEFAULT_TOP_N
            }
        }
    };

    writeln!(out, "Choose output format:")?;
    writeln!(out, "1) YAML (default)")?;
    writeln!(out, "2) JSON")?;
    let format = match ask(input, out, "Enter your choice (1 or 2): ")?.as_str() {
        "2" => OutputFormat::Json,
        _ => OutputFormat::Yaml,
    };

    let save = ask(
        input,
        out,
        "Would you like to save the output to a file? (y/n, default is n): ",
    )?;
    let output = if save.eq_ignore_ascii_case("y") {
        let dest = ask(input, out, "Enter the output file path: ")?;
        if dest.is_empty() {
            bail!("no output file path given");
        }
        Some(PathBuf::from(dest))
    } else {
        None
    };

    Ok(RunConfig {
        input: PathBuf::from(path),
        top_n,
        format,
        output,
    })
}

/// Print `question`, read one line and return it trimmed. EOF reads as blank.
fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> Result<String> {
    write!(out, "{}", question)?;
    out.flush().context("flushing prompt")?;
    let mut line = String::new();
    input.read_line(&mut line).context("reading answer")?;
    Ok(line.trim().to_string())
}
