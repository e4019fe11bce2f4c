pub mod columns;
pub mod date_parser;
pub mod row;
pub mod utils;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord};
use std::{fs::File, io::Read, path::Path};
use tracing::{debug, warn};

use crate::records::Record;
pub use columns::{ColumnLayout, REQUIRED_COLUMNS};
pub use row::RowError;

/// A data row that failed coercion and was left out of the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based position among the data rows (the header is not counted).
    pub row: usize,
    /// Raw cells in header order.
    pub cells: Vec<String>,
    pub reason: RowError,
}

/// Outcome of loading a CSV source: valid records in input order, plus the
/// rows that were rejected.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub headers: Vec<String>,
    pub records: Vec<Record>,
    pub skipped: Vec<SkippedRow>,
}

/// Open `path` and load every valid record from it.
///
/// Fails if the file cannot be read or lacks any of [`REQUIRED_COLUMNS`].
/// Rows that fail coercion are logged and skipped.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<LoadReport> {
    let path = path.as_ref();
    let file =
        File::open(path).with_context(|| format!("opening CSV file {}", path.display()))?;
    load_from_reader(file).with_context(|| format!("reading CSV file {}", path.display()))
}

/// Load records from any CSV source.
///
/// Rows may be shorter or longer than the header: missing cells read as
/// empty and cells past the last header column are ignored.
pub fn load_from_reader<R: Read>(reader: R) -> Result<LoadReport> {
    let mut csv = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quote(b'"')
        .delimiter(b',')
        .from_reader(reader);

    let headers: Vec<String> = csv
        .headers()
        .context("reading CSV header")?
        .iter()
        .map(str::to_string)
        .collect();
    let layout = ColumnLayout::resolve(&headers)?;
    debug!(?headers, ?layout, "resolved CSV header");

    let mut report = LoadReport {
        headers,
        ..LoadReport::default()
    };
    let mut row_number = 0;
    let mut record = StringRecord::new();

    loop {
        row_number += 1;
        match csv.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) if e.is_io_error() => return Err(e).context("reading CSV input"),
            Err(e) => {
                // undecodable row; the reader resumes at the next record
                let reason = RowError::Malformed(e.to_string());
                warn!("Skipping invalid row {}: {}", row_number, reason);
                report.skipped.push(SkippedRow {
                    row: row_number,
                    cells: Vec::new(),
                    reason,
                });
                continue;
            }
        }

        let width = report.headers.len();
        if record.len() > width {
            debug!(
                "row {} has {} cells, ignoring {} past the header",
                row_number,
                record.len(),
                record.len() - width
            );
        }
        let cells: Vec<&str> = (0..width).map(|i| record.get(i).unwrap_or("")).collect();

        match row::parse_row(&layout, &cells) {
            Ok(parsed) => report.records.push(parsed),
            Err(reason) => {
                warn!(
                    "Skipping invalid row {} {}: {}",
                    row_number,
                    describe_row(&report.headers, &cells),
                    reason
                );
                report.skipped.push(SkippedRow {
                    row: row_number,
                    cells: cells.iter().map(|c| c.to_string()).collect(),
                    reason,
                });
            }
        }
    }

    if report.records.is_empty() {
        warn!("CSV file contains no valid records.");
    }
    Ok(report)
}

/// `{firstname: "Jo", lastname: "Li", ...}` for warnings.
fn describe_row(headers: &[String], cells: &[&str]) -> String {
    let pairs: Vec<String> = headers
        .iter()
        .zip(cells)
        .map(|(h, c)| format!("{}: {:?}", h, c))
        .collect();
    format!("{{{}}}", pairs.join(", "))
}
