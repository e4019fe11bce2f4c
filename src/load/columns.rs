use anyhow::{bail, Result};
use std::collections::BTreeSet;

pub const FIRST_NAME: &str = "firstname";
pub const LAST_NAME: &str = "lastname";
pub const DATE: &str = "date";
pub const DIVISION: &str = "division";
pub const POINTS: &str = "points";
pub const SUMMARY: &str = "summary";

/// Header names every input file must carry, matched case-sensitively.
pub const REQUIRED_COLUMNS: [&str; 6] = [FIRST_NAME, LAST_NAME, DATE, DIVISION, POINTS, SUMMARY];

/// Position of each required column within a header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub first_name: usize,
    pub last_name: usize,
    pub date: usize,
    pub division: usize,
    pub points: usize,
    pub summary: usize,
}

impl ColumnLayout {
    /// Locate the required columns in `headers`. Order is irrelevant and extra
    /// columns are ignored; if a name repeats, the first occurrence wins.
    pub fn resolve(headers: &[String]) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h == name);

        let missing: BTreeSet<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|name| find(*name).is_none())
            .collect();
        if !missing.is_empty() {
            bail!(
                "missing required columns in CSV file: {}",
                missing.into_iter().collect::<Vec<_>>().join(", ")
            );
        }

        // every lookup below succeeded in the check above
        let at = |name: &str| find(name).unwrap_or_default();
        Ok(Self {
            first_name: at(FIRST_NAME),
            last_name: at(LAST_NAME),
            date: at(DATE),
            division: at(DIVISION),
            points: at(POINTS),
            summary: at(SUMMARY),
        })
    }
}
