// src/records/types.rs

use chrono::NaiveDate;

/// A single validated performance row as parsed from the input CSV.
#[derive(Debug, PartialEq, Clone, Eq)]
pub struct Record {
    pub first_name: String,
    pub last_name: String,
    pub date: NaiveDate,
    pub division: i64,
    pub points: i64,
    pub summary: String,
}

impl Record {
    /// `"<first> <last>"`
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
