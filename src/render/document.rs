use serde::{Deserialize, Serialize};

use crate::load::date_parser::format_date;
use crate::records::Record;

/// Human-readable projection of one record. Field order is the output order.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq)]
pub struct RenderedEntry {
    pub name: String,
    pub details: String,
}

impl From<&Record> for RenderedEntry {
    fn from(r: &Record) -> Self {
        Self {
            name: r.full_name(),
            details: format!(
                "In division {} from {} performing {}",
                r.division,
                format_date(&r.date),
                r.summary
            ),
        }
    }
}

/// Top-level output document: `{ records: [ {name, details}, ... ] }`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq, Default)]
pub struct Document {
    pub records: Vec<RenderedEntry>,
}

/// Project records into a document, preserving their order.
pub fn project(records: &[Record]) -> Document {
    Document {
        records: records.iter().map(RenderedEntry::from).collect(),
    }
}
