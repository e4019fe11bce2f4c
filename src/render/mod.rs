pub mod document;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

use crate::records::Record;
pub use document::{project, Document, RenderedEntry};

/// Supported output notations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Block-style YAML.
    #[default]
    Yaml,
    /// JSON indented by 2 spaces.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Yaml => f.write_str("YAML"),
            OutputFormat::Json => f.write_str("JSON"),
        }
    }
}

/// Serialize `records` as a complete document in `format`.
pub fn render(records: &[Record], format: OutputFormat) -> Result<String> {
    let doc = project(records);
    match format {
        OutputFormat::Yaml => to_yaml(&doc),
        OutputFormat::Json => to_json(&doc),
    }
}

fn to_yaml<T: Serialize>(doc: &T) -> Result<String> {
    serde_yaml::to_string(doc).context("serializing YAML")
}

fn to_json<T: Serialize>(doc: &T) -> Result<String> {
    // serde_json's pretty printer indents with two spaces
    serde_json::to_string_pretty(doc).context("serializing JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn john() -> Record {
        Record {
            first_name: "John".into(),
            last_name: "Doe".into(),
            date: NaiveDate::from_ymd_opt(2023, 5, 5).unwrap(),
            division: 1,
            points: 90,
            summary: "Task A".into(),
        }
    }

    #[test]
    fn test_entry_projection() {
        let entry = RenderedEntry::from(&john());
        assert_eq!(entry.name, "John Doe");
        assert_eq!(entry.details, "In division 1 from 2023-05-05 performing Task A");
    }

    #[test]
    fn test_yaml_output() -> Result<()> {
        let out = render(&[john()], OutputFormat::Yaml)?;
        assert!(out.contains("name: John Doe"), "{out}");
        assert!(
            out.contains("details: In division 1 from 2023-05-05 performing Task A"),
            "{out}"
        );
        assert!(out.find("name:").unwrap() < out.find("details:").unwrap());
        assert!(out.starts_with("records:"), "{out}");
        Ok(())
    }

    #[test]
    fn test_json_output() -> Result<()> {
        let out = render(&[john()], OutputFormat::Json)?;
        let expected = r#"{
  "records": [
    {
      "name": "John Doe",
      "details": "In division 1 from 2023-05-05 performing Task A"
    }
  ]
}"#;
        assert_eq!(out, expected);
        Ok(())
    }

    #[test]
    fn test_empty_documents() -> Result<()> {
        let yaml: Document = serde_yaml::from_str(&render(&[], OutputFormat::Yaml)?)?;
        assert!(yaml.records.is_empty());
        let json: Document = serde_json::from_str(&render(&[], OutputFormat::Json)?)?;
        assert!(json.records.is_empty());
        Ok(())
    }

    #[test]
    fn test_special_characters_survive_both_notations() -> Result<()> {
        let mut tricky = john();
        tricky.first_name = "Zoë \"Z\"".into();
        tricky.last_name = "O'Brien: #1".into();
        tricky.summary = "- dash, {braces} [list] & *star* \\ back\nnewline\ttab".into();
        let mut second = john();
        second.summary = "yes".into();
        second.first_name = "null".into();
        let records = vec![tricky, second];
        let expected = project(&records);

        let yaml: Document = serde_yaml::from_str(&render(&records, OutputFormat::Yaml)?)?;
        assert_eq!(yaml, expected);

        let json: Document = serde_json::from_str(&render(&records, OutputFormat::Json)?)?;
        assert_eq!(json, expected);
        Ok(())
    }

    #[test]
    fn test_order_preserved() -> Result<()> {
        let mut a = john();
        a.first_name = "B".into();
        let mut b = john();
        b.first_name = "A".into();
        let doc: Document = serde_json::from_str(&render(&[a, b], OutputFormat::Json)?)?;
        let names: Vec<&str> = doc.records.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["B Doe", "A Doe"]);
        Ok(())
    }

    #[test]
    fn test_format_display() {
        assert_eq!(OutputFormat::Yaml.to_string(), "YAML");
        assert_eq!(OutputFormat::Json.to_string(), "JSON");
        assert_eq!(OutputFormat::default(), OutputFormat::Yaml);
    }
}
