use thiserror::Error;

use super::columns::ColumnLayout;
use super::date_parser::parse_date;
use super::utils::parse_int;
use crate::records::Record;

/// Why a data row was rejected. Rejected rows are dropped, never fatal.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RowError {
    #[error("invalid division {0:?}: expected an integer")]
    InvalidDivision(String),

    #[error("invalid points {0:?}: expected an integer")]
    InvalidPoints(String),

    #[error("invalid date {0:?}: expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("unreadable row: {0}")]
    Malformed(String),
}

/// Coerce one row of cells (in header order) into a [`Record`].
pub fn parse_row(layout: &ColumnLayout, cells: &[&str]) -> Result<Record, RowError> {
    let get = |idx: usize| cells.get(idx).copied().unwrap_or("");

    let division = get(layout.division);
    let division = parse_int(division).ok_or_else(|| RowError::InvalidDivision(division.into()))?;

    let points = get(layout.points);
    let points = parse_int(points).ok_or_else(|| RowError::InvalidPoints(points.into()))?;

    let date = get(layout.date);
    let date = parse_date(date).ok_or_else(|| RowError::InvalidDate(date.into()))?;

    Ok(Record {
        first_name: get(layout.first_name).to_string(),
        last_name: get(layout.last_name).to_string(),
        date,
        division,
        points,
        summary: get(layout.summary).to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const LAYOUT: ColumnLayout = ColumnLayout {
        first_name: 0,
        last_name: 1,
        date: 2,
        division: 3,
        points: 4,
        summary: 5,
    };

    #[test]
    fn test_parse_valid_row() {
        let cells = ["John", "Doe", "2023-05-05", "1", "90", "Task A"];
        let rec = parse_row(&LAYOUT, &cells).unwrap();
        assert_eq!(
            rec,
            Record {
                first_name: "John".into(),
                last_name: "Doe".into(),
                date: NaiveDate::from_ymd_opt(2023, 5, 5).unwrap(),
                division: 1,
                points: 90,
                summary: "Task A".into(),
            }
        );
    }

    #[test]
    fn test_division_checked_first() {
        let cells = [
            "Invalid",
            "User",
            "2023-05-05",
            "invalid_division",
            "invalid_points",
            "Task X",
        ];
        assert_eq!(
            parse_row(&LAYOUT, &cells),
            Err(RowError::InvalidDivision("invalid_division".into()))
        );
    }

    #[test]
    fn test_bad_points_and_date() {
        let cells = ["A", "B", "2023-05-05", "1", "ninety", "x"];
        assert_eq!(
            parse_row(&LAYOUT, &cells),
            Err(RowError::InvalidPoints("ninety".into()))
        );

        let cells = ["A", "B", "2023-13-01", "1", "90", "x"];
        assert_eq!(
            parse_row(&LAYOUT, &cells),
            Err(RowError::InvalidDate("2023-13-01".into()))
        );
    }

    #[test]
    fn test_short_row_fails_on_missing_numeric() {
        let cells = ["A", "B", "2023-05-05"];
        assert_eq!(
            parse_row(&LAYOUT, &cells),
            Err(RowError::InvalidDivision(String::new()))
        );
    }

    #[test]
    fn test_text_cells_kept_verbatim() {
        let cells = ["  Ann ", "O'Neil", "2023-05-05", " 2 ", "7", "said \"hi\": ok, done"];
        let rec = parse_row(&LAYOUT, &cells).unwrap();
        assert_eq!(rec.first_name, "  Ann ");
        assert_eq!(rec.division, 2);
        assert_eq!(rec.summary, "said \"hi\": ok, done");
    }
}
