use chrono::NaiveDate;

/// Input and output form of a record date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse `"YYYY-MM-DD"` into a calendar date; `None` for anything else,
/// including well-formed but impossible dates like `2023-02-30`. Unpadded
/// month and day (`2023-5-5`) are accepted.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

/// Render a date back into `"YYYY-MM-DD"`.
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
