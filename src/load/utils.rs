/// Parse an integer cell, tolerating surrounding whitespace.
pub fn parse_int(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}
