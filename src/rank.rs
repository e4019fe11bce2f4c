use std::cmp::Reverse;

use crate::records::Record;

/// Sort by division (ascending) then points (descending) and keep the first
/// `top_n`. The sort is stable, so rows tied on both keys keep their input
/// order. The input is left untouched.
pub fn top_records(records: &[Record], top_n: usize) -> Vec<Record> {
    let mut sorted = records.to_vec();
    sorted.sort_by_key(|r| (r.division, Reverse(r.points)));
    sorted.truncate(top_n);
    sorted
}
