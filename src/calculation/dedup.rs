//! Record deduplication for device downloads.
//!
//! Terminal downloads may re-fetch overlapping time windows; this module
//! filters a freshly downloaded batch down to the records not already
//! ingested, so re-downloading the same window introduces zero duplicates.

use std::collections::HashSet;

use chrono::NaiveDateTime;

use crate::models::AttendanceRecord;

/// Filters a candidate batch down to genuinely new records.
///
/// The uniqueness key is `(employee_id, check_time)` with exact timestamp
/// equality. Duplicates inside `candidates` are collapsed first (the first
/// occurrence wins), then any candidate whose key already appears in
/// `existing` is dropped.
///
/// The function is pure per call: re-running it over the same inputs, or
/// over a window that was already ingested, returns the same result.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::filter_new_records;
/// use attendance_engine::models::{AttendanceRecord, VerifyMethod};
/// use chrono::NaiveDateTime;
///
/// let punch = NaiveDateTime::parse_from_str("2024-03-01 08:58:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let existing = vec![AttendanceRecord::new("emp_001", punch, VerifyMethod::Fingerprint)];
/// let candidates = vec![AttendanceRecord::new("emp_001", punch, VerifyMethod::Fingerprint)];
///
/// assert!(filter_new_records(&candidates, &existing).is_empty());
/// ```
pub fn filter_new_records(
    candidates: &[AttendanceRecord],
    existing: &[AttendanceRecord],
) -> Vec<AttendanceRecord> {
    let known: HashSet<(&str, NaiveDateTime)> =
        existing.iter().map(|record| record.dedup_key()).collect();

    let mut seen: HashSet<(&str, NaiveDateTime)> = HashSet::new();
    candidates
        .iter()
        .filter(|record| seen.insert(record.dedup_key()) && !known.contains(&record.dedup_key()))
        .cloned()
        .collect()
}
