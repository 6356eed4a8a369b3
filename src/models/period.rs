//! Work period range model.
//!
//! This module contains the [`PeriodRange`] type produced by the period
//! resolver and consumed by reporting to bucket attendance by payroll period.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A concrete calendar date range for one work period.
///
/// Ranges are inclusive on both ends and are produced fresh on each
/// resolution call; the engine never persists them itself.
///
/// # Example
///
/// ```
/// use attendance_engine::models::PeriodRange;
/// use chrono::NaiveDate;
///
/// let range = PeriodRange {
///     start: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
///     end: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
/// };
///
/// assert!(range.contains_date(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()));
/// assert!(!range.contains_date(NaiveDate::from_ymd_opt(2024, 3, 16).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodRange {
    /// The first day of the period (inclusive).
    pub start: NaiveDate,
    /// The last day of the period (inclusive).
    pub end: NaiveDate,
}

impl PeriodRange {
    /// Checks if a given date falls within this period.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Returns the number of calendar days covered by the period.
    ///
    /// A one-day period has length 1.
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}
