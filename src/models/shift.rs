//! Shift model and related types.
//!
//! This module defines the Shift and Break structs. A shift here is the
//! scheduled work window attached to a daily attendance, used downstream to
//! evaluate lateness and overtime; it is not a worked-time record itself.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A break interval inside a work day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Break {
    /// The start time of the break.
    pub start_time: NaiveDateTime,
    /// The end time of the break.
    pub end_time: NaiveDateTime,
}

impl Break {
    /// Returns the duration of the break in minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }
}

/// A scheduled work window for evaluating attendance.
///
/// Shifts are owned by the administration layer; the engine only reads them
/// as the lateness/overtime context of a [`DailyAttendance`].
///
/// [`DailyAttendance`]: crate::models::DailyAttendance
///
/// # Example
///
/// ```
/// use attendance_engine::models::Shift;
/// use chrono::NaiveTime;
/// use uuid::Uuid;
///
/// let shift = Shift {
///     id: Uuid::new_v4(),
///     name: "Day".to_string(),
///     start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     tolerance_minutes: 10,
/// };
/// assert!(!shift.crosses_midnight());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique identifier for the shift.
    pub id: Uuid,
    /// Human-readable shift name (e.g., "Day", "Night").
    pub name: String,
    /// The scheduled start time of day.
    pub start_time: NaiveTime,
    /// The scheduled end time of day.
    pub end_time: NaiveTime,
    /// Minutes of grace after the scheduled start before an arrival counts as late.
    pub tolerance_minutes: u32,
}

impl Shift {
    /// Returns true when the shift ends on the calendar day after it starts.
    ///
    /// An end time equal to the start time is treated as a 24-hour shift.
    pub fn crosses_midnight(&self) -> bool {
        self.end_time <= self.start_time
    }

    /// Returns the concrete start/end timestamps of this shift on `date`.
    ///
    /// For a shift crossing midnight the end lands on the following day.
    pub fn window_on(&self, date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
        let start = date.and_time(self.start_time);
        let mut end = date.and_time(self.end_time);
        if self.crosses_midnight() {
            end += Duration::days(1);
        }
        (start, end)
    }
}
