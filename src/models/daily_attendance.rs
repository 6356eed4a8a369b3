//! Daily attendance aggregate.
//!
//! This module defines [`DailyAttendance`], the per-employee-per-day
//! aggregate tracking which raw record currently occupies the check-in and
//! check-out slots, and [`AttendanceFact`], the plain facts slot mutations
//! report back to the caller in place of in-process domain events.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, Shift};

/// Hours either side of the shift window within which a punch is considered
/// an ordinary check rather than an out-of-hours one.
const OUT_OF_HOURS_MARGIN_HOURS: i64 = 4;

/// A fact detected while mutating a daily attendance.
///
/// Facts are returned to the caller, which decides whether and how to
/// dispatch them; the engine itself never publishes events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AttendanceFact {
    /// The assigned record's punch falls on a different calendar day than
    /// the attendance date (and outside the shift window).
    OffScheduleCheck {
        /// The record that triggered the fact.
        record_id: Uuid,
        /// The punch timestamp.
        check_time: NaiveDateTime,
    },
    /// The assigned record's punch falls on the attendance date but well
    /// outside the scheduled shift window.
    OutOfHoursCheck {
        /// The record that triggered the fact.
        record_id: Uuid,
        /// The punch timestamp.
        check_time: NaiveDateTime,
    },
}

/// The check-in/check-out state of one employee on one date.
///
/// One instance exists per (employee, date) pair. Either slot may be empty;
/// a record id never occupies both slots at once: assigning a record to one
/// slot first clears it from the other.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{AttendanceRecord, DailyAttendance, Shift, VerifyMethod};
/// use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
/// use uuid::Uuid;
///
/// let shift = Shift {
///     id: Uuid::new_v4(),
///     name: "Day".to_string(),
///     start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     tolerance_minutes: 15,
/// };
/// let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let mut attendance = DailyAttendance::new("emp_001", date, shift).unwrap();
///
/// let record = AttendanceRecord::new(
///     "emp_001",
///     NaiveDateTime::parse_from_str("2024-03-01 08:58:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     VerifyMethod::Fingerprint,
/// );
/// attendance.set_check_in(&record);
/// assert_eq!(attendance.check_in_record_id, Some(record.id));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyAttendance {
    /// Unique identifier for the aggregate.
    pub id: Uuid,
    /// Identifier of the employee the day belongs to.
    pub employee_id: String,
    /// The calendar day being tracked.
    pub date: NaiveDate,
    /// The shift context used to evaluate lateness and overtime.
    pub shift: Shift,
    /// The record currently occupying the check-in slot, if any.
    pub check_in_record_id: Option<Uuid>,
    /// The record currently occupying the check-out slot, if any.
    pub check_out_record_id: Option<Uuid>,
    /// Manual rest-day override; `None` defers to the schedule.
    pub is_rest_day_override: Option<bool>,
}

impl DailyAttendance {
    /// Creates a new daily attendance with empty slots.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DomainInvariantViolation`] when `employee_id`
    /// is empty.
    pub fn new(
        employee_id: impl Into<String>,
        date: NaiveDate,
        shift: Shift,
    ) -> EngineResult<Self> {
        let employee_id = employee_id.into();
        if employee_id.trim().is_empty() {
            return Err(EngineError::DomainInvariantViolation {
                message: "daily attendance requires a non-empty employee id".to_string(),
            });
        }
        Ok(Self {
            id: Uuid::new_v4(),
            employee_id,
            date,
            shift,
            check_in_record_id: None,
            check_out_record_id: None,
            is_rest_day_override: None,
        })
    }

    /// Assigns `record` to the check-in slot, overwriting any prior occupant.
    ///
    /// If the same record currently occupies the check-out slot it is cleared
    /// from there first. Returns the facts detected during the assignment.
    pub fn set_check_in(&mut self, record: &AttendanceRecord) -> Vec<AttendanceFact> {
        if self.check_out_record_id == Some(record.id) {
            self.check_out_record_id = None;
        }
        self.check_in_record_id = Some(record.id);
        self.detect_facts(record)
    }

    /// Assigns `record` to the check-out slot, overwriting any prior occupant.
    ///
    /// If the same record currently occupies the check-in slot it is cleared
    /// from there first. Returns the facts detected during the assignment.
    pub fn set_check_out(&mut self, record: &AttendanceRecord) -> Vec<AttendanceFact> {
        if self.check_in_record_id == Some(record.id) {
            self.check_in_record_id = None;
        }
        self.check_out_record_id = Some(record.id);
        self.detect_facts(record)
    }

    /// Clears the check-in slot. Clearing an empty slot is a no-op.
    pub fn remove_check_in(&mut self) {
        self.check_in_record_id = None;
    }

    /// Clears the check-out slot. Clearing an empty slot is a no-op.
    pub fn remove_check_out(&mut self) {
        self.check_out_record_id = None;
    }

    /// Clears `record_id` from whichever slots currently hold it.
    pub fn unassign(&mut self, record_id: Uuid) {
        if self.check_in_record_id == Some(record_id) {
            self.check_in_record_id = None;
        }
        if self.check_out_record_id == Some(record_id) {
            self.check_out_record_id = None;
        }
    }

    /// Sets the manual rest-day override, independent of slot state.
    pub fn set_rest_day_override(&mut self, value: bool) {
        self.is_rest_day_override = Some(value);
    }

    /// Replaces the shift context. Slot state is untouched.
    pub fn update_shift(&mut self, shift: Shift) {
        self.shift = shift;
    }

    /// Returns true when `record_id` occupies either slot.
    pub fn holds(&self, record_id: Uuid) -> bool {
        self.check_in_record_id == Some(record_id) || self.check_out_record_id == Some(record_id)
    }

    fn detect_facts(&self, record: &AttendanceRecord) -> Vec<AttendanceFact> {
        let (window_start, window_end) = self.shift.window_on(self.date);
        let margin = Duration::hours(OUT_OF_HOURS_MARGIN_HOURS);
        if record.check_time >= window_start - margin && record.check_time <= window_end + margin {
            return Vec::new();
        }
        let fact = if record.check_time.date() != self.date {
            AttendanceFact::OffScheduleCheck {
                record_id: record.id,
                check_time: record.check_time,
            }
        } else {
            AttendanceFact::OutOfHoursCheck {
                record_id: record.id,
                check_time: record.check_time,
            }
        };
        vec![fact]
    }
}
