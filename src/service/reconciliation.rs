//! Reconciliation and manual assignment operations.
//!
//! This module hosts the externally-facing operations of the engine: the
//! automatic processing of an employee-day from its raw record pool, and the
//! manual protocol an administrator uses to reassign, clear, or override the
//! result afterwards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceFact, AttendanceRecord, DailyAttendance};
use crate::service::{AttendanceStore, ShiftLookup};

/// The slot a manual assignment targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentType {
    /// Remove the record from any slot it occupies.
    None,
    /// Assign the record to the check-in slot.
    CheckIn,
    /// Assign the record to the check-out slot.
    CheckOut,
}

impl AssignmentType {
    /// Maps a stored integer code to an assignment type.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] for codes other than 0–2.
    pub fn from_code(code: i32) -> EngineResult<Self> {
        match code {
            0 => Ok(AssignmentType::None),
            1 => Ok(AssignmentType::CheckIn),
            2 => Ok(AssignmentType::CheckOut),
            other => Err(EngineError::InvalidInput {
                message: format!("unknown assignment type code {}", other),
            }),
        }
    }

    /// Returns the stored integer code for this assignment type.
    pub fn code(&self) -> i32 {
        match self {
            AssignmentType::None => 0,
            AssignmentType::CheckIn => 1,
            AssignmentType::CheckOut => 2,
        }
    }
}

/// The result of a reconciliation or assignment operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentOutcome {
    /// The aggregate as persisted after the operation.
    pub attendance: DailyAttendance,
    /// Facts detected during the operation, for the caller to dispatch.
    pub facts: Vec<AttendanceFact>,
}

/// Reconciliation service over a caller-supplied store.
///
/// Operations on a given employee-day are expected to be serialized by the
/// caller; the service holds no locks. Every operation persists a fully
/// consistent aggregate or fails without persisting anything, relying on the
/// transactional boundary the store implementation provides.
///
/// # Example
///
/// ```
/// use attendance_engine::service::{MemoryStore, ReconciliationService};
/// use attendance_engine::models::Shift;
/// use chrono::{NaiveDate, NaiveTime};
/// use uuid::Uuid;
///
/// let mut store = MemoryStore::new();
/// let shift = Shift {
///     id: Uuid::new_v4(),
///     name: "Day".to_string(),
///     start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     tolerance_minutes: 15,
/// };
/// let shift_id = shift.id;
/// store.insert_shift(shift);
///
/// let mut service = ReconciliationService::new(store);
/// let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let outcome = service.process_day("emp_001", date, shift_id, &[]).unwrap();
/// assert_eq!(outcome.attendance.check_in_record_id, None);
/// ```
pub struct ReconciliationService<S> {
    store: S,
}

impl<S> ReconciliationService<S>
where
    S: AttendanceStore + ShiftLookup,
{
    /// Creates a service over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns a mutable reference to the underlying store.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Processes an employee-day from its raw record pool.
    ///
    /// Creates the daily attendance with the given shift context when none
    /// exists yet, assigns the employee's earliest punch of the day to
    /// check-in and the latest distinct punch to check-out, marks the
    /// assigned records processed, and persists the aggregate. Processing a
    /// day with an empty pool still establishes the aggregate, which is what
    /// permits manual assignment afterwards.
    ///
    /// # Errors
    ///
    /// - [`EngineError::NotFound`] when a new aggregate is needed and
    ///   `shift_id` is unknown
    /// - [`EngineError::DomainInvariantViolation`] when `employee_id` is empty
    pub fn process_day(
        &mut self,
        employee_id: &str,
        date: NaiveDate,
        shift_id: Uuid,
        records: &[AttendanceRecord],
    ) -> EngineResult<AssignmentOutcome> {
        let mut attendance = match self.store.daily_attendance(employee_id, date) {
            Some(existing) => existing,
            None => {
                let shift = self
                    .store
                    .shift(shift_id)
                    .ok_or_else(|| EngineError::not_found("shift", shift_id))?;
                DailyAttendance::new(employee_id, date, shift)?
            }
        };

        let mut day_records: Vec<&AttendanceRecord> = records
            .iter()
            .filter(|r| r.employee_id == employee_id && r.check_time.date() == date)
            .collect();
        day_records.sort_by_key(|r| r.check_time);

        let mut facts = Vec::new();
        if let Some(first) = day_records.first() {
            facts.extend(attendance.set_check_in(first));
            self.store.mark_record_processed(first.id)?;
        }
        if day_records.len() > 1 {
            let last = day_records[day_records.len() - 1];
            facts.extend(attendance.set_check_out(last));
            self.store.mark_record_processed(last.id)?;
        }

        self.store.save_daily_attendance(&attendance)?;
        info!(
            employee_id,
            date = %date,
            records = day_records.len(),
            facts = facts.len(),
            "Processed employee day"
        );
        Ok(AssignmentOutcome { attendance, facts })
    }

    /// Manually assigns a record to a slot, or removes it from its slots.
    ///
    /// The operation trusts the administrator's explicit choice: it does not
    /// validate that the record's punch falls on `date`, nor that check-in
    /// precedes check-out. Records that come to occupy a slot are marked
    /// processed; the slot change and the status change persist together.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidState`] when no daily attendance exists for
    ///   the employee-day (the day must be processed first); nothing is
    ///   created in that case
    /// - [`EngineError::NotFound`] when the record does not exist
    pub fn assign_record(
        &mut self,
        employee_id: &str,
        date: NaiveDate,
        record_id: Uuid,
        assignment: AssignmentType,
    ) -> EngineResult<AssignmentOutcome> {
        let mut attendance = self
            .store
            .daily_attendance(employee_id, date)
            .ok_or_else(|| {
                warn!(employee_id, date = %date, "Manual assignment before processing");
                EngineError::InvalidState {
                    message: format!(
                        "no daily attendance exists for employee '{}' on {}: process the day before assigning records manually",
                        employee_id, date
                    ),
                }
            })?;

        let record = self
            .store
            .record(record_id)
            .ok_or_else(|| EngineError::not_found("attendance record", record_id))?;

        let facts = match assignment {
            AssignmentType::CheckIn => {
                let facts = attendance.set_check_in(&record);
                self.store.mark_record_processed(record.id)?;
                facts
            }
            AssignmentType::CheckOut => {
                let facts = attendance.set_check_out(&record);
                self.store.mark_record_processed(record.id)?;
                facts
            }
            AssignmentType::None => {
                attendance.unassign(record.id);
                Vec::new()
            }
        };

        self.store.save_daily_attendance(&attendance)?;
        debug!(
            employee_id,
            date = %date,
            record_id = %record_id,
            assignment = ?assignment,
            "Applied manual assignment"
        );
        Ok(AssignmentOutcome { attendance, facts })
    }

    /// Sets the manual rest-day override for a processed employee-day.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidState`] when the day has not been
    /// processed yet.
    pub fn set_rest_day_override(
        &mut self,
        employee_id: &str,
        date: NaiveDate,
        value: bool,
    ) -> EngineResult<DailyAttendance> {
        let mut attendance = self
            .store
            .daily_attendance(employee_id, date)
            .ok_or_else(|| EngineError::InvalidState {
                message: format!(
                    "no daily attendance exists for employee '{}' on {}: process the day before overriding rest-day status",
                    employee_id, date
                ),
            })?;

        attendance.set_rest_day_override(value);
        self.store.save_daily_attendance(&attendance)?;
        Ok(attendance)
    }

    /// Attaches or replaces the shift context of an employee-day.
    ///
    /// When the day has not been processed yet this creates the aggregate
    /// with empty slots, which also unlocks manual assignment for the day.
    ///
    /// # Errors
    ///
    /// - [`EngineError::NotFound`] when `shift_id` is unknown
    /// - [`EngineError::DomainInvariantViolation`] when `employee_id` is empty
    pub fn update_shift(
        &mut self,
        employee_id: &str,
        date: NaiveDate,
        shift_id: Uuid,
    ) -> EngineResult<DailyAttendance> {
        let shift = self
            .store
            .shift(shift_id)
            .ok_or_else(|| EngineError::not_found("shift", shift_id))?;

        let mut attendance = match self.store.daily_attendance(employee_id, date) {
            Some(existing) => existing,
            None => DailyAttendance::new(employee_id, date, shift.clone())?,
        };
        attendance.update_shift(shift);
        self.store.save_daily_attendance(&attendance)?;
        Ok(attendance)
    }
}
