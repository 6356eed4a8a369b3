//! Storage traits for the reconciliation service.
//!
//! Persistence is owned by the caller: the engine only describes the access
//! it needs through these traits. Each logical service operation is expected
//! to run inside one caller-supplied transactional boundary, so a failed
//! commit leaves no partial slot or status updates behind.

use std::collections::HashMap;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, AttendanceStatus, DailyAttendance, Shift};

/// Access to attendance records and daily attendance aggregates.
pub trait AttendanceStore {
    /// Fetches a raw attendance record by id.
    fn record(&self, id: Uuid) -> Option<AttendanceRecord>;

    /// Fetches the daily attendance for an employee-day pair.
    fn daily_attendance(&self, employee_id: &str, date: NaiveDate) -> Option<DailyAttendance>;

    /// Persists a daily attendance aggregate, inserting or updating.
    fn save_daily_attendance(&mut self, attendance: &DailyAttendance) -> EngineResult<()>;

    /// Marks a record as processed. Re-marking an already-processed record
    /// is a no-op, not an error.
    fn mark_record_processed(&mut self, id: Uuid) -> EngineResult<()>;
}

/// Shift lookup by id, used to attach shift context to a daily attendance.
pub trait ShiftLookup {
    /// Fetches a shift by id.
    fn shift(&self, id: Uuid) -> Option<Shift>;
}

/// A HashMap-backed store implementation.
///
/// Suitable for tests and in-process use; real deployments implement the
/// traits over their own persistence.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: HashMap<Uuid, AttendanceRecord>,
    attendance: HashMap<(String, NaiveDate), DailyAttendance>,
    shifts: HashMap<Uuid, Shift>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a raw record to the store.
    pub fn insert_record(&mut self, record: AttendanceRecord) {
        self.records.insert(record.id, record);
    }

    /// Adds a shift to the store.
    pub fn insert_shift(&mut self, shift: Shift) {
        self.shifts.insert(shift.id, shift);
    }
}

impl AttendanceStore for MemoryStore {
    fn record(&self, id: Uuid) -> Option<AttendanceRecord> {
        self.records.get(&id).cloned()
    }

    fn daily_attendance(&self, employee_id: &str, date: NaiveDate) -> Option<DailyAttendance> {
        self.attendance.get(&(employee_id.to_string(), date)).cloned()
    }

    fn save_daily_attendance(&mut self, attendance: &DailyAttendance) -> EngineResult<()> {
        self.attendance.insert(
            (attendance.employee_id.clone(), attendance.date),
            attendance.clone(),
        );
        Ok(())
    }

    fn mark_record_processed(&mut self, id: Uuid) -> EngineResult<()> {
        let record = self
            .records
            .get_mut(&id)
            .ok_or_else(|| EngineError::not_found("attendance record", id))?;
        record.status = AttendanceStatus::Processed;
        Ok(())
    }
}

impl ShiftLookup for MemoryStore {
    fn shift(&self, id: Uuid) -> Option<Shift> {
        self.shifts.get(&id).cloned()
    }
}
