//! Core data models for the Attendance Reconciliation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod daily_attendance;
mod period;
mod record;
mod shift;

pub use daily_attendance::{AttendanceFact, DailyAttendance};
pub use period::PeriodRange;
pub use record::{AttendanceRecord, AttendanceStatus, CheckType, VerifyMethod};
pub use shift::{Break, Shift};
