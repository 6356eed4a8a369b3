//! Reconciliation services for the Attendance Reconciliation Engine.
//!
//! This module contains the storage traits the engine consumes and the
//! service exposing the externally-facing operations: day processing, manual
//! record assignment, rest-day override, and shift update.

mod reconciliation;
mod store;

pub use reconciliation::{AssignmentOutcome, AssignmentType, ReconciliationService};
pub use store::{AttendanceStore, MemoryStore, ShiftLookup};
