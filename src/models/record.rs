//! Raw attendance record model and device-coded enums.
//!
//! This module defines the [`AttendanceRecord`] struct representing a single
//! punch downloaded from a time clock terminal, along with the closed enums
//! for the integer codes those terminals report.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

/// Processing status of a raw attendance record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// The record has been ingested but not yet assigned to any daily attendance.
    NotProcessed,
    /// The record occupies (or has occupied) a check-in or check-out slot.
    Processed,
}

impl AttendanceStatus {
    /// Maps a stored integer code to a status variant.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] for codes other than 0 and 1.
    pub fn from_code(code: i32) -> EngineResult<Self> {
        match code {
            0 => Ok(AttendanceStatus::NotProcessed),
            1 => Ok(AttendanceStatus::Processed),
            other => Err(EngineError::InvalidInput {
                message: format!("unknown attendance status code {}", other),
            }),
        }
    }

    /// Returns the stored integer code for this status.
    pub fn code(&self) -> i32 {
        match self {
            AttendanceStatus::NotProcessed => 0,
            AttendanceStatus::Processed => 1,
        }
    }
}

/// The direction of a punch event as reported by the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckType {
    /// The employee punched in.
    CheckIn,
    /// The employee punched out.
    CheckOut,
}

impl CheckType {
    /// Maps a terminal punch-state code to a check type.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] for codes other than 0 and 1.
    pub fn from_code(code: i32) -> EngineResult<Self> {
        match code {
            0 => Ok(CheckType::CheckIn),
            1 => Ok(CheckType::CheckOut),
            other => Err(EngineError::InvalidInput {
                message: format!("unknown check type code {}", other),
            }),
        }
    }

    /// Returns the terminal punch-state code for this check type.
    pub fn code(&self) -> i32 {
        match self {
            CheckType::CheckIn => 0,
            CheckType::CheckOut => 1,
        }
    }
}

/// The verification method the terminal used to identify the employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerifyMethod {
    /// Fingerprint scan.
    Fingerprint,
    /// Face recognition.
    Face,
    /// Proximity card.
    Card,
    /// Keypad password.
    Password,
    /// Any other method the terminal reports.
    Other,
}

impl VerifyMethod {
    /// Maps a terminal verify-type code to a verification method.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] for unknown codes.
    pub fn from_code(code: i32) -> EngineResult<Self> {
        match code {
            1 => Ok(VerifyMethod::Fingerprint),
            2 => Ok(VerifyMethod::Face),
            3 => Ok(VerifyMethod::Card),
            4 => Ok(VerifyMethod::Password),
            15 => Ok(VerifyMethod::Other),
            other => Err(EngineError::InvalidInput {
                message: format!("unknown verify method code {}", other),
            }),
        }
    }

    /// Returns the terminal verify-type code for this method.
    pub fn code(&self) -> i32 {
        match self {
            VerifyMethod::Fingerprint => 1,
            VerifyMethod::Face => 2,
            VerifyMethod::Card => 3,
            VerifyMethod::Password => 4,
            VerifyMethod::Other => 15,
        }
    }
}

/// A single punch downloaded from a time clock terminal.
///
/// Records are immutable once ingested apart from their [`AttendanceStatus`],
/// which flips to `Processed` when the record is assigned to a check-in or
/// check-out slot.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{AttendanceRecord, AttendanceStatus, VerifyMethod};
/// use chrono::NaiveDateTime;
/// use uuid::Uuid;
///
/// let record = AttendanceRecord {
///     id: Uuid::new_v4(),
///     employee_id: "emp_001".to_string(),
///     check_time: NaiveDateTime::parse_from_str("2024-03-01 08:58:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     verify_method: VerifyMethod::Fingerprint,
///     status: AttendanceStatus::NotProcessed,
/// };
/// assert!(!record.is_processed());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Unique identifier for the record.
    pub id: Uuid,
    /// Identifier of the employee the punch belongs to.
    pub employee_id: String,
    /// The timestamp of the punch.
    pub check_time: NaiveDateTime,
    /// How the terminal verified the employee.
    pub verify_method: VerifyMethod,
    /// Whether the record has been assigned to a daily attendance.
    pub status: AttendanceStatus,
}

impl AttendanceRecord {
    /// Creates a new unprocessed record with a fresh id.
    pub fn new(
        employee_id: impl Into<String>,
        check_time: NaiveDateTime,
        verify_method: VerifyMethod,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            employee_id: employee_id.into(),
            check_time,
            verify_method,
            status: AttendanceStatus::NotProcessed,
        }
    }

    /// Returns true once the record has been assigned to a slot.
    pub fn is_processed(&self) -> bool {
        self.status == AttendanceStatus::Processed
    }

    /// The deduplication key for this record.
    ///
    /// Two records are duplicates when they share an employee and an exact
    /// punch timestamp, regardless of id or verification method.
    pub fn dedup_key(&self) -> (&str, NaiveDateTime) {
        (self.employee_id.as_str(), self.check_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    #[test]
    fn test_new_record_is_not_processed() {
        let record = AttendanceRecord::new(
            "emp_001",
            make_datetime("2024-03-01", "08:58:00"),
            VerifyMethod::Fingerprint,
        );
        assert_eq!(record.status, AttendanceStatus::NotProcessed);
        assert!(!record.is_processed());
    }

    #[test]
    fn test_dedup_key_ignores_id_and_method() {
        let a = AttendanceRecord::new(
            "emp_001",
            make_datetime("2024-03-01", "08:58:00"),
            VerifyMethod::Fingerprint,
        );
        let b = AttendanceRecord::new(
            "emp_001",
            make_datetime("2024-03-01", "08:58:00"),
            VerifyMethod::Card,
        );
        assert_ne!(a.id, b.id);
        assert_eq!(a.dedup_key(), b.dedup_key());
    }

    #[test]
    fn test_attendance_status_code_round_trip() {
        for status in [AttendanceStatus::NotProcessed, AttendanceStatus::Processed] {
            assert_eq!(AttendanceStatus::from_code(status.code()).unwrap(), status);
        }
    }

    #[test]
    fn test_attendance_status_unknown_code_is_invalid_input() {
        let err = AttendanceStatus::from_code(9).unwrap_err();
        assert!(err.to_string().contains("unknown attendance status code 9"));
    }

    #[test]
    fn test_check_type_code_round_trip() {
        for check_type in [CheckType::CheckIn, CheckType::CheckOut] {
            assert_eq!(CheckType::from_code(check_type.code()).unwrap(), check_type);
        }
    }

    #[test]
    fn test_check_type_unknown_code_is_invalid_input() {
        assert!(CheckType::from_code(2).is_err());
        assert!(CheckType::from_code(-1).is_err());
    }

    #[test]
    fn test_verify_method_code_round_trip() {
        for method in [
            VerifyMethod::Fingerprint,
            VerifyMethod::Face,
            VerifyMethod::Card,
            VerifyMethod::Password,
            VerifyMethod::Other,
        ] {
            assert_eq!(VerifyMethod::from_code(method.code()).unwrap(), method);
        }
    }

    #[test]
    fn test_verify_method_unknown_code_is_invalid_input() {
        let err = VerifyMethod::from_code(99).unwrap_err();
        assert!(matches!(
            err,
            crate::error::EngineError::InvalidInput { .. }
        ));
    }

    #[test]
    fn test_record_serde_round_trip() {
        let record = AttendanceRecord::new(
            "emp_001",
            make_datetime("2024-03-01", "08:58:00"),
            VerifyMethod::Face,
        );
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"verify_method\":\"face\""));
        assert!(json.contains("\"status\":\"not_processed\""));
        let deserialized: AttendanceRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
