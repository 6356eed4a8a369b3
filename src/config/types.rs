//! Configuration types for work-period resolution.
//!
//! This module contains the strongly-typed configuration consumed by the
//! period resolver. The configuration is passed explicitly at call time;
//! there is no process-wide configuration state.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The active work-period bucketing mode.
///
/// Exactly one mode is active at a time; the other anchors in
/// [`WorkPeriodConfig`] are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkPeriodMode {
    /// Periods are ISO weeks anchored to a configurable weekday.
    Weekly,
    /// Two periods per month, split at two day-of-month anchors.
    Fortnightly,
    /// One period per month, starting at a day-of-month anchor.
    Monthly,
}

impl WorkPeriodMode {
    /// Maps a stored integer code to a mode.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] for codes other than 1–3.
    pub fn from_code(code: i32) -> EngineResult<Self> {
        match code {
            1 => Ok(WorkPeriodMode::Weekly),
            2 => Ok(WorkPeriodMode::Fortnightly),
            3 => Ok(WorkPeriodMode::Monthly),
            other => Err(EngineError::InvalidInput {
                message: format!("unknown work period mode code {}", other),
            }),
        }
    }

    /// Returns the stored integer code for this mode.
    pub fn code(&self) -> i32 {
        match self {
            WorkPeriodMode::Weekly => 1,
            WorkPeriodMode::Fortnightly => 2,
            WorkPeriodMode::Monthly => 3,
        }
    }
}

/// Work-period configuration snapshot.
///
/// Day-of-month anchors may name days a month does not have (e.g., 31);
/// the resolver clamps them to the month's last day rather than failing.
///
/// # Example
///
/// ```
/// use attendance_engine::config::{WorkPeriodConfig, WorkPeriodMode};
///
/// let config = WorkPeriodConfig {
///     mode: WorkPeriodMode::Monthly,
///     monthly_start_day: 31,
///     ..WorkPeriodConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkPeriodConfig {
    /// The active bucketing mode.
    pub mode: WorkPeriodMode,
    /// Weekday each weekly period starts on.
    pub weekly_start_day: Weekday,
    /// Day-of-month anchor (1–31) for the first half-month period.
    pub fortnight_first_day: u32,
    /// Day-of-month anchor (1–31) for the second half-month period.
    pub fortnight_second_day: u32,
    /// Day-of-month anchor (1–31) each monthly period starts on.
    pub monthly_start_day: u32,
}

impl Default for WorkPeriodConfig {
    fn default() -> Self {
        Self {
            mode: WorkPeriodMode::Weekly,
            weekly_start_day: Weekday::Mon,
            fortnight_first_day: 1,
            fortnight_second_day: 16,
            monthly_start_day: 1,
        }
    }
}

impl WorkPeriodConfig {
    /// Checks that all day-of-month anchors are within 1–31.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DomainInvariantViolation`] naming the first
    /// anchor that is out of range.
    pub fn validate(&self) -> EngineResult<()> {
        for (name, value) in [
            ("fortnight_first_day", self.fortnight_first_day),
            ("fortnight_second_day", self.fortnight_second_day),
            ("monthly_start_day", self.monthly_start_day),
        ] {
            if !(1..=31).contains(&value) {
                return Err(EngineError::DomainInvariantViolation {
                    message: format!("{} must be within 1-31, got {}", name, value),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(WorkPeriodConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_anchors() {
        let config = WorkPeriodConfig::default();
        assert_eq!(config.mode, WorkPeriodMode::Weekly);
        assert_eq!(config.weekly_start_day, Weekday::Mon);
        assert_eq!(config.fortnight_first_day, 1);
        assert_eq!(config.fortnight_second_day, 16);
        assert_eq!(config.monthly_start_day, 1);
    }

    #[test]
    fn test_validate_rejects_zero_anchor() {
        let config = WorkPeriodConfig {
            monthly_start_day: 0,
            ..WorkPeriodConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("monthly_start_day"));
    }

    #[test]
    fn test_validate_rejects_anchor_above_31() {
        let config = WorkPeriodConfig {
            fortnight_second_day: 32,
            ..WorkPeriodConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("fortnight_second_day"));
    }

    #[test]
    fn test_validate_accepts_anchor_31() {
        let config = WorkPeriodConfig {
            monthly_start_day: 31,
            ..WorkPeriodConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_mode_code_round_trip() {
        for mode in [
            WorkPeriodMode::Weekly,
            WorkPeriodMode::Fortnightly,
            WorkPeriodMode::Monthly,
        ] {
            assert_eq!(WorkPeriodMode::from_code(mode.code()).unwrap(), mode);
        }
    }

    #[test]
    fn test_mode_unknown_code_is_invalid_input() {
        let err = WorkPeriodMode::from_code(0).unwrap_err();
        assert!(err.to_string().contains("unknown work period mode code 0"));
    }

    #[test]
    fn test_config_deserializes_with_partial_yaml() {
        let yaml = "mode: monthly\nmonthly_start_day: 15\n";
        let config: WorkPeriodConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.mode, WorkPeriodMode::Monthly);
        assert_eq!(config.monthly_start_day, 15);
        // Unspecified anchors keep their defaults
        assert_eq!(config.fortnight_second_day, 16);
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = WorkPeriodConfig {
            mode: WorkPeriodMode::Fortnightly,
            weekly_start_day: Weekday::Sun,
            fortnight_first_day: 5,
            fortnight_second_day: 20,
            monthly_start_day: 1,
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        let deserialized: WorkPeriodConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(config, deserialized);
    }
}
