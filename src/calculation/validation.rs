//! Stateless attendance rule checks.
//!
//! This module provides the validation rules consumed by reconciliation and
//! reporting: punch-sequence sanity, worked-hours arithmetic, and late
//! arrival detection.

use chrono::{Duration, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

use crate::models::{Break, CheckType};

/// Minutes of grace after the scheduled start before an arrival counts as late.
///
/// This constant is deliberately fixed here and independent of the per-shift
/// `tolerance_minutes` used elsewhere in the system.
pub const LATE_ARRIVAL_TOLERANCE_MINUTES: i64 = 15;

/// Checks that two consecutive punches form a plausible sequence.
///
/// Two check-ins in a row or two check-outs in a row are rejected; every
/// other combination is valid.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::is_valid_check_sequence;
/// use attendance_engine::models::CheckType;
///
/// assert!(is_valid_check_sequence(CheckType::CheckIn, CheckType::CheckOut));
/// assert!(!is_valid_check_sequence(CheckType::CheckIn, CheckType::CheckIn));
/// ```
pub fn is_valid_check_sequence(previous: CheckType, current: CheckType) -> bool {
    match (previous, current) {
        (CheckType::CheckIn, CheckType::CheckIn) => false,
        (CheckType::CheckOut, CheckType::CheckOut) => false,
        _ => true,
    }
}

/// Calculates worked hours between a check-in and a check-out.
///
/// The total span is reduced by the duration of each break interval. Break
/// intervals are trusted to fall within `[check_in, check_out]` and not to
/// overlap; no containment validation is performed.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::calculate_worked_hours;
/// use attendance_engine::models::Break;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let check_in = NaiveDateTime::parse_from_str("2024-03-01 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let check_out = NaiveDateTime::parse_from_str("2024-03-01 17:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let lunch = Break {
///     start_time: NaiveDateTime::parse_from_str("2024-03-01 12:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     end_time: NaiveDateTime::parse_from_str("2024-03-01 12:30:00", "%Y-%m-%d %H:%M:%S").unwrap(),
/// };
/// assert_eq!(calculate_worked_hours(check_in, check_out, &[lunch]), Decimal::new(80, 1)); // 8.0
/// ```
pub fn calculate_worked_hours(
    check_in: NaiveDateTime,
    check_out: NaiveDateTime,
    breaks: &[Break],
) -> Decimal {
    let total_minutes = (check_out - check_in).num_minutes();
    let break_minutes: i64 = breaks.iter().map(|b| b.duration_minutes()).sum();
    let worked_minutes = total_minutes - break_minutes;

    Decimal::new(worked_minutes, 0) / Decimal::new(60, 0)
}

/// Determines whether a check-in counts as a late arrival.
///
/// Only the time-of-day component of `check_in` is compared: an arrival is
/// late when it falls more than [`LATE_ARRIVAL_TOLERANCE_MINUTES`] after the
/// scheduled start.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::is_late_arrival;
/// use chrono::{NaiveDateTime, NaiveTime};
///
/// let scheduled = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
/// let on_time = NaiveDateTime::parse_from_str("2024-03-01 09:10:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let late = NaiveDateTime::parse_from_str("2024-03-01 09:16:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// assert!(!is_late_arrival(on_time, scheduled));
/// assert!(is_late_arrival(late, scheduled));
/// ```
pub fn is_late_arrival(check_in: NaiveDateTime, scheduled_start: NaiveTime) -> bool {
    let delay = check_in.time().signed_duration_since(scheduled_start);
    delay > Duration::minutes(LATE_ARRIVAL_TOLERANCE_MINUTES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn make_time(time_str: &str) -> NaiveTime {
        NaiveTime::parse_from_str(time_str, "%H:%M:%S").unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    // ==========================================================================
    // Check sequence
    // ==========================================================================

    #[test]
    fn test_alternating_sequences_are_valid() {
        assert!(is_valid_check_sequence(
            CheckType::CheckIn,
            CheckType::CheckOut
        ));
        assert!(is_valid_check_sequence(
            CheckType::CheckOut,
            CheckType::CheckIn
        ));
    }

    #[test]
    fn test_repeated_check_in_is_invalid() {
        assert!(!is_valid_check_sequence(
            CheckType::CheckIn,
            CheckType::CheckIn
        ));
    }

    #[test]
    fn test_repeated_check_out_is_invalid() {
        assert!(!is_valid_check_sequence(
            CheckType::CheckOut,
            CheckType::CheckOut
        ));
    }

    // ==========================================================================
    // Worked hours
    // ==========================================================================

    #[test]
    fn test_worked_hours_without_breaks() {
        let hours = calculate_worked_hours(
            make_datetime("2024-03-01", "09:00:00"),
            make_datetime("2024-03-01", "17:00:00"),
            &[],
        );
        assert_eq!(hours, dec("8.0"));
    }

    #[test]
    fn test_worked_hours_subtracts_breaks() {
        let breaks = vec![
            Break {
                start_time: make_datetime("2024-03-01", "12:00:00"),
                end_time: make_datetime("2024-03-01", "12:30:00"),
            },
            Break {
                start_time: make_datetime("2024-03-01", "15:00:00"),
                end_time: make_datetime("2024-03-01", "15:15:00"),
            },
        ];
        let hours = calculate_worked_hours(
            make_datetime("2024-03-01", "08:00:00"),
            make_datetime("2024-03-01", "18:00:00"),
            &breaks,
        );
        // 10 hours minus 45 minutes
        assert_eq!(hours, dec("9.25"));
    }

    #[test]
    fn test_worked_hours_across_midnight() {
        let hours = calculate_worked_hours(
            make_datetime("2024-03-01", "22:00:00"),
            make_datetime("2024-03-02", "06:00:00"),
            &[],
        );
        assert_eq!(hours, dec("8.0"));
    }

    #[test]
    fn test_worked_hours_zero_span() {
        let at = make_datetime("2024-03-01", "09:00:00");
        assert_eq!(calculate_worked_hours(at, at, &[]), Decimal::ZERO);
    }

    // ==========================================================================
    // Late arrival
    // ==========================================================================

    #[test]
    fn test_arrival_within_tolerance_is_not_late() {
        let scheduled = make_time("09:00:00");
        assert!(!is_late_arrival(
            make_datetime("2024-03-01", "09:00:00"),
            scheduled
        ));
        assert!(!is_late_arrival(
            make_datetime("2024-03-01", "09:15:00"),
            scheduled
        ));
    }

    #[test]
    fn test_arrival_past_tolerance_is_late() {
        let scheduled = make_time("09:00:00");
        assert!(is_late_arrival(
            make_datetime("2024-03-01", "09:15:01"),
            scheduled
        ));
        assert!(is_late_arrival(
            make_datetime("2024-03-01", "10:30:00"),
            scheduled
        ));
    }

    #[test]
    fn test_early_arrival_is_not_late() {
        let scheduled = make_time("09:00:00");
        assert!(!is_late_arrival(
            make_datetime("2024-03-01", "07:45:00"),
            scheduled
        ));
    }

    #[test]
    fn test_late_arrival_ignores_the_date_component() {
        let scheduled = make_time("09:00:00");
        // Same time-of-day on a different date gives the same verdict
        assert!(is_late_arrival(
            make_datetime("1999-12-31", "09:20:00"),
            scheduled
        ));
    }
}
