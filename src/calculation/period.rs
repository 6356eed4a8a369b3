//! Work-period date resolution.
//!
//! This module translates a configured work-period mode and a period number
//! into a concrete calendar date range. Resolution never fails: day-of-month
//! anchors that a month cannot hold are clamped to the month's last day, and
//! out-of-range period numbers are clamped rather than rejected.

use chrono::{Datelike, Duration, NaiveDate};

use crate::config::{WorkPeriodConfig, WorkPeriodMode};
use crate::models::PeriodRange;

/// Resolves the concrete start/end dates of a work period.
///
/// `period_number` is interpreted per the configured mode: an ISO week
/// number for weekly periods, a calendar month for monthly periods, and a
/// half-month index (two per month) for fortnightly periods. Values below 1
/// are clamped to 1 to tolerate off-by-one callers.
///
/// This function is pure and does not fail for any valid calendar year;
/// anchors and period numbers the calendar cannot hold are clamped to the
/// nearest representable date.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::resolve_period;
/// use attendance_engine::config::{WorkPeriodConfig, WorkPeriodMode};
/// use chrono::NaiveDate;
///
/// let config = WorkPeriodConfig {
///     mode: WorkPeriodMode::Monthly,
///     monthly_start_day: 31,
///     ..WorkPeriodConfig::default()
/// };
///
/// // February 2024 has no 31st; the anchor clamps to the leap day.
/// let range = resolve_period(&config, 2024, 2);
/// assert_eq!(range.start, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// assert_eq!(range.end, NaiveDate::from_ymd_opt(2024, 3, 30).unwrap());
/// ```
pub fn resolve_period(config: &WorkPeriodConfig, year: i32, period_number: i32) -> PeriodRange {
    let number = period_number.max(1);
    match config.mode {
        WorkPeriodMode::Weekly => resolve_weekly(config, year, number as u32),
        WorkPeriodMode::Monthly => resolve_monthly(config, year, number as u32),
        WorkPeriodMode::Fortnightly => resolve_fortnightly(config, year, number as u32),
    }
}

/// Weekly periods: `number` is an ISO week number anchored to the configured
/// start day. Week numbers outside the ISO calendar's range for the year fall
/// back to counting whole weeks from the year's first ISO week.
fn resolve_weekly(config: &WorkPeriodConfig, year: i32, number: u32) -> PeriodRange {
    let start = NaiveDate::from_isoywd_opt(year, number, config.weekly_start_day)
        .unwrap_or_else(|| {
            let week_one = NaiveDate::from_isoywd_opt(year, 1, config.weekly_start_day)
                .expect("ISO week 1 exists for every valid calendar year");
            week_one
                .checked_add_signed(Duration::days((i64::from(number) - 1) * 7))
                .unwrap_or(week_one)
        });
    let end = start
        .checked_add_signed(Duration::days(6))
        .unwrap_or(start);
    PeriodRange { start, end }
}

/// Monthly periods: `number` is the calendar month, clamped to 1–12. The
/// period runs from the clamped anchor to the day before the next month's
/// clamped anchor.
fn resolve_monthly(config: &WorkPeriodConfig, year: i32, number: u32) -> PeriodRange {
    let month = number.clamp(1, 12);
    let start = clamped_date(year, month, config.monthly_start_day);
    let (next_year, next_month) = month_after(year, month);
    let end = day_before(clamped_date(next_year, next_month, config.monthly_start_day));
    PeriodRange { start, end }
}

/// Fortnightly periods: two periods per month. Odd numbers select the first
/// half (first anchor up to the day before the second anchor); even numbers
/// select the second half (second anchor up to the day before the next
/// month's first anchor).
fn resolve_fortnightly(config: &WorkPeriodConfig, year: i32, number: u32) -> PeriodRange {
    let month = (((number - 1) / 2) + 1).min(12);
    if number % 2 == 1 {
        let start = clamped_date(year, month, config.fortnight_first_day);
        let end = day_before(clamped_date(year, month, config.fortnight_second_day));
        PeriodRange { start, end }
    } else {
        let start = clamped_date(year, month, config.fortnight_second_day);
        let (next_year, next_month) = month_after(year, month);
        let end = day_before(clamped_date(next_year, next_month, config.fortnight_first_day));
        PeriodRange { start, end }
    }
}

/// Builds a date from a day-of-month anchor, clamping the day into the
/// month's actual range.
fn clamped_date(year: i32, month: u32, day: u32) -> NaiveDate {
    let day = day.clamp(1, days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).expect("clamped day always exists in its month")
}

/// Returns the number of days in the given month.
fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = month_after(year, month);
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map_or(28, |d| d.day())
}

/// Returns the (year, month) pair following the given month.
fn month_after(year: i32, month: u32) -> (i32, u32) {
    if month >= 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// Returns the day before `date`, saturating at the calendar minimum.
fn day_before(date: NaiveDate) -> NaiveDate {
    date.pred_opt().unwrap_or(date)
}
