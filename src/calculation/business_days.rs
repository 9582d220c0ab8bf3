//! Business-day arithmetic.
//!
//! This module provides utilities for classifying calendar days as business
//! days or weekend days and for walking the business days of a date range.
//! Weekends never count toward vacation totals or capacity checks.

use std::iter::FusedIterator;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::PlannerResult;
use crate::models::DateRange;

/// Represents the type of a calendar day.
///
/// # Example
///
/// ```
/// use vacation_planner::calculation::DayType;
///
/// let day_type = DayType::Saturday;
/// assert_eq!(format!("{:?}", day_type), "Saturday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday.
    Weekday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Saturday => write!(f, "Saturday"),
            DayType::Sunday => write!(f, "Sunday"),
        }
    }
}

/// Determines the day type for a given date.
///
/// # Example
///
/// ```
/// use vacation_planner::calculation::{get_day_type, DayType};
/// use chrono::NaiveDate;
///
/// // 2025-01-04 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2025, 1, 4).unwrap();
/// assert_eq!(get_day_type(saturday), DayType::Saturday);
///
/// // 2025-06-16 is a Monday
/// let monday = NaiveDate::from_ymd_opt(2025, 6, 16).unwrap();
/// assert_eq!(get_day_type(monday), DayType::Weekday);
/// ```
pub fn get_day_type(date: NaiveDate) -> DayType {
    match date.weekday() {
        Weekday::Sat => DayType::Saturday,
        Weekday::Sun => DayType::Sunday,
        _ => DayType::Weekday,
    }
}

/// Returns true for Monday through Friday.
pub fn is_business_day(date: NaiveDate) -> bool {
    get_day_type(date) == DayType::Weekday
}

/// Lazy iterator over the business days of a date range, in order.
///
/// Created by [`business_days_of`]. The iterator is `Clone`, and calling
/// [`business_days_of`] again on the same range yields the same sequence.
#[derive(Debug, Clone)]
pub struct BusinessDays {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for BusinessDays {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.next {
            if current > self.end {
                self.next = None;
                break;
            }
            self.next = current.succ_opt();
            if is_business_day(current) {
                return Some(current);
            }
        }
        None
    }
}

impl FusedIterator for BusinessDays {}

/// Enumerates each business day of `range`, start and end included.
///
/// A reversed range yields nothing.
///
/// # Example
///
/// ```
/// use vacation_planner::calculation::business_days_of;
/// use vacation_planner::models::DateRange;
/// use chrono::NaiveDate;
///
/// // Friday 2025-01-03 to Monday 2025-01-06
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2025, 1, 3).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
/// )
/// .unwrap();
///
/// let days: Vec<NaiveDate> = business_days_of(&range).collect();
/// assert_eq!(
///     days,
///     vec![
///         NaiveDate::from_ymd_opt(2025, 1, 3).unwrap(),
///         NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
///     ]
/// );
/// ```
pub fn business_days_of(range: &DateRange) -> BusinessDays {
    BusinessDays {
        next: Some(range.start),
        end: range.end,
    }
}

/// Counts the business days in `range`, start and end included.
///
/// Runs in constant time: full weeks contribute five days each and only the
/// trailing partial week is inspected.
///
/// # Errors
///
/// Returns [`PlannerError::InvalidRange`](crate::error::PlannerError::InvalidRange)
/// if the range starts after it ends.
///
/// # Example
///
/// ```
/// use vacation_planner::calculation::count_business_days;
/// use vacation_planner::models::DateRange;
/// use chrono::NaiveDate;
///
/// // Monday to Sunday
/// let week = DateRange::new(
///     NaiveDate::from_ymd_opt(2025, 6, 16).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 6, 22).unwrap(),
/// )
/// .unwrap();
/// assert_eq!(count_business_days(&week).unwrap(), 5);
/// ```
pub fn count_business_days(range: &DateRange) -> PlannerResult<u32> {
    range.validate()?;

    let days = range.calendar_days();
    let first = i64::from(range.start.weekday().num_days_from_monday());
    let remainder = (0..days % 7)
        .filter(|offset| (first + offset) % 7 < 5)
        .count() as i64;
    let count = days / 7 * 5 + remainder;

    // chrono spans fewer than 200 million days, so this always fits.
    debug_assert!(count <= i64::from(u32::MAX));
    Ok(count as u32)
}
