//! Inclusive calendar date ranges.
//!
//! This module contains the [`DateRange`] type that every absence entry and
//! every capacity check is expressed in.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, PlannerResult};

/// Longest range, in calendar days, the planner accepts for an entry or an
/// overview (ten years).
pub const MAX_RANGE_DAYS: i64 = 3660;

/// An inclusive range of calendar dates.
///
/// Both `start` and `end` belong to the range, so a range with
/// `start == end` covers a single day. Ranges built through [`DateRange::new`]
/// always satisfy `start <= end`; ranges deserialized or built literally can
/// be checked with [`DateRange::validate`].
///
/// On the wire the bounds are named `start_date` and `end_date`.
///
/// # Example
///
/// ```
/// use vacation_planner::models::DateRange;
/// use chrono::NaiveDate;
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2025, 6, 16).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 6, 20).unwrap(),
/// )
/// .unwrap();
///
/// assert!(range.contains_date(NaiveDate::from_ymd_opt(2025, 6, 18).unwrap()));
/// assert_eq!(range.calendar_days(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// The first day of the range (inclusive).
    #[serde(rename = "start_date")]
    pub start: NaiveDate,
    /// The last day of the range (inclusive).
    #[serde(rename = "end_date")]
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting a start that lies after the end.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::InvalidRange`] if `start > end`.
    ///
    /// # Example
    ///
    /// ```
    /// use vacation_planner::models::DateRange;
    /// use vacation_planner::error::PlannerError;
    /// use chrono::NaiveDate;
    ///
    /// let result = DateRange::new(
    ///     NaiveDate::from_ymd_opt(2025, 6, 20).unwrap(),
    ///     NaiveDate::from_ymd_opt(2025, 6, 16).unwrap(),
    /// );
    /// assert!(matches!(result, Err(PlannerError::InvalidRange { .. })));
    /// ```
    pub fn new(start: NaiveDate, end: NaiveDate) -> PlannerResult<Self> {
        let range = Self { start, end };
        range.validate()?;
        Ok(range)
    }

    /// Creates a range covering exactly one day.
    pub fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Returns the range spanning January 1st to December 31st of `year`.
    ///
    /// Returns `None` if the year is outside the range chrono can represent.
    pub fn year(year: i32) -> Option<Self> {
        Some(Self {
            start: NaiveDate::from_ymd_opt(year, 1, 1)?,
            end: NaiveDate::from_ymd_opt(year, 12, 31)?,
        })
    }

    /// Checks the `start <= end` invariant.
    pub fn validate(&self) -> PlannerResult<()> {
        if self.start > self.end {
            return Err(PlannerError::InvalidRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// Checks the `start <= end` invariant and that the range spans at most
    /// `max_days` calendar days.
    ///
    /// # Errors
    ///
    /// - [`PlannerError::InvalidRange`] if the range is reversed
    /// - [`PlannerError::RangeTooLong`] if it covers more than `max_days` days
    ///
    /// # Example
    ///
    /// ```
    /// use vacation_planner::models::{DateRange, MAX_RANGE_DAYS};
    /// use vacation_planner::error::PlannerError;
    /// use chrono::NaiveDate;
    ///
    /// let huge = DateRange {
    ///     start: NaiveDate::from_ymd_opt(-200_000, 1, 1).unwrap(),
    ///     end: NaiveDate::from_ymd_opt(200_000, 12, 31).unwrap(),
    /// };
    /// assert!(matches!(
    ///     huge.validate_span(MAX_RANGE_DAYS),
    ///     Err(PlannerError::RangeTooLong { .. })
    /// ));
    /// ```
    pub fn validate_span(&self, max_days: i64) -> PlannerResult<()> {
        self.validate()?;
        if self.calendar_days() > max_days {
            return Err(PlannerError::RangeTooLong {
                start: self.start,
                end: self.end,
                max_days,
            });
        }
        Ok(())
    }

    /// Checks whether `date` falls inside the range, bounds included.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Checks whether `other` lies entirely inside this range.
    pub fn contains_range(&self, other: &DateRange) -> bool {
        other.start >= self.start && other.end <= self.end
    }

    /// Checks whether two ranges share at least one day.
    ///
    /// Two ranges overlap iff each one's start is no later than the other's end.
    ///
    /// # Example
    ///
    /// ```
    /// use vacation_planner::models::DateRange;
    /// use chrono::NaiveDate;
    ///
    /// let d = |day| NaiveDate::from_ymd_opt(2025, 6, day).unwrap();
    /// let week = DateRange::new(d(16), d(20)).unwrap();
    ///
    /// assert!(week.overlaps(&DateRange::new(d(20), d(25)).unwrap()));
    /// assert!(!week.overlaps(&DateRange::new(d(21), d(25)).unwrap()));
    /// ```
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start <= other.end && self.end >= other.start
    }

    /// Returns the number of calendar days in the range, weekends included.
    ///
    /// A reversed range reports zero days.
    pub fn calendar_days(&self) -> i64 {
        ((self.end - self.start).num_days() + 1).max(0)
    }
}
