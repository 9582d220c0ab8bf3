//! Results of the concurrent-vacation check.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The outcome of checking a candidate vacation against the capacity rule.
///
/// A verdict is computed fresh for every check and never stored. A negative
/// verdict (`is_valid == false`) is an ordinary result, not an error; the
/// service turns it into a rejection using [`ConcurrencyVerdict::rejection_message`].
///
/// # Example
///
/// ```
/// use vacation_planner::models::ConcurrencyVerdict;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let verdict = ConcurrencyVerdict {
///     is_valid: false,
///     peak_count: 7,
///     peak_day: NaiveDate::from_ymd_opt(2025, 6, 16),
///     max_allowed: 6,
///     peak_percentage: Decimal::new(350, 1),
///     total_employees: 20,
/// };
///
/// assert!(verdict.rejection_message().ends_with("Peak day: 2025-06-16 with 7 people."));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConcurrencyVerdict {
    /// Whether the peak stays within the allowed maximum.
    pub is_valid: bool,
    /// Highest number of people on vacation on any business day, candidate included.
    pub peak_count: u32,
    /// First business day reaching `peak_count`; `None` when the range has no business days.
    pub peak_day: Option<NaiveDate>,
    /// Maximum number of people allowed on vacation at once.
    pub max_allowed: u32,
    /// `peak_count` as a share of the headcount, rounded to one decimal.
    #[serde(with = "rust_decimal::serde::float")]
    pub peak_percentage: Decimal,
    /// The headcount the check was made against.
    pub total_employees: u32,
}

impl ConcurrencyVerdict {
    /// Renders the user-facing message explaining a rejection.
    pub fn rejection_message(&self) -> String {
        let peak_day = self
            .peak_day
            .map_or_else(|| "none".to_string(), |day| day.to_string());
        format!(
            "Too many concurrent vacations. Maximum {} people ({:.1}%) can be on vacation \
             simultaneously. Peak day: {} with {} people.",
            self.max_allowed, self.peak_percentage, peak_day, self.peak_count
        )
    }
}

/// Number of people on vacation on one business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyAbsenceCount {
    /// The business day.
    pub date: NaiveDate,
    /// People on vacation that day.
    pub count: u32,
}
