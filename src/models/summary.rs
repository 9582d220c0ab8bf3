//! Reporting models returned by the analytics operations.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    AbsenceEntry, CapacityRule, ConcurrencyVerdict, DailyAbsenceCount, DateRange, Employee,
};

/// Yearly absence totals for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    /// The employee the summary is for.
    pub employee: Employee,
    /// The summarised calendar year.
    pub year: i32,
    /// Yearly vacation allowance.
    pub vacation_days_total: u32,
    /// Vacation business days booked within the year.
    pub vacation_days_used: u32,
    /// Allowance minus used days; negative when overbooked.
    pub vacation_days_remaining: i64,
    /// Sick business days within the year.
    pub sick_days: u32,
    /// Special-leave business days within the year.
    pub special_leave_days: u32,
    /// All absence business days within the year.
    pub total_days_off: u32,
    /// The entries that were summed.
    pub vacation_entries: Vec<AbsenceEntry>,
}

/// Yearly sick-leave totals for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SickDaysSummary {
    /// The employee the summary is for.
    pub employee_id: Uuid,
    /// The summarised calendar year.
    pub year: i32,
    /// Sick business days within the year.
    pub sick_days: u32,
    /// Number of sick-leave entries within the year.
    pub sick_entries_count: usize,
}

/// Absence picture of the whole team over a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamOverview {
    /// The inspected range.
    pub date_range: DateRange,
    /// Current headcount.
    pub total_employees: u32,
    /// Number of entries of any category overlapping the range.
    pub vacation_entries_count: usize,
    /// Capacity check of the range as if one more vacation were booked for it.
    pub concurrent_analysis: ConcurrencyVerdict,
    /// People on vacation per business day of the range.
    pub daily_counts: Vec<DailyAbsenceCount>,
    /// Entries of any category overlapping the range.
    pub vacation_entries: Vec<AbsenceEntry>,
}

/// The active capacity rule together with the current headcount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacitySettings {
    /// The configured rule.
    #[serde(flatten)]
    pub rule: CapacityRule,
    /// Current headcount.
    pub total_employees: u32,
    /// The cap the rule yields for the current headcount.
    pub max_concurrent_calculated: u32,
}
