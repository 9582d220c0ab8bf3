//! Absence entries and their categories.
//!
//! This module defines the [`AbsenceEntry`] record kept by the store, the
//! [`AbsenceEntryInput`] accepted on create and update, and the
//! [`EntryFilter`] used when listing entries.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::DateRange;
use crate::error::PlannerResult;

/// The kind of absence recorded by an entry.
///
/// Only [`AbsenceCategory::Vacation`] counts toward the concurrent-vacation
/// cap. The German tokens used by earlier clients (`URLAUB`, `KRANKHEIT`,
/// `SONDERURLAUB`) are accepted when deserializing.
///
/// # Example
///
/// ```
/// use vacation_planner::models::AbsenceCategory;
///
/// assert!(AbsenceCategory::Vacation.counts_toward_capacity());
/// assert!(!AbsenceCategory::Sick.counts_toward_capacity());
///
/// let parsed: AbsenceCategory = serde_json::from_str("\"URLAUB\"").unwrap();
/// assert_eq!(parsed, AbsenceCategory::Vacation);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsenceCategory {
    /// Paid vacation; subject to the capacity rule.
    #[serde(alias = "URLAUB")]
    Vacation,
    /// Sick leave; never constrained.
    #[serde(alias = "KRANKHEIT")]
    Sick,
    /// Special leave (weddings, bereavement, ...); never constrained.
    #[serde(alias = "SONDERURLAUB")]
    SpecialLeave,
}

impl AbsenceCategory {
    /// Returns true if entries of this category take part in the capacity check.
    pub fn counts_toward_capacity(self) -> bool {
        self == AbsenceCategory::Vacation
    }
}

impl std::fmt::Display for AbsenceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AbsenceCategory::Vacation => write!(f, "vacation"),
            AbsenceCategory::Sick => write!(f, "sick"),
            AbsenceCategory::SpecialLeave => write!(f, "special_leave"),
        }
    }
}

/// A recorded absence of one employee over a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsenceEntry {
    /// Unique identifier for the entry.
    pub id: Uuid,
    /// The employee who is absent.
    pub employee_id: Uuid,
    /// The employee's name at the time the entry was written.
    pub employee_name: String,
    /// The absent days, serialized as `start_date` / `end_date`.
    #[serde(flatten)]
    pub range: DateRange,
    /// What kind of absence this is.
    pub category: AbsenceCategory,
    /// Free-form notes.
    #[serde(default)]
    pub notes: String,
    /// Number of business days covered by `range`.
    pub days_count: u32,
    /// When the entry was first created.
    pub created_date: DateTime<Utc>,
}

/// Payload for creating or replacing an absence entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsenceEntryInput {
    /// The employee who is absent.
    pub employee_id: Uuid,
    /// The first absent day (inclusive).
    pub start_date: NaiveDate,
    /// The last absent day (inclusive).
    pub end_date: NaiveDate,
    /// What kind of absence this is.
    #[serde(alias = "vacation_type")]
    pub category: AbsenceCategory,
    /// Free-form notes.
    #[serde(default)]
    pub notes: String,
}

impl AbsenceEntryInput {
    /// Returns the requested range, validating `start_date <= end_date`.
    pub fn range(&self) -> PlannerResult<DateRange> {
        DateRange::new(self.start_date, self.end_date)
    }
}

/// Optional filters for listing entries.
///
/// `start_date` and `end_date` select entries overlapping that window; either
/// bound may be given alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryFilter {
    /// Only entries of this employee.
    #[serde(default)]
    pub employee_id: Option<Uuid>,
    /// Only entries ending on or after this date.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Only entries starting on or before this date.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Only entries of this category.
    #[serde(default, alias = "vacation_type")]
    pub category: Option<AbsenceCategory>,
}

impl EntryFilter {
    /// Checks whether `entry` passes every filter that is set.
    pub fn matches(&self, entry: &AbsenceEntry) -> bool {
        self.employee_id.is_none_or(|id| entry.employee_id == id)
            && self.start_date.is_none_or(|start| entry.range.end >= start)
            && self.end_date.is_none_or(|end| entry.range.start <= end)
            && self.category.is_none_or(|category| entry.category == category)
    }
}
