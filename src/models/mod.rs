//! Core data models for the Vacation Planner.
//!
//! This module contains all the domain models used throughout the planner.

mod absence;
mod capacity_rule;
mod date_range;
mod employee;
mod summary;
mod verdict;

pub use absence::{AbsenceCategory, AbsenceEntry, AbsenceEntryInput, EntryFilter};
pub use capacity_rule::{CapacityRule, DEFAULT_CAPACITY_PERCENTAGE};
pub use date_range::{DateRange, MAX_RANGE_DAYS};
pub use employee::{
    Employee, EmployeeInput, EmployeeRole, MAX_SKILL_RATING, MIN_SKILL_RATING, Skill,
};
pub use summary::{CapacitySettings, EmployeeSummary, SickDaysSummary, TeamOverview};
pub use verdict::{ConcurrencyVerdict, DailyAbsenceCount};
