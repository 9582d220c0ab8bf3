//! Error types for the Vacation Planner.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the planner can report. A capacity violation is carried
//! as an error only at the service boundary; the validator itself returns it
//! as a negative [`ConcurrencyVerdict`].

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use crate::models::ConcurrencyVerdict;

/// The main error type for the Vacation Planner.
///
/// # Example
///
/// ```
/// use vacation_planner::error::PlannerError;
/// use chrono::NaiveDate;
///
/// let error = PlannerError::InvalidRange {
///     start: NaiveDate::from_ymd_opt(2025, 6, 20).unwrap(),
///     end: NaiveDate::from_ymd_opt(2025, 6, 16).unwrap(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid date range: start 2025-06-20 is after end 2025-06-16"
/// );
/// ```
#[derive(Debug, Error)]
pub enum PlannerError {
    /// A date range whose start lies after its end.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange {
        /// The start of the rejected range.
        start: NaiveDate,
        /// The end of the rejected range.
        end: NaiveDate,
    },

    /// A date range longer than the planner accepts.
    #[error("Date range too long: {start} to {end} spans more than {max_days} days")]
    RangeTooLong {
        /// The start of the rejected range.
        start: NaiveDate,
        /// The end of the rejected range.
        end: NaiveDate,
        /// The longest accepted span in calendar days.
        max_days: i64,
    },

    /// The employee total handed to the validator was negative.
    #[error("Invalid employee count: {count} (must not be negative)")]
    NegativeHeadcount {
        /// The rejected count.
        count: i64,
    },

    /// The capacity rule could not be applied.
    #[error("Invalid capacity rule: {message}")]
    InvalidCapacityRule {
        /// A description of what is wrong with the rule.
        message: String,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No employee exists with the given id.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The id that was looked up.
        id: Uuid,
    },

    /// No absence entry exists with the given id.
    #[error("Vacation entry not found: {id}")]
    EntryNotFound {
        /// The id that was looked up.
        id: Uuid,
    },

    /// Accepting the entry would put too many employees on vacation at once.
    #[error("{}", .verdict.rejection_message())]
    CapacityExceeded {
        /// The negative verdict with its diagnostics.
        verdict: Box<ConcurrencyVerdict>,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return PlannerError.
pub type PlannerResult<T> = Result<T, PlannerError>;
