//! Query types for the Vacation Planner API.
//!
//! Request bodies reuse the model payloads ([`EmployeeInput`],
//! [`AbsenceEntryInput`]); this module holds the query-string shapes.
//!
//! [`EmployeeInput`]: crate::models::EmployeeInput
//! [`AbsenceEntryInput`]: crate::models::AbsenceEntryInput

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::DateRange;

/// `?year=` query for the analytics endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct YearQuery {
    /// Calendar year; defaults to the current year.
    #[serde(default)]
    pub year: Option<i32>,
}

impl YearQuery {
    /// Returns the requested year or the current one.
    pub fn year_or_current(&self) -> i32 {
        self.year.unwrap_or_else(|| Utc::now().year())
    }
}

/// `?start_date=&end_date=` query for the team overview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeQuery {
    /// First day of the window (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the window (inclusive).
    pub end_date: NaiveDate,
}

impl From<RangeQuery> for DateRange {
    fn from(query: RangeQuery) -> Self {
        DateRange {
            start: query.start_date,
            end: query.end_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_query_defaults_to_current_year() {
        let query = YearQuery::default();
        assert_eq!(query.year_or_current(), Utc::now().year());

        let query = YearQuery { year: Some(2025) };
        assert_eq!(query.year_or_current(), 2025);
    }

    #[test]
    fn test_range_query_conversion_keeps_order() {
        let query = RangeQuery {
            start_date: NaiveDate::from_ymd_opt(2025, 6, 20).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 6, 16).unwrap(),
        };
        let range: DateRange = query.into();
        // Reversed windows are passed through and rejected by the planner.
        assert!(range.validate().is_err());
    }
}
