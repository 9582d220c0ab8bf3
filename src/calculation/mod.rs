//! Calculation logic for the Vacation Planner.
//!
//! This module contains the pure functions behind the planner: business-day
//! counting and enumeration, the concurrent-vacation capacity check, and the
//! yearly absence totals.

mod absence_totals;
mod business_days;
mod concurrency;

pub use absence_totals::{summarize_employee_year, summarize_sick_days};
pub use business_days::{
    BusinessDays, DayType, business_days_of, count_business_days, get_day_type, is_business_day,
};
pub use concurrency::{daily_vacation_counts, evaluate_concurrency, peak_percentage};
