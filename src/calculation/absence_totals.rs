//! Yearly absence totals.
//!
//! Totals are plain sums of each entry's `days_count` over the entries that
//! lie entirely inside the requested calendar year. Entries crossing a year
//! boundary are left out of both years.

use uuid::Uuid;

use crate::models::{
    AbsenceCategory, AbsenceEntry, DateRange, Employee, EmployeeSummary, SickDaysSummary,
};

fn entries_within_year<'a>(
    entries: &'a [AbsenceEntry],
    employee_id: Uuid,
    year: i32,
) -> impl Iterator<Item = &'a AbsenceEntry> {
    let bounds = DateRange::year(year);
    entries.iter().filter(move |entry| {
        entry.employee_id == employee_id
            && bounds.is_some_and(|year_range| year_range.contains_range(&entry.range))
    })
}

fn sum_days<'a>(
    entries: impl IntoIterator<Item = &'a AbsenceEntry>,
    category: AbsenceCategory,
) -> u32 {
    entries
        .into_iter()
        .filter(|entry| entry.category == category)
        .map(|entry| entry.days_count)
        .sum()
}

/// Summarises an employee's absences for one calendar year.
///
/// # Example
///
/// ```
/// use vacation_planner::calculation::summarize_employee_year;
/// use vacation_planner::models::{EmployeeInput, EmployeeRole};
///
/// let employee = EmployeeInput {
///     name: "Anna Schmidt".to_string(),
///     email: String::new(),
///     role: EmployeeRole::Employee,
///     skills: vec![],
/// }
/// .into_employee(25);
///
/// let summary = summarize_employee_year(&employee, &[], 2025);
/// assert_eq!(summary.vacation_days_used, 0);
/// assert_eq!(summary.vacation_days_remaining, 25);
/// ```
pub fn summarize_employee_year(
    employee: &Employee,
    entries: &[AbsenceEntry],
    year: i32,
) -> EmployeeSummary {
    let in_year: Vec<AbsenceEntry> = entries_within_year(entries, employee.id, year)
        .cloned()
        .collect();

    let vacation_days_used = sum_days(&in_year, AbsenceCategory::Vacation);
    let sick_days = sum_days(&in_year, AbsenceCategory::Sick);
    let special_leave_days = sum_days(&in_year, AbsenceCategory::SpecialLeave);

    EmployeeSummary {
        employee: employee.clone(),
        year,
        vacation_days_total: employee.vacation_days_total,
        vacation_days_used,
        vacation_days_remaining: i64::from(employee.vacation_days_total)
            - i64::from(vacation_days_used),
        sick_days,
        special_leave_days,
        total_days_off: vacation_days_used + sick_days + special_leave_days,
        vacation_entries: in_year,
    }
}

/// Totals an employee's sick leave for one calendar year.
pub fn summarize_sick_days(employee_id: Uuid, entries: &[AbsenceEntry], year: i32) -> SickDaysSummary {
    let sick: Vec<&AbsenceEntry> = entries_within_year(entries, employee_id, year)
        .filter(|entry| entry.category == AbsenceCategory::Sick)
        .collect();

    SickDaysSummary {
        employee_id,
        year,
        sick_days: sum_days(sick.iter().copied(), AbsenceCategory::Sick),
        sick_entries_count: sick.len(),
    }
}
