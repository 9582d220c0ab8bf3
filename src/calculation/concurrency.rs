//! Concurrent-vacation capacity check.
//!
//! This module decides whether one more vacation over a candidate date range
//! keeps the number of people simultaneously on vacation within the
//! [`CapacityRule`]. The check walks every business day of the candidate,
//! counts the existing vacations covering that day, adds the candidate itself
//! and compares the peak against the allowed maximum.
//!
//! Everything here is a pure function of its inputs. Reading the entry
//! snapshot and writing the accepted entry is the caller's job.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::business_days::business_days_of;
use crate::error::{PlannerError, PlannerResult};
use crate::models::{AbsenceEntry, CapacityRule, ConcurrencyVerdict, DailyAbsenceCount, DateRange};

/// Counts the existing vacations covering each business day of `range`.
///
/// Only [`Vacation`](crate::models::AbsenceCategory::Vacation) entries that
/// overlap `range` are considered, and the entry with id `exclude_entry_id`
/// is skipped. The returned counts do not include any candidate.
///
/// One count is returned per business day, so callers bound the range first
/// (see [`DateRange::validate_span`]).
///
/// # Errors
///
/// Returns [`PlannerError::InvalidRange`] if `range` starts after it ends.
///
/// # Example
///
/// ```
/// use vacation_planner::calculation::daily_vacation_counts;
/// use vacation_planner::models::DateRange;
/// use chrono::NaiveDate;
///
/// let d = |day| NaiveDate::from_ymd_opt(2025, 6, day).unwrap();
/// let counts = daily_vacation_counts(&DateRange::new(d(16), d(22)).unwrap(), &[], None).unwrap();
///
/// assert_eq!(counts.len(), 5);
/// assert!(counts.iter().all(|c| c.count == 0));
/// ```
pub fn daily_vacation_counts(
    range: &DateRange,
    existing: &[AbsenceEntry],
    exclude_entry_id: Option<Uuid>,
) -> PlannerResult<Vec<DailyAbsenceCount>> {
    range.validate()?;
    let overlapping = overlapping_vacations(range, existing, exclude_entry_id);

    Ok(business_days_of(range)
        .map(|date| DailyAbsenceCount {
            date,
            count: count_covering(&overlapping, date),
        })
        .collect())
}

/// Ranges of the vacations overlapping `window`, minus the excluded entry.
///
/// Overlap is checked once for the whole window; containment per day is left
/// to [`count_covering`].
fn overlapping_vacations<'a>(
    window: &DateRange,
    existing: &'a [AbsenceEntry],
    exclude_entry_id: Option<Uuid>,
) -> Vec<&'a DateRange> {
    existing
        .iter()
        .filter(|entry| entry.category.counts_toward_capacity())
        .filter(|entry| Some(entry.id) != exclude_entry_id)
        .filter(|entry| entry.range.overlaps(window))
        .map(|entry| &entry.range)
        .collect()
}

fn count_covering(ranges: &[&DateRange], date: NaiveDate) -> u32 {
    let covering = ranges.iter().filter(|r| r.contains_date(date)).count();
    // Bounded by the snapshot length, which never approaches u32::MAX.
    debug_assert!(u32::try_from(covering).is_ok());
    covering as u32
}

/// Evaluates a candidate vacation against the capacity rule.
///
/// # Arguments
///
/// * `candidate` - The requested vacation range
/// * `existing` - Snapshot of stored entries; non-vacation and non-overlapping entries are ignored
/// * `total_employees` - Current headcount
/// * `rule` - The capacity rule to apply
/// * `exclude_entry_id` - The entry being replaced on update, so it does not count against itself
///
/// # Returns
///
/// A [`ConcurrencyVerdict`]. The candidate is counted on each of its own
/// business days. The peak day is the earliest business day reaching the
/// highest count. A candidate without business days is always valid with a
/// peak of zero.
///
/// The peak is folded while walking the candidate's days, so memory does not
/// grow with the length of the range.
///
/// # Errors
///
/// - [`PlannerError::InvalidRange`] if `candidate` starts after it ends
/// - [`PlannerError::NegativeHeadcount`] if `total_employees < 0`
/// - [`PlannerError::InvalidCapacityRule`] if the rule's percentage exceeds 100
///
/// Exceeding the cap is not an error; it yields `is_valid == false`.
///
/// # Example
///
/// ```
/// use vacation_planner::calculation::evaluate_concurrency;
/// use vacation_planner::models::{CapacityRule, DateRange};
/// use chrono::NaiveDate;
///
/// let week = DateRange::new(
///     NaiveDate::from_ymd_opt(2025, 6, 16).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 6, 20).unwrap(),
/// )
/// .unwrap();
///
/// let verdict = evaluate_concurrency(&week, &[], 20, &CapacityRule::default(), None).unwrap();
/// assert!(verdict.is_valid);
/// assert_eq!(verdict.peak_count, 1);
/// assert_eq!(verdict.max_allowed, 6);
/// assert_eq!(verdict.peak_day, NaiveDate::from_ymd_opt(2025, 6, 16));
/// ```
pub fn evaluate_concurrency(
    candidate: &DateRange,
    existing: &[AbsenceEntry],
    total_employees: i64,
    rule: &CapacityRule,
    exclude_entry_id: Option<Uuid>,
) -> PlannerResult<ConcurrencyVerdict> {
    candidate.validate()?;
    if total_employees < 0 {
        return Err(PlannerError::NegativeHeadcount {
            count: total_employees,
        });
    }
    rule.validate()?;

    let total_employees = u32::try_from(total_employees).unwrap_or(u32::MAX);
    let overlapping = overlapping_vacations(candidate, existing, exclude_entry_id);

    // Folded while walking the days; no per-day buffer is kept.
    let mut peak_count = 0;
    let mut peak_day = None;
    for date in business_days_of(candidate) {
        let count = count_covering(&overlapping, date).saturating_add(1);
        if count > peak_count {
            peak_count = count;
            peak_day = Some(date);
        }
    }

    let max_allowed = rule.max_allowed(total_employees);
    let is_valid = peak_day.is_none() || peak_count <= max_allowed;

    Ok(ConcurrencyVerdict {
        is_valid,
        peak_count,
        peak_day,
        max_allowed,
        peak_percentage: peak_percentage(peak_count, total_employees),
        total_employees,
    })
}

/// Share of the headcount `peak_count` represents, rounded to one decimal.
///
/// An empty company is treated as a headcount of one.
pub fn peak_percentage(peak_count: u32, total_employees: u32) -> Decimal {
    let share = Decimal::from(peak_count) * Decimal::ONE_HUNDRED
        / Decimal::from(total_employees.max(1));
    share.round_dp(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AbsenceCategory;
    use chrono::Utc;
    use std::num::NonZeroU32;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn range(start: &str, end: &str) -> DateRange {
        DateRange {
            start: make_date(start),
            end: make_date(end),
        }
    }

    fn entry(category: AbsenceCategory, start: &str, end: &str) -> AbsenceEntry {
        AbsenceEntry {
            id: Uuid::new_v4(),
            employee_id: Uuid::new_v4(),
            employee_name: "Test Employee".to_string(),
            range: range(start, end),
            category,
            notes: String::new(),
            days_count: 0,
            created_date: Utc::now(),
        }
    }

    fn vacation(start: &str, end: &str) -> AbsenceEntry {
        entry(AbsenceCategory::Vacation, start, end)
    }

    fn full_week_vacations(n: usize) -> Vec<AbsenceEntry> {
        (0..n).map(|_| vacation("2025-06-16", "2025-06-20")).collect()
    }

    // ==========================================================================
    // Scenario A: 20 employees, 30%, 5 existing + candidate = 6 → accepted
    // ==========================================================================
    #[test]
    fn test_scenario_a_at_capacity_is_valid() {
        let existing = full_week_vacations(5);
        let verdict = evaluate_concurrency(
            &range("2025-06-16", "2025-06-20"),
            &existing,
            20,
            &CapacityRule::default(),
            None,
        )
        .unwrap();

        assert_eq!(verdict.peak_count, 6);
        assert_eq!(verdict.max_allowed, 6);
        assert!(verdict.is_valid);
        assert_eq!(verdict.peak_day, Some(make_date("2025-06-16")));
        assert_eq!(verdict.peak_percentage, Decimal::new(300, 1));
        assert_eq!(verdict.total_employees, 20);
    }

    // ==========================================================================
    // Scenario B: a sixth existing vacation pushes the peak to 7 → rejected
    // ==========================================================================
    #[test]
    fn test_scenario_b_over_capacity_is_rejected() {
        let existing = full_week_vacations(6);
        let verdict = evaluate_concurrency(
            &range("2025-06-16", "2025-06-20"),
            &existing,
            20,
            &CapacityRule::default(),
            None,
        )
        .unwrap();

        assert_eq!(verdict.peak_count, 7);
        assert_eq!(verdict.max_allowed, 6);
        assert!(!verdict.is_valid);
        assert_eq!(verdict.peak_day, Some(make_date("2025-06-16")));
        assert_eq!(verdict.peak_percentage, Decimal::new(350, 1));
    }

    // ==========================================================================
    // Scenario C: weekend-only candidate has nothing to exceed
    // ==========================================================================
    #[test]
    fn test_scenario_c_weekend_candidate_is_valid() {
        let verdict = evaluate_concurrency(
            &range("2025-01-04", "2025-01-05"),
            &[],
            20,
            &CapacityRule::default(),
            None,
        )
        .unwrap();

        assert!(verdict.is_valid);
        assert_eq!(verdict.peak_count, 0);
        assert_eq!(verdict.peak_day, None);
        assert_eq!(verdict.peak_percentage, Decimal::ZERO);
    }

    #[test]
    fn test_weekend_candidate_valid_even_with_full_weekend_bookings() {
        let existing = vec![vacation("2025-01-03", "2025-01-06"); 3];
        let rule = CapacityRule::with_fixed_cap(NonZeroU32::new(1).unwrap());
        let verdict =
            evaluate_concurrency(&range("2025-01-04", "2025-01-05"), &existing, 5, &rule, None)
                .unwrap();
        assert!(verdict.is_valid);
    }

    // ==========================================================================
    // Scenario D: empty company falls back to one allowed absence
    // ==========================================================================
    #[test]
    fn test_scenario_d_zero_employees_allows_one() {
        let verdict = evaluate_concurrency(
            &range("2025-06-16", "2025-06-16"),
            &[],
            0,
            &CapacityRule::default(),
            None,
        )
        .unwrap();

        assert_eq!(verdict.max_allowed, 1);
        assert_eq!(verdict.peak_count, 1);
        assert!(verdict.is_valid);
        assert_eq!(verdict.peak_percentage, Decimal::new(1000, 1));
    }

    // ==========================================================================
    // Peak tracking
    // ==========================================================================
    #[test]
    fn test_peak_day_is_first_day_reaching_maximum() {
        let existing = vec![
            vacation("2025-06-17", "2025-06-18"),
            vacation("2025-06-18", "2025-06-19"),
            vacation("2025-06-17", "2025-06-17"),
        ];
        // Tue: 2 existing, Wed: 2 existing, Thu: 1
        let verdict = evaluate_concurrency(
            &range("2025-06-16", "2025-06-20"),
            &existing,
            10,
            &CapacityRule::default(),
            None,
        )
        .unwrap();

        assert_eq!(verdict.peak_count, 3);
        assert_eq!(verdict.peak_day, Some(make_date("2025-06-17")));
        assert!(verdict.is_valid);
    }

    #[test]
    fn test_weekend_overlap_does_not_raise_peak() {
        // Existing vacations only touch the weekend inside the candidate.
        let existing = vec![vacation("2025-06-21", "2025-06-22"); 4];
        let verdict = evaluate_concurrency(
            &range("2025-06-19", "2025-06-24"),
            &existing,
            10,
            &CapacityRule::default(),
            None,
        )
        .unwrap();

        assert_eq!(verdict.peak_count, 1);
        assert_eq!(verdict.peak_day, Some(make_date("2025-06-19")));
    }

    #[test]
    fn test_overlapping_window_but_disjoint_days() {
        // Both existing entries overlap the window, but never on the same day.
        let existing = vec![
            vacation("2025-06-10", "2025-06-16"),
            vacation("2025-06-20", "2025-06-27"),
        ];
        let verdict = evaluate_concurrency(
            &range("2025-06-16", "2025-06-20"),
            &existing,
            10,
            &CapacityRule::default(),
            None,
        )
        .unwrap();

        assert_eq!(verdict.peak_count, 2);
        assert_eq!(verdict.peak_day, Some(make_date("2025-06-16")));
    }

    #[test]
    fn test_century_long_candidate_finds_single_busy_day() {
        let existing = vec![
            vacation("2050-03-07", "2050-03-08"),
            vacation("2050-03-08", "2050-03-10"),
        ];
        let verdict = evaluate_concurrency(
            &range("2000-01-03", "2099-12-31"),
            &existing,
            10,
            &CapacityRule::default(),
            None,
        )
        .unwrap();

        assert_eq!(verdict.peak_count, 3);
        assert_eq!(verdict.peak_day, Some(make_date("2050-03-08")));
        assert!(verdict.is_valid);
    }

    // ==========================================================================
    // Filtering
    // ==========================================================================
    #[test]
    fn test_non_vacation_entries_are_ignored() {
        let existing = vec![
            entry(AbsenceCategory::Sick, "2025-06-16", "2025-06-20"),
            entry(AbsenceCategory::SpecialLeave, "2025-06-16", "2025-06-20"),
        ];
        let verdict = evaluate_concurrency(
            &range("2025-06-16", "2025-06-20"),
            &existing,
            2,
            &CapacityRule::default(),
            None,
        )
        .unwrap();

        assert_eq!(verdict.peak_count, 1);
        assert!(verdict.is_valid);
    }

    #[test]
    fn test_non_overlapping_entries_are_ignored() {
        let existing = vec![vacation("2025-07-01", "2025-07-04")];
        let verdict = evaluate_concurrency(
            &range("2025-06-16", "2025-06-20"),
            &existing,
            10,
            &CapacityRule::default(),
            None,
        )
        .unwrap();
        assert_eq!(verdict.peak_count, 1);
    }

    #[test]
    fn test_excluded_entry_does_not_count_against_itself() {
        let mut existing = full_week_vacations(5);
        let replaced = vacation("2025-06-16", "2025-06-20");
        let replaced_id = replaced.id;
        existing.push(replaced);

        let rule = CapacityRule::default();
        let candidate = range("2025-06-16", "2025-06-20");

        let without = evaluate_concurrency(&candidate, &existing, 20, &rule, None).unwrap();
        let with = evaluate_concurrency(&candidate, &existing, 20, &rule, Some(replaced_id)).unwrap();

        assert!(!without.is_valid);
        assert!(with.is_valid);
        assert_eq!(with.peak_count, 6);
    }

    #[test]
    fn test_fixed_cap_applies() {
        let existing = full_week_vacations(2);
        let rule = CapacityRule::with_fixed_cap(NonZeroU32::new(2).unwrap());
        let verdict =
            evaluate_concurrency(&range("2025-06-18", "2025-06-18"), &existing, 100, &rule, None)
                .unwrap();

        assert_eq!(verdict.max_allowed, 2);
        assert_eq!(verdict.peak_count, 3);
        assert!(!verdict.is_valid);
        assert_eq!(verdict.peak_percentage, Decimal::new(30, 1));
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let existing = full_week_vacations(3);
        let candidate = range("2025-06-16", "2025-06-27");
        let rule = CapacityRule::default();

        let first = evaluate_concurrency(&candidate, &existing, 12, &rule, None).unwrap();
        let second = evaluate_concurrency(&candidate, &existing, 12, &rule, None).unwrap();
        assert_eq!(first, second);
    }

    // ==========================================================================
    // Malformed input
    // ==========================================================================
    #[test]
    fn test_reversed_candidate_fails() {
        let result = evaluate_concurrency(
            &range("2025-06-20", "2025-06-16"),
            &[],
            10,
            &CapacityRule::default(),
            None,
        );
        assert!(matches!(result, Err(PlannerError::InvalidRange { .. })));
    }

    #[test]
    fn test_negative_headcount_fails() {
        let result = evaluate_concurrency(
            &range("2025-06-16", "2025-06-20"),
            &[],
            -1,
            &CapacityRule::default(),
            None,
        );
        assert!(matches!(
            result,
            Err(PlannerError::NegativeHeadcount { count: -1 })
        ));
    }

    #[test]
    fn test_out_of_range_percentage_fails() {
        let rule = CapacityRule {
            percentage: 150,
            fixed_cap: None,
        };
        let result = evaluate_concurrency(&range("2025-06-16", "2025-06-20"), &[], 10, &rule, None);
        assert!(matches!(result, Err(PlannerError::InvalidCapacityRule { .. })));
    }

    // ==========================================================================
    // Helpers
    // ==========================================================================
    #[test]
    fn test_daily_counts_cover_business_days_only() {
        let existing = vec![
            vacation("2025-06-16", "2025-06-17"),
            vacation("2025-06-17", "2025-06-23"),
        ];
        let counts = daily_vacation_counts(&range("2025-06-16", "2025-06-23"), &existing, None)
            .unwrap();

        let as_pairs: Vec<(NaiveDate, u32)> = counts.iter().map(|c| (c.date, c.count)).collect();
        assert_eq!(
            as_pairs,
            vec![
                (make_date("2025-06-16"), 1),
                (make_date("2025-06-17"), 2),
                (make_date("2025-06-18"), 1),
                (make_date("2025-06-19"), 1),
                (make_date("2025-06-20"), 1),
                (make_date("2025-06-23"), 1),
            ]
        );
    }

    #[test]
    fn test_peak_percentage_rounds_to_one_decimal() {
        assert_eq!(peak_percentage(1, 3), Decimal::new(333, 1));
        assert_eq!(peak_percentage(2, 3), Decimal::new(667, 1));
        assert_eq!(peak_percentage(7, 20), Decimal::new(350, 1));
        assert_eq!(peak_percentage(0, 0), Decimal::ZERO);
    }
}
