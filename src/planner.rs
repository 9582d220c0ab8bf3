//! The planner service.
//!
//! [`VacationPlanner`] is the layer the HTTP handlers talk to. It validates
//! input, computes business-day counts, runs the capacity check for vacation
//! entries and reads/writes through an [`AbsenceStore`].
//!
//! Entry writes and employee deletes are serialized behind a planner-wide
//! write gate. For vacations the overlap snapshot is read, evaluated and the
//! entry written under the gate, so two concurrent requests can never both
//! pass against the same snapshot. Every entry write also looks its employee
//! up under the gate, so a concurrent delete cannot leave an orphaned entry.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::{
    count_business_days, daily_vacation_counts, evaluate_concurrency, summarize_employee_year,
    summarize_sick_days,
};
use crate::error::{PlannerError, PlannerResult};
use crate::models::{
    AbsenceEntry, AbsenceEntryInput, CapacityRule, CapacitySettings, ConcurrencyVerdict,
    DateRange, Employee, EmployeeInput, EmployeeSummary, EntryFilter, MAX_RANGE_DAYS,
    SickDaysSummary, TeamOverview,
};
use crate::store::AbsenceStore;

/// Employee and absence-entry operations with the capacity rule enforced.
#[derive(Debug)]
pub struct VacationPlanner {
    store: Arc<dyn AbsenceStore>,
    rule: CapacityRule,
    default_vacation_days: u32,
    write_gate: Mutex<()>,
}

fn bounded_range(input: &AbsenceEntryInput) -> PlannerResult<DateRange> {
    let range = input.range()?;
    range.validate_span(MAX_RANGE_DAYS)?;
    Ok(range)
}

fn headcount(total: i64) -> u32 {
    u32::try_from(total.max(0)).unwrap_or(u32::MAX)
}

impl VacationPlanner {
    /// Creates a planner over `store` enforcing `rule`.
    ///
    /// New employees receive `default_vacation_days` of yearly allowance.
    pub fn new(store: Arc<dyn AbsenceStore>, rule: CapacityRule, default_vacation_days: u32) -> Self {
        Self {
            store,
            rule,
            default_vacation_days,
            write_gate: Mutex::new(()),
        }
    }

    /// Returns the capacity rule this planner enforces.
    pub fn rule(&self) -> &CapacityRule {
        &self.rule
    }

    // =========================================================================
    // Employees
    // =========================================================================

    /// Registers a new employee.
    pub async fn create_employee(&self, input: EmployeeInput) -> PlannerResult<Employee> {
        input.validate()?;
        let employee = input.into_employee(self.default_vacation_days);
        self.store.insert_employee(employee.clone()).await?;
        info!(employee_id = %employee.id, "Employee created");
        Ok(employee)
    }

    /// Lists all employees.
    pub async fn list_employees(&self) -> PlannerResult<Vec<Employee>> {
        self.store.list_employees().await
    }

    /// Gets one employee.
    pub async fn get_employee(&self, id: Uuid) -> PlannerResult<Employee> {
        self.store
            .get_employee(id)
            .await?
            .ok_or(PlannerError::EmployeeNotFound { id })
    }

    /// Replaces an employee's editable fields.
    pub async fn update_employee(&self, id: Uuid, input: EmployeeInput) -> PlannerResult<Employee> {
        input.validate()?;
        let mut employee = self.get_employee(id).await?;
        employee.apply(input);
        self.store.replace_employee(employee.clone()).await?;
        info!(employee_id = %id, "Employee updated");
        Ok(employee)
    }

    /// Deletes an employee together with all of their absence entries.
    pub async fn delete_employee(&self, id: Uuid) -> PlannerResult<()> {
        // Headcount feeds the capacity check, so this waits for running checks.
        let _gate = self.write_gate.lock().await;
        self.get_employee(id).await?;
        let removed = self.store.delete_entries_of_employee(id).await?;
        self.store.delete_employee(id).await?;
        info!(employee_id = %id, removed_entries = removed, "Employee deleted");
        Ok(())
    }

    // =========================================================================
    // Absence entries
    // =========================================================================

    /// Records a new absence.
    ///
    /// # Errors
    ///
    /// - [`PlannerError::InvalidRange`] if the dates are reversed
    /// - [`PlannerError::RangeTooLong`] if the range exceeds [`MAX_RANGE_DAYS`]
    /// - [`PlannerError::EmployeeNotFound`] if the employee does not exist
    /// - [`PlannerError::CapacityExceeded`] if a vacation would exceed the cap
    pub async fn create_entry(&self, input: AbsenceEntryInput) -> PlannerResult<AbsenceEntry> {
        let range = bounded_range(&input)?;
        let days_count = count_business_days(&range)?;

        let _gate = self.write_gate.lock().await;
        let employee = self.get_employee(input.employee_id).await?;

        let entry = AbsenceEntry {
            id: Uuid::new_v4(),
            employee_id: employee.id,
            employee_name: employee.name,
            range,
            category: input.category,
            notes: input.notes,
            days_count,
            created_date: chrono::Utc::now(),
        };

        if entry.category.counts_toward_capacity() {
            self.ensure_capacity(&range, None).await?;
        }
        self.store.insert_entry(entry.clone()).await?;

        info!(
            entry_id = %entry.id,
            employee_id = %entry.employee_id,
            category = %entry.category,
            days_count,
            "Absence entry created"
        );
        Ok(entry)
    }

    /// Lists entries passing `filter`, sorted by start date.
    pub async fn list_entries(&self, filter: &EntryFilter) -> PlannerResult<Vec<AbsenceEntry>> {
        self.store.list_entries(filter).await
    }

    /// Gets one entry.
    pub async fn get_entry(&self, id: Uuid) -> PlannerResult<AbsenceEntry> {
        self.store
            .get_entry(id)
            .await?
            .ok_or(PlannerError::EntryNotFound { id })
    }

    /// Replaces an absence entry.
    ///
    /// The entry being replaced is left out of the capacity check so it does
    /// not count against itself. Its id and creation date are kept.
    pub async fn update_entry(
        &self,
        id: Uuid,
        input: AbsenceEntryInput,
    ) -> PlannerResult<AbsenceEntry> {
        let range = bounded_range(&input)?;
        let days_count = count_business_days(&range)?;

        let _gate = self.write_gate.lock().await;
        let existing = self.get_entry(id).await?;
        let employee = self.get_employee(input.employee_id).await?;

        let entry = AbsenceEntry {
            id,
            employee_id: employee.id,
            employee_name: employee.name,
            range,
            category: input.category,
            notes: input.notes,
            days_count,
            created_date: existing.created_date,
        };

        if entry.category.counts_toward_capacity() {
            self.ensure_capacity(&range, Some(id)).await?;
        }
        self.store.replace_entry(entry.clone()).await?;

        info!(entry_id = %id, category = %entry.category, days_count, "Absence entry updated");
        Ok(entry)
    }

    /// Deletes an absence entry.
    pub async fn delete_entry(&self, id: Uuid) -> PlannerResult<()> {
        if !self.store.delete_entry(id).await? {
            return Err(PlannerError::EntryNotFound { id });
        }
        info!(entry_id = %id, "Absence entry deleted");
        Ok(())
    }

    /// Runs the capacity check for `range` against the stored vacations.
    ///
    /// Must be called with the write gate held.
    async fn ensure_capacity(
        &self,
        range: &DateRange,
        exclude_entry_id: Option<Uuid>,
    ) -> PlannerResult<ConcurrencyVerdict> {
        let existing = self.store.overlapping_vacations(range).await?;
        let total_employees = self.store.count_employees().await?;
        let verdict =
            evaluate_concurrency(range, &existing, total_employees, &self.rule, exclude_entry_id)?;

        debug!(
            start = %range.start,
            end = %range.end,
            peak_count = verdict.peak_count,
            max_allowed = verdict.max_allowed,
            "Capacity check"
        );

        if !verdict.is_valid {
            warn!(
                peak_day = ?verdict.peak_day,
                peak_count = verdict.peak_count,
                max_allowed = verdict.max_allowed,
                "Vacation rejected: capacity exceeded"
            );
            return Err(PlannerError::CapacityExceeded {
                verdict: Box::new(verdict),
            });
        }
        Ok(verdict)
    }

    // =========================================================================
    // Analytics
    // =========================================================================

    /// Yearly absence totals for one employee.
    pub async fn employee_summary(&self, id: Uuid, year: i32) -> PlannerResult<EmployeeSummary> {
        let employee = self.get_employee(id).await?;
        let entries = self.employee_entries(id).await?;
        Ok(summarize_employee_year(&employee, &entries, year))
    }

    /// Yearly sick-leave totals for one employee.
    pub async fn sick_days(&self, id: Uuid, year: i32) -> PlannerResult<SickDaysSummary> {
        self.get_employee(id).await?;
        let entries = self.employee_entries(id).await?;
        Ok(summarize_sick_days(id, &entries, year))
    }

    async fn employee_entries(&self, employee_id: Uuid) -> PlannerResult<Vec<AbsenceEntry>> {
        let filter = EntryFilter {
            employee_id: Some(employee_id),
            ..Default::default()
        };
        self.store.list_entries(&filter).await
    }

    /// Absence picture of the team over `range`.
    ///
    /// The included capacity analysis answers whether one more vacation over
    /// the whole range would still fit.
    pub async fn team_overview(&self, range: DateRange) -> PlannerResult<TeamOverview> {
        range.validate_span(MAX_RANGE_DAYS)?;
        let filter = EntryFilter {
            start_date: Some(range.start),
            end_date: Some(range.end),
            ..Default::default()
        };
        let entries = self.store.list_entries(&filter).await?;
        let total_employees = self.store.count_employees().await?;

        let concurrent_analysis =
            evaluate_concurrency(&range, &entries, total_employees, &self.rule, None)?;
        let daily_counts = daily_vacation_counts(&range, &entries, None)?;

        Ok(TeamOverview {
            date_range: range,
            total_employees: headcount(total_employees),
            vacation_entries_count: entries.len(),
            concurrent_analysis,
            daily_counts,
            vacation_entries: entries,
        })
    }

    /// The capacity rule and what it yields for the current headcount.
    pub async fn settings(&self) -> PlannerResult<CapacitySettings> {
        let total_employees = headcount(self.store.count_employees().await?);
        Ok(CapacitySettings {
            rule: self.rule,
            total_employees,
            max_concurrent_calculated: self.rule.max_allowed(total_employees),
        })
    }
}
