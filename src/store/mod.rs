//! Storage for employees and absence entries.
//!
//! This module defines the [`AbsenceStore`] trait the planner reads and
//! writes through. The store only persists records; validation and the
//! capacity check live in [`crate::planner`].

use std::fmt::Debug;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::PlannerResult;
use crate::models::{AbsenceCategory, AbsenceEntry, DateRange, Employee, EntryFilter};

mod memory;

pub use memory::InMemoryStore;

/// Storage trait for persisting and querying employees and absence entries.
///
/// Implementations must be safe to share between request handlers.
/// Replacing or deleting a missing record reports `false` / the matching
/// not-found error rather than silently succeeding.
#[async_trait]
pub trait AbsenceStore: Debug + Send + Sync {
    /// Store a new employee.
    async fn insert_employee(&self, employee: Employee) -> PlannerResult<()>;

    /// Get an employee by id.
    async fn get_employee(&self, id: Uuid) -> PlannerResult<Option<Employee>>;

    /// List all employees, oldest registration first.
    async fn list_employees(&self) -> PlannerResult<Vec<Employee>>;

    /// Replace an existing employee with the same id.
    async fn replace_employee(&self, employee: Employee) -> PlannerResult<()>;

    /// Delete an employee. Returns false if it did not exist.
    async fn delete_employee(&self, id: Uuid) -> PlannerResult<bool>;

    /// Number of registered employees.
    async fn count_employees(&self) -> PlannerResult<i64>;

    /// Store a new absence entry.
    async fn insert_entry(&self, entry: AbsenceEntry) -> PlannerResult<()>;

    /// Get an absence entry by id.
    async fn get_entry(&self, id: Uuid) -> PlannerResult<Option<AbsenceEntry>>;

    /// List entries passing `filter`, sorted by start date.
    async fn list_entries(&self, filter: &EntryFilter) -> PlannerResult<Vec<AbsenceEntry>>;

    /// Replace an existing entry with the same id.
    async fn replace_entry(&self, entry: AbsenceEntry) -> PlannerResult<()>;

    /// Delete an entry. Returns false if it did not exist.
    async fn delete_entry(&self, id: Uuid) -> PlannerResult<bool>;

    /// Delete every entry of an employee. Returns how many were removed.
    async fn delete_entries_of_employee(&self, employee_id: Uuid) -> PlannerResult<usize>;

    /// Vacation entries overlapping `range`.
    async fn overlapping_vacations(&self, range: &DateRange) -> PlannerResult<Vec<AbsenceEntry>> {
        let filter = EntryFilter {
            start_date: Some(range.start),
            end_date: Some(range.end),
            category: Some(AbsenceCategory::Vacation),
            ..Default::default()
        };
        self.list_entries(&filter).await
    }
}
