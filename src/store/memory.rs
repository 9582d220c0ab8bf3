//! In-process store backed by hash maps.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::AbsenceStore;
use crate::error::{PlannerError, PlannerResult};
use crate::models::{AbsenceEntry, Employee, EntryFilter};

/// An [`AbsenceStore`] keeping everything in memory.
///
/// Data lives as long as the process. Used by the binary and the tests.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    employees: RwLock<HashMap<Uuid, Employee>>,
    entries: RwLock<HashMap<Uuid, AbsenceEntry>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AbsenceStore for InMemoryStore {
    async fn insert_employee(&self, employee: Employee) -> PlannerResult<()> {
        self.employees.write().await.insert(employee.id, employee);
        Ok(())
    }

    async fn get_employee(&self, id: Uuid) -> PlannerResult<Option<Employee>> {
        Ok(self.employees.read().await.get(&id).cloned())
    }

    async fn list_employees(&self) -> PlannerResult<Vec<Employee>> {
        let mut employees: Vec<Employee> = self.employees.read().await.values().cloned().collect();
        employees.sort_by(|a, b| {
            a.created_date
                .cmp(&b.created_date)
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(employees)
    }

    async fn replace_employee(&self, employee: Employee) -> PlannerResult<()> {
        let mut employees = self.employees.write().await;
        match employees.get_mut(&employee.id) {
            Some(existing) => {
                *existing = employee;
                Ok(())
            }
            None => Err(PlannerError::EmployeeNotFound { id: employee.id }),
        }
    }

    async fn delete_employee(&self, id: Uuid) -> PlannerResult<bool> {
        Ok(self.employees.write().await.remove(&id).is_some())
    }

    async fn count_employees(&self) -> PlannerResult<i64> {
        let count = self.employees.read().await.len();
        Ok(i64::try_from(count).unwrap_or(i64::MAX))
    }

    async fn insert_entry(&self, entry: AbsenceEntry) -> PlannerResult<()> {
        self.entries.write().await.insert(entry.id, entry);
        Ok(())
    }

    async fn get_entry(&self, id: Uuid) -> PlannerResult<Option<AbsenceEntry>> {
        Ok(self.entries.read().await.get(&id).cloned())
    }

    async fn list_entries(&self, filter: &EntryFilter) -> PlannerResult<Vec<AbsenceEntry>> {
        let mut entries: Vec<AbsenceEntry> = self
            .entries
            .read()
            .await
            .values()
            .filter(|entry| filter.matches(entry))
            .cloned()
            .collect();
        entries.sort_by(|a, b| {
            a.range
                .start
                .cmp(&b.range.start)
                .then_with(|| a.created_date.cmp(&b.created_date))
        });
        Ok(entries)
    }

    async fn replace_entry(&self, entry: AbsenceEntry) -> PlannerResult<()> {
        let mut entries = self.entries.write().await;
        match entries.get_mut(&entry.id) {
            Some(existing) => {
                *existing = entry;
                Ok(())
            }
            None => Err(PlannerError::EntryNotFound { id: entry.id }),
        }
    }

    async fn delete_entry(&self, id: Uuid) -> PlannerResult<bool> {
        Ok(self.entries.write().await.remove(&id).is_some())
    }

    async fn delete_entries_of_employee(&self, employee_id: Uuid) -> PlannerResult<usize> {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| entry.employee_id != employee_id);
        Ok(before - entries.len())
    }
}
