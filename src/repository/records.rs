//! The record repository.
//!
//! [`Repository`] owns the canonical in-memory collections of employees,
//! departments and payrolls, keyed by id. Every mutating call persists the
//! affected collection before returning; if that write fails the in-memory
//! change is rolled back, so memory and disk never diverge.
//!
//! Mutations take `&mut self`, so there is exactly one writer at a time.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::PayrollConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{Department, Employee, EmployeeStatus, Payroll};

use super::store::{Collection, JsonStore, Keyed};

/// A collection that could not be loaded and was reset to empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailure {
    /// Which collection failed.
    pub collection: Collection,
    /// Why it failed.
    pub message: String,
}

/// Outcome of [`Repository::load_all`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Number of employees loaded.
    pub employees: usize,
    /// Number of departments loaded.
    pub departments: usize,
    /// Number of payrolls loaded.
    pub payrolls: usize,
    /// Collections that fell back to empty.
    pub failures: Vec<LoadFailure>,
}

impl LoadReport {
    /// True when every collection loaded without error.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// The record repository.
///
/// Construct one per process with [`Repository::open`], call
/// [`load_all`](Repository::load_all) at startup and pass it by reference to
/// whatever needs it.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::repository::Repository;
///
/// let mut repository = Repository::open("./data");
/// let report = repository.load_all();
/// println!("Loaded {} employees", report.employees);
/// ```
#[derive(Debug)]
pub struct Repository {
    store: JsonStore,
    employees: BTreeMap<String, Employee>,
    departments: BTreeMap<String, Department>,
    payrolls: BTreeMap<String, Payroll>,
}

impl Repository {
    /// Creates an empty repository backed by `data_dir`. No I/O happens
    /// until [`load_all`](Self::load_all) or the first mutation.
    pub fn open(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            store: JsonStore::new(data_dir.into()),
            employees: BTreeMap::new(),
            departments: BTreeMap::new(),
            payrolls: BTreeMap::new(),
        }
    }

    /// Creates an empty repository in the configured data directory.
    pub fn from_config(config: &PayrollConfig) -> Self {
        Self::open(config.storage.data_dir.clone())
    }

    /// The directory holding the persisted collections.
    pub fn data_dir(&self) -> &Path {
        self.store.data_dir()
    }

    /// Replaces the in-memory state with what is on disk.
    ///
    /// Missing documents load as empty collections. A document that cannot
    /// be read or parsed is logged, reported in the returned [`LoadReport`],
    /// and its collection is left empty; the other collections still load.
    pub fn load_all(&mut self) -> LoadReport {
        let mut report = LoadReport::default();

        self.employees = load_or_empty(&self.store, Collection::Employees, &mut report);
        self.departments = load_or_empty(&self.store, Collection::Departments, &mut report);
        self.payrolls = load_or_empty(&self.store, Collection::Payrolls, &mut report);

        report.employees = self.employees.len();
        report.departments = self.departments.len();
        report.payrolls = self.payrolls.len();

        info!(
            data_dir = %self.data_dir().display(),
            employees = report.employees,
            departments = report.departments,
            payrolls = report.payrolls,
            failures = report.failures.len(),
            "Loaded repository"
        );
        report
    }

    /// Writes every collection to disk.
    ///
    /// All three documents are attempted; the first failure is returned.
    pub fn save_all(&self) -> EngineResult<()> {
        first_failure([
            self.store.save(Collection::Employees, &self.employees),
            self.store.save(Collection::Departments, &self.departments),
            self.store.save(Collection::Payrolls, &self.payrolls),
        ])
    }

    /// Removes every record and persists the empty collections.
    ///
    /// Each collection is emptied in memory only once its empty document has
    /// been written, so a collection whose save fails keeps its records.
    pub fn clear_all(&mut self) -> EngineResult<()> {
        first_failure([
            clear_collection(&self.store, Collection::Employees, &mut self.employees),
            clear_collection(&self.store, Collection::Departments, &mut self.departments),
            clear_collection(&self.store, Collection::Payrolls, &mut self.payrolls),
        ])
    }

    // Employees

    /// Creates a new employee, rejecting an id that already exists.
    pub fn create_employee(&mut self, employee: Employee) -> EngineResult<()> {
        if self.employees.contains_key(&employee.employee_id) {
            return Err(EngineError::DuplicateId {
                entity: "employee",
                id: employee.employee_id,
            });
        }
        self.add_employee(employee)
    }

    /// Validates and inserts or overwrites an employee by id.
    pub fn add_employee(&mut self, employee: Employee) -> EngineResult<()> {
        employee.validate(today())?;
        let id = employee.employee_id.clone();
        apply_change(
            &self.store,
            Collection::Employees,
            &mut self.employees,
            id,
            Some(employee),
        )?;
        Ok(())
    }

    /// Looks up an employee.
    pub fn get_employee(&self, employee_id: &str) -> Option<&Employee> {
        self.employees.get(employee_id)
    }

    /// Overwrites an employee by id. Behaves exactly like [`add_employee`](Self::add_employee).
    pub fn update_employee(&mut self, employee: Employee) -> EngineResult<()> {
        self.add_employee(employee)
    }

    /// Removes an employee. Returns `Ok(false)` when the id is unknown.
    ///
    /// Payroll history and department membership are left untouched.
    pub fn delete_employee(&mut self, employee_id: &str) -> EngineResult<bool> {
        remove_record(
            &self.store,
            Collection::Employees,
            &mut self.employees,
            employee_id,
        )
    }

    /// All employees, sorted by id.
    pub fn list_employees(&self) -> Vec<&Employee> {
        self.employees.values().collect()
    }

    // Departments

    /// Validates and inserts or overwrites a department by id.
    pub fn add_department(&mut self, department: Department) -> EngineResult<()> {
        department.validate()?;
        let id = department.department_id.clone();
        apply_change(
            &self.store,
            Collection::Departments,
            &mut self.departments,
            id,
            Some(department),
        )?;
        Ok(())
    }

    /// Looks up a department.
    pub fn get_department(&self, department_id: &str) -> Option<&Department> {
        self.departments.get(department_id)
    }

    /// Overwrites a department by id.
    pub fn update_department(&mut self, department: Department) -> EngineResult<()> {
        self.add_department(department)
    }

    /// Removes a department. Returns `Ok(false)` when the id is unknown.
    ///
    /// Employees referencing the department keep their (now stale) id.
    pub fn delete_department(&mut self, department_id: &str) -> EngineResult<bool> {
        remove_record(
            &self.store,
            Collection::Departments,
            &mut self.departments,
            department_id,
        )
    }

    /// All departments, sorted by id.
    pub fn list_departments(&self) -> Vec<&Department> {
        self.departments.values().collect()
    }

    // Payrolls

    /// Stores a payroll, replacing any record with the same id.
    pub fn add_payroll(&mut self, payroll: Payroll) -> EngineResult<()> {
        let id = payroll.payroll_id().to_string();
        let replaced = apply_change(
            &self.store,
            Collection::Payrolls,
            &mut self.payrolls,
            id.clone(),
            Some(payroll),
        )?;
        if replaced.is_some() {
            info!(payroll_id = %id, "Replaced existing payroll record");
        }
        Ok(())
    }

    /// Looks up a payroll.
    pub fn get_payroll(&self, payroll_id: &str) -> Option<&Payroll> {
        self.payrolls.get(payroll_id)
    }

    /// Removes a payroll. Returns `Ok(false)` when the id is unknown.
    pub fn delete_payroll(&mut self, payroll_id: &str) -> EngineResult<bool> {
        remove_record(
            &self.store,
            Collection::Payrolls,
            &mut self.payrolls,
            payroll_id,
        )
    }

    /// All payrolls, sorted by id.
    pub fn list_payrolls(&self) -> Vec<&Payroll> {
        self.payrolls.values().collect()
    }

    /// Payrolls for one employee, oldest period end first.
    ///
    /// This is a linear scan over every stored payroll.
    pub fn payrolls_for_employee(&self, employee_id: &str) -> Vec<&Payroll> {
        let mut matching: Vec<&Payroll> = self
            .payrolls
            .values()
            .filter(|p| p.employee_id() == employee_id)
            .collect();
        matching.sort_by_key(|p| p.pay_period_end());
        matching
    }

    // Relations

    /// Employees with `Active` status, sorted by id. These are the
    /// candidates for a payroll run.
    pub fn active_employees(&self) -> Vec<&Employee> {
        self.employees
            .values()
            .filter(|e| e.status == EmployeeStatus::Active)
            .collect()
    }

    /// Employees whose `department_id` names this department, sorted by id.
    pub fn employees_in_department(&self, department_id: &str) -> Vec<&Employee> {
        self.employees
            .values()
            .filter(|e| e.department_id.as_deref() == Some(department_id))
            .collect()
    }

    /// Ids belonging to a department: its member set plus every employee
    /// whose `department_id` points at it. Stale ids are kept so payroll
    /// history of departed employees still counts.
    pub fn department_member_ids(&self, department_id: &str) -> BTreeSet<String> {
        let mut ids: BTreeSet<String> = self
            .get_department(department_id)
            .map(|d| d.employee_ids.clone())
            .unwrap_or_default();
        ids.extend(
            self.employees_in_department(department_id)
                .into_iter()
                .map(|e| e.employee_id.clone()),
        );
        ids
    }

    /// Resolves an employee's department, `None` if unset or stale.
    pub fn resolve_department(&self, employee: &Employee) -> Option<&Department> {
        employee
            .department_id
            .as_deref()
            .and_then(|id| self.get_department(id))
    }

    /// Resolves a department's manager, `None` if unset or stale.
    pub fn resolve_manager(&self, department: &Department) -> Option<&Employee> {
        department
            .manager_employee_id
            .as_deref()
            .and_then(|id| self.get_employee(id))
    }

    /// Resolves the employee a payroll was computed for, `None` if deleted.
    pub fn resolve_payroll_employee(&self, payroll: &Payroll) -> Option<&Employee> {
        self.get_employee(payroll.employee_id())
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn load_or_empty<T: serde::de::DeserializeOwned + Keyed>(
    store: &JsonStore,
    collection: Collection,
    report: &mut LoadReport,
) -> BTreeMap<String, T> {
    match store.load(collection) {
        Ok(records) => records,
        Err(err) => {
            warn!(collection = %collection, error = %err, "Falling back to empty collection");
            report.failures.push(LoadFailure {
                collection,
                message: err.to_string(),
            });
            BTreeMap::new()
        }
    }
}

/// Logs every failure and returns the first one.
fn first_failure<const N: usize>(results: [EngineResult<()>; N]) -> EngineResult<()> {
    let mut first_error = None;
    for result in results {
        if let Err(err) = result {
            warn!(error = %err, "Failed to save collection");
            if first_error.is_none() {
                first_error = Some(err);
            }
        }
    }
    match first_error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Persists an empty document, then empties `records`.
fn clear_collection<T: Serialize>(
    store: &JsonStore,
    collection: Collection,
    records: &mut BTreeMap<String, T>,
) -> EngineResult<()> {
    store.save(collection, &BTreeMap::<String, T>::new())?;
    records.clear();
    Ok(())
}

/// Inserts `record` under `id`, persists, and rolls back on failure.
///
/// Returns the record previously stored under `id`.
fn apply_change<T: Serialize>(
    store: &JsonStore,
    collection: Collection,
    records: &mut BTreeMap<String, T>,
    id: String,
    record: Option<T>,
) -> EngineResult<Option<T>> {
    let previous = match record {
        Some(record) => records.insert(id.clone(), record),
        None => records.remove(&id),
    };

    if let Err(err) = store.save(collection, records) {
        warn!(collection = %collection, id = %id, error = %err, "Save failed, rolling back");
        match previous {
            Some(previous) => {
                records.insert(id, previous);
            }
            None => {
                records.remove(&id);
            }
        }
        return Err(err);
    }

    debug!(collection = %collection, id = %id, "Saved collection");
    Ok(previous)
}

fn remove_record<T: Serialize>(
    store: &JsonStore,
    collection: Collection,
    records: &mut BTreeMap<String, T>,
    id: &str,
) -> EngineResult<bool> {
    if !records.contains_key(id) {
        return Ok(false);
    }
    apply_change(store, collection, records, id.to_string(), None)?;
    Ok(true)
}
