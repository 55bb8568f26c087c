//! The payroll store.
//!
//! [`PayrollStore`] owns the employee map, validates every mutation, and
//! writes the whole map back to its [`PayrollStorage`] after each change.
//! Mutations return `Ok(message)` with the confirmation shown to the user,
//! or a [`PayrollError`] whose `Display` text is the rejection message.

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::calculation::{OvertimePolicy, calculate_pay};
use crate::error::{PayrollError, PayrollResult};
use crate::export;
use crate::models::{Employee, PayrollCalculation, PayrollEntry, PayrollReport, PayrollSummary};
use crate::storage::{EmployeeMap, PayrollStorage};

/// Compensation fields to change in [`PayrollStore::update_compensation`].
///
/// `None` leaves the field as it is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompensationUpdate {
    /// New hours worked.
    pub hours: Option<Decimal>,
    /// New allowances.
    pub allowances: Option<Decimal>,
    /// New deductions.
    pub deductions: Option<Decimal>,
}

impl CompensationUpdate {
    /// An update that only changes hours worked.
    pub fn hours(hours: Decimal) -> Self {
        Self {
            hours: Some(hours),
            ..Self::default()
        }
    }

    fn validate(&self) -> PayrollResult<()> {
        if self.hours.is_some_and(is_negative) {
            return Err(PayrollError::NegativeHours);
        }
        if self.allowances.is_some_and(is_negative) {
            return Err(PayrollError::NegativeAllowances);
        }
        if self.deductions.is_some_and(is_negative) {
            return Err(PayrollError::NegativeDeductions);
        }
        Ok(())
    }
}

/// Details for a new employee passed to [`PayrollStore::add`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    /// Display name.
    pub name: String,
    /// Unique ID.
    pub employee_id: String,
    /// Hourly rate; must not be negative.
    pub hourly_rate: Decimal,
    /// Department; may be empty.
    pub department: String,
    /// Allowances; must not be negative.
    pub allowances: Decimal,
    /// Deductions; must not be negative.
    pub deductions: Decimal,
}

impl NewEmployee {
    /// A new employee with no department, allowances or deductions.
    pub fn new(
        name: impl Into<String>,
        employee_id: impl Into<String>,
        hourly_rate: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            employee_id: employee_id.into(),
            hourly_rate,
            department: String::new(),
            allowances: Decimal::ZERO,
            deductions: Decimal::ZERO,
        }
    }

    /// Sets the department.
    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Sets the allowances.
    pub fn allowances(mut self, allowances: Decimal) -> Self {
        self.allowances = allowances;
        self
    }

    /// Sets the deductions.
    pub fn deductions(mut self, deductions: Decimal) -> Self {
        self.deductions = deductions;
        self
    }
}

fn is_negative(value: Decimal) -> bool {
    value < Decimal::ZERO
}

fn report_of(employees: &[&Employee], policy: &OvertimePolicy) -> PayrollResult<PayrollReport> {
    let entries = employees
        .iter()
        .map(|employee| {
            calculate_pay(employee, policy).map(|pay| PayrollEntry::new(employee, pay))
        })
        .collect::<PayrollResult<Vec<_>>>()?;
    PayrollReport::from_entries(entries)
}

fn summary_of(employees: &[&Employee], policy: &OvertimePolicy) -> PayrollResult<PayrollSummary> {
    let report = report_of(employees, policy)?;

    let mut total_rate = Decimal::ZERO;
    for employee in employees {
        total_rate = total_rate.checked_add(employee.hourly_rate).ok_or_else(|| {
            PayrollError::PayOutOfRange {
                employee_id: employee.employee_id.clone(),
            }
        })?;
    }
    // Dividing by a count of at least one cannot overflow.
    let average_rate = if employees.is_empty() {
        Decimal::ZERO
    } else {
        total_rate / Decimal::from(employees.len())
    };

    Ok(PayrollSummary {
        employee_count: employees.len(),
        total_hours: report.totals.total_hours,
        gross_total: report.totals.gross_total,
        net_total: report.totals.net_total,
        average_rate,
    })
}

/// Employee records plus the storage they are synchronized to.
///
/// # Example
///
/// ```
/// use payroll_ledger::calculation::OvertimePolicy;
/// use payroll_ledger::storage::MemoryStorage;
/// use payroll_ledger::store::{NewEmployee, PayrollStore};
/// use rust_decimal::Decimal;
///
/// let mut store = PayrollStore::open(MemoryStorage::new(), OvertimePolicy::default());
/// let message = store.add(NewEmployee::new("Ada", "E001", Decimal::from(20)))?;
/// assert_eq!(message, "Employee Ada added successfully");
/// assert_eq!(store.len(), 1);
/// # Ok::<(), payroll_ledger::error::PayrollError>(())
/// ```
#[derive(Debug)]
pub struct PayrollStore<S: PayrollStorage> {
    employees: EmployeeMap,
    storage: S,
    policy: OvertimePolicy,
}

impl<S: PayrollStorage> PayrollStore<S> {
    /// Opens a store over `storage`, loading whatever it holds.
    ///
    /// A load failure, or stored values whose pay cannot be calculated, is
    /// logged and the store starts empty.
    pub fn open(storage: S, policy: OvertimePolicy) -> Self {
        let loaded = storage.load().and_then(|employees| {
            summary_of(&employees.values().collect::<Vec<_>>(), &policy)?;
            Ok(employees)
        });
        let employees = match loaded {
            Ok(employees) => {
                info!(
                    location = %storage.location(),
                    employees = employees.len(),
                    "Loaded payroll data"
                );
                employees
            }
            Err(err) => {
                warn!(
                    location = %storage.location(),
                    error = %err,
                    "Could not load payroll data, starting with an empty store"
                );
                EmployeeMap::new()
            }
        };

        Self {
            employees,
            storage,
            policy,
        }
    }

    /// The overtime policy used for every calculation.
    pub fn policy(&self) -> &OvertimePolicy {
        &self.policy
    }

    /// The storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Number of employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true when the store has no employees.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Looks up an employee by ID.
    pub fn get(&self, employee_id: &str) -> Option<&Employee> {
        self.employees.get(employee_id)
    }

    /// All employees, ordered by ID.
    pub fn list_employees(&self) -> Vec<&Employee> {
        self.employees.values().collect()
    }

    fn persist(&mut self) -> PayrollResult<()> {
        self.storage.save(&self.employees)
    }

    /// Checks that every report still calculates with `candidate` in place
    /// of the employee with the same ID.
    fn check_calculable(&self, candidate: &Employee) -> PayrollResult<()> {
        let employees = self
            .employees
            .values()
            .filter(|employee| employee.employee_id != candidate.employee_id)
            .chain(std::iter::once(candidate))
            .collect::<Vec<_>>();
        summary_of(&employees, &self.policy).map(|_| ()).inspect_err(|err| {
            warn!(
                employee_id = %candidate.employee_id,
                error = %err,
                "Rejected pay that cannot be calculated"
            );
        })
    }

    /// Adds an employee and persists.
    ///
    /// Fails if the ID is already taken, the rate is negative, the
    /// allowances or deductions are negative, or the resulting pay would
    /// overflow. A failed add changes nothing.
    pub fn add(&mut self, new: NewEmployee) -> PayrollResult<String> {
        if self.employees.contains_key(&new.employee_id) {
            warn!(employee_id = %new.employee_id, "Rejected duplicate employee ID");
            return Err(PayrollError::EmployeeExists {
                employee_id: new.employee_id,
            });
        }
        if is_negative(new.hourly_rate) {
            return Err(PayrollError::NegativeRate);
        }
        if is_negative(new.allowances) || is_negative(new.deductions) {
            return Err(PayrollError::NegativeAdjustments);
        }

        let employee = Employee::new(new.name, new.employee_id, new.hourly_rate)
            .with_department(new.department)
            .with_allowances(new.allowances)
            .with_deductions(new.deductions);
        self.check_calculable(&employee)?;
        let message = format!("Employee {} added successfully", employee.name);

        info!(employee_id = %employee.employee_id, "Adding employee");
        self.employees.insert(employee.employee_id.clone(), employee);
        self.persist()?;
        Ok(message)
    }

    /// Removes an employee and persists.
    ///
    /// An unknown ID fails without touching storage.
    pub fn remove(&mut self, employee_id: &str) -> PayrollResult<String> {
        let employee = self.employees.remove(employee_id).ok_or_else(|| {
            warn!(employee_id = %employee_id, "Cannot remove unknown employee");
            PayrollError::EmployeeNotFound {
                employee_id: employee_id.to_string(),
            }
        })?;

        info!(employee_id = %employee_id, "Removed employee");
        self.persist()?;
        Ok(format!("Employee {} removed successfully", employee.name))
    }

    /// Changes the provided compensation fields and persists.
    ///
    /// All provided values, and the pay they produce, are checked before
    /// any field is written, so a rejected update leaves the employee
    /// unchanged.
    pub fn update_compensation(
        &mut self,
        employee_id: &str,
        update: CompensationUpdate,
    ) -> PayrollResult<String> {
        let mut employee = self
            .employees
            .get(employee_id)
            .cloned()
            .ok_or_else(|| PayrollError::EmployeeNotFound {
                employee_id: employee_id.to_string(),
            })?;
        update.validate()?;

        if let Some(hours) = update.hours {
            employee.hours_worked = hours;
        }
        if let Some(allowances) = update.allowances {
            employee.allowances = allowances;
        }
        if let Some(deductions) = update.deductions {
            employee.deductions = deductions;
        }
        self.check_calculable(&employee)?;
        let message = format!("Compensation updated for {}", employee.name);

        info!(employee_id = %employee_id, ?update, "Updated compensation");
        self.employees.insert(employee.employee_id.clone(), employee);
        self.persist()?;
        Ok(message)
    }

    /// Sets hours worked; shorthand for an hours-only compensation update.
    pub fn update_hours(&mut self, employee_id: &str, hours: Decimal) -> PayrollResult<String> {
        self.update_compensation(employee_id, CompensationUpdate::hours(hours))
    }

    /// Calculates pay for one employee when an ID is given, or for everyone
    /// with totals otherwise.
    pub fn calculate_payroll(
        &self,
        employee_id: Option<&str>,
    ) -> PayrollResult<PayrollCalculation> {
        match employee_id {
            Some(id) => self.employee_payroll(id).map(PayrollCalculation::Single),
            None => self.payroll_report().map(PayrollCalculation::All),
        }
    }

    /// Calculates pay for a single employee.
    pub fn employee_payroll(&self, employee_id: &str) -> PayrollResult<PayrollEntry> {
        let employee = self
            .employees
            .get(employee_id)
            .ok_or_else(|| PayrollError::EmployeeNotFound {
                employee_id: employee_id.to_string(),
            })?;
        let pay = calculate_pay(employee, &self.policy)?;
        Ok(PayrollEntry::new(employee, pay))
    }

    /// Calculates pay for every employee, with totals.
    pub fn payroll_report(&self) -> PayrollResult<PayrollReport> {
        report_of(&self.list_employees(), &self.policy)
    }

    /// Headline figures: headcount, hours, gross and net totals, and the
    /// mean hourly rate (zero for an empty store).
    pub fn summary(&self) -> PayrollResult<PayrollSummary> {
        summary_of(&self.list_employees(), &self.policy)
    }

    /// Renders the payroll report as CSV.
    pub fn export_csv(&self) -> PayrollResult<String> {
        Ok(export::render_csv(&self.payroll_report()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{JsonFileStorage, MemoryStorage};
    use std::str::FromStr;
    use uuid::Uuid;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_store() -> PayrollStore<MemoryStorage> {
        PayrollStore::open(MemoryStorage::new(), OvertimePolicy::default())
    }

    fn create_populated_store() -> PayrollStore<MemoryStorage> {
        let mut store = create_store();
        store
            .add(NewEmployee::new("Ada", "E001", dec("10")).department("Engineering"))
            .unwrap();
        store
            .add(NewEmployee::new("Alan", "E002", dec("30")).allowances(dec("20")))
            .unwrap();
        store.update_hours("E001", dec("45")).unwrap();
        store.update_hours("E002", dec("10")).unwrap();
        store
    }

    #[test]
    fn test_add_inserts_and_persists() {
        let mut store = create_store();
        let message = store
            .add(
                NewEmployee::new("Ada", "E001", dec("25.50"))
                    .department("Engineering")
                    .allowances(dec("10"))
                    .deductions(dec("5")),
            )
            .unwrap();

        assert_eq!(message, "Employee Ada added successfully");
        let employee = store.get("E001").unwrap();
        assert_eq!(employee.hourly_rate, dec("25.50"));
        assert_eq!(employee.hours_worked, Decimal::ZERO);
        assert_eq!(employee.department, "Engineering");
        assert_eq!(store.storage().save_count(), 1);
        assert!(store.storage().saved().contains_key("E001"));
    }

    #[test]
    fn test_add_duplicate_id_fails_and_leaves_store_unchanged() {
        let mut store = create_populated_store();
        let before = store.list_employees().into_iter().cloned().collect::<Vec<_>>();
        let saves = store.storage().save_count();

        let result = store.add(NewEmployee::new("Imposter", "E001", dec("99")));

        match result {
            Err(PayrollError::EmployeeExists { employee_id }) => assert_eq!(employee_id, "E001"),
            other => panic!("Expected EmployeeExists, got {:?}", other),
        }
        let after = store.list_employees().into_iter().cloned().collect::<Vec<_>>();
        assert_eq!(before, after);
        assert_eq!(store.storage().save_count(), saves);
    }

    #[test]
    fn test_add_negative_rate_fails() {
        let mut store = create_store();
        let err = store
            .add(NewEmployee::new("Ada", "E001", dec("-1")))
            .unwrap_err();
        assert_eq!(err.to_string(), "Hourly rate must be positive");
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_zero_rate_is_allowed() {
        let mut store = create_store();
        assert!(store.add(NewEmployee::new("Volunteer", "V1", Decimal::ZERO)).is_ok());
    }

    #[test]
    fn test_add_negative_allowances_or_deductions_fails() {
        let mut store = create_store();
        let err = store
            .add(NewEmployee::new("Ada", "E001", dec("10")).allowances(dec("-5")))
            .unwrap_err();
        assert_eq!(err.to_string(), "Allowances and deductions must be non-negative");

        let err = store
            .add(NewEmployee::new("Ada", "E001", dec("10")).deductions(dec("-0.01")))
            .unwrap_err();
        assert_eq!(err.to_string(), "Allowances and deductions must be non-negative");
        assert_eq!(store.storage().save_count(), 0);
    }

    #[test]
    fn test_remove_existing_employee() {
        let mut store = create_populated_store();
        let message = store.remove("E001").unwrap();

        assert_eq!(message, "Employee Ada removed successfully");
        assert!(store.get("E001").is_none());
        assert!(!store.storage().saved().contains_key("E001"));
    }

    #[test]
    fn test_remove_unknown_employee_fails_without_saving() {
        let mut store = create_populated_store();
        let saves = store.storage().save_count();

        let err = store.remove("E999").unwrap_err();

        assert_eq!(err.to_string(), "Employee not found");
        assert_eq!(store.len(), 2);
        assert_eq!(store.storage().save_count(), saves);
    }

    #[test]
    fn test_update_compensation_changes_only_provided_fields() {
        let mut store = create_populated_store();
        let message = store
            .update_compensation(
                "E002",
                CompensationUpdate {
                    hours: None,
                    allowances: None,
                    deductions: Some(dec("7.25")),
                },
            )
            .unwrap();

        assert_eq!(message, "Compensation updated for Alan");
        let employee = store.get("E002").unwrap();
        assert_eq!(employee.hours_worked, dec("10"));
        assert_eq!(employee.allowances, dec("20"));
        assert_eq!(employee.deductions, dec("7.25"));
    }

    #[test]
    fn test_update_compensation_unknown_employee() {
        let mut store = create_store();
        let err = store
            .update_compensation("nobody", CompensationUpdate::hours(dec("8")))
            .unwrap_err();
        assert!(matches!(err, PayrollError::EmployeeNotFound { .. }));
    }

    #[test]
    fn test_update_compensation_rejects_negatives_without_partial_writes() {
        let mut store = create_populated_store();
        let saves = store.storage().save_count();

        let err = store
            .update_compensation(
                "E001",
                CompensationUpdate {
                    hours: Some(dec("12")),
                    allowances: Some(dec("-1")),
                    deductions: None,
                },
            )
            .unwrap_err();
        assert_eq!(err.to_string(), "Allowances must be non-negative");
        assert_eq!(store.get("E001").unwrap().hours_worked, dec("45"));

        let err = store
            .update_compensation("E001", CompensationUpdate::hours(dec("-3")))
            .unwrap_err();
        assert_eq!(err.to_string(), "Hours worked must be non-negative");

        let err = store
            .update_compensation(
                "E001",
                CompensationUpdate {
                    deductions: Some(dec("-10")),
                    ..CompensationUpdate::default()
                },
            )
            .unwrap_err();
        assert_eq!(err.to_string(), "Deductions must be non-negative");
        assert_eq!(store.storage().save_count(), saves);
    }

    #[test]
    fn test_calculate_payroll_single_employee() {
        let store = create_populated_store();
        let result = store.calculate_payroll(Some("E001")).unwrap();

        let PayrollCalculation::Single(entry) = result else {
            panic!("Expected a single entry");
        };
        assert_eq!(entry.name, "Ada");
        assert_eq!(entry.department, "Engineering");
        assert_eq!(entry.breakdown.regular_hours, dec("40"));
        assert_eq!(entry.breakdown.overtime_hours, dec("5"));
        assert_eq!(entry.breakdown.base_pay, dec("400"));
        assert_eq!(entry.breakdown.overtime_pay, dec("75"));
        assert_eq!(entry.breakdown.gross_pay, dec("475"));
    }

    #[test]
    fn test_calculate_payroll_unknown_employee() {
        let store = create_populated_store();
        let err = store.calculate_payroll(Some("E404")).unwrap_err();
        assert_eq!(err.to_string(), "Employee not found");
    }

    #[test]
    fn test_calculate_payroll_all_with_totals() {
        let store = create_populated_store();
        let PayrollCalculation::All(report) = store.calculate_payroll(None).unwrap() else {
            panic!("Expected a full report");
        };

        // E001: 475 gross; E002: 10h * $30 + $20 = 320 gross
        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.entries[0].employee_id, "E001");
        assert_eq!(report.totals.gross_total, dec("795"));
        assert_eq!(report.totals.net_total, dec("795"));
        assert_eq!(report.totals.total_hours, dec("55"));
    }

    #[test]
    fn test_summary_of_empty_store() {
        let store = create_store();
        let summary = store.summary().unwrap();

        assert_eq!(summary.employee_count, 0);
        assert_eq!(summary.average_rate, Decimal::ZERO);
        assert_eq!(summary.gross_total, Decimal::ZERO);
        assert_eq!(summary.total_hours, Decimal::ZERO);
    }

    #[test]
    fn test_summary_averages_rates() {
        let store = create_populated_store();
        let summary = store.summary().unwrap();

        assert_eq!(summary.employee_count, 2);
        assert_eq!(summary.average_rate, dec("20"));
        assert_eq!(summary.total_hours, dec("55"));
        assert_eq!(summary.gross_total, dec("795"));
        assert_eq!(summary.net_total, dec("795"));
    }

    #[test]
    fn test_overtime_update_that_overflows_is_rejected() {
        let mut store = create_store();
        store.add(NewEmployee::new("Ada", "E001", Decimal::MAX)).unwrap();
        let saves = store.storage().save_count();

        let err = store.update_hours("E001", dec("45")).unwrap_err();

        assert!(matches!(err, PayrollError::PayOutOfRange { .. }));
        assert_eq!(store.get("E001").unwrap().hours_worked, Decimal::ZERO);
        assert_eq!(store.storage().save_count(), saves);
        assert_eq!(store.payroll_report().unwrap().totals.gross_total, Decimal::ZERO);
        assert_eq!(store.summary().unwrap().average_rate, Decimal::MAX);
    }

    #[test]
    fn test_add_that_overflows_totals_is_rejected() {
        let mut store = create_store();
        store.add(NewEmployee::new("Ada", "E001", Decimal::MAX)).unwrap();

        let err = store
            .add(NewEmployee::new("Alan", "E002", Decimal::MAX))
            .unwrap_err();

        assert_eq!(err.to_string(), "Pay is too large to calculate for these values");
        assert_eq!(store.len(), 1);
        assert_eq!(store.summary().unwrap().employee_count, 1);
        assert!(store.export_csv().is_ok());
    }

    #[test]
    fn test_add_with_overflowing_allowances_is_rejected() {
        let mut store = create_populated_store();
        let err = store
            .add(NewEmployee::new("Grace", "E003", dec("10")).allowances(Decimal::MAX))
            .unwrap_err();

        assert!(matches!(err, PayrollError::PayOutOfRange { .. }));
        assert!(store.get("E003").is_none());
    }

    #[test]
    fn test_open_with_incalculable_file_starts_empty() {
        let path = std::env::temp_dir().join(format!("payroll_store_{}.json", Uuid::new_v4()));
        let json = serde_json::json!({
            "E001": {
                "name": "Ada",
                "employee_id": "E001",
                "hourly_rate": Decimal::MAX.to_string(),
                "hours_worked": "45"
            }
        });
        std::fs::write(&path, json.to_string()).unwrap();

        let store = PayrollStore::open(JsonFileStorage::new(&path), OvertimePolicy::default());
        assert!(store.is_empty());
        assert!(store.payroll_report().is_ok());

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_open_with_unreadable_file_starts_empty() {
        let path = std::env::temp_dir().join(format!("payroll_store_{}.json", Uuid::new_v4()));
        std::fs::write(&path, "this is not json").unwrap();

        let store = PayrollStore::open(JsonFileStorage::new(&path), OvertimePolicy::default());
        assert!(store.is_empty());

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_file_round_trip_reproduces_employees() {
        let path = std::env::temp_dir().join(format!("payroll_store_{}.json", Uuid::new_v4()));

        let mut store =
            PayrollStore::open(JsonFileStorage::new(&path), OvertimePolicy::default());
        store
            .add(
                NewEmployee::new("Ada", "E001", dec("25.50"))
                    .department("Engineering")
                    .allowances(dec("12.5"))
                    .deductions(dec("3")),
            )
            .unwrap();
        store.add(NewEmployee::new("Alan", "E002", dec("30"))).unwrap();
        store.update_hours("E002", dec("41.5")).unwrap();

        let reopened =
            PayrollStore::open(JsonFileStorage::new(&path), OvertimePolicy::default());
        assert_eq!(reopened.list_employees(), store.list_employees());

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_remove_unknown_does_not_touch_file() {
        let path = std::env::temp_dir().join(format!("payroll_store_{}.json", Uuid::new_v4()));
        let mut store =
            PayrollStore::open(JsonFileStorage::new(&path), OvertimePolicy::default());
        store.add(NewEmployee::new("Ada", "E001", dec("20"))).unwrap();
        let before = std::fs::read_to_string(&path).unwrap();

        assert!(store.remove("E404").is_err());

        let after = std::fs::read_to_string(&path).unwrap();
        assert_eq!(before, after);

        std::fs::remove_file(&path).ok();
    }
}
