//! In-memory storage backend.

use crate::error::PayrollResult;

use super::{EmployeeMap, PayrollStorage};

/// Keeps the last saved employee map in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    employees: EmployeeMap,
    saves: usize,
}

impl MemoryStorage {
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend that already holds the given employees.
    pub fn with_employees(employees: EmployeeMap) -> Self {
        Self {
            employees,
            saves: 0,
        }
    }

    /// Number of times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    /// The most recently saved map.
    pub fn saved(&self) -> &EmployeeMap {
        &self.employees
    }
}

impl PayrollStorage for MemoryStorage {
    fn load(&self) -> PayrollResult<EmployeeMap> {
        Ok(self.employees.clone())
    }

    fn save(&mut self, employees: &EmployeeMap) -> PayrollResult<()> {
        self.employees = employees.clone();
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
