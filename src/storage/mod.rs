//! Persistence backends for the payroll store.
//!
//! The store talks to its backing file through the [`PayrollStorage`] trait so
//! the calculation and record-management code never touches the filesystem
//! directly. [`JsonFileStorage`] is the production backend;
//! [`MemoryStorage`] keeps everything in memory.

mod json_file;
mod memory;

use std::collections::BTreeMap;

use crate::error::PayrollResult;
use crate::models::Employee;

pub use json_file::JsonFileStorage;
pub use memory::MemoryStorage;

/// Employees keyed by employee ID.
pub type EmployeeMap = BTreeMap<String, Employee>;

/// A place the full employee map can be read from and written to.
///
/// Every save replaces the whole stored map.
pub trait PayrollStorage {
    /// Reads the stored employee map. A store that has never been written
    /// returns an empty map.
    fn load(&self) -> PayrollResult<EmployeeMap>;

    /// Overwrites the stored employee map.
    fn save(&mut self, employees: &EmployeeMap) -> PayrollResult<()>;

    /// A human-readable description of where data lives, used in logs.
    fn location(&self) -> String;
}
