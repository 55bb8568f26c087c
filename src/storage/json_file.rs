//! JSON file storage backend.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{PayrollError, PayrollResult};

use super::{EmployeeMap, PayrollStorage};

/// Stores the employee map as a pretty-printed JSON object keyed by
/// employee ID.
///
/// # Example
///
/// ```no_run
/// use payroll_ledger::storage::{JsonFileStorage, PayrollStorage};
///
/// let storage = JsonFileStorage::new("payroll_data.json");
/// let employees = storage.load()?;
/// println!("{} employees on file", employees.len());
/// # Ok::<(), payroll_ledger::error::PayrollError>(())
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Creates a backend for the given file. Nothing is read or written yet.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// The file this backend reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn storage_error(&self, message: impl ToString) -> PayrollError {
        PayrollError::Storage {
            path: self.path.display().to_string(),
            message: message.to_string(),
        }
    }
}

impl PayrollStorage for JsonFileStorage {
    fn load(&self) -> PayrollResult<EmployeeMap> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(EmployeeMap::new()),
            Err(err) => return Err(self.storage_error(err)),
        };

        serde_json::from_str(&content).map_err(|e| self.storage_error(e))
    }

    fn save(&mut self, employees: &EmployeeMap) -> PayrollResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.storage_error(e))?;
            }
        }

        let json = serde_json::to_string_pretty(employees).map_err(|e| self.storage_error(e))?;
        fs::write(&self.path, json).map_err(|e| self.storage_error(e))?;

        debug!(
            path = %self.path.display(),
            employees = employees.len(),
            "Saved payroll data"
        );
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
