//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the payroll
//! configuration from a YAML file.

use rust_decimal::Decimal;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::info;

use crate::calculation::OvertimePolicy;
use crate::error::{PayrollError, PayrollResult};

use super::types::PayrollConfig;

/// Loads and provides access to the payroll configuration.
///
/// # File Format
///
/// ```yaml
/// server:
///   bind_address: "127.0.0.1:5000"
/// storage:
///   data_file: "payroll_data.json"
/// overtime:
///   threshold: 40
///   multiplier: 1.5
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_ledger::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll.yaml")?;
/// println!("Data file: {}", loader.config().storage.data_file.display());
/// # Ok::<(), payroll_ledger::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or fails validation (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml(&content, &path_str)
    }

    /// Loads configuration from the specified file, falling back to the
    /// defaults when the file does not exist.
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        match fs::metadata(path) {
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "No configuration file, using defaults");
                Ok(Self::default())
            }
            _ => Self::load(path),
        }
    }

    /// Parses configuration from YAML text. `source` names the origin of the
    /// text in error messages.
    pub fn from_yaml(content: &str, source: &str) -> PayrollResult<Self> {
        // An empty document deserializes as unit, not as a map.
        let config: PayrollConfig = if content.trim().is_empty() {
            PayrollConfig::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| PayrollError::ConfigParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?
        };

        Self::validate(&config, source)?;
        Ok(Self { config })
    }

    fn validate(config: &PayrollConfig, source: &str) -> PayrollResult<()> {
        let invalid = |message: &str| PayrollError::ConfigParseError {
            path: source.to_string(),
            message: message.to_string(),
        };

        if config.overtime.threshold < Decimal::ZERO {
            return Err(invalid("overtime.threshold must be non-negative"));
        }
        if config.overtime.multiplier < Decimal::ZERO {
            return Err(invalid("overtime.multiplier must be non-negative"));
        }
        if config.storage.data_file.as_os_str().is_empty() {
            return Err(invalid("storage.data_file must not be empty"));
        }
        Ok(())
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the overtime policy.
    pub fn overtime_policy(&self) -> OvertimePolicy {
        self.config.overtime_policy()
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> PayrollConfig {
        self.config
    }
}
