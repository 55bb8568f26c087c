//! Configuration types for the payroll ledger.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every field has a
//! default, so an empty file is a valid configuration.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::PathBuf;

use crate::calculation::{DEFAULT_OVERTIME_MULTIPLIER, DEFAULT_OVERTIME_THRESHOLD, OvertimePolicy};

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the web UI listens on.
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:5000".to_string(),
        }
    }
}

/// Where employee records are persisted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path of the JSON data file.
    pub data_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("payroll_data.json"),
        }
    }
}

/// Overtime settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OvertimeConfig {
    /// Hours beyond which overtime applies.
    pub threshold: Decimal,
    /// Multiplier applied to the hourly rate for overtime hours.
    pub multiplier: Decimal,
}

impl Default for OvertimeConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_OVERTIME_THRESHOLD,
            multiplier: DEFAULT_OVERTIME_MULTIPLIER,
        }
    }
}

impl From<&OvertimeConfig> for OvertimePolicy {
    fn from(config: &OvertimeConfig) -> Self {
        OvertimePolicy::new(config.threshold, config.multiplier)
    }
}

/// The complete configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PayrollConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Persistence settings.
    pub storage: StorageConfig,
    /// Overtime settings.
    pub overtime: OvertimeConfig,
}

impl PayrollConfig {
    /// The overtime policy described by this configuration.
    pub fn overtime_policy(&self) -> OvertimePolicy {
        OvertimePolicy::from(&self.overtime)
    }
}
