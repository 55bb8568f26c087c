//! Configuration loading and management for the payroll ledger.
//!
//! This module provides functionality to load the server, storage and
//! overtime settings from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use payroll_ledger::config::ConfigLoader;
//!
//! let config = ConfigLoader::load_or_default("./config/payroll.yaml").unwrap();
//! println!("Listening on {}", config.config().server.bind_address);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{OvertimeConfig, PayrollConfig, ServerConfig, StorageConfig};
