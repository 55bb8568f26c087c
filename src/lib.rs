//! Payroll Ledger
//!
//! This crate computes hourly pay with overtime, keeps employee records in a
//! file-backed store, and serves a small web front end over that store.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod storage;
pub mod store;
