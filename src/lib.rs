//! Attendance Reconciliation Engine
//!
//! This crate provides the reconciliation core of an employee attendance
//! system: resolving configured work periods (weekly, fortnightly, monthly)
//! into concrete date ranges, and deriving a day's check-in/check-out
//! assignment from raw time clock records, including manual reassignment.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
