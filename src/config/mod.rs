//! Configuration loading and management for the Attendance Reconciliation Engine.
//!
//! This module provides the work-period configuration types and a YAML
//! loader. The configuration is an immutable snapshot passed explicitly into
//! the period resolver at call time.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/work_period.yaml").unwrap();
//! println!("Active mode: {:?}", loader.config().mode);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{WorkPeriodConfig, WorkPeriodMode};
