//! Error types for the Attendance Reconciliation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during attendance processing.

use thiserror::Error;

/// The main error type for the Attendance Reconciliation Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application. The period
/// resolver is deliberately infallible and never produces one of these.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/work_period.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/work_period.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A referenced entity (record, daily attendance, shift) does not exist.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// The kind of entity that was looked up (e.g., "attendance record").
        entity: String,
        /// The identifier that failed to resolve.
        id: String,
    },

    /// An operation was attempted in a state that does not permit it.
    #[error("Invalid state: {message}")]
    InvalidState {
        /// A description of the state conflict and how to resolve it.
        message: String,
    },

    /// An input value was not recognized (e.g., an unknown enum code).
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// A description of the rejected input.
        message: String,
    },

    /// A domain invariant was violated.
    #[error("Domain invariant violation: {message}")]
    DomainInvariantViolation {
        /// A description of the violated invariant.
        message: String,
    },
}

impl EngineError {
    /// Creates a [`EngineError::NotFound`] for the given entity kind and id.
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        EngineError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
