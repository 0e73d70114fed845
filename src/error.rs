//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every error condition the engine and the repository can report.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All fallible operations in the crate return this error type, making it
/// easy to handle errors consistently at the call site. None of the variants
/// is fatal: each describes a local, recoverable condition.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/payroll.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/payroll.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or holds out-of-range values.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A calculation input violated a precondition.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The input that was invalid.
        field: String,
        /// A description of what made the input invalid.
        message: String,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A department record was invalid.
    #[error("Invalid department field '{field}': {message}")]
    InvalidDepartment {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A record with the same id already exists.
    #[error("{entity} '{id}' already exists")]
    DuplicateId {
        /// The kind of record (e.g. "employee").
        entity: &'static str,
        /// The conflicting id.
        id: String,
    },

    /// A record that the caller required was not found.
    #[error("{entity} '{id}' not found")]
    NotFound {
        /// The kind of record (e.g. "department").
        entity: &'static str,
        /// The id that was looked up.
        id: String,
    },

    /// Durable storage could not be written.
    #[error("Failed to persist '{path}': {message}")]
    Persistence {
        /// The file that could not be written.
        path: String,
        /// A description of the I/O or serialization failure.
        message: String,
    },

    /// A stored document could not be read, parsed, or held records filed
    /// under the wrong id.
    #[error("Failed to load '{path}': {message}")]
    CorruptStorage {
        /// The file that could not be loaded.
        path: String,
        /// A description of the failure.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for an [`EngineError::InvalidInput`].
    pub(crate) fn invalid_input(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// An `InvalidInput` for an amount that does not fit in a `Decimal`.
    pub(crate) fn amount_overflow(field: &str) -> Self {
        Self::invalid_input(field, "amount is too large to represent")
    }

    /// Returns true for errors caused by caller-supplied data.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput { .. }
                | Self::InvalidEmployee { .. }
                | Self::InvalidDepartment { .. }
                | Self::DuplicateId { .. }
        )
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
