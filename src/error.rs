//! Error types for `tappadgen`
//!
//! A small hierarchy: configuration errors for the margin-table file,
//! emission errors for the markup pass, and a top-level aggregate that
//! maps every failure to a process exit code.

use std::path::PathBuf;
use thiserror::Error;

use crate::grid::Coordinate;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `tappadgen` CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Configuration error (invalid margin file, validation failure)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Emission error (margin table does not cover the grid)
    pub const EMIT_ERROR: i32 = 10;

    /// Usage error (invalid arguments, missing required options)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `tappadgen` operations.
///
/// Aggregates the domain-specific errors and provides a unified
/// interface for error handling and exit code mapping.
#[derive(Debug, Error)]
pub enum TappadGenError {
    /// Margin-table file loading or validation error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Markup emission error
    #[error(transparent)]
    Emit(#[from] EmitError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl TappadGenError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Json(_) | Self::Yaml(_) => ExitCode::CONFIG_ERROR,
            Self::Emit(EmitError::Io(_)) | Self::Io(_) => ExitCode::IO_ERROR,
            Self::Emit(_) => ExitCode::EMIT_ERROR,
        }
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Margin-table file loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Margin file does not exist
    #[error("file not found: {path}")]
    MissingFile {
        /// Path to the missing file
        path: PathBuf,
    },

    /// Margin file could not be read
    #[error("failed to read {path}: {source}")]
    ReadError {
        /// Path to the unreadable file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing failed
    #[error("parse error in {path}: {message}")]
    ParseError {
        /// Path to the margin file
        path: PathBuf,
        /// Error message from the parser
        message: String,
    },

    /// Field has an invalid value
    #[error("invalid value for '{field}': got '{value}', expected {expected}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The actual value provided
        value: String,
        /// Description of what was expected
        expected: String,
    },

    /// Margin-table validation failed
    #[error("validation failed for {path}")]
    ValidationError {
        /// Source of the table ("<builtin>" or a file path)
        path: String,
        /// List of validation issues found
        errors: Vec<ValidationIssue>,
    },
}

// ============================================================================
// Validation Types
// ============================================================================

/// A single validation issue found during margin-table validation.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Path to the problematic entry (e.g., "margins[1,2,1]")
    pub path: String,
    /// Description of the validation issue
    pub message: String,
    /// Severity level of the issue
    pub severity: Severity,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {} at {}", prefix, self.message, self.path)
    }
}

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Error - the table cannot be used for the requested grid
    Error,
    /// Warning - suspicious but not fatal (errors under `--strict`)
    Warning,
}

// ============================================================================
// Emission Errors
// ============================================================================

/// Markup emission errors.
///
/// The margin table is meant to be exhaustive by construction, so a
/// missing entry is a fatal configuration defect, not a skippable cell.
#[derive(Debug, Error)]
pub enum EmitError {
    /// A cell of the iteration space has no margin entry
    #[error("no margin entry for tappad {cell}")]
    MissingMargin {
        /// The uncovered cell
        cell: Coordinate,
    },

    /// Writing to the output stream failed
    #[error("markup write failed: {0}")]
    Io(#[from] std::io::Error),
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `tappadgen` operations.
pub type Result<T> = std::result::Result<T, TappadGenError>;

// ============================================================================
// Tests
// ============================================================================
