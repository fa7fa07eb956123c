//! Margin-table file loading.
//!
//! Pipeline: read file → parse YAML → parse margin strings → detect
//! duplicate cells → merge over (or replace) the built-in table.

use std::collections::HashSet;
use std::path::Path;

use crate::config::schema::MarginFile;
use crate::error::{ConfigError, Severity, ValidationIssue};
use crate::grid::Coordinate;
use crate::margins::{Margin, MarginTable};

/// Result of loading a margin-table file.
#[derive(Debug)]
pub struct LoadResult {
    /// Effective table: built-in entries overlaid with the file's, or
    /// the file's alone when `replace: true`.
    pub table: MarginTable,

    /// Grid size declared by the file, if any.
    pub grid_size: Option<u8>,

    /// Non-fatal findings.
    pub warnings: Vec<LoadWarning>,
}

/// Warning produced while loading a margin-table file.
#[derive(Debug, Clone)]
pub struct LoadWarning {
    /// Warning message.
    pub message: String,

    /// Location within the file, if known.
    pub location: Option<String>,
}

/// Loads a margin-table file and merges it with the built-in table.
///
/// # Errors
///
/// Returns [`ConfigError::MissingFile`] if the path does not exist,
/// [`ConfigError::ParseError`] for malformed YAML,
/// [`ConfigError::InvalidValue`] for an unparseable margin string or a
/// zero grid size, and [`ConfigError::ValidationError`] when the file
/// defines the same cell twice.
pub fn load_margin_file(path: &Path) -> Result<LoadResult, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::MissingFile {
            path: path.to_path_buf(),
        });
    }

    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;

    let file: MarginFile =
        serde_yaml::from_str(&raw).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let grid_size = file.grid.and_then(|g| g.size);
    if grid_size == Some(0) {
        return Err(ConfigError::InvalidValue {
            field: "grid.size".to_string(),
            value: "0".to_string(),
            expected: "a dimension of at least 1".to_string(),
        });
    }

    let mut warnings = Vec::new();
    if file.margins.is_empty() {
        warnings.push(LoadWarning {
            message: "margin file defines no entries".to_string(),
            location: Some("margins".to_string()),
        });
    }

    let mut table = if file.replace {
        MarginTable::empty()
    } else {
        MarginTable::builtin()
    };

    let mut issues = Vec::new();
    let mut seen: HashSet<Coordinate> = HashSet::new();

    for (i, entry) in file.margins.iter().enumerate() {
        let cell = Coordinate::from(entry.cell);

        let margin: Margin =
            entry
                .margin
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    field: format!("margins[{i}].margin"),
                    value: entry.margin.clone(),
                    expected: "four comma-separated integers (\"L,T,R,B\")".to_string(),
                })?;

        if seen.insert(cell) {
            table.insert(cell, margin);
        } else {
            issues.push(ValidationIssue {
                path: format!("margins[{i}]"),
                message: format!("duplicate entry for cell {cell}"),
                severity: Severity::Error,
            });
        }
    }

    if !issues.is_empty() {
        return Err(ConfigError::ValidationError {
            path: path.display().to_string(),
            errors: issues,
        });
    }

    Ok(LoadResult {
        table,
        grid_size,
        warnings,
    })
}
