//! Margin-table coverage validation.

use crate::error::{Severity, ValidationIssue};
use crate::margins::MarginTable;

/// Checks a table against the n×n×n iteration space.
///
/// Missing cells are errors: the table is meant to be exhaustive by
/// construction. Entries outside the space are warnings: harmless for
/// generation, but usually a sign the declared grid size is wrong.
#[must_use]
pub fn validate_coverage(table: &MarginTable, n: u8) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for cell in table.missing_cells(n) {
        issues.push(ValidationIssue {
            path: format!("margins[{cell}]"),
            message: format!("no margin entry for cell {cell}"),
            severity: Severity::Error,
        });
    }

    for cell in table.surplus_cells(n) {
        issues.push(ValidationIssue {
            path: format!("margins[{cell}]"),
            message: format!("entry outside the {n}x{n}x{n} iteration space"),
            severity: Severity::Warning,
        });
    }

    issues
}
