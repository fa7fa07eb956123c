//! `validate` command handler.
//!
//! Checks margin-table coverage against the iteration space without
//! emitting any markup.

use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::config::validation::validate_coverage;
use crate::error::{ConfigError, Severity, TappadGenError};
use crate::grid::DEFAULT_GRID_SIZE;

/// Execute `validate`.
///
/// # Errors
///
/// Returns a config error if the margin file cannot be loaded, or a
/// validation error when the table has errors (or, under `--strict`,
/// warnings).
pub fn run(args: &ValidateArgs) -> Result<(), TappadGenError> {
    let (table, file_size) = super::resolve_table(args.margins.as_deref())?;
    let n = args.n.or(file_size).unwrap_or(DEFAULT_GRID_SIZE);

    tracing::info!(n, entries = table.len(), "validating margin table");

    let issues = validate_coverage(&table, n);
    let errors = issues
        .iter()
        .filter(|i| i.severity == Severity::Error)
        .count();
    let warnings = issues.len() - errors;

    match args.format {
        OutputFormat::Human => {
            for issue in &issues {
                println!("{issue}");
            }
            if issues.is_empty() {
                println!("margin table covers the {n}x{n}x{n} grid");
            } else {
                println!("{errors} error(s), {warnings} warning(s)");
            }
        }
        OutputFormat::Json => {
            let issues_json: Vec<serde_json::Value> = issues
                .iter()
                .map(|i| {
                    serde_json::json!({
                        "severity": match i.severity {
                            Severity::Error => "error",
                            Severity::Warning => "warning",
                        },
                        "path": i.path,
                        "message": i.message,
                    })
                })
                .collect();

            let payload = serde_json::json!({
                "grid": n,
                "entries": table.len(),
                "errors": errors,
                "warnings": warnings,
                "issues": issues_json,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
    }

    if errors > 0 || (args.strict && warnings > 0) {
        let source = args.margins.as_ref().map_or_else(
            || "<builtin>".to_string(),
            |path| path.display().to_string(),
        );
        return Err(ConfigError::ValidationError {
            path: source,
            errors: issues,
        }
        .into());
    }

    Ok(())
}
