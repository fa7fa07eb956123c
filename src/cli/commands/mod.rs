//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod completions;
pub mod generate;
pub mod table;
pub mod validate;
pub mod version;

use std::path::Path;

use crate::cli::args::{Cli, Commands};
use crate::config::loader;
use crate::error::TappadGenError;
use crate::margins::MarginTable;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub fn dispatch(cli: Cli) -> Result<(), TappadGenError> {
    match cli.command {
        Commands::Generate(args) => generate::run(&args),
        Commands::Validate(args) => validate::run(&args),
        Commands::Table(args) => table::run(&args),
        Commands::Completions(args) => {
            completions::run(&args);
            Ok(())
        }
        Commands::Version(args) => {
            version::run(&args);
            Ok(())
        }
    }
}

/// Resolves the effective margin table: the built-in one, overlaid with
/// a margin file when given. Returns the table and the file's declared
/// grid size.
pub(crate) fn resolve_table(
    margins: Option<&Path>,
) -> Result<(MarginTable, Option<u8>), TappadGenError> {
    match margins {
        Some(path) => {
            tracing::info!(margins = %path.display(), "loading margin table");
            let result = loader::load_margin_file(path)?;

            for warning in &result.warnings {
                tracing::warn!(
                    location = warning.location.as_deref().unwrap_or("<unknown>"),
                    "{}",
                    warning.message
                );
            }

            Ok((result.table, result.grid_size))
        }
        None => Ok((MarginTable::builtin(), None)),
    }
}
