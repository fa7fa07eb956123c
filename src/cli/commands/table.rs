//! `table` command handler.
//!
//! Prints the effective margin table, sorted in emission order.

use crate::cli::args::{OutputFormat, TableArgs};
use crate::error::TappadGenError;
use crate::grid::DEFAULT_GRID_SIZE;

/// Execute `table`.
///
/// # Errors
///
/// Returns a config error if the margin file cannot be loaded, or a
/// JSON error if serialization fails.
pub fn run(args: &TableArgs) -> Result<(), TappadGenError> {
    let (table, file_size) = super::resolve_table(args.margins.as_deref())?;
    let n = args.n.or(file_size).unwrap_or(DEFAULT_GRID_SIZE);

    let mut entries: Vec<_> = table.iter().map(|(&cell, &margin)| (cell, margin)).collect();
    entries.sort_unstable_by_key(|&(cell, _)| cell);

    match args.format {
        OutputFormat::Human => {
            let mut surplus = 0;
            for &(cell, margin) in &entries {
                let marker = if cell.in_grid(n) { ' ' } else { '*' };
                println!("{marker} {cell}  {margin}");
                if !cell.in_grid(n) {
                    surplus += 1;
                }
            }
            println!("{} entries", entries.len());
            if surplus > 0 {
                println!("* {surplus} outside the {n}x{n}x{n} grid");
            }
        }
        OutputFormat::Json => {
            let payload: Vec<serde_json::Value> = entries
                .iter()
                .map(|&(cell, margin)| {
                    serde_json::json!({
                        "cell": cell.to_string(),
                        "margin": margin.to_string(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
    }

    Ok(())
}
