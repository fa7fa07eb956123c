//! `generate` command handler.
//!
//! Emits the tappad markup document to stdout or a file.

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::cli::args::GenerateArgs;
use crate::emitter::Emitter;
use crate::error::TappadGenError;
use crate::grid::{DEFAULT_GRID_SIZE, cell_count};

/// Execute `generate`.
///
/// # Errors
///
/// Returns a config error if the margin file cannot be loaded, an
/// emission error if the table does not cover the grid, or an I/O error
/// if the output cannot be written.
pub fn run(args: &GenerateArgs) -> Result<(), TappadGenError> {
    let (table, file_size) = super::resolve_table(args.margins.as_deref())?;
    let n = args.n.or(file_size).unwrap_or(DEFAULT_GRID_SIZE);

    tracing::info!(n, cells = cell_count(n), "generating tappad markup");

    let emitter = Emitter::new(&table, n);

    let written = if let Some(ref path) = args.output {
        let file = File::create(path)?;
        let mut out = BufWriter::new(file);
        let written = emitter.emit(&mut out)?;
        out.flush()?;
        tracing::info!(output = %path.display(), blocks = written, "document written");
        written
    } else {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        emitter.emit(&mut lock)?
    };

    tracing::debug!(blocks = written, "generation complete");
    Ok(())
}
