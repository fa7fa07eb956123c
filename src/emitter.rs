//! The generate() pass: walk the grid, render each cell, write it out.
//!
//! Emission is a single synchronous pass in grid order. Coverage is
//! checked before any byte is written so a missing table entry aborts the
//! run with a diagnostic naming the cell instead of producing a truncated
//! document.

use std::io::Write;

use crate::error::EmitError;
use crate::grid::coordinates;
use crate::margins::MarginTable;
use crate::markup::render_block;

/// Emits tappad markup blocks for every cell of an n×n×n grid.
#[derive(Debug, Clone, Copy)]
pub struct Emitter<'a> {
    table: &'a MarginTable,
    n: u8,
}

impl<'a> Emitter<'a> {
    /// Creates an emitter over `table` for an n×n×n grid.
    #[must_use]
    pub const fn new(table: &'a MarginTable, n: u8) -> Self {
        Self { table, n }
    }

    /// Verifies that the table covers the whole iteration space.
    ///
    /// # Errors
    ///
    /// Returns [`EmitError::MissingMargin`] naming the first uncovered
    /// cell in emission order.
    pub fn check_coverage(&self) -> Result<(), EmitError> {
        match self.table.missing_cells(self.n).first() {
            Some(&cell) => Err(EmitError::MissingMargin { cell }),
            None => Ok(()),
        }
    }

    /// Lazy sequence of rendered blocks in emission order.
    ///
    /// The sequence is finite (n³ elements) and not resumable; re-running
    /// the generation is the only way to start over.
    pub fn blocks(&self) -> impl Iterator<Item = Result<String, EmitError>> + 'a {
        let table = self.table;
        coordinates(self.n).map(move |cell| {
            table
                .get(cell)
                .map(|&margin| render_block(cell, margin))
                .ok_or(EmitError::MissingMargin { cell })
        })
    }

    /// Writes every block to `out` and returns the number written.
    ///
    /// # Errors
    ///
    /// Returns [`EmitError::MissingMargin`] if the table does not cover
    /// the grid (checked before anything is written), or
    /// [`EmitError::Io`] if the write fails.
    pub fn emit<W: Write>(&self, out: &mut W) -> Result<usize, EmitError> {
        self.check_coverage()?;

        let mut written = 0;
        for block in self.blocks() {
            out.write_all(block?.as_bytes())?;
            written += 1;
            tracing::trace!(block = written, "tappad rendered");
        }

        Ok(written)
    }

    /// Renders the whole document into a single string.
    ///
    /// # Errors
    ///
    /// Returns [`EmitError::MissingMargin`] if the table does not cover
    /// the grid.
    pub fn emit_to_string(&self) -> Result<String, EmitError> {
        self.check_coverage()?;
        self.blocks().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Coordinate;
    use crate::margins::Margin;

    #[test]
    fn test_default_grid_emits_27_blocks() {
        let table = MarginTable::builtin();
        let emitter = Emitter::new(&table, 3);

        let mut buf = Vec::new();
        let written = emitter.emit(&mut buf).unwrap();
        assert_eq!(written, 27);

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.matches("<!-- TapPad ").count(), 27);
        assert_eq!(text.matches("<Rectangle Tap=").count(), 27);
    }

    #[test]
    fn test_blocks_in_emission_order() {
        let table = MarginTable::builtin();
        let emitter = Emitter::new(&table, 3);

        let blocks: Vec<String> = emitter.blocks().collect::<Result<_, _>>().unwrap();
        assert_eq!(blocks.len(), 27);
        assert!(blocks[0].contains("<!-- TapPad 0,0,0 -->"));
        assert!(blocks[1].contains("<!-- TapPad 0,0,1 -->"));
        assert!(blocks[3].contains("<!-- TapPad 0,1,0 -->"));
        assert!(blocks[26].contains("<!-- TapPad 2,2,2 -->"));
    }

    #[test]
    fn test_literal_margins_survive_to_output() {
        let table = MarginTable::builtin();
        let text = Emitter::new(&table, 3).emit_to_string().unwrap();
        assert!(text.contains(r#"Margin="40,402,0,0""#));
        assert!(text.contains(r#"Margin="206,70,0,0""#));
        assert!(text.contains(r#"Margin="364,25,0,0""#));
    }

    #[test]
    fn test_output_is_idempotent() {
        let table = MarginTable::builtin();
        let emitter = Emitter::new(&table, 3);
        assert_eq!(
            emitter.emit_to_string().unwrap(),
            emitter.emit_to_string().unwrap()
        );
    }

    #[test]
    fn test_smaller_grid_emits_prefix() {
        let table = MarginTable::builtin();
        let text = Emitter::new(&table, 2).emit_to_string().unwrap();
        assert_eq!(text.matches("<!-- TapPad ").count(), 8);
        assert!(text.contains("<!-- TapPad 1,1,1 -->"));
        assert!(!text.contains("<!-- TapPad 2,"));
    }

    #[test]
    fn test_uncovered_grid_fails_before_writing() {
        let table = MarginTable::builtin();
        let emitter = Emitter::new(&table, 4);

        let mut buf = Vec::new();
        let err = emitter.emit(&mut buf).unwrap_err();
        match err {
            EmitError::MissingMargin { cell } => {
                assert_eq!(cell, Coordinate::new(0, 0, 3));
            }
            other => panic!("expected MissingMargin, got {other}"),
        }
        assert!(buf.is_empty(), "nothing may be written on coverage failure");
    }

    #[test]
    fn test_extended_table_covers_larger_grid() {
        let mut table = MarginTable::builtin();
        for cell in crate::grid::coordinates(4) {
            if table.get(cell).is_none() {
                table.insert(cell, Margin::new(0, 0, 0, 0));
            }
        }

        let mut buf: Vec<u8> = Vec::new();
        let written = Emitter::new(&table, 4).emit(&mut buf).unwrap();
        assert_eq!(written, 64);
        assert!(!buf.is_empty());
    }

    #[test]
    fn test_empty_table_fails_on_origin() {
        let table = MarginTable::empty();
        let err = Emitter::new(&table, 1).emit_to_string().unwrap_err();
        assert_eq!(err.to_string(), "no margin entry for tappad 0,0,0");
    }
}
