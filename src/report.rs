//! Tabular dumps of finished matrices.
//!
//! [`TableReporter`] writes the score grid and the direction grid as
//! tab-separated tables: a header row with B's symbols, then one row per
//! prefix of A led by its last symbol (blank for the empty prefix).

use std::fmt::Display;
use std::io::{self, Write};

use crate::matrix::{AlignmentMatrix, Grid};
use crate::traits::MatrixReporter;

/// Symbols that can label a table row or column.
pub trait SymbolLabel {
    fn label(&self) -> String;
}

impl SymbolLabel for u8 {
    fn label(&self) -> String {
        char::from(*self).to_string()
    }
}

impl SymbolLabel for char {
    fn label(&self) -> String {
        self.to_string()
    }
}

impl SymbolLabel for &str {
    fn label(&self) -> String {
        (*self).to_owned()
    }
}

impl SymbolLabel for String {
    fn label(&self) -> String {
        self.clone()
    }
}

pub struct TableReporter<W> {
    out: W,
}

impl<W: Write> TableReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_grid<T: SymbolLabel, V: Display>(
        &mut self,
        title: &str,
        a: &[T],
        b: &[T],
        grid: &Grid<V>,
    ) -> io::Result<()> {
        writeln!(self.out, "# {title}")?;
        write!(self.out, "\t")?;
        for sym in b {
            write!(self.out, "\t{}", sym.label())?;
        }
        writeln!(self.out)?;

        for (i, row) in grid.iter_rows().enumerate() {
            if i > 0 {
                write!(self.out, "{}", a[i - 1].label())?;
            }
            for value in row {
                write!(self.out, "\t{value}")?;
            }
            writeln!(self.out)?;
        }
        Ok(())
    }
}

impl<W: Write, T: SymbolLabel> MatrixReporter<T> for TableReporter<W> {
    fn report(&mut self, matrix: &AlignmentMatrix<'_, T>) -> io::Result<()> {
        let (a, b) = (matrix.seq_a(), matrix.seq_b());
        let mode = matrix.mode();
        self.write_grid(&format!("scores ({mode})"), a, b, matrix.scores())?;
        writeln!(self.out)?;
        self.write_grid(&format!("directions ({mode})"), a, b, matrix.directions())?;
        writeln!(self.out)?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::CostModel;
    use crate::matrix::build_matrix_reported;
    use crate::objective::AlignmentMode;

    #[test]
    fn writes_both_tables() {
        let mut reporter = TableReporter::new(Vec::new());
        build_matrix_reported(
            b"AC",
            b"A",
            &CostModel::edit_distance(),
            AlignmentMode::Global,
            &mut reporter,
        )
        .unwrap();
        let text = String::from_utf8(reporter.into_inner()).unwrap();
        let expected = "\
# scores (global)
\t\tA
\t0\t1
A\t1\t0
C\t2\t1

# directions (global)
\t\tA
\t2\t1
A\t4\t2
C\t4\t4

";
        assert_eq!(text, expected);
    }
}
