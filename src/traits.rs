//! Core trait definitions for the alignment engine.
//!
//! Global and local alignment share one matrix-filling loop and one traceback
//! walker. What differs between them is captured by [`Objective`]:
//! - how the empty-prefix border (row 0 and column 0) is initialized,
//! - how the three candidate predecessors are combined into a cell score,
//! - which cells terminate a traceback,
//! - whether the best-scoring cell must be tracked while filling.
//!
//! [`MatrixReporter`] is the inspection hook invoked once a matrix is complete.
//! It receives a shared borrow only, so a reporter can never alter the
//! matrices that enumeration later walks.

use crate::cost::CostModel;
use crate::matrix::{AlignmentMatrix, Cell};
use crate::objective::AlignmentMode;

/// Strategy describing one alignment objective.
///
/// Implementations are zero-sized markers; the engine is monomorphized over
/// them so the inner loop carries no per-cell dispatch.
pub trait Objective {
    /// Runtime tag for this objective, stored in the built matrix.
    const MODE: AlignmentMode;

    /// Whether the filler must remember the best-scoring cell.
    ///
    /// Local alignment starts its traceback at the maximum; global alignment
    /// always starts at the bottom-right corner.
    const TRACKS_BEST: bool;

    /// Score of border cell `(i, 0)` given the score of `(i - 1, 0)`.
    fn column_border(prev: f64, costs: &CostModel) -> f64;

    /// Score of border cell `(0, j)` given the score of `(0, j - 1)`.
    fn row_border(prev: f64, costs: &CostModel) -> f64;

    /// Combine the three candidate scores into the optimum for an inner cell.
    fn combine(diagonal: f64, left: f64, up: f64) -> f64;

    /// Whether traceback stops at `cell` holding `score`.
    fn is_terminal(cell: Cell, score: f64) -> bool;
}

/// Hook receiving a finished matrix pair, e.g. to print it for inspection.
///
/// Any closure `FnMut(&AlignmentMatrix<T>) -> io::Result<()>` is a reporter.
pub trait MatrixReporter<T> {
    fn report(&mut self, matrix: &AlignmentMatrix<'_, T>) -> std::io::Result<()>;
}

impl<T, F> MatrixReporter<T> for F
where
    F: FnMut(&AlignmentMatrix<'_, T>) -> std::io::Result<()>,
{
    fn report(&mut self, matrix: &AlignmentMatrix<'_, T>) -> std::io::Result<()> {
        self(matrix)
    }
}
