//! Dynamic-programming score and direction matrices.
//!
//! For sequences `A` (rows) and `B` (columns) both grids have shape
//! `(|A| + 1) × (|B| + 1)`. Row 0 and column 0 stand for the empty prefix.
//! Cell `(i, j)` holds the optimal score of aligning `A[..i]` with `B[..j]`
//! together with the set of predecessors achieving it.
//!
//! Filling is O(|A|·|B|) in time and space; the full direction grid is kept so
//! that every co-optimal path can be enumerated afterwards.

use std::fmt;
use std::ops::Index;

use crate::cost::CostModel;
use crate::direction::{Direction, DirectionMask};
use crate::error::Result;
use crate::objective::{AlignmentMode, Global, Local};
use crate::traits::{MatrixReporter, Objective};

/// A DP coordinate: `row` indexes A's prefix length, `col` indexes B's.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Diagonal index `row - col`.
    #[inline]
    pub fn diagonal(self) -> isize {
        self.row as isize - self.col as isize
    }

    /// Predecessor reached by stepping in `dir`.
    ///
    /// Callers must not step off the grid; border cells only carry the
    /// direction that stays inside it.
    #[inline]
    pub(crate) fn step(self, dir: Direction) -> Cell {
        match dir {
            Direction::Left => Cell::new(self.row, self.col - 1),
            Direction::Diagonal => Cell::new(self.row - 1, self.col - 1),
            Direction::Up => Cell::new(self.row - 1, self.col),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Dense row-major 2-D grid.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<V> {
    rows: usize,
    cols: usize,
    data: Vec<V>,
}

impl<V: Clone> Grid<V> {
    pub fn new(rows: usize, cols: usize, fill: V) -> Self {
        Self {
            rows,
            cols,
            data: vec![fill; rows * cols],
        }
    }
}

impl<V> Grid<V> {
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, cell: Cell) -> Option<&V> {
        if cell.row < self.rows && cell.col < self.cols {
            self.data.get(cell.row * self.cols + cell.col)
        } else {
            None
        }
    }

    #[inline]
    fn set(&mut self, cell: Cell, value: V) {
        let idx = cell.row * self.cols + cell.col;
        self.data[idx] = value;
    }

    /// One full row.
    pub fn row(&self, row: usize) -> &[V] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[V]> {
        (0..self.rows).map(move |r| self.row(r))
    }
}

impl<V> Index<Cell> for Grid<V> {
    type Output = V;

    #[inline]
    fn index(&self, cell: Cell) -> &V {
        &self.data[cell.row * self.cols + cell.col]
    }
}

pub type ScoreMatrix = Grid<f64>;
pub type DirectionMatrix = Grid<DirectionMask>;

/// Output of one matrix build: both grids plus the inputs they describe.
///
/// The matrices are never mutated after construction.
#[derive(Clone, Debug)]
pub struct AlignmentMatrix<'a, T> {
    a: &'a [T],
    b: &'a [T],
    costs: CostModel,
    mode: AlignmentMode,
    scores: ScoreMatrix,
    directions: DirectionMatrix,
    best: Cell,
    best_score: f64,
}

/// Build the score and direction matrices for `a` against `b`.
///
/// # Errors
/// Returns [`AlignError::InvalidCostModel`](crate::AlignError::InvalidCostModel)
/// if any cost is NaN or infinite. No other input is rejected; empty
/// sequences produce a border-only grid.
pub fn build_matrix<'a, T: PartialEq>(
    a: &'a [T],
    b: &'a [T],
    costs: &CostModel,
    mode: AlignmentMode,
) -> Result<AlignmentMatrix<'a, T>> {
    match mode {
        AlignmentMode::Global => AlignmentMatrix::build::<Global>(a, b, costs),
        AlignmentMode::Local => AlignmentMatrix::build::<Local>(a, b, costs),
    }
}

/// [`build_matrix`] followed by a call to `reporter` with the finished matrix.
pub fn build_matrix_reported<'a, T, R>(
    a: &'a [T],
    b: &'a [T],
    costs: &CostModel,
    mode: AlignmentMode,
    reporter: &mut R,
) -> Result<AlignmentMatrix<'a, T>>
where
    T: PartialEq,
    R: MatrixReporter<T> + ?Sized,
{
    let matrix = build_matrix(a, b, costs, mode)?;
    reporter.report(&matrix)?;
    Ok(matrix)
}

impl<'a, T: PartialEq> AlignmentMatrix<'a, T> {
    /// Fill both grids under objective `O`.
    pub fn build<O: Objective>(a: &'a [T], b: &'a [T], costs: &CostModel) -> Result<Self> {
        costs.validate()?;

        let rows = a.len() + 1;
        let cols = b.len() + 1;

        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("build_matrix", mode = %O::MODE, rows, cols);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut scores = Grid::new(rows, cols, 0.0f64);
        let mut directions = Grid::new(rows, cols, DirectionMask::NONE);

        directions.set(Cell::new(0, 0), DirectionMask::DIAGONAL);
        for i in 1..rows {
            let prev = scores[Cell::new(i - 1, 0)];
            scores.set(Cell::new(i, 0), O::column_border(prev, costs));
            directions.set(Cell::new(i, 0), DirectionMask::UP);
        }
        for j in 1..cols {
            let prev = scores[Cell::new(0, j - 1)];
            scores.set(Cell::new(0, j), O::row_border(prev, costs));
            directions.set(Cell::new(0, j), DirectionMask::LEFT);
        }

        let mut best = Cell::new(0, 0);
        let mut best_score = scores[best];

        for i in 1..rows {
            let sym_a = &a[i - 1];
            for j in 1..cols {
                let diagonal = scores[Cell::new(i - 1, j - 1)] + costs.pair(sym_a, &b[j - 1]);
                let left = scores[Cell::new(i, j - 1)] + costs.insertion;
                let up = scores[Cell::new(i - 1, j)] + costs.deletion;
                let score = O::combine(diagonal, left, up);

                // Independent checks: exact ties keep every achieving predecessor.
                let mut mask = DirectionMask::NONE;
                if score == left {
                    mask.insert(Direction::Left);
                }
                if score == diagonal {
                    mask.insert(Direction::Diagonal);
                }
                if score == up {
                    mask.insert(Direction::Up);
                }

                let cell = Cell::new(i, j);
                scores.set(cell, score);
                directions.set(cell, mask);

                if O::TRACKS_BEST && score > best_score {
                    best_score = score;
                    best = cell;
                }
            }
        }

        if !O::TRACKS_BEST {
            best = Cell::new(a.len(), b.len());
            best_score = scores[best];
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(best = %best, best_score, "matrix filled");

        Ok(Self {
            a,
            b,
            costs: *costs,
            mode: O::MODE,
            scores,
            directions,
            best,
            best_score,
        })
    }
}

impl<'a, T> AlignmentMatrix<'a, T> {
    pub fn seq_a(&self) -> &'a [T] {
        self.a
    }

    pub fn seq_b(&self) -> &'a [T] {
        self.b
    }

    pub fn costs(&self) -> &CostModel {
        &self.costs
    }

    pub fn mode(&self) -> AlignmentMode {
        self.mode
    }

    pub fn scores(&self) -> &ScoreMatrix {
        &self.scores
    }

    pub fn directions(&self) -> &DirectionMatrix {
        &self.directions
    }

    /// Number of rows, `|A| + 1`.
    pub fn rows(&self) -> usize {
        self.scores.rows()
    }

    /// Number of columns, `|B| + 1`.
    pub fn cols(&self) -> usize {
        self.scores.cols()
    }

    pub fn score(&self, cell: Cell) -> Option<f64> {
        self.scores.get(cell).copied()
    }

    pub fn direction(&self, cell: Cell) -> Option<DirectionMask> {
        self.directions.get(cell).copied()
    }

    /// Traceback start used when none is given: the bottom-right corner for
    /// global alignment, the first maximal cell (row-major) for local.
    pub fn default_start(&self) -> Cell {
        self.best
    }

    /// Optimal score recorded at [`default_start`](Self::default_start).
    pub fn best_score(&self) -> f64 {
        self.best_score
    }

    /// Every cell holding the local maximum, in row-major order.
    ///
    /// Each is a valid start for enumerating co-optimal local alignments.
    /// For global alignment this is just the bottom-right corner.
    pub fn optimal_starts(&self) -> Vec<Cell> {
        match self.mode {
            AlignmentMode::Global => vec![self.best],
            AlignmentMode::Local => {
                let mut cells = Vec::new();
                for (row, values) in self.scores.iter_rows().enumerate() {
                    for (col, &score) in values.iter().enumerate() {
                        if score == self.best_score {
                            cells.push(Cell::new(row, col));
                        }
                    }
                }
                cells
            }
        }
    }

    pub fn is_terminal(&self, cell: Cell) -> bool {
        self.mode.is_terminal(cell, self.scores[cell])
    }
}
