//! Exhaustive traceback over the direction matrix.
//!
//! Starting from a cell, the walker follows every set direction flag back to a
//! terminal cell, emitting one [`Alignment`] per distinct path. A cell with k
//! flags forks into k continuations, so the number of results grows
//! exponentially with the number of tied cells on optimal paths.
//!
//! The walk uses an explicit work stack instead of native recursion: depth is
//! bounded by `|A| + |B|` but never touches the call stack, and the caller can
//! cap the work with [`EnumerationLimits`]. Emission order is a depth-first
//! preorder expanding LEFT, then DIAGONAL, then UP at every fork, and is fully
//! deterministic.

use crate::cost::CostModel;
use crate::direction::Direction;
use crate::error::{AlignError, Result};
use crate::matrix::{AlignmentMatrix, Cell};

/// One concrete optimal alignment.
///
/// `top` is the strand of A, `bottom` the strand of B; both have the same
/// length and `None` marks a gap.
#[derive(Clone, Debug, PartialEq)]
pub struct Alignment<T> {
    pub top: Vec<Option<T>>,
    pub bottom: Vec<Option<T>>,
    /// Score accumulated along the path.
    pub score: f64,
    /// Terminal cell where the traceback stopped.
    pub start: Cell,
    /// Cell the traceback began from.
    pub end: Cell,
}

impl<T> Alignment<T> {
    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.top.len()
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_empty()
    }

    /// Relative offset `row - col` of the terminal cell.
    ///
    /// For a fragment (B) locally aligned against a template (A) this
    /// approximates where the fragment sits along the template.
    pub fn offset(&self) -> isize {
        self.start.diagonal()
    }

    /// Recompute the path cost column by column.
    pub fn recompute_score(&self, costs: &CostModel) -> f64
    where
        T: PartialEq,
    {
        self.top
            .iter()
            .zip(&self.bottom)
            .map(|column| match column {
                (Some(a), Some(b)) => costs.pair(a, b),
                (Some(_), None) => costs.deletion,
                (None, Some(_)) => costs.insertion,
                (None, None) => 0.0,
            })
            .sum()
    }
}

impl<T: Clone> Alignment<T> {
    /// Symbols of A consumed by this alignment, gaps removed.
    pub fn ungapped_top(&self) -> Vec<T> {
        self.top.iter().flatten().cloned().collect()
    }

    /// Symbols of B consumed by this alignment, gaps removed.
    pub fn ungapped_bottom(&self) -> Vec<T> {
        self.bottom.iter().flatten().cloned().collect()
    }

    /// Both strands with gaps replaced by `gap`.
    pub fn render(&self, gap: T) -> (Vec<T>, Vec<T>) {
        let fill = |strand: &[Option<T>]| -> Vec<T> {
            strand
                .iter()
                .map(|s| s.clone().unwrap_or_else(|| gap.clone()))
                .collect()
        };
        (fill(self.top.as_slice()), fill(self.bottom.as_slice()))
    }
}

impl Alignment<u8> {
    /// Render byte strands as text with `-` for gaps.
    pub fn to_strings(&self) -> (String, String) {
        let (top, bottom) = self.render(b'-');
        (
            String::from_utf8_lossy(&top).into_owned(),
            String::from_utf8_lossy(&bottom).into_owned(),
        )
    }
}

impl Alignment<char> {
    pub fn to_strings(&self) -> (String, String) {
        let (top, bottom) = self.render('-');
        (top.into_iter().collect(), bottom.into_iter().collect())
    }
}

/// Caps on enumeration work. `None` means unbounded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EnumerationLimits {
    /// Stop after emitting this many alignments.
    pub max_results: Option<usize>,
    /// Stop after popping this many work items from the stack.
    pub max_expansions: Option<usize>,
}

impl EnumerationLimits {
    pub const UNLIMITED: EnumerationLimits = EnumerationLimits {
        max_results: None,
        max_expansions: None,
    };

    pub fn with_max_results(mut self, n: usize) -> Self {
        self.max_results = Some(n);
        self
    }

    pub fn with_max_expansions(mut self, n: usize) -> Self {
        self.max_expansions = Some(n);
        self
    }
}

/// Pending traceback branch. Strands are stored end-first.
struct Frame<T> {
    cell: Cell,
    top: Vec<Option<T>>,
    bottom: Vec<Option<T>>,
}

/// Lazy iterator over co-optimal alignments.
///
/// Produced by [`enumerate_alignments`]; it cannot be restarted, build a new
/// one to walk again.
pub struct Alignments<'m, 'a, T> {
    matrix: &'m AlignmentMatrix<'a, T>,
    start: Cell,
    stack: Vec<Frame<T>>,
    limits: EnumerationLimits,
    emitted: usize,
    expansions: usize,
    truncated: bool,
}

/// Enumerate every optimal alignment ending at `start`.
///
/// `start` defaults to [`AlignmentMatrix::default_start`]: the bottom-right
/// corner for global alignment, the best-scoring cell for local alignment.
///
/// # Errors
/// Returns [`AlignError::StartOutOfBounds`] if `start` lies outside the
/// matrix.
pub fn enumerate_alignments<'m, 'a, T: Clone>(
    matrix: &'m AlignmentMatrix<'a, T>,
    start: Option<Cell>,
    limits: EnumerationLimits,
) -> Result<Alignments<'m, 'a, T>> {
    let start = start.unwrap_or_else(|| matrix.default_start());
    if start.row >= matrix.rows() || start.col >= matrix.cols() {
        return Err(AlignError::StartOutOfBounds {
            cell: start,
            rows: matrix.rows(),
            cols: matrix.cols(),
        });
    }
    Ok(Alignments::new(matrix, start, limits))
}

impl<'a, T: Clone> AlignmentMatrix<'a, T> {
    /// All optimal alignments from the default start, without limits.
    pub fn alignments(&self) -> Alignments<'_, 'a, T> {
        Alignments::new(self, self.default_start(), EnumerationLimits::UNLIMITED)
    }
}

impl<'m, 'a, T> Alignments<'m, 'a, T> {
    fn new(matrix: &'m AlignmentMatrix<'a, T>, start: Cell, limits: EnumerationLimits) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            mode = %matrix.mode(),
            start = %start,
            max_results = ?limits.max_results,
            max_expansions = ?limits.max_expansions,
            "enumerate_alignments"
        );

        let capacity = start.row + start.col;
        Alignments {
            matrix,
            start,
            stack: vec![Frame {
                cell: start,
                top: Vec::with_capacity(capacity),
                bottom: Vec::with_capacity(capacity),
            }],
            limits,
            emitted: 0,
            expansions: 0,
            truncated: false,
        }
    }

    /// Number of alignments yielded so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// True once a limit cut the enumeration short with work remaining.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    fn truncate(&mut self, reason: &'static str) {
        if !self.stack.is_empty() {
            self.truncated = true;
            self.stack.clear();
            #[cfg(feature = "tracing")]
            tracing::warn!(
                reason,
                emitted = self.emitted,
                expansions = self.expansions,
                "alignment enumeration truncated"
            );
            #[cfg(not(feature = "tracing"))]
            let _ = reason;
        }
    }
}

impl<'m, 'a, T: Clone> Iterator for Alignments<'m, 'a, T> {
    type Item = Alignment<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self
            .limits
            .max_results
            .is_some_and(|max| self.emitted >= max)
        {
            self.truncate("max_results");
            return None;
        }

        let a = self.matrix.seq_a();
        let b = self.matrix.seq_b();

        while let Some(frame) = self.stack.pop() {
            if self
                .limits
                .max_expansions
                .is_some_and(|max| self.expansions >= max)
            {
                self.stack.push(frame);
                self.truncate("max_expansions");
                return None;
            }
            self.expansions += 1;

            let Frame {
                cell,
                mut top,
                mut bottom,
            } = frame;

            if self.matrix.is_terminal(cell) {
                top.reverse();
                bottom.reverse();
                let scores = self.matrix.scores();
                self.emitted += 1;
                return Some(Alignment {
                    top,
                    bottom,
                    score: scores[self.start] - scores[cell],
                    start: cell,
                    end: self.start,
                });
            }

            let mask = self.matrix.directions()[cell];
            let forks: Vec<Direction> = mask.iter().collect();
            // Push in reverse so LEFT is expanded first.
            for (k, &dir) in forks.iter().enumerate().rev() {
                let (mut t, mut s) = if k == 0 {
                    (std::mem::take(&mut top), std::mem::take(&mut bottom))
                } else {
                    (top.clone(), bottom.clone())
                };
                match dir {
                    Direction::Left => {
                        t.push(None);
                        s.push(Some(b[cell.col - 1].clone()));
                    }
                    Direction::Diagonal => {
                        t.push(Some(a[cell.row - 1].clone()));
                        s.push(Some(b[cell.col - 1].clone()));
                    }
                    Direction::Up => {
                        t.push(Some(a[cell.row - 1].clone()));
                        s.push(None);
                    }
                }
                self.stack.push(Frame {
                    cell: cell.step(dir),
                    top: t,
                    bottom: s,
                });
            }
        }

        None
    }
}
