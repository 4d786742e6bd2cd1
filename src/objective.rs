//! The two alignment objectives.
//!
//! [`Global`] is Needleman–Wunsch style edit-cost minimization over the full
//! length of both sequences. [`Local`] is Smith–Waterman style similarity
//! maximization floored at zero, so either sequence may contribute only a
//! substring.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cost::CostModel;
use crate::matrix::Cell;
use crate::traits::Objective;

/// Runtime selector for an objective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignmentMode {
    /// Minimize total edit cost; traceback ends at (0, 0).
    Global,
    /// Maximize similarity with a zero floor; traceback ends at any 0 cell.
    Local,
}

impl AlignmentMode {
    /// Terminal predicate for this mode.
    #[inline]
    pub fn is_terminal(self, cell: Cell, score: f64) -> bool {
        match self {
            AlignmentMode::Global => Global::is_terminal(cell, score),
            AlignmentMode::Local => Local::is_terminal(cell, score),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AlignmentMode::Global => "global",
            AlignmentMode::Local => "local",
        }
    }
}

impl fmt::Display for AlignmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlignmentMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "global" | "nw" => Ok(AlignmentMode::Global),
            "local" | "sw" => Ok(AlignmentMode::Local),
            other => Err(format!("unknown alignment mode '{other}' (expected global|local)")),
        }
    }
}

/// Minimize edit cost over both full sequences.
#[derive(Clone, Copy, Debug, Default)]
pub struct Global;

impl Objective for Global {
    const MODE: AlignmentMode = AlignmentMode::Global;
    const TRACKS_BEST: bool = false;

    #[inline]
    fn column_border(prev: f64, costs: &CostModel) -> f64 {
        prev + costs.deletion
    }

    #[inline]
    fn row_border(prev: f64, costs: &CostModel) -> f64 {
        prev + costs.insertion
    }

    #[inline]
    fn combine(diagonal: f64, left: f64, up: f64) -> f64 {
        diagonal.min(left).min(up)
    }

    #[inline]
    fn is_terminal(cell: Cell, _score: f64) -> bool {
        cell.row == 0 && cell.col == 0
    }
}

/// Maximize similarity, never dropping below zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct Local;

impl Objective for Local {
    const MODE: AlignmentMode = AlignmentMode::Local;
    const TRACKS_BEST: bool = true;

    #[inline]
    fn column_border(_prev: f64, _costs: &CostModel) -> f64 {
        0.0
    }

    #[inline]
    fn row_border(_prev: f64, _costs: &CostModel) -> f64 {
        0.0
    }

    #[inline]
    fn combine(diagonal: f64, left: f64, up: f64) -> f64 {
        0.0f64.max(diagonal).max(left).max(up)
    }

    #[inline]
    fn is_terminal(_cell: Cell, score: f64) -> bool {
        score == 0.0
    }
}
