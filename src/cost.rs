//! Linear edit cost model shared by both alignment objectives.
//!
//! The same four numbers mean different things depending on the objective:
//! - GLOBAL minimizes, so all four are penalties (typically non-negative, with
//!   `match_score = 0`).
//! - LOCAL maximizes with a zero floor, so `match_score` is a positive reward
//!   and the remaining three are negative.

use serde::{Deserialize, Serialize};

use crate::error::{AlignError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CostModel {
    /// Cost of consuming a symbol of B against a gap (LEFT move).
    pub insertion: f64,
    /// Cost of consuming a symbol of A against a gap (UP move).
    pub deletion: f64,
    /// Cost of pairing two different symbols (DIAGONAL move).
    pub substitution: f64,
    /// Cost of pairing two equal symbols (DIAGONAL move).
    #[serde(rename = "match")]
    pub match_score: f64,
}

impl CostModel {
    pub fn new(insertion: f64, deletion: f64, substitution: f64, match_score: f64) -> Self {
        Self {
            insertion,
            deletion,
            substitution,
            match_score,
        }
    }

    /// Unit edit distance: every edit costs 1, matches are free.
    pub fn edit_distance() -> Self {
        Self::new(1.0, 1.0, 1.0, 0.0)
    }

    /// Classic Smith–Waterman similarity scoring: +1 match, -3 mismatch, -1 gap.
    pub fn smith_waterman() -> Self {
        Self::new(-1.0, -1.0, -3.0, 1.0)
    }

    /// Reject NaN and infinite parameters.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("insertion", self.insertion),
            ("deletion", self.deletion),
            ("substitution", self.substitution),
            ("match", self.match_score),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(AlignError::InvalidCostModel { field, value });
            }
        }
        Ok(())
    }

    /// Cost of a diagonal step pairing `a` with `b`.
    #[inline]
    pub fn pair<T: PartialEq>(&self, a: &T, b: &T) -> f64 {
        if a == b {
            self.match_score
        } else {
            self.substitution
        }
    }
}

impl Default for CostModel {
    fn default() -> Self {
        Self::edit_distance()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        assert!(CostModel::edit_distance().validate().is_ok());
        assert!(CostModel::smith_waterman().validate().is_ok());
    }

    #[test]
    fn rejects_non_finite_fields() {
        let mut costs = CostModel::edit_distance();
        costs.substitution = f64::INFINITY;
        match costs.validate() {
            Err(AlignError::InvalidCostModel { field, .. }) => assert_eq!(field, "substitution"),
            other => panic!("unexpected {other:?}"),
        }

        let costs = CostModel::new(1.0, f64::NAN, 1.0, 0.0);
        match costs.validate() {
            Err(AlignError::InvalidCostModel { field, .. }) => assert_eq!(field, "deletion"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn pair_distinguishes_match_and_substitution() {
        let costs = CostModel::smith_waterman();
        assert_eq!(costs.pair(&b'A', &b'A'), 1.0);
        assert_eq!(costs.pair(&b'A', &b'C'), -3.0);
    }
}
