//! Template-guided consensus assembly.
//!
//! Each fragment is locally aligned against a shared template. The diagonal
//! `row - col` of the cell where its best traceback reaches the zero floor
//! estimates where the fragment starts along the template. Fragments are
//! ordered by that offset and stitched left to right by maximal
//! suffix/prefix overlap.
//!
//! This is a greedy heuristic, not a rigorous assembler. Overlaps must be
//! exact (no mismatches are tolerated), overlap quality is not scored, and a
//! fragment placed in the wrong order is merged anyway. Short spurious repeats
//! at fragment ends can produce false overlaps.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::cost::CostModel;
use crate::enumerate::{enumerate_alignments, EnumerationLimits};
use crate::error::Result;
use crate::matrix::AlignmentMatrix;
use crate::objective::Local;

/// A fragment together with its estimated position on the template.
#[derive(Clone, Debug, PartialEq)]
pub struct Fragment<T> {
    pub sequence: Vec<T>,
    /// Relative offset `row - col` at the local traceback terminus.
    pub offset: isize,
    /// Best local alignment score against the template.
    pub score: f64,
    /// Position in the caller's input list.
    pub index: usize,
}

/// Work cap for the traceback that positions one fragment.
pub const PLACEMENT_EXPANSIONS: usize = 1 << 20;

/// Locally align `fragment` against `template` and derive its offset.
///
/// Every co-optimal traceback from the best cell is walked and the offset of
/// the last one emitted (LEFT, DIAGONAL, UP preorder) wins. If the walk hits
/// [`PLACEMENT_EXPANSIONS`] the last alignment emitted before the cut is used;
/// with nothing emitted the offset falls back to the best cell's diagonal.
pub fn place_fragment<T: PartialEq + Clone>(
    template: &[T],
    fragment: &[T],
    costs: &CostModel,
    index: usize,
) -> Result<Fragment<T>> {
    let matrix = AlignmentMatrix::build::<Local>(template, fragment, costs)?;
    let limits = EnumerationLimits::default().with_max_expansions(PLACEMENT_EXPANSIONS);
    let offset = enumerate_alignments(&matrix, None, limits)?
        .last()
        .map_or_else(|| matrix.default_start().diagonal(), |aln| aln.offset());

    #[cfg(feature = "tracing")]
    tracing::debug!(
        index,
        offset,
        score = matrix.best_score(),
        len = fragment.len(),
        "fragment placed"
    );

    Ok(Fragment {
        sequence: fragment.to_vec(),
        offset,
        score: matrix.best_score(),
        index,
    })
}

/// Sort by offset ascending; equal offsets keep input order.
pub fn order_fragments<T>(fragments: &mut [Fragment<T>]) {
    fragments.sort_by_key(|f| f.offset);
}

/// Stitch `y` onto `x` using the largest suffix of `x` equal to a prefix of `y`.
///
/// Scans split points `i` from 0 upward and accepts the first where `x[i..]`
/// equals `y[..x.len() - i]`; the result is `x[..i]` followed by all of `y`.
/// `i = x.len()` always matches (empty overlap), so two strings without a
/// genuine overlap are simply concatenated.
pub fn merge_overlap<T: PartialEq + Clone>(x: &[T], y: &[T]) -> Vec<T> {
    let split = (0..=x.len())
        .find(|&i| {
            let overlap = x.len() - i;
            overlap <= y.len() && x[i..] == y[..overlap]
        })
        .unwrap_or(x.len());

    let mut merged = Vec::with_capacity(split + y.len());
    merged.extend_from_slice(&x[..split]);
    merged.extend_from_slice(y);
    merged
}

/// Fold [`merge_overlap`] over already ordered sequences, left to right.
///
/// An empty input yields an empty consensus.
pub fn merge_ordered<T, I, S>(sequences: I) -> Vec<T>
where
    T: PartialEq + Clone,
    I: IntoIterator<Item = S>,
    S: AsRef<[T]>,
{
    let mut iter = sequences.into_iter();
    let Some(first) = iter.next() else {
        return Vec::new();
    };
    iter.fold(first.as_ref().to_vec(), |acc, next| {
        merge_overlap(&acc, next.as_ref())
    })
}

/// Result of an assembly run.
#[derive(Clone, Debug, PartialEq)]
pub struct Assembly<T> {
    pub consensus: Vec<T>,
    /// Fragments in merge order.
    pub fragments: Vec<Fragment<T>>,
}

/// Fragment assembler with a fixed local scoring scheme.
#[derive(Clone, Debug)]
pub struct Assembler {
    costs: CostModel,
}

impl Default for Assembler {
    fn default() -> Self {
        Self {
            costs: CostModel::smith_waterman(),
        }
    }
}

impl Assembler {
    /// Create an assembler; the cost model is validated up front.
    pub fn new(costs: CostModel) -> Result<Self> {
        costs.validate()?;
        Ok(Self { costs })
    }

    pub fn costs(&self) -> &CostModel {
        &self.costs
    }

    #[cfg(not(feature = "parallel"))]
    fn place_all<T, S>(&self, template: &[T], fragments: &[S]) -> Result<Vec<Fragment<T>>>
    where
        T: PartialEq + Clone,
        S: AsRef<[T]>,
    {
        fragments
            .iter()
            .enumerate()
            .map(|(index, f)| place_fragment(template, f.as_ref(), &self.costs, index))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn place_all<T, S>(&self, template: &[T], fragments: &[S]) -> Result<Vec<Fragment<T>>>
    where
        T: PartialEq + Clone + Send + Sync,
        S: AsRef<[T]> + Sync,
    {
        fragments
            .par_iter()
            .enumerate()
            .map(|(index, f)| place_fragment(template, f.as_ref(), &self.costs, index))
            .collect()
    }

    /// Place, order and merge `fragments` against `template`.
    #[cfg(not(feature = "parallel"))]
    pub fn assemble<T, S>(&self, template: &[T], fragments: &[S]) -> Result<Assembly<T>>
    where
        T: PartialEq + Clone,
        S: AsRef<[T]>,
    {
        let placed = self.place_all(template, fragments)?;
        Ok(self.finish(template, placed))
    }

    /// Place, order and merge `fragments` against `template`.
    ///
    /// Placement runs on the rayon pool; collection preserves input order so
    /// the result is identical to a serial run.
    #[cfg(feature = "parallel")]
    pub fn assemble<T, S>(&self, template: &[T], fragments: &[S]) -> Result<Assembly<T>>
    where
        T: PartialEq + Clone + Send + Sync,
        S: AsRef<[T]> + Sync,
    {
        let placed = self.place_all(template, fragments)?;
        Ok(self.finish(template, placed))
    }

    fn finish<T: PartialEq + Clone>(
        &self,
        template: &[T],
        mut placed: Vec<Fragment<T>>,
    ) -> Assembly<T> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "assemble",
            template_len = template.len(),
            fragments = placed.len()
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();
        #[cfg(not(feature = "tracing"))]
        let _ = template;

        order_fragments(&mut placed);
        let consensus = merge_ordered(placed.iter().map(|f| f.sequence.as_slice()));

        #[cfg(feature = "tracing")]
        tracing::info!(consensus_len = consensus.len(), "assembly merged");

        Assembly {
            consensus,
            fragments: placed,
        }
    }
}

/// Assemble with the default Smith–Waterman scoring and return the consensus.
#[cfg(not(feature = "parallel"))]
pub fn assemble_fragments<T, S>(template: &[T], fragments: &[S]) -> Result<Vec<T>>
where
    T: PartialEq + Clone,
    S: AsRef<[T]>,
{
    Ok(Assembler::default().assemble(template, fragments)?.consensus)
}

/// Assemble with the default Smith–Waterman scoring and return the consensus.
#[cfg(feature = "parallel")]
pub fn assemble_fragments<T, S>(template: &[T], fragments: &[S]) -> Result<Vec<T>>
where
    T: PartialEq + Clone + Send + Sync,
    S: AsRef<[T]> + Sync,
{
    Ok(Assembler::default().assemble(template, fragments)?.consensus)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_prefers_largest_overlap() {
        assert_eq!(merge_overlap(b"THEQU", b"QUICKB"), b"THEQUICKB");
        assert_eq!(merge_overlap(b"ABAB", b"ABABC"), b"ABABC");
        assert_eq!(merge_overlap(b"AAA", b"AAAA"), b"AAAA");
    }

    #[test]
    fn merge_without_overlap_concatenates() {
        assert_eq!(merge_overlap(b"ABC", b"XYZ"), b"ABCXYZ");
        assert_eq!(merge_overlap(b"", b"XYZ"), b"XYZ");
        assert_eq!(merge_overlap(b"ABC", b""), b"ABC");
    }

    #[test]
    fn merge_rejects_overlap_longer_than_next() {
        // x[1..] = "BCD" cannot match a 2-symbol y, only the empty overlap can.
        assert_eq!(merge_overlap(b"ABCD", b"BC"), b"ABCDBC");
    }

    #[test]
    fn merge_ordered_handles_empty_and_single() {
        let none: Vec<Vec<u8>> = Vec::new();
        assert!(merge_ordered::<u8, _, _>(none).is_empty());
        assert_eq!(merge_ordered::<u8, _, _>([b"ACGT".to_vec()]), b"ACGT");
        assert_eq!(
            merge_ordered::<u8, _, _>([&b"THEQU"[..], b"QUICKB", b"BROWNF"]),
            b"THEQUICKBROWNF"
        );
    }

    #[test]
    fn placement_offsets_follow_template() {
        let template = b"THEQUICKBROWNFOX";
        let costs = CostModel::smith_waterman();
        let quick = place_fragment(template, b"QUICKB", &costs, 0).unwrap();
        let brown = place_fragment(template, b"BROWNF", &costs, 1).unwrap();
        let the = place_fragment(template, b"THEQU", &costs, 2).unwrap();
        assert_eq!(quick.offset, 3);
        assert_eq!(brown.offset, 8);
        assert_eq!(the.offset, 0);
        assert_eq!(quick.score, 6.0);
    }

    #[test]
    fn ordering_is_stable_on_ties() {
        let mk = |offset, index| Fragment {
            sequence: vec![index as u8],
            offset,
            score: 0.0,
            index,
        };
        let mut fragments = vec![mk(2, 0), mk(1, 1), mk(2, 2), mk(1, 3)];
        order_fragments(&mut fragments);
        let order: Vec<_> = fragments.iter().map(|f| f.index).collect();
        assert_eq!(order, vec![1, 3, 0, 2]);
    }

    #[test]
    fn assembles_quick_brown_fox() {
        let fragments = ["QUICKB", "BROWNF", "THEQU"];
        let consensus = assemble_fragments(b"THEQUICKBROWNFOX", &fragments.map(str::as_bytes))
            .unwrap();
        assert_eq!(consensus, b"THEQUICKBROWNF");
    }

    #[test]
    fn rejects_invalid_costs() {
        assert!(Assembler::new(CostModel::new(-1.0, -1.0, f64::NEG_INFINITY, 1.0)).is_err());
    }
}
