use crate::cost::CostModel;
use crate::enumerate::{enumerate_alignments, Alignment, Alignments, EnumerationLimits};
use crate::error::Result;
use crate::matrix::{build_matrix, build_matrix_reported, AlignmentMatrix, Cell};
use crate::objective::AlignmentMode;
use crate::traits::MatrixReporter;

/// A validated alignment configuration: objective, costs and enumeration caps.
#[derive(Clone, Debug)]
pub struct Aligner {
    costs: CostModel,
    mode: AlignmentMode,
    limits: EnumerationLimits,
}

impl Aligner {
    /// Create an aligner with no enumeration limits.
    pub fn new(costs: CostModel, mode: AlignmentMode) -> Result<Self> {
        AlignerBuilder::new(mode).costs(costs).build()
    }

    pub fn builder(mode: AlignmentMode) -> AlignerBuilder {
        AlignerBuilder::new(mode)
    }

    /// Global alignment under unit edit distance.
    pub fn global() -> Self {
        Self {
            costs: CostModel::edit_distance(),
            mode: AlignmentMode::Global,
            limits: EnumerationLimits::UNLIMITED,
        }
    }

    /// Local alignment under Smith–Waterman scoring.
    pub fn local() -> Self {
        Self {
            costs: CostModel::smith_waterman(),
            mode: AlignmentMode::Local,
            limits: EnumerationLimits::UNLIMITED,
        }
    }

    pub fn costs(&self) -> &CostModel {
        &self.costs
    }

    pub fn mode(&self) -> AlignmentMode {
        self.mode
    }

    pub fn limits(&self) -> EnumerationLimits {
        self.limits
    }

    pub fn build_matrix<'a, T: PartialEq>(
        &self,
        a: &'a [T],
        b: &'a [T],
    ) -> Result<AlignmentMatrix<'a, T>> {
        build_matrix(a, b, &self.costs, self.mode)
    }

    pub fn build_matrix_reported<'a, T, R>(
        &self,
        a: &'a [T],
        b: &'a [T],
        reporter: &mut R,
    ) -> Result<AlignmentMatrix<'a, T>>
    where
        T: PartialEq,
        R: MatrixReporter<T> + ?Sized,
    {
        build_matrix_reported(a, b, &self.costs, self.mode, reporter)
    }

    /// Enumerate under this aligner's limits.
    pub fn alignments<'m, 'a, T: Clone>(
        &self,
        matrix: &'m AlignmentMatrix<'a, T>,
        start: Option<Cell>,
    ) -> Result<Alignments<'m, 'a, T>> {
        enumerate_alignments(matrix, start, self.limits)
    }

    /// Build the matrix and collect every co-optimal alignment from the
    /// default start, subject to the configured limits.
    pub fn align<T: PartialEq + Clone>(&self, a: &[T], b: &[T]) -> Result<Vec<Alignment<T>>> {
        let matrix = self.build_matrix(a, b)?;
        Ok(self.alignments(&matrix, None)?.collect())
    }
}

/// Builder for [`Aligner`]; costs default to the conventional preset for the
/// chosen mode.
pub struct AlignerBuilder {
    mode: AlignmentMode,
    costs: Option<CostModel>,
    limits: EnumerationLimits,
}

impl AlignerBuilder {
    pub fn new(mode: AlignmentMode) -> Self {
        Self {
            mode,
            costs: None,
            limits: EnumerationLimits::UNLIMITED,
        }
    }
    pub fn costs(mut self, costs: CostModel) -> Self {
        self.costs = Some(costs);
        self
    }
    pub fn limits(mut self, limits: EnumerationLimits) -> Self {
        self.limits = limits;
        self
    }
    pub fn max_alignments(mut self, n: usize) -> Self {
        self.limits.max_results = Some(n);
        self
    }
    pub fn max_expansions(mut self, n: usize) -> Self {
        self.limits.max_expansions = Some(n);
        self
    }
    pub fn build(self) -> Result<Aligner> {
        let costs = match self.costs {
            Some(c) => c,
            None => match self.mode {
                AlignmentMode::Global => CostModel::edit_distance(),
                AlignmentMode::Local => CostModel::smith_waterman(),
            },
        };
        costs.validate()?;
        Ok(Aligner {
            costs,
            mode: self.mode,
            limits: self.limits,
        })
    }
}
