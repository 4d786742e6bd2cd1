//! Exhaustive co-optimal pairwise alignment.
//!
//! This crate computes optimal alignments between two symbol sequences with a
//! full dynamic-programming table and enumerates *every* alignment achieving
//! the optimum, not just one.
//!
//! ## Core idea
//! 1. [`build_matrix`] fills a score grid and a per-cell direction bitmask
//!    (LEFT / DIAGONAL / UP) under one of two objectives:
//!    - [`AlignmentMode::Global`]: minimize total edit cost over both full
//!      sequences,
//!    - [`AlignmentMode::Local`]: maximize similarity floored at zero, so each
//!      sequence may contribute only a substring.
//! 2. [`enumerate_alignments`] walks the direction grid back from a start cell
//!    to a terminal cell, forking at every tie. The walk runs on an explicit
//!    stack and accepts [`EnumerationLimits`] for bounded latency.
//! 3. [`assemble_fragments`] locally aligns fragments against a template,
//!    orders them by the diagonal where their alignment begins, and stitches
//!    them by maximal suffix/prefix overlap into one consensus.
//!
//! ## Quick start
//! ```
//! use dp_align::{build_matrix, AlignmentMode, CostModel};
//!
//! let matrix = build_matrix(
//!     b"TGCATAT",
//!     b"ATCCGAT",
//!     &CostModel::edit_distance(),
//!     AlignmentMode::Global,
//! )
//! .unwrap();
//! assert_eq!(matrix.best_score(), 4.0);
//! assert_eq!(matrix.alignments().count(), 4);
//! ```
//!
//! Any `PartialEq` symbol type works; byte strings are the common case.
//!
//! ## Features
//! - `tracing`: spans and events around matrix builds, enumeration and assembly.
//! - `parallel`: place assembly fragments on the rayon pool.
//! - `cli`: the `dp-align` command-line binary.

pub mod assembly;
pub mod builder;
pub mod cost;
pub mod direction;
pub mod enumerate;
pub mod error;
pub mod input;
pub mod matrix;
pub mod objective;
pub mod report;
pub mod traits;

pub use crate::assembly::{assemble_fragments, merge_overlap, Assembler, Assembly, Fragment};
pub use crate::builder::{Aligner, AlignerBuilder};
pub use crate::cost::CostModel;
pub use crate::direction::{Direction, DirectionMask};
pub use crate::enumerate::{enumerate_alignments, Alignment, Alignments, EnumerationLimits};
pub use crate::error::{AlignError, Result};
pub use crate::matrix::{build_matrix, build_matrix_reported, AlignmentMatrix, Cell};
pub use crate::objective::{AlignmentMode, Global, Local};
pub use crate::report::TableReporter;
pub use crate::traits::{MatrixReporter, Objective};
