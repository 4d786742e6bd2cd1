//! Error kinds raised by the alignment core.
//!
//! The core is total over well-formed inputs. It fails only on a cost model
//! that cannot be summed (NaN or infinite values) or on a traceback start cell
//! outside the matrix. Reporter sinks may also fail, and their I/O errors are
//! passed through untouched.

use thiserror::Error;

use crate::matrix::Cell;

#[derive(Debug, Error)]
pub enum AlignError {
    /// A cost parameter was NaN or infinite.
    #[error("invalid cost model: `{field}` must be a finite number, got {value}")]
    InvalidCostModel { field: &'static str, value: f64 },

    /// An explicit traceback start does not address a matrix cell.
    #[error("start cell {cell} outside {rows}x{cols} matrix")]
    StartOutOfBounds { cell: Cell, rows: usize, cols: usize },

    /// A [`MatrixReporter`](crate::traits::MatrixReporter) failed to write.
    #[error("matrix report failed: {0}")]
    Report(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AlignError>;

#[cfg(test)]
mod tests {
    use super::AlignError;

    #[test]
    fn invalid_cost_model_names_field() {
        let err = AlignError::InvalidCostModel {
            field: "deletion",
            value: f64::NAN,
        };
        let msg = err.to_string();
        assert!(msg.contains("`deletion`"), "{msg}");
        assert!(msg.contains("NaN"), "{msg}");
    }

    #[test]
    fn start_out_of_bounds_names_cell_and_shape() {
        let err = AlignError::StartOutOfBounds {
            cell: crate::matrix::Cell::new(5, 0),
            rows: 2,
            cols: 2,
        };
        assert_eq!(err.to_string(), "start cell (5, 0) outside 2x2 matrix");
    }

    #[test]
    fn io_errors_convert_into_report() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: AlignError = io.into();
        assert!(matches!(err, AlignError::Report(_)));
    }
}
