//! Error types for algorithm operations

use std::fmt;

/// Main error type for all algorithm operations
///
/// Every variant marks a precondition violation or a cross-check failure,
/// never a transient condition. There is no retry path: a hidden triangle
/// being touched or a count disagreement is a logic defect and surfaces
/// immediately.
#[derive(Debug)]
pub enum AlgorithmError {
    /// Triangle index falls outside the fixed grid
    IndexOutOfBounds {
        /// The invalid triangle index
        index: usize,
        /// Number of triangles in the grid
        triangle_count: usize,
    },

    /// Triangle is hidden and cannot be queried or hidden again
    HiddenTriangle {
        /// The hidden triangle index
        index: usize,
    },

    /// Forcing-pivot count disagrees with the brute-force reference count
    CountMismatch {
        /// Result of the forcing-pivot search
        forcing: u64,
        /// Result of the reference enumeration
        reference: u64,
    },
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds {
                index,
                triangle_count,
            } => {
                write!(
                    f,
                    "Triangle index {index} is out of bounds (grid holds {triangle_count} triangles)"
                )
            }
            Self::HiddenTriangle { index } => {
                write!(f, "Triangle {index} is hidden")
            }
            Self::CountMismatch { forcing, reference } => {
                write!(
                    f,
                    "Forcing-pivot count {forcing} disagrees with reference count {reference}"
                )
            }
        }
    }
}

impl std::error::Error for AlgorithmError {}

/// Convenience type alias for algorithm results
pub type Result<T> = std::result::Result<T, AlgorithmError>;
