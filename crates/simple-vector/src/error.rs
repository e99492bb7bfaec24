//! Vector-specific error types.

use std::error::Error;
use std::fmt;

/// Recoverable errors reported by [`SimpleVector`](crate::SimpleVector).
///
/// Allocation failure and contract violations (positions past the end
/// passed to `insert`, `erase` or unchecked indexing) are not represented
/// here; they abort or panic at the call site.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VectorError {
    /// Checked access at an index not below the logical size.
    OutOfRange {
        /// The requested index.
        index: usize,
        /// Logical size of the vector at the time of the call.
        size: usize,
    },
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, size } => {
                write!(f, "index {index} out of range for vector of size {size}")
            }
        }
    }
}

impl Error for VectorError {}
