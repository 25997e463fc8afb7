//! The `Error` type returned by the few fallible operations in the crate.
//!
//! Every error is detected locally and handed straight back to the caller;
//! none of them is worth retrying.

use thiserror::Error;

/// `Result` alias used by `range`, `range_with_step`, `nth` and `from_any_slice`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the validating operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `range` was given a `start` greater than its `end`.
    #[error("start must be less than or equal to end")]
    InvalidRange,
    /// `range_with_step` was given a step of zero.
    #[error("step cannot be zero")]
    ZeroStep,
    /// The sign of the step disagrees with the direction from `start` to `end`.
    #[error("step direction is inconsistent with start and end values")]
    DirectionMismatch,
    /// `nth` was given an index outside `[-len, len)`.
    #[error("index {index} out of bounds for a collection of length {len}")]
    OutOfBounds {
        /// The index as passed by the caller
        index: isize,
        /// Length of the collection
        len: usize,
    },
    /// `from_any_slice` met an element that is not of the requested type.
    #[error("element {index} has the wrong type")]
    TypeConversion {
        /// Position of the first offending element
        index: usize,
    },
}
