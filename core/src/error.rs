//! Errors raised by view operations.
//!
//! Every variant is a caller-input error: it is returned before any memory is
//! touched, so a failed call never leaves a partial write behind. Internal
//! invariant violations are not errors; see [`crate::contract::abandon`].

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ViewError {
    /// A precondition on an argument did not hold (null pointer with a
    /// non-zero length, destination too short, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// An index or range bound fell outside the view.
    ///
    /// `index` is the value the caller passed, so negative indices are
    /// reported as such.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: i128, len: usize },
}

impl ViewError {
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, ViewError::IndexOutOfRange { .. })
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ViewError::InvalidArgument(_))
    }
}
