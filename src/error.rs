//! Errors returned by the tree engine and the rope.

use std::collections::TryReserveError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RopeError {
    /// A rank, or one of the bounds of a cut-and-paste, is out of range.
    /// `index` had to be strictly less than `limit`.
    #[error("{what} {index} is out of range (must be less than {limit})")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        limit: usize,
    },

    /// An output buffer could not be reserved.
    #[error("allocation failed: {0}")]
    AllocationFailure(#[from] TryReserveError),
}

impl RopeError {
    pub(crate) fn out_of_range(what: &'static str, index: usize, limit: usize) -> RopeError {
        RopeError::IndexOutOfRange { what, index, limit }
    }
}
