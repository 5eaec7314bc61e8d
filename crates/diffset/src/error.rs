//! Error type for malformed groups and candidate sets.

use thiserror::Error;

/// Invalid input to the group constructors or the verifier.
///
/// Every variant is an input error: the verifier itself never fails on
/// well-formed data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiffsetError {
    /// The group specification has no cyclic factors.
    #[error("group specification has no cyclic factors")]
    EmptyGroup,

    /// A cyclic factor of order zero was given.
    #[error("cyclic factor {index} has order 0")]
    ZeroFactor {
        /// Position of the offending factor.
        index: usize,
    },

    /// An element has a different number of coordinates than the group has factors.
    #[error("element {element} has {actual} coordinate(s), group has {expected} factor(s)")]
    ArityMismatch {
        /// Position of the element in the candidate set.
        element: usize,
        /// Number of factors in the group.
        expected: usize,
        /// Number of coordinates supplied.
        actual: usize,
    },

    /// A coordinate is negative or not below its factor.
    #[error("element {element}: coordinate {coordinate} = {value} is outside 0..{factor}")]
    CoordinateOutOfRange {
        /// Position of the element in the candidate set.
        element: usize,
        /// Position of the coordinate within the element.
        coordinate: usize,
        /// The supplied value.
        value: i64,
        /// Order of the corresponding cyclic factor.
        factor: u64,
    },
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, DiffsetError>;
