use thiserror::Error;

/// Errors raised while building or growing a [`KdTree`](crate::KdTree).
///
/// An empty input is not an error: it yields an empty tree whose root is absent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A point does not have the axis count the tree was resolved with.
    ///
    /// `index` is the position of the offending point within the batch that was passed in.
    #[error("point {index} has {found} coordinates, but the tree uses {expected} axes")]
    DimensionMismatch {
        expected: usize,
        found: usize,
        index: usize,
    },

    /// Points without any coordinates cannot be partitioned.
    #[error("points must have at least one coordinate axis")]
    ZeroAxes,
}

pub type Result<T> = std::result::Result<T, Error>;
