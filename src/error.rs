use thiserror::Error;

/// Errors raised by [`StoutList`] and its cursors.
///
/// Every failure is local and synchronous: an operation either fully
/// completes (including any split, merge or unlink it entails) or returns
/// one of these variants before mutating the list.
///
/// [`StoutList`]: crate::StoutList
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StoutListError {
    /// The node capacity given at construction was odd or zero.
    #[error("node size must be a positive even number, got {0}")]
    InvalidNodeSize(usize),

    /// A positional index fell outside the valid range for the operation
    /// (`[0, len)` for removal, `[0, len]` for insertion and cursor seeks).
    #[error("position {pos} out of range for a list of length {len}")]
    OutOfRange {
        /// The offending position.
        pos: usize,
        /// The list length at the time of the call.
        len: usize,
    },

    /// A cursor was asked to move past the end of the list in its current
    /// direction.
    #[error("cursor has no more elements in that direction")]
    Exhausted,

    /// `set` or `remove` was called on a cursor with no directional move
    /// since its creation or since the last `remove`/`insert`.
    #[error("cursor has not traversed an element to operate on")]
    NoActiveElement,
}
