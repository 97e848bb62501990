//! Error types for navigation grid queries.

use cartograph_space::SpaceError;
use thiserror::Error;

/// Errors from navigation grid construction and lookup.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NavError {
    /// A queried coordinate lies outside the grid.
    #[error("cell ({x}, {y}) out of range for {width}x{height} grid")]
    OutOfRange {
        /// Requested column.
        x: i32,
        /// Requested row.
        y: i32,
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
    },
    /// The grid's topology could not be built.
    #[error("invalid grid topology: {0}")]
    Space(#[from] SpaceError),
}
