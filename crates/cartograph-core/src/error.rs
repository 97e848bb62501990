//! Error types for board snapshots.

use thiserror::Error;

/// Errors arising from snapshot construction or cell lookup.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    /// A coordinate lies outside the board.
    #[error("cell ({x}, {y}) out of range for {width}x{height} grid")]
    OutOfRange {
        /// Requested column.
        x: i32,
        /// Requested row.
        y: i32,
        /// Board width.
        width: u32,
        /// Board height.
        height: u32,
    },
    /// Attempted to construct a board with zero cells.
    #[error("grid must have at least one cell")]
    EmptyGrid,
    /// The tile buffer length does not equal `width * height`.
    #[error("expected {expected} tiles, got {actual}")]
    TileCountMismatch {
        /// `width * height`.
        expected: usize,
        /// Length of the supplied buffer.
        actual: usize,
    },
}
