//! Error types for topology construction.

use thiserror::Error;

/// Errors arising from topology construction.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SpaceError {
    /// Attempted to construct a topology with zero cells.
    #[error("space must have at least one cell")]
    EmptySpace,
    /// A dimension exceeds the representable coordinate range.
    #[error("{name} = {value} exceeds maximum {max}")]
    DimensionTooLarge {
        /// Which dimension (`"width"` or `"height"`).
        name: &'static str,
        /// The rejected value.
        value: u32,
        /// The largest accepted value.
        max: u32,
    },
}
