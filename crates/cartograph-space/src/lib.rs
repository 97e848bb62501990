//! Board lattices the flood engine walks.
//!
//! A [`Topology`] answers one question for a tile board: which cells are
//! next to a given cell, and in what order. [`Square4`] connects
//! orthogonal cells only. [`Square8`] adds diagonals.
//! Either one treats the board border according to an [`EdgeBehavior`],
//! and [`Adjacency`] picks between them from configuration.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod edge;
pub mod error;
mod grid2d;
pub mod square4;
pub mod square8;
pub mod topology;

#[cfg(test)]
pub(crate) mod compliance;

pub use edge::EdgeBehavior;
pub use error::SpaceError;
pub use square4::Square4;
pub use square8::Square8;
pub use topology::{Adjacency, Topology};
