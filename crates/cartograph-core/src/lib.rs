//! Core types for the Cartograph chart framework.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! decoded board model every other crate consumes: agent and turn
//! identifiers, the tile abstraction, the per-turn grid snapshot, and the
//! grid error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod id;
pub mod tile;

pub use error::GridError;
pub use grid::{GridSnapshot, TileGrid};
pub use id::{AgentId, Coord, TurnId};
pub use tile::{Tile, TileKind, TileMask};
