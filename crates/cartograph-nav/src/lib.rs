//! Navigation grids: multi-source weighted flood fill.
//!
//! A [`NavGrid`] holds one `f32` cost per board cell. Each turn it is
//! [reset](NavGrid::reset), [seeded](NavGrid::seed) from a per-cell seed
//! function, and [propagated](NavGrid::propagate) outward under a per-cell
//! entry-cost function. After propagation every reachable cell holds the
//! cheapest cumulative cost from any seed; unreachable cells hold [`UNSET`].
//!
//! Both functions share one shape: `(x, y) -> Option<f32>`, where `None`
//! means "not a seed" or "impassable". [`from_sentinel`] adapts the
//! negative-means-absent float convention to that shape.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
mod frontier;
pub mod grid;
pub mod sentinel;

pub use error::NavError;
pub use grid::{CostFn, FloodStats, NavGrid};
pub use sentinel::{from_sentinel, to_sentinel, IMPASSABLE, UNSET};
