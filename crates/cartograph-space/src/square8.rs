//! Eight-way lattice: orthogonal and diagonal moves.

use crate::edge::EdgeBehavior;
use crate::error::SpaceError;
use crate::grid2d;
use crate::topology::Topology;
use cartograph_core::Coord;
use smallvec::SmallVec;

/// Orthogonal steps first (N, S, W, E), then diagonals (NW, NE, SW, SE).
const OFFSETS_8: [Coord; 8] = [
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

/// Tile board where diagonal cells are adjacent too.
#[derive(Debug, Clone)]
pub struct Square8 {
    width: u32,
    height: u32,
    edge: EdgeBehavior,
}

impl Square8 {
    /// Largest accepted width or height.
    pub const MAX_DIM: u32 = grid2d::MAX_DIM;

    /// Build a `width` by `height` board. Dimension errors match
    /// [`Square4::new`](crate::Square4::new).
    pub fn new(width: u32, height: u32, edge: EdgeBehavior) -> Result<Self, SpaceError> {
        grid2d::check_dims(width, height)?;
        Ok(Self {
            width,
            height,
            edge,
        })
    }
}

impl Topology for Square8 {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn edge_behavior(&self) -> EdgeBehavior {
        self.edge
    }

    fn neighbours(&self, x: i32, y: i32) -> SmallVec<[Coord; 8]> {
        grid2d::offset_neighbours((x, y), (self.width, self.height), self.edge, &OFFSETS_8)
    }
}
