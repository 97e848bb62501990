//! Four-way lattice: moves go north, south, west or east.

use crate::edge::EdgeBehavior;
use crate::error::SpaceError;
use crate::grid2d;
use crate::topology::Topology;
use cartograph_core::Coord;
use smallvec::SmallVec;

/// Step offsets in expansion order: N, S, W, E.
const OFFSETS_4: [Coord; 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Tile board where only orthogonal steps connect cells.
///
/// With [`EdgeBehavior::Absorb`] a corner has two neighbours and a border
/// cell three. `Clamp` turns each off-board step into a self-loop and
/// `Wrap` joins opposite borders.
#[derive(Debug, Clone)]
pub struct Square4 {
    width: u32,
    height: u32,
    edge: EdgeBehavior,
}

impl Square4 {
    /// Largest accepted width or height.
    pub const MAX_DIM: u32 = grid2d::MAX_DIM;

    /// Build a `width` by `height` board.
    ///
    /// Fails with [`SpaceError::EmptySpace`] on a zero dimension and
    /// [`SpaceError::DimensionTooLarge`] past [`Self::MAX_DIM`].
    ///
    /// ```
    /// use cartograph_space::{EdgeBehavior, Square4, Topology};
    ///
    /// let board = Square4::new(12, 8, EdgeBehavior::Absorb).unwrap();
    /// assert_eq!(board.cell_count(), 96);
    /// assert_eq!(board.neighbours(0, 0).as_slice(), &[(0, 1), (1, 0)]);
    /// ```
    pub fn new(width: u32, height: u32, edge: EdgeBehavior) -> Result<Self, SpaceError> {
        grid2d::check_dims(width, height)?;
        Ok(Self {
            width,
            height,
            edge,
        })
    }
}

impl Topology for Square4 {
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
        grid2d::offset_neighbours((x, y), (self.width, self.height), self.edge, &OFFSETS_4)
    }
}
