//! The [`Topology`] trait and the [`Adjacency`] selector.

use crate::edge::EdgeBehavior;
use crate::error::SpaceError;
use crate::square4::Square4;
use crate::square8::Square8;
use cartograph_core::Coord;
use smallvec::SmallVec;

/// Adjacency rule of a board.
///
/// The flood engine expands from each settled cell to exactly the cells
/// returned by [`neighbours`](Topology::neighbours), so the topology alone
/// decides what "adjacent" means for every chart built on it.
///
/// Cells are addressed as `(x, y)` with `0 <= x < width` and
/// `0 <= y < height`; flat indices are row-major (`y * width + x`).
pub trait Topology: Send + Sync + 'static {
    /// Number of columns.
    fn width(&self) -> u32;

    /// Number of rows.
    fn height(&self) -> u32;

    /// Edge handling used when resolving neighbours.
    fn edge_behavior(&self) -> EdgeBehavior;

    /// Neighbours of `(x, y)` in a deterministic, backend-defined order.
    ///
    /// The `SmallVec<[Coord; 8]>` avoids heap allocation for both
    /// supported neighbourhoods.
    fn neighbours(&self, x: i32, y: i32) -> SmallVec<[Coord; 8]>;

    /// Total number of cells.
    fn cell_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    /// Whether `(x, y)` lies on the board.
    fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width() && (y as u32) < self.height()
    }

    /// Row-major flat index of `(x, y)`, or `None` off the board.
    fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if self.contains(x, y) {
            Some(y as usize * self.width() as usize + x as usize)
        } else {
            None
        }
    }

    /// Coordinate of a flat index. `index` must be below `cell_count()`.
    fn coord_of(&self, index: usize) -> Coord {
        let w = self.width() as usize;
        ((index % w) as i32, (index / w) as i32)
    }

    /// Neighbours of a flat index, as flat indices.
    fn neighbours_flat(&self, index: usize) -> SmallVec<[usize; 8]> {
        let (x, y) = self.coord_of(index);
        let w = self.width() as usize;
        self.neighbours(x, y)
            .into_iter()
            .map(|(nx, ny)| ny as usize * w + nx as usize)
            .collect()
    }
}

/// Which lattice a board uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Adjacency {
    /// 4-connected ([`Square4`]).
    #[default]
    Four,
    /// 8-connected ([`Square8`]).
    Eight,
}

impl Adjacency {
    /// Construct the topology for a `width * height` board.
    pub fn build(
        self,
        width: u32,
        height: u32,
        edge: EdgeBehavior,
    ) -> Result<Box<dyn Topology>, SpaceError> {
        Ok(match self {
            Adjacency::Four => Box::new(Square4::new(width, height, edge)?),
            Adjacency::Eight => Box::new(Square8::new(width, height, edge)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_index_roundtrip() {
        let s = Square4::new(4, 3, EdgeBehavior::Absorb).unwrap();
        for i in 0..s.cell_count() {
            let (x, y) = s.coord_of(i);
            assert_eq!(s.index_of(x, y), Some(i));
        }
        assert_eq!(s.index_of(4, 0), None);
        assert_eq!(s.index_of(0, -1), None);
    }

    #[test]
    fn neighbours_flat_matches_coords() {
        let s = Square4::new(3, 3, EdgeBehavior::Absorb).unwrap();
        // Centre (1,1) = 4; N=(1,0)=1, S=(1,2)=7, W=(0,1)=3, E=(2,1)=5
        let nbs = s.neighbours_flat(4);
        assert_eq!(nbs.as_slice(), &[1, 7, 3, 5]);
    }

    #[test]
    fn adjacency_builds_matching_backend() {
        let four = Adjacency::Four.build(5, 5, EdgeBehavior::Absorb).unwrap();
        let eight = Adjacency::Eight.build(5, 5, EdgeBehavior::Absorb).unwrap();
        assert_eq!(four.neighbours(2, 2).len(), 4);
        assert_eq!(eight.neighbours(2, 2).len(), 8);
    }

    #[test]
    fn adjacency_propagates_errors() {
        assert!(matches!(
            Adjacency::Four.build(0, 5, EdgeBehavior::Absorb),
            Err(SpaceError::EmptySpace)
        ));
    }
}
