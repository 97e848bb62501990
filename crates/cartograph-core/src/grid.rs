//! The per-turn board snapshot.
//!
//! [`GridSnapshot`] is the whole interface the chart layer needs from the
//! ingestion side: dimensions plus a tile per cell. [`TileGrid`] is the
//! owned, row-major implementation the registry stores between turns.

use crate::error::GridError;
use crate::id::Coord;
use crate::tile::Tile;

/// Read access to a decoded board.
pub trait GridSnapshot {
    /// Number of columns.
    fn width(&self) -> u32;

    /// Number of rows.
    fn height(&self) -> u32;

    /// The tile at `(x, y)`, or `None` outside the board.
    fn tile(&self, x: i32, y: i32) -> Option<&Tile>;

    /// Whether `(x, y)` lies on the board.
    fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width() && (y as u32) < self.height()
    }
}

/// An owned board: `width * height` tiles in row-major order.
///
/// Replaced wholesale every turn; nothing borrows into a previous turn's
/// grid once the registry has swapped it out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileGrid {
    width: u32,
    height: u32,
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// Build a grid from a row-major tile buffer.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0 and
    /// `Err(GridError::TileCountMismatch)` if the buffer has the wrong size.
    pub fn new(width: u32, height: u32, tiles: Vec<Tile>) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }
        let expected = width as usize * height as usize;
        if tiles.len() != expected {
            return Err(GridError::TileCountMismatch {
                expected,
                actual: tiles.len(),
            });
        }
        Ok(Self {
            width,
            height,
            tiles,
        })
    }

    /// A grid where every cell is `tile`.
    pub fn filled(width: u32, height: u32, tile: Tile) -> Result<Self, GridError> {
        Self::new(width, height, vec![tile; width as usize * height as usize])
    }

    /// Row-major tile slice.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Number of cells.
    pub fn cell_count(&self) -> usize {
        self.tiles.len()
    }

    /// Flat index of `(x, y)`.
    pub fn index_of(&self, x: i32, y: i32) -> Result<usize, GridError> {
        if !self.contains(x, y) {
            return Err(GridError::OutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y as usize * self.width as usize + x as usize)
    }

    /// Replace the tile at `(x, y)`.
    pub fn set(&mut self, x: i32, y: i32, tile: Tile) -> Result<(), GridError> {
        let i = self.index_of(x, y)?;
        self.tiles[i] = tile;
        Ok(())
    }

    /// Iterate over `((x, y), tile)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, &Tile)> {
        let w = self.width as usize;
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, t)| (((i % w) as i32, (i / w) as i32), t))
    }
}

impl GridSnapshot for TileGrid {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn tile(&self, x: i32, y: i32) -> Option<&Tile> {
        self.index_of(x, y).ok().map(|i| &self.tiles[i])
    }
}
