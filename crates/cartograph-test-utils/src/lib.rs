//! Test utilities for Cartograph development.
//!
//! Boards are written as ASCII art, one string per row:
//!
//! | char        | tile                                  |
//! |-------------|---------------------------------------|
//! | `.`         | free                                  |
//! | `#`         | wall                                  |
//! | `$`         | unowned resource                      |
//! | `a` .. `i`  | resource owned by agent 1 .. 9        |
//! | `1` .. `9`  | agent 1 .. 9                          |
//! | `H`         | haven                                 |
//!
//! [`fixtures`] holds reusable seed and cost queries.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use cartograph_core::{AgentId, Coord, Tile, TileGrid, TileKind};
use cartograph_nav::NavGrid;

/// Decode one board character.
pub fn tile_for(c: char) -> Option<Tile> {
    Some(match c {
        '.' => Tile::FREE,
        '#' => Tile::WALL,
        '$' => Tile::resource(None),
        'H' => Tile::HAVEN,
        'a'..='i' => Tile::resource(Some(AgentId(c as u32 - 'a' as u32 + 1))),
        '1'..='9' => Tile::agent(AgentId(c as u32 - '0' as u32)),
        _ => return None,
    })
}

/// Encode one tile back to its board character.
pub fn char_for(tile: &Tile) -> char {
    match (tile.kind, tile.owner) {
        (TileKind::Free, _) => '.',
        (TileKind::Wall, _) => '#',
        (TileKind::Haven, _) => 'H',
        (TileKind::Resource, None) => '$',
        (TileKind::Resource, Some(AgentId(n))) if (1..=9).contains(&n) => {
            char::from(b'a' + (n - 1) as u8)
        }
        (TileKind::Agent, Some(AgentId(n))) if (1..=9).contains(&n) => {
            char::from(b'0' + n as u8)
        }
        _ => '?',
    }
}

/// Parse an ASCII board.
///
/// # Panics
///
/// On ragged rows, an empty board, or an unknown character.
pub fn board(rows: &[&str]) -> TileGrid {
    assert!(!rows.is_empty(), "board has no rows");
    let width = rows[0].chars().count();
    let mut tiles = Vec::with_capacity(width * rows.len());
    for (y, row) in rows.iter().enumerate() {
        assert_eq!(
            row.chars().count(),
            width,
            "row {y} is {} wide, expected {width}",
            row.chars().count()
        );
        for (x, c) in row.chars().enumerate() {
            tiles.push(tile_for(c).unwrap_or_else(|| panic!("unknown tile {c:?} at ({x}, {y})")));
        }
    }
    TileGrid::new(width as u32, rows.len() as u32, tiles).expect("board dimensions")
}

/// An all-free board.
pub fn open_board(width: u32, height: u32) -> TileGrid {
    TileGrid::filled(width, height, Tile::FREE).expect("non-empty board")
}

/// Render a board back to rows.
pub fn render_board(grid: &TileGrid) -> Vec<String> {
    let mut rows = Vec::new();
    let mut row = String::new();
    let mut last_y = 0;
    for ((_, y), tile) in grid.cells() {
        if y != last_y {
            rows.push(std::mem::take(&mut row));
            last_y = y;
        }
        row.push(char_for(tile));
    }
    rows.push(row);
    rows
}

/// Coordinates of every occurrence of `c` in row-major order.
pub fn find_all(rows: &[&str], c: char) -> Vec<Coord> {
    rows.iter()
        .enumerate()
        .flat_map(|(y, row)| {
            row.chars()
                .enumerate()
                .filter(move |(_, ch)| *ch == c)
                .map(move |(x, _)| (x as i32, y as i32))
        })
        .collect()
}

/// Render a grid's costs as rows: integers, `-` for unreached.
///
/// Handy in assertion messages.
pub fn render_costs(grid: &NavGrid) -> Vec<String> {
    let width = grid.width() as usize;
    grid.costs()
        .chunks(width)
        .map(|row| {
            row.iter()
                .map(|c| {
                    if c.is_finite() {
                        format!("{c:>3}")
                    } else {
                        "  -".to_owned()
                    }
                })
                .collect::<String>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cartograph_core::GridSnapshot;

    #[test]
    fn parses_legend() {
        let b = board(&[".#$a", "1H9i"]);
        assert_eq!(b.width(), 4);
        assert_eq!(b.height(), 2);
        assert_eq!(b.tile(1, 0), Some(&Tile::WALL));
        assert_eq!(b.tile(2, 0), Some(&Tile::resource(None)));
        assert_eq!(b.tile(3, 0), Some(&Tile::resource(Some(AgentId(1)))));
        assert_eq!(b.tile(0, 1), Some(&Tile::agent(AgentId(1))));
        assert_eq!(b.tile(1, 1), Some(&Tile::HAVEN));
        assert_eq!(b.tile(2, 1), Some(&Tile::agent(AgentId(9))));
        assert_eq!(b.tile(3, 1), Some(&Tile::resource(Some(AgentId(9)))));
    }

    #[test]
    fn render_inverts_parse() {
        let rows = ["..#..", "$1.H.", "b...2"];
        assert_eq!(render_board(&board(&rows)), rows);
    }

    #[test]
    fn find_all_is_row_major() {
        assert_eq!(find_all(&["$.$", "..$"], '$'), vec![(0, 0), (2, 0), (2, 1)]);
    }

    #[test]
    #[should_panic(expected = "unknown tile")]
    fn rejects_unknown_characters() {
        board(&["..x"]);
    }

    #[test]
    #[should_panic(expected = "row 1")]
    fn rejects_ragged_rows() {
        board(&["...", ".."]);
    }

    #[test]
    fn renders_costs() {
        let mut grid = NavGrid::new(3, 1).unwrap();
        grid.seed(|x, _| (x == 0).then_some(0.0));
        grid.propagate();
        assert_eq!(render_costs(&grid), vec!["  0  -  -".to_owned()]);
    }
}
