//! Benchmark profiles for the Cartograph chart engine.
//!
//! - [`arena_board`]: a deterministic square board with walls, mines,
//!   havens and four agents, the shape a game client decodes each turn.
//! - [`standard_charts`]: the chart set a typical bot registers.
//! - [`shift_agents`]: the next turn's board, with every agent moved.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use cartograph_chart::{
    cost, seed, type_filter, type_filter_excluding, ChartError, ChartRegistry, ChartSpec,
    RegistryConfig,
};
use cartograph_core::{AgentId, GridSnapshot, Tile, TileGrid, TileKind};

/// Number of agents placed by [`arena_board`].
pub const AGENTS: u32 = 4;

fn mix(seed: u64, i: u64) -> u64 {
    seed.wrapping_mul(6364136223846793005)
        .wrapping_add(i.wrapping_mul(1442695040888963407))
        .rotate_left(29)
}

/// Build a `size` x `size` board from `seed`.
///
/// Roughly 18% walls, 4% mines (some owned), 1% havens, and [`AGENTS`]
/// agents on distinct free cells. Identical seeds give identical boards.
pub fn arena_board(size: u32, seed: u64) -> TileGrid {
    let n = size as usize * size as usize;
    let mut tiles: Vec<Tile> = (0..n as u64)
        .map(|i| match mix(seed, i) % 100 {
            0..=17 => Tile::WALL,
            18..=19 => Tile::resource(None),
            20..=21 => Tile::resource(Some(AgentId((i % AGENTS as u64) as u32 + 1))),
            22 => Tile::HAVEN,
            _ => Tile::FREE,
        })
        .collect();

    for agent in 1..=AGENTS {
        let mut pos = (mix(seed ^ 0xA6E7, agent as u64) % n as u64) as usize;
        while tiles[pos].kind != TileKind::Free {
            pos = (pos + 1) % n;
        }
        tiles[pos] = Tile::agent(AgentId(agent));
    }

    TileGrid::new(size, size, tiles).unwrap_or_else(|e| panic!("bench board: {e}"))
}

/// Move every agent one free step, cycling direction by turn.
pub fn shift_agents(board: &TileGrid, turn: u64) -> TileGrid {
    let mut next = board.clone();
    let (dx, dy) = [(1, 0), (0, 1), (-1, 0), (0, -1)][(turn % 4) as usize];
    for ((x, y), tile) in board.cells() {
        if tile.kind != TileKind::Agent {
            continue;
        }
        let (nx, ny) = (x + dx, y + dy);
        if next.tile(nx, ny).map(|t| t.kind) == Some(TileKind::Free) {
            let _ = next.set(nx, ny, *tile);
            let _ = next.set(x, y, Tile::FREE);
        }
    }
    next
}

/// A registry over `board` with the usual bot charts:
///
/// - `enemies`: distance to any other agent.
/// - `mines`: distance to capturable mines, penalised near enemies.
/// - `havens`: distance to havens.
/// - `me`: distance from this agent.
pub fn standard_charts(board: TileGrid, me: AgentId) -> Result<ChartRegistry, ChartError> {
    let mut charts = ChartRegistry::new(board, RegistryConfig::new(me))?;
    charts.register(
        "enemies",
        ChartSpec::new(seed::matching(type_filter_excluding(TileKind::Agent.mask(), me)))
            .cost(cost::default_passable()),
    )?;
    charts.register(
        "mines",
        ChartSpec::new(seed::matching(type_filter_excluding(
            TileKind::Resource.mask(),
            me,
        )))
        .cost(cost::by_chart("enemies", 4.0, 6.0)),
    )?;
    charts.register(
        "havens",
        ChartSpec::new(seed::matching(type_filter(TileKind::Haven.mask())))
            .cost(cost::default_passable()),
    )?;
    charts.register(
        "me",
        ChartSpec::new(seed::from_fn(|ctx, x, y| {
            ctx.tile(x, y)
                .filter(|t| t.kind == TileKind::Agent && t.is_owned_by(ctx.me()))
                .map(|_| 0.0)
        }))
        .cost(cost::default_passable()),
    )?;
    Ok(charts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boards_are_deterministic() {
        assert_eq!(arena_board(28, 7), arena_board(28, 7));
        assert_ne!(arena_board(28, 7), arena_board(28, 8));
    }

    #[test]
    fn every_agent_is_placed_once() {
        let board = arena_board(40, 3);
        for agent in 1..=AGENTS {
            let count = board
                .tiles()
                .iter()
                .filter(|t| **t == Tile::agent(AgentId(agent)))
                .count();
            assert_eq!(count, 1, "agent {agent}");
        }
    }

    #[test]
    fn shifting_preserves_agents() {
        let board = arena_board(20, 11);
        let next = shift_agents(&board, 0);
        let agents = |b: &TileGrid| b.tiles().iter().filter(|t| t.kind == TileKind::Agent).count();
        assert_eq!(agents(&next), AGENTS as usize);
        assert_eq!(next.cell_count(), board.cell_count());
    }

    #[test]
    fn standard_charts_update() {
        let board = arena_board(28, 1);
        let mut charts = standard_charts(board.clone(), AgentId(1)).unwrap();
        charts.update(board).unwrap();
        assert_eq!(charts.len(), 4);
        assert!(charts.chart("me").unwrap().reachable_count() >= 1);
    }
}
