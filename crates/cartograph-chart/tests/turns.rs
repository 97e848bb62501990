//! Registry behaviour across turns and board configurations.

use cartograph_chart::{cost, seed, type_filter, type_filter_excluding, ChartRegistry, ChartSpec, RegistryConfig};
use cartograph_core::{AgentId, GridSnapshot, TileKind};
use cartograph_nav::UNSET;
use cartograph_space::{Adjacency, EdgeBehavior};
use cartograph_test_utils::{board, find_all};

const ME: AgentId = AgentId(1);

fn mines_not_mine() -> ChartSpec {
    ChartSpec::new(seed::matching(type_filter_excluding(
        TileKind::Resource.mask(),
        ME,
    )))
    .cost(cost::default_passable())
}

#[test]
fn captured_mines_stop_seeding() {
    let before = [
        "1...$",
        ".....",
        "$....",
    ];
    let after = [
        ".....",
        "....1",
        "$...a",
    ];
    let mut reg = ChartRegistry::new(board(&before), RegistryConfig::new(ME)).unwrap();
    reg.register("mines", mines_not_mine()).unwrap();

    reg.update(board(&before)).unwrap();
    let mines = reg.chart("mines").unwrap();
    // Resources are seeds but not passable; distance is to the adjacent cell.
    assert_eq!(mines.cost_at(4, 0).unwrap(), 0.0);
    assert_eq!(mines.cost_at(3, 0).unwrap(), 1.0);
    assert_eq!(mines.cost_at(0, 0).unwrap(), 2.0);

    reg.update(board(&after)).unwrap();
    let mines = reg.chart("mines").unwrap();
    assert_eq!(mines.cost_at(4, 2).unwrap(), UNSET);
    assert_eq!(mines.cost_at(0, 2).unwrap(), 0.0);
    assert_eq!(mines.cost_at(4, 1).unwrap(), 5.0);
}

#[test]
fn havens_as_targets() {
    let rows = [
        "H.#..",
        "..#..",
        "....H",
    ];
    let b = board(&rows);
    let mut reg = ChartRegistry::new(b.clone(), RegistryConfig::new(ME)).unwrap();
    reg.register(
        "havens",
        ChartSpec::new(seed::matching(type_filter(TileKind::Haven.mask())))
            .cost(cost::default_passable()),
    )
    .unwrap();
    reg.update(b).unwrap();

    let grid = reg.chart("havens").unwrap();
    for (x, y) in find_all(&rows, 'H') {
        assert_eq!(grid.cost_at(x, y).unwrap(), 0.0);
    }
    for (x, y) in find_all(&rows, '#') {
        assert_eq!(grid.cost_at(x, y).unwrap(), UNSET);
    }
    assert_eq!(grid.cost_at(3, 0).unwrap(), 3.0);
    assert_eq!(grid.cost_at(1, 1).unwrap(), 2.0);
}

#[test]
fn eight_connected_registry_uses_chebyshev_steps() {
    let rows = [
        ".....",
        ".....",
        "....$",
    ];
    let b = board(&rows);
    let config = RegistryConfig::new(ME).with_adjacency(Adjacency::Eight);
    let mut reg = ChartRegistry::new(b.clone(), config).unwrap();
    reg.register("mine", mines_not_mine()).unwrap();
    reg.update(b).unwrap();
    assert_eq!(reg.chart("mine").unwrap().cost_at(0, 0).unwrap(), 4.0);
}

#[test]
fn wrapping_registry_floods_across_edges() {
    let b = board(&["$......"]);
    let config = RegistryConfig::new(ME).with_edge(EdgeBehavior::Wrap);
    let mut reg = ChartRegistry::new(b.clone(), config).unwrap();
    reg.register("mine", mines_not_mine()).unwrap();
    reg.update(b).unwrap();
    let grid = reg.chart("mine").unwrap();
    assert_eq!(grid.cost_at(6, 0).unwrap(), 1.0);
    assert_eq!(grid.cost_at(4, 0).unwrap(), 3.0);
}

#[test]
fn snapshot_is_replaced_each_turn() {
    let first = board(&["1.", ".."]);
    let second = board(&["..", ".1"]);
    let mut reg = ChartRegistry::new(first.clone(), RegistryConfig::new(ME)).unwrap();
    reg.register(
        "me",
        ChartSpec::new(seed::from_fn(|ctx, x, y| {
            ctx.tile(x, y)
                .filter(|t| t.kind == TileKind::Agent && t.is_owned_by(ctx.me()))
                .map(|_| 0.0)
        }))
        .cost(cost::default_passable()),
    )
    .unwrap();

    reg.update(first).unwrap();
    assert_eq!(reg.chart("me").unwrap().cost_at(1, 1).unwrap(), 2.0);
    reg.update(second.clone()).unwrap();
    assert_eq!(reg.snapshot(), &second);
    assert_eq!(reg.snapshot().width(), 2);
    assert_eq!(reg.chart("me").unwrap().cost_at(0, 0).unwrap(), 2.0);
}
