//! Property tests for flood invariants on random weighted boards.

use cartograph_nav::{NavGrid, UNSET};
use cartograph_space::{EdgeBehavior, Square4, Topology};
use proptest::prelude::*;

/// A random board: per-cell entry cost (`None` = wall) and seed value.
#[derive(Debug, Clone)]
struct Board {
    w: u32,
    h: u32,
    entry: Vec<Option<f32>>,
    seeds: Vec<Option<f32>>,
}

impl Board {
    fn at<T: Copy>(&self, v: &[T], x: i32, y: i32) -> T {
        v[y as usize * self.w as usize + x as usize]
    }

    fn flood(&self) -> NavGrid {
        let mut grid = NavGrid::new(self.w, self.h).unwrap();
        grid.seed(|x, y| self.at(&self.seeds, x, y));
        grid.propagate_with(|x, y| self.at(&self.entry, x, y));
        grid
    }

    /// Bellman-Ford reference: relax until nothing changes.
    fn reference(&self) -> Vec<f32> {
        let topo = Square4::new(self.w, self.h, EdgeBehavior::Absorb).unwrap();
        let mut dist: Vec<f32> = self.seeds.iter().map(|s| s.unwrap_or(UNSET)).collect();
        loop {
            let mut changed = false;
            for i in 0..dist.len() {
                if dist[i] == UNSET {
                    continue;
                }
                for n in topo.neighbours_flat(i) {
                    if let Some(step) = self.entry[n] {
                        let cand = dist[i] + step;
                        if cand < dist[n] {
                            dist[n] = cand;
                            changed = true;
                        }
                    }
                }
            }
            if !changed {
                return dist;
            }
        }
    }
}

fn arb_board() -> impl Strategy<Value = Board> {
    (1u32..8, 1u32..8).prop_flat_map(|(w, h)| {
        let n = (w * h) as usize;
        let entry = prop::collection::vec(
            prop_oneof![
                1 => Just(None),
                4 => (0u8..6).prop_map(|c| Some(c as f32)),
            ],
            n,
        );
        let seeds = prop::collection::vec(
            prop_oneof![
                6 => Just(None),
                1 => (0u8..4).prop_map(|c| Some(c as f32)),
            ],
            n,
        );
        (Just(w), Just(h), entry, seeds).prop_map(|(w, h, entry, seeds)| Board {
            w,
            h,
            entry,
            seeds,
        })
    })
}

proptest! {
    #[test]
    fn matches_bellman_ford(board in arb_board()) {
        let grid = board.flood();
        let reference = board.reference();
        prop_assert_eq!(grid.costs(), reference.as_slice());
    }

    #[test]
    fn flood_is_deterministic(board in arb_board()) {
        let a = board.flood();
        let b = board.flood();
        prop_assert_eq!(a.costs(), b.costs());
    }

    #[test]
    fn monotonic_relaxation(board in arb_board()) {
        let grid = board.flood();
        let topo = Square4::new(board.w, board.h, EdgeBehavior::Absorb).unwrap();
        for i in 0..grid.cell_count() {
            let a = grid.costs()[i];
            if a == UNSET {
                continue;
            }
            for n in topo.neighbours_flat(i) {
                if let Some(step) = board.entry[n] {
                    prop_assert!(grid.costs()[n] <= a + step);
                }
            }
        }
    }

    #[test]
    fn seeds_never_exceed_their_value(board in arb_board()) {
        let grid = board.flood();
        for (i, seed) in board.seeds.iter().enumerate() {
            if let Some(v) = seed {
                prop_assert!(grid.costs()[i] <= *v);
                if board.entry[i].is_none() {
                    prop_assert_eq!(grid.costs()[i], *v);
                }
            }
        }
    }

    #[test]
    fn walls_unreachable_unless_seeded(board in arb_board()) {
        let grid = board.flood();
        for i in 0..grid.cell_count() {
            if board.entry[i].is_none() && board.seeds[i].is_none() {
                prop_assert_eq!(grid.costs()[i], UNSET);
            }
        }
    }
}
