//! Contract checks every [`Topology`] backend must pass.
//!
//! The flood engine assumes undirected adjacency, on-board neighbours and
//! a stable neighbour order. Backend test modules call
//! [`run_full_compliance`] on a few board shapes.

use crate::topology::Topology;
use cartograph_core::Coord;

fn cells(space: &dyn Topology) -> impl Iterator<Item = Coord> + '_ {
    (0..space.cell_count()).map(|i| space.coord_of(i))
}

/// Run every contract check against `space`.
pub fn run_full_compliance(space: &dyn Topology) {
    for here in cells(space) {
        let around = space.neighbours(here.0, here.1);
        assert!(around.len() <= 8, "{here:?} has {} neighbours", around.len());
        assert_eq!(
            around,
            space.neighbours(here.0, here.1),
            "neighbour order of {here:?} is not stable"
        );
        for &there in &around {
            assert!(space.contains(there.0, there.1), "{there:?} next to {here:?} is off the board");
            assert!(
                space.neighbours(there.0, there.1).contains(&here),
                "{there:?} is next to {here:?} but not the other way"
            );
        }
    }
}
