//! Tile classification, the [`TileMask`] bitset, and the [`Tile`] cell value.

use crate::id::AgentId;
use std::ops::{BitOr, BitOrAssign};

/// Passability class of a board cell.
///
/// The set is closed: every decoded tile maps to exactly one kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileKind {
    /// Open ground.
    Free,
    /// Blocked terrain. Never entered.
    Wall,
    /// A capturable resource (mine). May carry an owner.
    Resource,
    /// A cell occupied by an agent. Always carries the occupant as owner.
    Agent,
    /// A restore point (tavern). Interacted with, never walked through.
    Haven,
}

impl TileKind {
    /// All kinds in declaration order.
    pub const ALL: [TileKind; 5] = [
        TileKind::Free,
        TileKind::Wall,
        TileKind::Resource,
        TileKind::Agent,
        TileKind::Haven,
    ];

    /// The single-bit mask for this kind.
    pub const fn mask(self) -> TileMask {
        TileMask(1 << self as u8)
    }
}

/// A set of [`TileKind`]s packed into one byte.
///
/// Used by type filters: a tile matches when its kind's bit is set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TileMask(u8);

impl TileMask {
    /// The empty mask. Matches nothing.
    pub const NONE: TileMask = TileMask(0);

    /// Every kind.
    pub const ALL: TileMask = TileMask(0b1_1111);

    /// Whether `kind` is in the mask.
    pub const fn contains(self, kind: TileKind) -> bool {
        self.0 & kind.mask().0 != 0
    }

    /// Whether the mask contains no kinds.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over the kinds in the mask, in declaration order.
    pub fn iter(self) -> impl Iterator<Item = TileKind> {
        TileKind::ALL.into_iter().filter(move |k| self.contains(*k))
    }
}

impl From<TileKind> for TileMask {
    fn from(kind: TileKind) -> Self {
        kind.mask()
    }
}

impl BitOr for TileMask {
    type Output = TileMask;

    fn bitor(self, rhs: TileMask) -> TileMask {
        TileMask(self.0 | rhs.0)
    }
}

impl BitOr<TileKind> for TileMask {
    type Output = TileMask;

    fn bitor(self, rhs: TileKind) -> TileMask {
        self | rhs.mask()
    }
}

impl BitOr for TileKind {
    type Output = TileMask;

    fn bitor(self, rhs: TileKind) -> TileMask {
        self.mask() | rhs.mask()
    }
}

impl BitOrAssign for TileMask {
    fn bitor_assign(&mut self, rhs: TileMask) {
        self.0 |= rhs.0;
    }
}

impl FromIterator<TileKind> for TileMask {
    fn from_iter<I: IntoIterator<Item = TileKind>>(iter: I) -> Self {
        iter.into_iter().fold(TileMask::NONE, |m, k| m | k)
    }
}

/// One decoded board cell: its kind and, where meaningful, its owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tile {
    /// Passability class.
    pub kind: TileKind,
    /// Owning agent for `Agent` and owned `Resource` tiles.
    pub owner: Option<AgentId>,
}

impl Tile {
    /// Open ground.
    pub const FREE: Tile = Tile {
        kind: TileKind::Free,
        owner: None,
    };

    /// Blocked terrain.
    pub const WALL: Tile = Tile {
        kind: TileKind::Wall,
        owner: None,
    };

    /// A restore point.
    pub const HAVEN: Tile = Tile {
        kind: TileKind::Haven,
        owner: None,
    };

    /// A resource, optionally owned.
    pub const fn resource(owner: Option<AgentId>) -> Tile {
        Tile {
            kind: TileKind::Resource,
            owner,
        }
    }

    /// A cell occupied by `agent`.
    pub const fn agent(agent: AgentId) -> Tile {
        Tile {
            kind: TileKind::Agent,
            owner: Some(agent),
        }
    }

    /// Whether the tile's kind is in `mask`.
    pub fn matches(&self, mask: TileMask) -> bool {
        mask.contains(self.kind)
    }

    /// Whether `agent` owns this tile.
    pub fn is_owned_by(&self, agent: AgentId) -> bool {
        self.owner == Some(agent)
    }
}

impl Default for Tile {
    fn default() -> Self {
        Tile::FREE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn mask_contains_only_its_kind() {
        let m = TileKind::Resource.mask();
        assert!(m.contains(TileKind::Resource));
        assert!(!m.contains(TileKind::Free));
        assert!(!m.contains(TileKind::Agent));
    }

    #[test]
    fn bitor_combines_kinds() {
        let m = TileKind::Free | TileKind::Agent;
        assert!(m.contains(TileKind::Free));
        assert!(m.contains(TileKind::Agent));
        assert!(!m.contains(TileKind::Wall));
        assert_eq!(m.iter().collect::<Vec<_>>(), vec![TileKind::Free, TileKind::Agent]);
    }

    #[test]
    fn all_mask_matches_every_kind() {
        assert!(TileKind::ALL.iter().all(|k| TileMask::ALL.contains(*k)));
        assert!(TileMask::NONE.is_empty());
        assert_eq!(TileKind::ALL.into_iter().collect::<TileMask>(), TileMask::ALL);
    }

    #[test]
    fn ownership() {
        let t = Tile::agent(AgentId(2));
        assert!(t.is_owned_by(AgentId(2)));
        assert!(!t.is_owned_by(AgentId(1)));
        assert!(!Tile::resource(None).is_owned_by(AgentId(2)));
        assert!(Tile::resource(Some(AgentId(1))).matches(TileKind::Resource.mask()));
    }

    fn arb_kind() -> impl Strategy<Value = TileKind> {
        (0usize..TileKind::ALL.len()).prop_map(|i| TileKind::ALL[i])
    }

    proptest! {
        #[test]
        fn union_contains_both(a in arb_kind(), b in arb_kind()) {
            let m = a | b;
            prop_assert!(m.contains(a));
            prop_assert!(m.contains(b));
        }

        #[test]
        fn iter_roundtrips(kinds in prop::collection::vec(arb_kind(), 0..5)) {
            let m: TileMask = kinds.iter().copied().collect();
            let back: TileMask = m.iter().collect();
            prop_assert_eq!(m, back);
        }
    }
}
