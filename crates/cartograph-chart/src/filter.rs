//! Tile-kind predicates for seed queries.

use cartograph_core::{AgentId, Tile, TileMask};

/// Matches tiles whose kind is in `mask`.
///
/// ```
/// use cartograph_chart::type_filter;
/// use cartograph_core::{Tile, TileKind};
///
/// let f = type_filter(TileKind::Resource | TileKind::Haven);
/// assert!(f(&Tile::HAVEN));
/// assert!(!f(&Tile::FREE));
/// ```
pub fn type_filter(mask: TileMask) -> impl Fn(&Tile) -> bool + Copy + Send + Sync + 'static {
    move |tile| tile.matches(mask)
}

/// Matches tiles whose kind is in `mask` and that `agent` does not own.
///
/// Targets "mines I could capture" or "agents other than me".
pub fn type_filter_excluding(
    mask: TileMask,
    agent: AgentId,
) -> impl Fn(&Tile) -> bool + Copy + Send + Sync + 'static {
    move |tile| tile.matches(mask) && !tile.is_owned_by(agent)
}
