//! Board edge (boundary) behavior for lattice backends.

/// How a lattice handles neighbours at the board's edges.
///
/// Controls the *topology* only: which cells count as neighbours of
/// boundary cells. Tile passability is a separate concern of the cost
/// function.
///
/// # Examples
///
/// ```
/// use cartograph_space::{EdgeBehavior, Square4, Topology};
///
/// // Absorb: corner has 2 neighbours, interior has 4.
/// let absorb = Square4::new(4, 4, EdgeBehavior::Absorb).unwrap();
/// assert_eq!(absorb.neighbours(0, 0).len(), 2);
/// assert_eq!(absorb.neighbours(1, 1).len(), 4);
///
/// // Wrap: every cell has exactly 4 neighbours (torus).
/// let wrap = Square4::new(4, 4, EdgeBehavior::Wrap).unwrap();
/// assert_eq!(wrap.neighbours(0, 0).len(), 4);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Out-of-bounds neighbour maps to the boundary cell (self-loop).
    Clamp,
    /// Out-of-bounds neighbour wraps to the opposite side (periodic).
    Wrap,
    /// Out-of-bounds neighbour is omitted (fewer neighbours at edges).
    #[default]
    Absorb,
}
