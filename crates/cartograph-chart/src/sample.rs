//! Derived-cost arithmetic shared by the registry and query contexts.

use cartograph_core::{AgentId, Tile, TileKind};

/// Map a chart cost onto `[0, 1]`: `1` at the seeds, falling linearly to `0`
/// at `zero_value` and beyond.
///
/// `max(0, zero_value - cost) / zero_value`, clamped. Identically `0` when
/// `zero_value` is `0`. Unreachable cells (`UNSET`) sample as `0`.
///
/// ```
/// use cartograph_chart::normalize;
///
/// assert_eq!(normalize(0.0, 5.0), 1.0);
/// assert_eq!(normalize(5.0, 5.0), 0.0);
/// assert_eq!(normalize(f32::INFINITY, 5.0), 0.0);
/// assert_eq!(normalize(2.0, 0.0), 0.0);
/// ```
pub fn normalize(cost: f32, zero_value: f32) -> f32 {
    debug_assert!(!cost.is_nan() && !zero_value.is_nan(), "NaN in normalize");
    if zero_value == 0.0 {
        return 0.0;
    }
    ((zero_value - cost).max(0.0) / zero_value).clamp(0.0, 1.0)
}

/// Whether `me` may walk through `tile`: free ground, or its own cell.
pub fn is_passable(tile: &Tile, me: AgentId) -> bool {
    match tile.kind {
        TileKind::Free => true,
        TileKind::Agent => tile.is_owned_by(me),
        TileKind::Wall | TileKind::Resource | TileKind::Haven => false,
    }
}

/// The default entry cost: `1` for passable tiles, impassable otherwise.
pub fn default_cost(tile: &Tile, me: AgentId) -> Option<f32> {
    is_passable(tile, me).then_some(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_cost_by_kind() {
        let me = AgentId(1);
        assert_eq!(default_cost(&Tile::FREE, me), Some(1.0));
        assert_eq!(default_cost(&Tile::agent(me), me), Some(1.0));
        assert_eq!(default_cost(&Tile::agent(AgentId(2)), me), None);
        assert_eq!(default_cost(&Tile::WALL, me), None);
        assert_eq!(default_cost(&Tile::HAVEN, me), None);
        assert_eq!(default_cost(&Tile::resource(Some(me)), me), None);
    }

    #[test]
    fn normalize_is_linear_inside_range() {
        assert_eq!(normalize(1.0, 4.0), 0.75);
        assert_eq!(normalize(3.0, 4.0), 0.25);
        assert_eq!(normalize(9.0, 4.0), 0.0);
    }

    #[test]
    fn negative_zero_value_never_escapes_range() {
        assert_eq!(normalize(0.0, -2.0), 0.0);
        assert_eq!(normalize(-5.0, -2.0), 0.0);
    }

    proptest! {
        #[test]
        fn normalize_stays_in_unit_interval(
            cost in prop_oneof![0.0f32..1000.0, Just(f32::INFINITY)],
            zero in -100.0f32..100.0,
        ) {
            let v = normalize(cost, zero);
            prop_assert!((0.0..=1.0).contains(&v), "normalize({cost}, {zero}) = {v}");
        }

        #[test]
        fn normalize_is_non_increasing_in_cost(a in 0.0f32..100.0, b in 0.0f32..100.0, zero in 0.1f32..100.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(normalize(lo, zero) >= normalize(hi, zero));
        }
    }
}
