//! Sentinel values and the negative-means-absent adapter.

/// Cost held by a cell no seed reaches.
///
/// Positive infinity keeps every comparison in the flood well defined and
/// makes normalized samples of unreachable cells collapse to 0.
pub const UNSET: f32 = f32::INFINITY;

/// Float sentinel for "not a seed" / "impassable" in the float convention.
pub const IMPASSABLE: f32 = -1.0;

/// Convert a float-convention result into the canonical shape.
///
/// Any negative value (the sentinel) becomes `None`; non-negative values
/// pass through.
///
/// ```
/// use cartograph_nav::from_sentinel;
///
/// assert_eq!(from_sentinel(2.5), Some(2.5));
/// assert_eq!(from_sentinel(0.0), Some(0.0));
/// assert_eq!(from_sentinel(-1.0), None);
/// ```
pub fn from_sentinel(value: f32) -> Option<f32> {
    debug_assert!(!value.is_nan(), "NaN passed as a seed or entry cost");
    if value < 0.0 {
        None
    } else {
        Some(value)
    }
}

/// Inverse of [`from_sentinel`]: `None` becomes [`IMPASSABLE`].
pub fn to_sentinel(value: Option<f32>) -> f32 {
    value.unwrap_or(IMPASSABLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_values_are_absent() {
        assert_eq!(from_sentinel(-0.5), None);
        assert_eq!(from_sentinel(IMPASSABLE), None);
        assert_eq!(from_sentinel(f32::NEG_INFINITY), None);
    }

    #[test]
    fn to_sentinel_inverts() {
        assert_eq!(to_sentinel(None), IMPASSABLE);
        assert_eq!(to_sentinel(Some(3.0)), 3.0);
        assert_eq!(from_sentinel(to_sentinel(Some(3.0))), Some(3.0));
    }
}
