//! Axis arithmetic shared by [`Square4`](crate::Square4) and
//! [`Square8`](crate::Square8).

use crate::edge::EdgeBehavior;
use crate::error::SpaceError;
use cartograph_core::Coord;
use smallvec::SmallVec;

/// Largest accepted width or height. Coordinates are `i32`.
pub(crate) const MAX_DIM: u32 = i32::MAX as u32;

/// Validate board dimensions.
pub(crate) fn check_dims(width: u32, height: u32) -> Result<(), SpaceError> {
    if width == 0 || height == 0 {
        return Err(SpaceError::EmptySpace);
    }
    for (name, value) in [("width", width), ("height", height)] {
        if value > MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name,
                value,
                max: MAX_DIM,
            });
        }
    }
    Ok(())
}

/// Map an axis position onto `0..len`, or `None` if it falls off an
/// absorbing edge.
pub(crate) fn fold_axis(pos: i32, len: u32, edge: EdgeBehavior) -> Option<i32> {
    let len = len as i32;
    if (0..len).contains(&pos) {
        return Some(pos);
    }
    match edge {
        EdgeBehavior::Absorb => None,
        EdgeBehavior::Clamp => Some(pos.clamp(0, len - 1)),
        EdgeBehavior::Wrap => Some(pos.rem_euclid(len)),
    }
}

/// Neighbours of `(x, y)` at the given offsets, in offset order.
pub(crate) fn offset_neighbours(
    (x, y): Coord,
    (width, height): (u32, u32),
    edge: EdgeBehavior,
    offsets: &[Coord],
) -> SmallVec<[Coord; 8]> {
    offsets
        .iter()
        .filter_map(|&(dx, dy)| {
            Some((
                fold_axis(x + dx, width, edge)?,
                fold_axis(y + dy, height, edge)?,
            ))
        })
        .collect()
}
