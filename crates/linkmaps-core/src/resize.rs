//! Minimum-size validation for resize gestures.
//!
//! A drag may propose any geometry; this module guarantees the result never
//! goes below the size floor. Distances under the floor clamp up to exactly
//! the floor, never below it and never past it, so a degenerate box is
//! intercepted here rather than surfaced as an error.

use crate::shapes::RectCoords;
use crate::vertex::Direction;

/// Minimum box width for rect/image/ellipse shapes.
pub const MIN_WIDTH: f64 = 30.0;
/// Minimum box height for rect/image/ellipse shapes.
pub const MIN_HEIGHT: f64 = 30.0;
/// Minimum radius for circle/ellipse shapes.
pub const MIN_RADIUS: f64 = 15.0;

/// Clamp a proposed rect box to the minimum size.
///
/// The drag direction decides which edge was free: east-family handles push
/// the right edge out to `x0 + MIN_WIDTH`, west-family handles pull the left
/// edge in to `x1 - MIN_WIDTH`, and likewise for the vertical families. The
/// anchored edge never moves.
pub fn valid_rect_coords(proposed: RectCoords, direction: Direction) -> RectCoords {
    let RectCoords {
        mut x0,
        mut y0,
        mut x1,
        mut y1,
    } = proposed;

    if x1 - x0 <= MIN_WIDTH {
        if matches!(direction, Direction::Se | Direction::Ne | Direction::E) {
            x1 = x0 + MIN_WIDTH;
        }
        if matches!(direction, Direction::Nw | Direction::Sw | Direction::W) {
            x0 = x1 - MIN_WIDTH;
        }
    }

    if y1 - y0 <= MIN_HEIGHT {
        if matches!(direction, Direction::Se | Direction::Sw | Direction::S) {
            y1 = y0 + MIN_HEIGHT;
        }
        if matches!(direction, Direction::Nw | Direction::Ne | Direction::N) {
            y0 = y1 - MIN_HEIGHT;
        }
    }

    RectCoords { x0, y0, x1, y1 }
}

/// Clamp a requested radius change to the minimum radius.
///
/// A distance at or under the floor snaps to exactly [`MIN_RADIUS`] (this
/// also catches a drag past the center, where the distance goes negative);
/// anything larger is taken as-is.
pub fn valid_radius(coords_diff: f64) -> f64 {
    if coords_diff <= MIN_RADIUS {
        MIN_RADIUS
    } else {
        coords_diff
    }
}
