//! Ratio scaling of shape coordinates.
//!
//! Used both when the container is resized and when it is zoomed: every
//! stored coordinate set is mapped through `new_size / old_size` ratios.
//! The same function serves the cross-surface copy path, where the ratios
//! are `target_size / source_size`.

use crate::shapes::Coords;

/// Rescale a coordinate tuple by independent width/height ratios.
///
/// Rect/image/ellipse scale each component by its axis ratio; text scales
/// its anchor per axis and the font size by the width ratio; a circle's
/// single radius uses [`radius_ratio`]. Scaling by `(1, 1)` returns the
/// input unchanged for every shape kind.
pub fn coords_by_ratio(coords: &Coords, width_ratio: f64, height_ratio: f64) -> Coords {
    coords.scale(width_ratio, height_ratio)
}

/// The ratio applied to a circle's radius.
///
/// A circle has one radius but two axis ratios, so the smaller ratio wins,
/// except that a ratio of exactly 1 means "this axis did not change", in
/// which case the other axis's ratio is used so the circle tracks whichever
/// axis actually moved. Because of this rule, circle scaling does not
/// compose: `scale(scale(c, r1), r2)` is not `scale(c, r1*r2)` whenever an
/// intermediate ratio lands on 1.
pub fn radius_ratio(width_ratio: f64, height_ratio: f64) -> f64 {
    let mut ratio = if width_ratio >= height_ratio {
        height_ratio
    } else {
        width_ratio
    };

    if width_ratio == 1.0 {
        ratio = height_ratio;
    }
    if height_ratio == 1.0 {
        ratio = width_ratio;
    }

    ratio
}
