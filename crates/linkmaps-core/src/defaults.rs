//! Default geometry for shapes created without explicit coordinates.

use crate::shapes::{
    CircleCoords, Coords, DEFAULT_FONT_SIZE, EllipseCoords, RectCoords, ShapeType, TextCoords,
};
use kurbo::Size;
use log::debug;

/// A resolved creation geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedCoords {
    pub coords: Coords,
    /// True when a text anchor fell back to the container center; such a
    /// label should be re-centered once the render layer has measured it
    /// (see `TextCoords::center_adjusted`).
    pub default_text_anchor: bool,
}

impl ResolvedCoords {
    fn new(coords: Coords) -> Self {
        Self {
            coords,
            default_text_anchor: false,
        }
    }
}

/// Compute a starting geometry for a shape created without coordinates.
///
/// Boxes take 10% of each container dimension, centered; the circle/ellipse
/// radius is the smaller of the two 10% extents. Image boxes use the natural
/// pixel size around the center instead of the heuristic (falling back to
/// the 10% box when no natural size is known yet). Text anchors at the
/// container center with the default font size. Reserved poly variants have
/// no geometry.
pub fn default_geometry(
    shape_type: ShapeType,
    container: Size,
    natural: Option<Size>,
) -> Option<Coords> {
    let center_x = container.width / 2.0;
    let center_y = container.height / 2.0;

    let default_x = container.width * 0.1;
    let default_y = container.height * 0.1;
    let default_radius = if default_x >= default_y {
        default_y
    } else {
        default_x
    };

    match shape_type {
        ShapeType::Rect => Some(Coords::Rect(RectCoords::new(
            center_x - default_x,
            center_y - default_y,
            center_x + default_x,
            center_y + default_y,
        ))),
        ShapeType::Circle => Some(Coords::Circle(CircleCoords::new(
            center_x,
            center_y,
            default_radius,
        ))),
        ShapeType::Ellipse => Some(Coords::Ellipse(EllipseCoords::new(
            center_x,
            center_y,
            default_radius,
            default_radius,
        ))),
        ShapeType::Image => {
            let (half_w, half_h) = match natural {
                Some(size) => (size.width / 2.0, size.height / 2.0),
                None => {
                    debug!("image shape created before its natural size is known");
                    (default_x, default_y)
                }
            };
            Some(Coords::Rect(RectCoords::new(
                center_x - half_w,
                center_y - half_h,
                center_x + half_w,
                center_y + half_h,
            )))
        }
        ShapeType::Text => Some(Coords::Text(TextCoords::new(
            center_x,
            center_y,
            DEFAULT_FONT_SIZE,
        ))),
        _ => None,
    }
}

/// Resolve creation coordinates: explicit values are merged over the type's
/// template, absent values fall back to [`default_geometry`].
///
/// Text is resolved member-wise: an unset (zero) x or y defaults to the
/// container center and an unset font size to the default size, matching the
/// legacy falsy-member behavior.
pub fn resolve_coords(
    shape_type: ShapeType,
    explicit: Option<&[f64]>,
    container: Size,
    natural: Option<Size>,
) -> Option<ResolvedCoords> {
    let Some(values) = explicit else {
        let coords = default_geometry(shape_type, container, natural)?;
        return Some(ResolvedCoords {
            coords,
            default_text_anchor: shape_type == ShapeType::Text,
        });
    };

    if shape_type == ShapeType::Text {
        let mut default_anchor = false;
        let mut member = |i: usize, fallback: f64| -> f64 {
            match values.get(i).copied() {
                Some(v) if v != 0.0 && v.is_finite() => v,
                _ => {
                    if i < 2 {
                        default_anchor = true;
                    }
                    fallback
                }
            }
        };
        let x = member(0, container.width / 2.0);
        let y = member(1, container.height / 2.0);
        let font_size = member(2, DEFAULT_FONT_SIZE);
        return Some(ResolvedCoords {
            coords: Coords::Text(TextCoords::new(x, y, font_size)),
            default_text_anchor: default_anchor,
        });
    }

    Coords::from_partial(shape_type, values).map(ResolvedCoords::new)
}
