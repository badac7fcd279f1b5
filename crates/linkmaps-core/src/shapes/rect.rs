//! Axis-aligned box coordinates, shared by rect and image shapes.

use crate::resize;
use crate::vertex::{Direction, Vertex};
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Top-left / bottom-right box, the coordinate tuple `[x0, y0, x1, y1]`.
///
/// Image shapes reuse this layout unchanged; only their defaults and
/// secondary payload differ.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectCoords {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl RectCoords {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Build a box from a top-left position and extents.
    pub fn from_position(position: Point, width: f64, height: f64) -> Self {
        Self::new(position.x, position.y, position.x + width, position.y + height)
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// Corner handles first (`nw, sw, ne, se`), then edge midpoints
    /// (`n, s, w, e`); midpoints interpolate the opposite corners.
    pub fn vertices(&self) -> Vec<Vertex> {
        vec![
            Vertex::new(Point::new(self.x0, self.y0), Direction::Nw),
            Vertex::new(Point::new(self.x0, self.y1), Direction::Sw),
            Vertex::new(Point::new(self.x1, self.y0), Direction::Ne),
            Vertex::new(Point::new(self.x1, self.y1), Direction::Se),
            Vertex::new(
                Point::new((self.x1 - self.x0) / 2.0 + self.x0, self.y0),
                Direction::N,
            ),
            Vertex::new(
                Point::new((self.x1 - self.x0) / 2.0 + self.x0, self.y1),
                Direction::S,
            ),
            Vertex::new(
                Point::new(self.x0, (self.y1 - self.y0) / 2.0 + self.y0),
                Direction::W,
            ),
            Vertex::new(
                Point::new(self.x1, (self.y1 - self.y0) / 2.0 + self.y0),
                Direction::E,
            ),
        ]
    }

    /// Resize by dragging the given handle to `target`.
    ///
    /// The handle decides which coordinates follow the pointer and which
    /// stay anchored; the result is clamped to the minimum box size.
    pub fn resize(&self, direction: Direction, target: Point) -> RectCoords {
        let proposed = match direction {
            Direction::Nw => RectCoords::new(target.x, target.y, self.x1, self.y1),
            Direction::Sw => RectCoords::new(target.x, self.y0, self.x1, target.y),
            Direction::Ne => RectCoords::new(self.x0, target.y, target.x, self.y1),
            Direction::Se => RectCoords::new(self.x0, self.y0, target.x, target.y),
            Direction::N => RectCoords::new(self.x0, target.y, self.x1, self.y1),
            Direction::S => RectCoords::new(self.x0, self.y0, self.x1, target.y),
            Direction::W => RectCoords::new(target.x, self.y0, self.x1, self.y1),
            Direction::E => RectCoords::new(self.x0, self.y0, target.x, self.y1),
        };
        resize::valid_rect_coords(proposed, direction)
    }

    /// Shift the whole box, preserving width and height by construction.
    pub fn translate(&self, delta: Vec2) -> RectCoords {
        RectCoords::new(
            self.x0 + delta.x,
            self.y0 + delta.y,
            self.x1 + delta.x,
            self.y1 + delta.y,
        )
    }

    /// Scale x-components by `width_ratio` and y-components by `height_ratio`.
    pub fn scale(&self, width_ratio: f64, height_ratio: f64) -> RectCoords {
        RectCoords::new(
            self.x0 * width_ratio,
            self.y0 * height_ratio,
            self.x1 * width_ratio,
            self.y1 * height_ratio,
        )
    }
}
