//! Circle coordinates.

use crate::error::GeometryError;
use crate::resize;
use crate::scale;
use crate::vertex::{Direction, Vertex};
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Center + radius, the coordinate tuple `[cx, cy, r]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleCoords {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
}

impl CircleCoords {
    pub fn new(cx: f64, cy: f64, r: f64) -> Self {
        Self { cx, cy, r }
    }

    pub fn center(&self) -> Point {
        Point::new(self.cx, self.cy)
    }

    /// Four cardinal handles at `center ± (0, r)` and `center ± (r, 0)`.
    pub fn vertices(&self) -> Vec<Vertex> {
        vec![
            Vertex::new(Point::new(self.cx, self.cy - self.r), Direction::N),
            Vertex::new(Point::new(self.cx, self.cy + self.r), Direction::S),
            Vertex::new(Point::new(self.cx - self.r, self.cy), Direction::W),
            Vertex::new(Point::new(self.cx + self.r, self.cy), Direction::E),
        ]
    }

    /// Resize by dragging a cardinal handle to `target`.
    ///
    /// The new radius is the pointer's distance from the center along the
    /// dragged axis, floored at the minimum radius. Diagonal directions have
    /// no handle on a circle.
    pub fn resize(&self, direction: Direction, target: Point) -> Result<CircleCoords, GeometryError> {
        let coords_diff = match direction {
            Direction::N => self.cy - target.y,
            Direction::S => target.y - self.cy,
            Direction::W => self.cx - target.x,
            Direction::E => target.x - self.cx,
            _ => {
                return Err(GeometryError::InvalidDirection {
                    shape: super::ShapeType::Circle,
                    direction,
                });
            }
        };
        Ok(CircleCoords::new(
            self.cx,
            self.cy,
            resize::valid_radius(coords_diff),
        ))
    }

    /// Shift the center, preserving the radius.
    pub fn translate(&self, delta: Vec2) -> CircleCoords {
        CircleCoords::new(self.cx + delta.x, self.cy + delta.y, self.r)
    }

    /// Scale the center per axis and the single radius by the asymmetric
    /// radius ratio (see [`scale::radius_ratio`]).
    pub fn scale(&self, width_ratio: f64, height_ratio: f64) -> CircleCoords {
        CircleCoords::new(
            self.cx * width_ratio,
            self.cy * height_ratio,
            self.r * scale::radius_ratio(width_ratio, height_ratio),
        )
    }
}
