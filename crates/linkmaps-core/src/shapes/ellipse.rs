//! Ellipse coordinates.

use crate::error::GeometryError;
use crate::resize;
use crate::vertex::{Direction, Vertex};
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Center + per-axis radii, the coordinate tuple `[cx, cy, rx, ry]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EllipseCoords {
    pub cx: f64,
    pub cy: f64,
    pub rx: f64,
    pub ry: f64,
}

impl EllipseCoords {
    pub fn new(cx: f64, cy: f64, rx: f64, ry: f64) -> Self {
        Self { cx, cy, rx, ry }
    }

    pub fn center(&self) -> Point {
        Point::new(self.cx, self.cy)
    }

    /// Same four-handle layout as a circle, with `ry` offsetting north/south
    /// and `rx` offsetting west/east.
    pub fn vertices(&self) -> Vec<Vertex> {
        vec![
            Vertex::new(Point::new(self.cx, self.cy - self.ry), Direction::N),
            Vertex::new(Point::new(self.cx, self.cy + self.ry), Direction::S),
            Vertex::new(Point::new(self.cx - self.rx, self.cy), Direction::W),
            Vertex::new(Point::new(self.cx + self.rx, self.cy), Direction::E),
        ]
    }

    /// Resize by dragging a cardinal handle: north/south rewrite `ry`,
    /// west/east rewrite `rx`, each floored at the minimum radius.
    pub fn resize(
        &self,
        direction: Direction,
        target: Point,
    ) -> Result<EllipseCoords, GeometryError> {
        let mut moved = *self;
        match direction {
            Direction::N => moved.ry = resize::valid_radius(self.cy - target.y),
            Direction::S => moved.ry = resize::valid_radius(target.y - self.cy),
            Direction::W => moved.rx = resize::valid_radius(self.cx - target.x),
            Direction::E => moved.rx = resize::valid_radius(target.x - self.cx),
            _ => {
                return Err(GeometryError::InvalidDirection {
                    shape: super::ShapeType::Ellipse,
                    direction,
                });
            }
        }
        Ok(moved)
    }

    /// Shift the center, preserving both radii.
    pub fn translate(&self, delta: Vec2) -> EllipseCoords {
        EllipseCoords::new(self.cx + delta.x, self.cy + delta.y, self.rx, self.ry)
    }

    /// Radii scale like box edges: `rx` by the width ratio, `ry` by the
    /// height ratio.
    pub fn scale(&self, width_ratio: f64, height_ratio: f64) -> EllipseCoords {
        EllipseCoords::new(
            self.cx * width_ratio,
            self.cy * height_ratio,
            self.rx * width_ratio,
            self.ry * height_ratio,
        )
    }
}
