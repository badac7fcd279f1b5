//! Resize-handle ("vertex") calculation.
//!
//! Vertices are derived from a shape's coordinates on demand and never stored;
//! the ordering for a given shape kind is deterministic so callers can zip the
//! result against an equally-ordered list of handle widgets.

use crate::shapes::Coords;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Compass direction of a resize handle.
///
/// Rect and image shapes carry all eight; circle and ellipse only the four
/// cardinal ones; text has no handles at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    N,
    S,
    E,
    W,
    Ne,
    Nw,
    Se,
    Sw,
}

impl Direction {
    /// Lowercase name, matching the legacy `data-direction` vocabulary.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::N => "n",
            Direction::S => "s",
            Direction::E => "e",
            Direction::W => "w",
            Direction::Ne => "ne",
            Direction::Nw => "nw",
            Direction::Se => "se",
            Direction::Sw => "sw",
        }
    }

    /// CSS cursor name for a handle pointing this way.
    pub fn cursor(&self) -> String {
        format!("{}-resize", self.as_str())
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resize handle with its position and direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    /// Position in container coordinates.
    pub position: Point,
    /// Which way this handle resizes.
    pub direction: Direction,
}

impl Vertex {
    pub fn new(position: Point, direction: Direction) -> Self {
        Self {
            position,
            direction,
        }
    }
}

/// Compute the resize handles for a coordinate set.
///
/// Rect/image: 8 vertices, corners first (`nw, sw, ne, se`) then edge
/// midpoints (`n, s, w, e`). Circle/ellipse: 4 cardinal vertices
/// (`n, s, w, e`). Text: none.
pub fn calculate_vertices(coords: &Coords) -> Vec<Vertex> {
    match coords {
        Coords::Rect(rect) => rect.vertices(),
        Coords::Circle(circle) => circle.vertices(),
        Coords::Ellipse(ellipse) => ellipse.vertices(),
        Coords::Text(_) => Vec::new(),
    }
}
