//! Pointer events consumed by the interaction machine.
//!
//! The host's rendering layer resolves hit-testing and element identity; it
//! tells this crate *what* was pressed (a shape face, one of its vertex
//! handles, or bare canvas) along with page coordinates.

use crate::vertex::Direction;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// What the pointer landed on, as resolved by the render layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerTarget {
    /// The body of the shape at this index.
    Face(u32),
    /// A resize handle of the shape at this index.
    Vertex { index: u32, direction: Direction },
    /// Empty canvas; nothing grabbable.
    Canvas,
}

/// A discrete pointer event in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down {
        position: Point,
        target: PointerTarget,
    },
    Move {
        position: Point,
    },
    Up {
        position: Point,
    },
}

impl PointerEvent {
    pub fn position(&self) -> Point {
        match self {
            PointerEvent::Down { position, .. }
            | PointerEvent::Move { position }
            | PointerEvent::Up { position } => *position,
        }
    }
}
