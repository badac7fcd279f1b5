//! Error taxonomy for recoverable geometry conditions.
//!
//! Nothing in this crate treats a bad geometry update as fatal: a single
//! malformed drag must not abort an editing session. Callers log these
//! conditions and continue with unchanged state.

use crate::shapes::ShapeType;
use crate::vertex::Direction;
use thiserror::Error;

/// Recoverable conditions raised by geometry and registry operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// A resize was requested along a direction the shape has no handle for
    /// (e.g. a diagonal on a circle). The operation is a no-op.
    #[error("unexpected direction {direction} for {shape} resize")]
    InvalidDirection {
        shape: ShapeType,
        direction: Direction,
    },

    /// A registry operation referenced an index with no record behind it.
    #[error("no shape registered at index {0}")]
    MissingShape(u32),

    /// A drag continued after its target was marked non-movable. The shape
    /// is left unchanged.
    #[error("shape at index {0} is no longer movable")]
    NotMovable(u32),
}
