//! Drag interaction state machine.
//!
//! Two mutually exclusive drag sessions, never nested: grabbing a shape's
//! face moves it, grabbing a vertex handle resizes it. The machine holds
//! only the index of the shape under edit; geometry is always read back
//! through the registry, and every move writes straight into it, so the
//! registry stays authoritative for the whole gesture.

use crate::error::GeometryError;
use crate::registry::ShapeRegistry;
use crate::shapes::Coords;
use crate::vertex::{Direction, Vertex, calculate_vertices};
use kurbo::{Point, Vec2};
use log::debug;

/// Which part of a shape is currently grabbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrabType {
    Face,
    Vertex,
}

/// Current drag session, if any.
#[derive(Debug, Clone, Default)]
enum DragState {
    #[default]
    Idle,
    FaceGrabbed {
        index: u32,
        /// Pointer position at grab time.
        origin: Point,
        /// Pointer position as of the latest move.
        last_pointer: Point,
        movable: bool,
    },
    VertexGrabbed {
        index: u32,
        direction: Direction,
        /// Position of the grabbed handle at grab time.
        origin: Point,
        movable: bool,
    },
}

/// Result of a drag step: the shape's new coordinates and the handle
/// positions derived from them, ready to hand to the render layer.
#[derive(Debug, Clone, PartialEq)]
pub struct MovedCoords {
    pub index: u32,
    pub coords: Coords,
    pub vertices: Vec<Vertex>,
}

impl MovedCoords {
    fn for_record(index: u32, coords: Coords) -> Self {
        Self {
            index,
            vertices: calculate_vertices(&coords),
            coords,
        }
    }
}

/// The interaction state machine.
#[derive(Debug, Clone, Default)]
pub struct Interaction {
    state: DragState,
}

impl Interaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, DragState::Idle)
    }

    /// Index of the shape under edit, if a drag is active.
    pub fn grabbed_index(&self) -> Option<u32> {
        match self.state {
            DragState::Idle => None,
            DragState::FaceGrabbed { index, .. } | DragState::VertexGrabbed { index, .. } => {
                Some(index)
            }
        }
    }

    pub fn grab_type(&self) -> Option<GrabType> {
        match self.state {
            DragState::Idle => None,
            DragState::FaceGrabbed { .. } => Some(GrabType::Face),
            DragState::VertexGrabbed { .. } => Some(GrabType::Vertex),
        }
    }

    /// Pointer (face grab) or handle (vertex grab) position at grab time.
    pub fn drag_origin(&self) -> Option<Point> {
        match self.state {
            DragState::Idle => None,
            DragState::FaceGrabbed { origin, .. } | DragState::VertexGrabbed { origin, .. } => {
                Some(origin)
            }
        }
    }

    /// Begin a face drag on the shape at `index`.
    pub fn grab_face(
        &mut self,
        registry: &ShapeRegistry,
        index: u32,
        pointer: Point,
    ) -> Result<(), GeometryError> {
        if registry.get(index).is_none() {
            return Err(GeometryError::MissingShape(index));
        }
        if !self.is_idle() {
            debug!("face grab on shape {index} replaces an active drag");
        }
        self.state = DragState::FaceGrabbed {
            index,
            origin: pointer,
            last_pointer: pointer,
            movable: true,
        };
        Ok(())
    }

    /// Begin a vertex drag on the handle `direction` of the shape at
    /// `index`. The handle must exist in the shape's current vertex set.
    pub fn grab_vertex(
        &mut self,
        registry: &ShapeRegistry,
        index: u32,
        direction: Direction,
    ) -> Result<(), GeometryError> {
        let record = registry
            .get(index)
            .ok_or(GeometryError::MissingShape(index))?;
        let vertex = calculate_vertices(&record.coords)
            .into_iter()
            .find(|v| v.direction == direction)
            .ok_or(GeometryError::InvalidDirection {
                shape: record.shape_type,
                direction,
            })?;
        if !self.is_idle() {
            debug!("vertex grab on shape {index} replaces an active drag");
        }
        self.state = DragState::VertexGrabbed {
            index,
            direction,
            origin: vertex.position,
            movable: true,
        };
        Ok(())
    }

    /// Feed a pointer move in page coordinates.
    ///
    /// Face drags translate the shape by the pointer delta; vertex drags
    /// convert the pointer to container-local coordinates (page minus
    /// `container_origin`) and run it through the resize validation for the
    /// grabbed direction. The result is written into the registry and
    /// returned. Moves while idle are ignored (`Ok(None)`); all error
    /// conditions leave the shape unchanged.
    pub fn pointer_move(
        &mut self,
        registry: &mut ShapeRegistry,
        page: Point,
        container_origin: Point,
    ) -> Result<Option<MovedCoords>, GeometryError> {
        match &mut self.state {
            DragState::Idle => Ok(None),
            DragState::FaceGrabbed {
                index,
                last_pointer,
                movable,
                ..
            } => {
                let index = *index;
                if !*movable {
                    return Err(GeometryError::NotMovable(index));
                }
                let record = registry
                    .get(index)
                    .ok_or(GeometryError::MissingShape(index))?;
                let delta = Vec2::new(page.x - last_pointer.x, page.y - last_pointer.y);
                let moved = record.coords.translate(delta);
                *last_pointer = page;
                registry.set_coords(index, moved);
                Ok(Some(MovedCoords::for_record(index, moved)))
            }
            DragState::VertexGrabbed {
                index,
                direction,
                movable,
                ..
            } => {
                let (index, direction) = (*index, *direction);
                if !*movable {
                    return Err(GeometryError::NotMovable(index));
                }
                let record = registry
                    .get(index)
                    .ok_or(GeometryError::MissingShape(index))?;
                let local = Point::new(page.x - container_origin.x, page.y - container_origin.y);
                let moved = record.coords.resize(direction, local)?;
                registry.set_coords(index, moved);
                Ok(Some(MovedCoords::for_record(index, moved)))
            }
        }
    }

    /// End the active drag.
    ///
    /// The final coordinates are re-read from the registry (the
    /// authoritative, already-moved geometry) rather than trusting the last
    /// computed delta. The machine returns to idle either way.
    pub fn release(&mut self, registry: &ShapeRegistry) -> Option<MovedCoords> {
        self.freeze();
        let index = self.grabbed_index()?;
        self.state = DragState::Idle;
        match registry.get(index) {
            Some(record) => Some(MovedCoords::for_record(index, record.coords)),
            None => {
                debug!("released drag on shape {index} which is gone from the registry");
                None
            }
        }
    }

    /// Mark the active grab non-movable: subsequent moves report
    /// [`GeometryError::NotMovable`] and change nothing until release.
    pub fn freeze(&mut self) {
        match &mut self.state {
            DragState::Idle => {}
            DragState::FaceGrabbed { movable, .. } | DragState::VertexGrabbed { movable, .. } => {
                *movable = false;
            }
        }
    }

    /// Abandon the active drag without finalizing. For hosts that lose
    /// pointer capture mid-gesture.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }
}
