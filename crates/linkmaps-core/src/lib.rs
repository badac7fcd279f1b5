//! LinkMaps Core Library
//!
//! Geometry and interaction engine for overlaying resizable, draggable,
//! link-bearing shapes on an image. The host's rendering layer owns the
//! actual elements; this crate owns the shape records, the drag state
//! machine, resize validation, and ratio scaling across container resizes
//! and zooms.

pub mod defaults;
pub mod editor;
pub mod error;
pub mod input;
pub mod interaction;
pub mod registry;
pub mod resize;
pub mod scale;
pub mod shapes;
pub mod vertex;

pub use editor::{EditorOptions, Hooks, ImageMapEditor, ImageSource, PendingRelayout};
pub use error::GeometryError;
pub use input::{PointerEvent, PointerTarget};
pub use interaction::{GrabType, Interaction, MovedCoords};
pub use registry::{Secondary, ShapeRecord, ShapeRegistry, ShapeUpdate};
pub use scale::coords_by_ratio;
pub use shapes::{
    CircleCoords, Coords, EllipseCoords, RectCoords, ShapeStyle, ShapeType, TextCoords,
};
pub use vertex::{Direction, Vertex, calculate_vertices};
