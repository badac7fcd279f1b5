//! Editor facade: configuration, hooks, pointer routing, zoom.
//!
//! Owns the registry and the interaction machine and exposes the surface a
//! host wires its rendering layer to: shape creation with default geometry,
//! pointer event routing, container resize/zoom relayout, and snapshot
//! export for copying a shape set onto a differently-sized surface.

use crate::defaults;
use crate::error::GeometryError;
use crate::input::{PointerEvent, PointerTarget};
use crate::interaction::Interaction;
use crate::registry::{Secondary, ShapeRecord, ShapeRegistry};
use crate::scale;
use crate::shapes::{Coords, ShapeStyle, ShapeType, parse_coords};
use crate::vertex::{Vertex, calculate_vertices};
use kurbo::{Point, Size};
use log::{debug, warn};

/// Recognized configuration options.
#[derive(Debug, Clone)]
pub struct EditorOptions {
    /// Initial shape kind used by [`ImageMapEditor::add_shape`].
    pub shape: ShapeType,
    /// Enables vertex handles and dragging; view-only mode still resolves
    /// clicks to links.
    pub is_edit_mode: bool,
    /// Style applied to newly created shapes.
    pub shape_style: ShapeStyle,
    /// Label content for newly created text shapes.
    pub shape_text: String,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            shape: ShapeType::Rect,
            is_edit_mode: false,
            shape_style: ShapeStyle::default(),
            shape_text: "press on link".to_string(),
        }
    }
}

/// Callback invoked when a shape is clicked; receives the event and the
/// shape's link, if any.
pub type ClickHook = Box<dyn FnMut(&PointerEvent, Option<&str>)>;
/// Callback receiving the event plus the affected shape's type and coords.
pub type ShapeHook = Box<dyn FnMut(&PointerEvent, ShapeType, &Coords)>;
/// Callback receiving the event plus the full record of the pressed shape.
pub type SelectHook = Box<dyn FnMut(&PointerEvent, &ShapeRecord)>;

/// Application callback hooks, fired from [`ImageMapEditor::handle_pointer_event`].
#[derive(Default)]
pub struct Hooks {
    pub on_click: Option<ClickHook>,
    pub on_mouse_down: Option<ShapeHook>,
    pub on_mouse_move: Option<ShapeHook>,
    pub on_mouse_up: Option<ShapeHook>,
    pub on_select: Option<SelectHook>,
}

impl std::fmt::Debug for Hooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hooks")
            .field("on_click", &self.on_click.is_some())
            .field("on_mouse_down", &self.on_mouse_down.is_some())
            .field("on_mouse_move", &self.on_mouse_move.is_some())
            .field("on_mouse_up", &self.on_mouse_up.is_some())
            .field("on_select", &self.on_select.is_some())
            .finish()
    }
}

/// Source of the overlaid picture for image shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSource {
    pub href: String,
    /// Natural pixel size, once the render layer has loaded the picture.
    pub natural: Option<Size>,
}

/// A staged zoom relayout, applied after the host's transition settles.
///
/// Only one can be pending: a later zoom replaces an earlier one, and the
/// scale ratios are computed at apply time, so a rapid double-zoom can
/// never apply stale ratios.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingRelayout {
    /// Target container width.
    pub width: f64,
    /// Target container height.
    pub height: f64,
}

#[derive(Debug, Clone, Copy)]
struct Press {
    position: Point,
    face: Option<u32>,
}

/// The editing surface for one overlaid image.
#[derive(Debug)]
pub struct ImageMapEditor {
    registry: ShapeRegistry,
    interaction: Interaction,
    hooks: Hooks,

    shape_type: ShapeType,
    is_edit_mode: bool,
    shape_style: ShapeStyle,
    shape_text: String,
    shape_image: Option<ImageSource>,

    container: Size,
    /// Page position of the container's top-left corner; vertex drags
    /// convert page pointer coordinates to container-local ones with it.
    container_origin: Point,
    pending_relayout: Option<PendingRelayout>,
    press: Option<Press>,
}

impl ImageMapEditor {
    pub fn new(options: EditorOptions, container: Size) -> Self {
        Self {
            registry: ShapeRegistry::new(),
            interaction: Interaction::new(),
            hooks: Hooks::default(),
            shape_type: options.shape,
            is_edit_mode: options.is_edit_mode,
            shape_style: options.shape_style,
            shape_text: options.shape_text,
            shape_image: None,
            container,
            container_origin: Point::ZERO,
            pending_relayout: None,
            press: None,
        }
    }

    pub fn registry(&self) -> &ShapeRegistry {
        &self.registry
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub fn hooks_mut(&mut self) -> &mut Hooks {
        &mut self.hooks
    }

    pub fn is_edit_mode(&self) -> bool {
        self.is_edit_mode
    }

    pub fn container_size(&self) -> Size {
        self.container
    }

    pub fn set_container_origin(&mut self, origin: Point) {
        self.container_origin = origin;
    }

    pub fn set_shape_type(&mut self, shape_type: ShapeType) {
        self.shape_type = shape_type;
    }

    /// Overlay style properties onto the current brush style.
    pub fn set_shape_style(&mut self, style: &ShapeStyle) {
        self.shape_style.merge(style);
    }

    /// Configure the label for subsequently created text shapes.
    pub fn set_text_shape(&mut self, text: impl Into<String>, style: Option<&ShapeStyle>) {
        if let Some(style) = style {
            self.set_shape_style(style);
        }
        self.shape_text = text.into();
    }

    /// Configure the picture for subsequently created image shapes.
    pub fn set_image_shape(
        &mut self,
        href: impl Into<String>,
        natural: Option<Size>,
        style: Option<&ShapeStyle>,
    ) {
        if let Some(style) = style {
            self.set_shape_style(style);
        }
        self.shape_image = Some(ImageSource {
            href: href.into(),
            natural,
        });
    }

    /// Create a shape and return its index.
    ///
    /// Explicit coordinates are merged over the type's template; absent ones
    /// resolve to default geometry (centered 10% box, natural image size, or
    /// container-centered text). Reserved poly variants create nothing.
    pub fn add_shape(
        &mut self,
        coords: Option<&[f64]>,
        link_url: Option<&str>,
        shape_type: Option<ShapeType>,
    ) -> Option<u32> {
        if let Some(shape_type) = shape_type {
            self.set_shape_type(shape_type);
        }
        let shape_type = self.shape_type;
        if shape_type.is_reserved() {
            debug!("shape type {shape_type} is reserved, nothing created");
            return None;
        }

        let natural = self.shape_image.as_ref().and_then(|image| image.natural);
        let resolved = defaults::resolve_coords(shape_type, coords, self.container, natural)?;

        let secondary = match shape_type {
            ShapeType::Text => Secondary::text(self.shape_text.clone()),
            ShapeType::Image => match &self.shape_image {
                Some(image) => Secondary::image(image.href.clone()),
                None => Secondary::default(),
            },
            _ => Secondary::default(),
        };

        let index = self.registry.create(
            shape_type,
            resolved.coords,
            link_url.unwrap_or(""),
            self.shape_style.clone(),
            secondary,
        );
        Some(index)
    }

    /// [`add_shape`](Self::add_shape) with coordinates in the legacy string
    /// form; an unparseable string counts as "no coordinates supplied".
    pub fn add_shape_from_str(
        &mut self,
        coords: Option<&str>,
        link_url: Option<&str>,
        shape_type: Option<ShapeType>,
    ) -> Option<u32> {
        let parsed = coords.and_then(parse_coords);
        self.add_shape(parsed.as_deref(), link_url, shape_type)
    }

    /// Re-center a default-placed text label once the render layer has
    /// measured its width.
    pub fn adjust_default_text_anchor(&mut self, index: u32, measured_width: f64) {
        match self.registry.get(index) {
            Some(record) => {
                if let Coords::Text(text) = record.coords {
                    let adjusted = text.center_adjusted(measured_width);
                    self.registry.set_coords(index, Coords::Text(adjusted));
                }
            }
            None => warn!("{}", GeometryError::MissingShape(index)),
        }
    }

    /// Remove one shape. The caller detaches its visual resources.
    pub fn remove_shape(&mut self, index: u32) -> Option<ShapeRecord> {
        if self.interaction.grabbed_index() == Some(index) {
            self.interaction.cancel();
        }
        self.registry.remove(index)
    }

    pub fn remove_all_shapes(&mut self) {
        self.interaction.cancel();
        self.registry.remove_all();
    }

    pub fn get_shape(&self, index: u32) -> Option<&ShapeRecord> {
        self.registry.get(index)
    }

    /// Ordered snapshot of all records.
    pub fn get_all_shapes(&self) -> Vec<&ShapeRecord> {
        self.registry.get_all()
    }

    /// Resize-handle positions for a shape, in the deterministic per-type
    /// order, for the render layer to lay handle widgets over.
    pub fn vertices_for(&self, index: u32) -> Option<Vec<Vertex>> {
        self.registry
            .get(index)
            .map(|record| calculate_vertices(&record.coords))
    }

    /// Route a pointer event through the interaction machine and fire the
    /// matching hooks. Geometry errors are logged and leave every shape
    /// unchanged.
    pub fn handle_pointer_event(&mut self, event: &PointerEvent) {
        match *event {
            PointerEvent::Down { position, target } => self.pointer_down(event, position, target),
            PointerEvent::Move { position } => self.pointer_moved(event, position),
            PointerEvent::Up { position } => self.pointer_up(event, position),
        }
    }

    fn pointer_down(&mut self, event: &PointerEvent, position: Point, target: PointerTarget) {
        match target {
            PointerTarget::Face(index) => {
                self.press = Some(Press {
                    position,
                    face: Some(index),
                });
                self.fire_select_and_down(event, index);
                if self.is_edit_mode {
                    if let Err(err) = self.interaction.grab_face(&self.registry, index, position) {
                        warn!("face grab ignored: {err}");
                    }
                }
            }
            PointerTarget::Vertex { index, direction } => {
                self.press = Some(Press {
                    position,
                    face: None,
                });
                self.fire_select_and_down(event, index);
                if self.is_edit_mode {
                    if let Err(err) =
                        self.interaction.grab_vertex(&self.registry, index, direction)
                    {
                        warn!("vertex grab ignored: {err}");
                    }
                }
            }
            PointerTarget::Canvas => {
                self.press = Some(Press {
                    position,
                    face: None,
                });
            }
        }
    }

    fn fire_select_and_down(&mut self, event: &PointerEvent, index: u32) {
        if !self.is_edit_mode {
            return;
        }
        let Some(record) = self.registry.get(index) else {
            warn!("{}", GeometryError::MissingShape(index));
            return;
        };
        if let Some(hook) = &mut self.hooks.on_select {
            hook(event, record);
        }
        if let Some(hook) = &mut self.hooks.on_mouse_down {
            hook(event, record.shape_type, &record.coords);
        }
    }

    fn pointer_moved(&mut self, event: &PointerEvent, position: Point) {
        match self
            .interaction
            .pointer_move(&mut self.registry, position, self.container_origin)
        {
            Ok(Some(moved)) => {
                if let Some(record) = self.registry.get(moved.index) {
                    let shape_type = record.shape_type;
                    if let Some(hook) = &mut self.hooks.on_mouse_move {
                        hook(event, shape_type, &moved.coords);
                    }
                }
            }
            Ok(None) => {}
            Err(err) => warn!("pointer move ignored: {err}"),
        }
    }

    fn pointer_up(&mut self, event: &PointerEvent, position: Point) {
        if let Some(finalized) = self.interaction.release(&self.registry) {
            if let Some(record) = self.registry.get(finalized.index) {
                let shape_type = record.shape_type;
                if let Some(hook) = &mut self.hooks.on_mouse_up {
                    hook(event, shape_type, &finalized.coords);
                }
            }
        }

        // A click is a press and release of a face with no travel between.
        if let Some(press) = self.press.take() {
            if press.position != position {
                return;
            }
            if let Some(index) = press.face {
                let link = self
                    .registry
                    .get(index)
                    .filter(|record| !record.link_url.is_empty())
                    .map(|record| record.link_url.clone());
                if let Some(hook) = &mut self.hooks.on_click {
                    hook(event, link.as_deref());
                }
            }
        }
    }

    /// React to the container changing size out from under the overlay:
    /// rescale every shape by the dimension ratios immediately. A staged
    /// zoom relayout, if any, is dropped; the resize supersedes it.
    pub fn container_resized(&mut self, width: f64, height: f64) {
        if self.container.width == width && self.container.height == height {
            return;
        }
        if self.pending_relayout.take().is_some() {
            debug!("pending zoom relayout dropped by container resize");
        }
        self.relayout(Size::new(width, height));
    }

    /// Stage a zoom to `percentages` (`[width, height]`, height defaulting
    /// to width) of the current container size.
    ///
    /// The geometry recompute is deferred until
    /// [`apply_pending_relayout`](Self::apply_pending_relayout) so the
    /// host's size transition can settle first; zooming again before then
    /// replaces the staged target and compounds from it.
    pub fn zoom(&mut self, percentages: &[f64]) {
        let Some(&width_pct) = percentages.first() else {
            return;
        };
        let height_pct = percentages.get(1).copied().unwrap_or(width_pct);

        let base = match self.pending_relayout {
            Some(pending) => Size::new(pending.width, pending.height),
            None => self.container,
        };
        self.pending_relayout = Some(PendingRelayout {
            width: width_pct * 0.01 * base.width,
            height: height_pct * 0.01 * base.height,
        });
    }

    pub fn pending_relayout(&self) -> Option<PendingRelayout> {
        self.pending_relayout
    }

    /// Apply the staged zoom relayout, if any. Ratios are computed here,
    /// against the container size actually in effect. Returns whether a
    /// relayout ran.
    pub fn apply_pending_relayout(&mut self) -> bool {
        match self.pending_relayout.take() {
            Some(pending) => {
                self.relayout(Size::new(pending.width, pending.height));
                true
            }
            None => false,
        }
    }

    fn relayout(&mut self, new: Size) {
        let width_ratio = new.width / self.container.width;
        let height_ratio = new.height / self.container.height;

        let scaled: Vec<(u32, Coords)> = self
            .registry
            .get_all()
            .iter()
            .map(|record| {
                (
                    record.index,
                    scale::coords_by_ratio(&record.coords, width_ratio, height_ratio),
                )
            })
            .collect();
        for (index, coords) in scaled {
            self.registry.set_coords(index, coords);
        }

        self.container = new;
    }

    /// Clone every record with its coordinates rescaled for a surface of
    /// `target` size, for reproducing the shape set on a differently-sized
    /// copy of the image.
    pub fn scaled_snapshot(&self, target: Size) -> Vec<ShapeRecord> {
        let width_ratio = target.width / self.container.width;
        let height_ratio = target.height / self.container.height;
        self.registry
            .get_all()
            .into_iter()
            .map(|record| {
                let mut copy = record.clone();
                copy.coords = scale::coords_by_ratio(&record.coords, width_ratio, height_ratio);
                copy
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vertex::Direction;
    use std::cell::RefCell;
    use std::rc::Rc;

    const CONTAINER: Size = Size::new(800.0, 600.0);

    fn edit_editor() -> ImageMapEditor {
        ImageMapEditor::new(
            EditorOptions {
                is_edit_mode: true,
                ..EditorOptions::default()
            },
            CONTAINER,
        )
    }

    fn down(position: Point, target: PointerTarget) -> PointerEvent {
        PointerEvent::Down { position, target }
    }

    #[test]
    fn test_add_shape_with_default_geometry() {
        let mut editor = edit_editor();
        let index = editor.add_shape(None, Some("https://example.com"), None).unwrap();
        let record = editor.get_shape(index).unwrap();
        assert_eq!(record.shape_type, ShapeType::Rect);
        assert_eq!(record.coords.as_vec(), [320.0, 240.0, 480.0, 360.0]);
        assert_eq!(record.link_url, "https://example.com");
    }

    #[test]
    fn test_add_text_shape_carries_label() {
        let mut editor = edit_editor();
        editor.set_text_shape("visit us", None);
        let index = editor
            .add_shape(None, None, Some(ShapeType::Text))
            .unwrap();
        let record = editor.get_shape(index).unwrap();
        assert_eq!(record.secondary.text.as_deref(), Some("visit us"));
        assert_eq!(record.coords.as_vec(), [400.0, 300.0, 20.0]);
    }

    #[test]
    fn test_add_image_shape_uses_natural_size() {
        let mut editor = edit_editor();
        editor.set_image_shape("overlay.png", Some(Size::new(200.0, 100.0)), None);
        let index = editor
            .add_shape(None, None, Some(ShapeType::Image))
            .unwrap();
        let record = editor.get_shape(index).unwrap();
        assert_eq!(record.secondary.image_ref.as_deref(), Some("overlay.png"));
        assert_eq!(record.coords.as_vec(), [300.0, 250.0, 500.0, 350.0]);
    }

    #[test]
    fn test_add_shape_from_str() {
        let mut editor = edit_editor();
        let index = editor
            .add_shape_from_str(Some("10,20,110,70"), None, Some(ShapeType::Rect))
            .unwrap();
        assert_eq!(
            editor.get_shape(index).unwrap().coords.as_vec(),
            [10.0, 20.0, 110.0, 70.0]
        );

        // Garbage coordinates fall back to default geometry.
        let index = editor
            .add_shape_from_str(Some("not numbers"), None, Some(ShapeType::Rect))
            .unwrap();
        assert_eq!(
            editor.get_shape(index).unwrap().coords.as_vec(),
            [320.0, 240.0, 480.0, 360.0]
        );
    }

    #[test]
    fn test_reserved_type_creates_nothing() {
        let mut editor = edit_editor();
        assert!(editor.add_shape(None, None, Some(ShapeType::Poly)).is_none());
        assert!(editor.get_all_shapes().is_empty());
    }

    #[test]
    fn test_drag_session_through_events() {
        let mut editor = edit_editor();
        let index = editor
            .add_shape(Some(&[100.0, 100.0, 20.0]), None, Some(ShapeType::Circle))
            .unwrap();

        editor.handle_pointer_event(&down(
            Point::new(120.0, 100.0),
            PointerTarget::Vertex {
                index,
                direction: Direction::E,
            },
        ));
        editor.handle_pointer_event(&PointerEvent::Move {
            position: Point::new(150.0, 100.0),
        });
        editor.handle_pointer_event(&PointerEvent::Up {
            position: Point::new(150.0, 100.0),
        });

        assert_eq!(
            editor.get_shape(index).unwrap().coords.as_vec(),
            [100.0, 100.0, 50.0]
        );
        assert!(editor.interaction().is_idle());
    }

    #[test]
    fn test_view_mode_never_grabs() {
        let mut editor = ImageMapEditor::new(EditorOptions::default(), CONTAINER);
        let index = editor
            .add_shape(Some(&[10.0, 10.0, 60.0, 60.0]), None, Some(ShapeType::Rect))
            .unwrap();

        editor.handle_pointer_event(&down(Point::new(20.0, 20.0), PointerTarget::Face(index)));
        editor.handle_pointer_event(&PointerEvent::Move {
            position: Point::new(80.0, 80.0),
        });

        assert!(editor.interaction().is_idle());
        assert_eq!(
            editor.get_shape(index).unwrap().coords.as_vec(),
            [10.0, 10.0, 60.0, 60.0]
        );
    }

    #[test]
    fn test_hooks_fire_across_a_drag() {
        let mut editor = edit_editor();
        let index = editor
            .add_shape(Some(&[10.0, 10.0, 60.0, 60.0]), None, Some(ShapeType::Rect))
            .unwrap();

        let calls = Rc::new(RefCell::new(Vec::new()));
        let log = calls.clone();
        editor.hooks_mut().on_select = Some(Box::new(move |_, record| {
            log.borrow_mut().push(format!("select {}", record.index));
        }));
        let log = calls.clone();
        editor.hooks_mut().on_mouse_down = Some(Box::new(move |_, shape_type, _| {
            log.borrow_mut().push(format!("down {shape_type}"));
        }));
        let log = calls.clone();
        editor.hooks_mut().on_mouse_move = Some(Box::new(move |_, _, coords| {
            log.borrow_mut().push(format!("move {:?}", coords.as_vec()));
        }));
        let log = calls.clone();
        editor.hooks_mut().on_mouse_up = Some(Box::new(move |_, _, coords| {
            log.borrow_mut().push(format!("up {:?}", coords.as_vec()));
        }));

        editor.handle_pointer_event(&down(Point::new(20.0, 20.0), PointerTarget::Face(index)));
        editor.handle_pointer_event(&PointerEvent::Move {
            position: Point::new(30.0, 20.0),
        });
        editor.handle_pointer_event(&PointerEvent::Up {
            position: Point::new(30.0, 20.0),
        });

        let calls = calls.borrow();
        assert_eq!(calls[0], format!("select {index}"));
        assert_eq!(calls[1], "down rect");
        assert_eq!(calls[2], "move [20.0, 10.0, 70.0, 60.0]");
        assert_eq!(calls[3], "up [20.0, 10.0, 70.0, 60.0]");
    }

    #[test]
    fn test_click_fires_only_without_travel() {
        let mut editor = edit_editor();
        let index = editor
            .add_shape(
                Some(&[10.0, 10.0, 60.0, 60.0]),
                Some("https://example.com"),
                Some(ShapeType::Rect),
            )
            .unwrap();

        let clicks = Rc::new(RefCell::new(Vec::new()));
        let log = clicks.clone();
        editor.hooks_mut().on_click = Some(Box::new(move |_, link| {
            log.borrow_mut().push(link.map(str::to_owned));
        }));

        // Press and release in place: a click.
        editor.handle_pointer_event(&down(Point::new(20.0, 20.0), PointerTarget::Face(index)));
        editor.handle_pointer_event(&PointerEvent::Up {
            position: Point::new(20.0, 20.0),
        });
        // Press, drag away, release: not a click.
        editor.handle_pointer_event(&down(Point::new(20.0, 20.0), PointerTarget::Face(index)));
        editor.handle_pointer_event(&PointerEvent::Move {
            position: Point::new(50.0, 20.0),
        });
        editor.handle_pointer_event(&PointerEvent::Up {
            position: Point::new(50.0, 20.0),
        });

        let clicks = clicks.borrow();
        assert_eq!(clicks.len(), 1);
        assert_eq!(clicks[0].as_deref(), Some("https://example.com"));
    }

    #[test]
    fn test_container_resized_rescales_immediately() {
        let mut editor = edit_editor();
        let index = editor
            .add_shape(Some(&[100.0, 100.0, 20.0]), None, Some(ShapeType::Circle))
            .unwrap();

        editor.container_resized(400.0, 600.0);

        // Width halved, height unchanged: the radius follows the width.
        assert_eq!(
            editor.get_shape(index).unwrap().coords.as_vec(),
            [50.0, 100.0, 10.0]
        );
        assert_eq!(editor.container_size(), Size::new(400.0, 600.0));
    }

    #[test]
    fn test_zoom_stages_and_applies() {
        let mut editor = edit_editor();
        let index = editor
            .add_shape(Some(&[10.0, 10.0, 60.0, 60.0]), None, Some(ShapeType::Rect))
            .unwrap();

        editor.zoom(&[200.0]);
        // Nothing moves until the host applies the relayout.
        assert_eq!(
            editor.get_shape(index).unwrap().coords.as_vec(),
            [10.0, 10.0, 60.0, 60.0]
        );
        assert!(editor.apply_pending_relayout());
        assert_eq!(
            editor.get_shape(index).unwrap().coords.as_vec(),
            [20.0, 20.0, 120.0, 120.0]
        );
        assert_eq!(editor.container_size(), Size::new(1600.0, 1200.0));
        assert!(!editor.apply_pending_relayout());
    }

    #[test]
    fn test_rapid_double_zoom_compounds_without_stale_ratios() {
        let mut editor = edit_editor();
        let index = editor
            .add_shape(Some(&[10.0, 10.0, 60.0, 60.0]), None, Some(ShapeType::Rect))
            .unwrap();

        editor.zoom(&[200.0]);
        editor.zoom(&[50.0]);
        // The second zoom replaced the first, compounding from its target.
        assert_eq!(
            editor.pending_relayout(),
            Some(PendingRelayout {
                width: 800.0,
                height: 600.0,
            })
        );
        assert!(editor.apply_pending_relayout());
        // 200% then 50% of that lands back on the starting size.
        assert_eq!(
            editor.get_shape(index).unwrap().coords.as_vec(),
            [10.0, 10.0, 60.0, 60.0]
        );
    }

    #[test]
    fn test_asymmetric_zoom_percentages() {
        let mut editor = edit_editor();
        let index = editor
            .add_shape(Some(&[100.0, 100.0, 20.0]), None, Some(ShapeType::Circle))
            .unwrap();

        editor.zoom(&[100.0, 200.0]);
        editor.apply_pending_relayout();

        // Width ratio 1 defers the radius to the height ratio.
        assert_eq!(
            editor.get_shape(index).unwrap().coords.as_vec(),
            [100.0, 200.0, 40.0]
        );
    }

    #[test]
    fn test_scaled_snapshot_for_other_surface() {
        let mut editor = edit_editor();
        let rect = editor
            .add_shape(Some(&[10.0, 10.0, 60.0, 60.0]), None, Some(ShapeType::Rect))
            .unwrap();
        let circle = editor
            .add_shape(Some(&[100.0, 100.0, 20.0]), None, Some(ShapeType::Circle))
            .unwrap();
        assert_eq!((rect, circle), (0, 1));

        let snapshot = editor.scaled_snapshot(Size::new(400.0, 300.0));
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].coords.as_vec(), [5.0, 5.0, 30.0, 30.0]);
        assert_eq!(snapshot[1].coords.as_vec(), [50.0, 50.0, 10.0]);
        // The editor's own records are untouched.
        assert_eq!(
            editor.get_all_shapes()[0].coords.as_vec(),
            [10.0, 10.0, 60.0, 60.0]
        );
    }

    #[test]
    fn test_adjust_default_text_anchor() {
        let mut editor = edit_editor();
        editor.set_text_shape("hello", None);
        let index = editor
            .add_shape(None, None, Some(ShapeType::Text))
            .unwrap();

        editor.adjust_default_text_anchor(index, 120.0);
        assert_eq!(
            editor.get_shape(index).unwrap().coords.as_vec(),
            [340.0, 305.0, 20.0]
        );
    }

    #[test]
    fn test_remove_during_drag_cancels_it() {
        let mut editor = edit_editor();
        let index = editor
            .add_shape(Some(&[10.0, 10.0, 60.0, 60.0]), None, Some(ShapeType::Rect))
            .unwrap();
        editor.handle_pointer_event(&down(Point::new(20.0, 20.0), PointerTarget::Face(index)));
        assert!(!editor.interaction().is_idle());

        assert!(editor.remove_shape(index).is_some());
        assert!(editor.interaction().is_idle());
        assert!(editor.get_shape(index).is_none());
    }
}
