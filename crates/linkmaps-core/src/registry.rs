//! Shape registry: the authoritative store of all placed shapes.
//!
//! The registry owns every [`ShapeRecord`]; the interaction machine and the
//! render layer hold only indices and read back through here. Indices come
//! from a monotonically increasing counter and are never reused, so a
//! deleted shape's index stays dead for the registry's lifetime.

use crate::shapes::{Coords, ShapeStyle, ShapeType};
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Payload carried by text and image shapes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Secondary {
    /// Label content for text shapes.
    pub text: Option<String>,
    /// Reference to the overlaid image for image shapes.
    pub image_ref: Option<String>,
}

impl Secondary {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            text: Some(content.into()),
            image_ref: None,
        }
    }

    pub fn image(href: impl Into<String>) -> Self {
        Self {
            text: None,
            image_ref: Some(href.into()),
        }
    }

    fn merge(&mut self, other: &Secondary) {
        if let Some(text) = &other.text {
            self.text = Some(text.clone());
        }
        if let Some(image_ref) = &other.image_ref {
            self.image_ref = Some(image_ref.clone());
        }
    }
}

/// One placed shape: geometry plus everything the render layer needs to
/// reproduce it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeRecord {
    /// Stable identifier, unique for the shape's lifetime.
    pub index: u32,
    pub shape_type: ShapeType,
    pub coords: Coords,
    /// Target URL opened when the shape is clicked; empty means no link.
    pub link_url: String,
    pub style: ShapeStyle,
    pub secondary: Secondary,
}

/// Partial fields deep-merged into a record by [`ShapeRegistry::update`].
#[derive(Debug, Clone, Default)]
pub struct ShapeUpdate {
    pub shape_type: Option<ShapeType>,
    pub coords: Option<Coords>,
    pub link_url: Option<String>,
    /// Merged key-by-key into the existing style map.
    pub style: Option<ShapeStyle>,
    /// Merged field-by-field into the existing secondary payload.
    pub secondary: Option<Secondary>,
}

impl ShapeUpdate {
    /// An update that only replaces the coordinates.
    pub fn coords(coords: Coords) -> Self {
        Self {
            coords: Some(coords),
            ..Self::default()
        }
    }
}

/// Arena of shape records keyed by index.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShapeRegistry {
    shapes: BTreeMap<u32, ShapeRecord>,
    next_index: u32,
}

impl ShapeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new shape and return its index.
    pub fn create(
        &mut self,
        shape_type: ShapeType,
        coords: Coords,
        link_url: impl Into<String>,
        style: ShapeStyle,
        secondary: Secondary,
    ) -> u32 {
        let index = self.next_index;
        self.next_index += 1;
        self.shapes.insert(
            index,
            ShapeRecord {
                index,
                shape_type,
                coords,
                link_url: link_url.into(),
                style,
                secondary,
            },
        );
        index
    }

    /// Deep-merge `update` into the record at `index`.
    ///
    /// A missing record is created when the update carries both a type and
    /// coordinates; otherwise the call is a logged no-op.
    pub fn update(&mut self, index: u32, update: ShapeUpdate) {
        if let Some(record) = self.shapes.get_mut(&index) {
            if let Some(shape_type) = update.shape_type {
                record.shape_type = shape_type;
            }
            if let Some(coords) = update.coords {
                record.coords = coords;
            }
            if let Some(link_url) = update.link_url {
                record.link_url = link_url;
            }
            if let Some(style) = &update.style {
                record.style.merge(style);
            }
            if let Some(secondary) = &update.secondary {
                record.secondary.merge(secondary);
            }
            return;
        }

        match (update.shape_type, update.coords) {
            (Some(shape_type), Some(coords)) => {
                self.shapes.insert(
                    index,
                    ShapeRecord {
                        index,
                        shape_type,
                        coords,
                        link_url: update.link_url.unwrap_or_default(),
                        style: update.style.unwrap_or_default(),
                        secondary: update.secondary.unwrap_or_default(),
                    },
                );
                // Keep the counter ahead of externally chosen indices.
                self.next_index = self.next_index.max(index + 1);
            }
            _ => warn!("update for unknown shape index {index} dropped"),
        }
    }

    /// Replace just the coordinates of an existing record.
    /// Returns false (and logs) when the index is unknown.
    pub fn set_coords(&mut self, index: u32, coords: Coords) -> bool {
        match self.shapes.get_mut(&index) {
            Some(record) => {
                record.coords = coords;
                true
            }
            None => {
                warn!("coordinate write for unknown shape index {index} dropped");
                false
            }
        }
    }

    /// Remove the record at `index`. Any visual resources for the index must
    /// already be detached by the caller; the registry has no knowledge of
    /// them.
    pub fn remove(&mut self, index: u32) -> Option<ShapeRecord> {
        self.shapes.remove(&index)
    }

    /// Drop every record. Indices are not reset.
    pub fn remove_all(&mut self) {
        self.shapes.clear();
    }

    pub fn get(&self, index: u32) -> Option<&ShapeRecord> {
        self.shapes.get(&index)
    }

    /// Snapshot of all records, ordered by index.
    pub fn get_all(&self) -> Vec<&ShapeRecord> {
        self.shapes.values().collect()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Serialize the registry to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a registry from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{CircleCoords, RectCoords, TextCoords};

    fn rect_coords() -> Coords {
        Coords::Rect(RectCoords::new(0.0, 0.0, 100.0, 50.0))
    }

    #[test]
    fn test_create_then_get_round_trip() {
        let mut registry = ShapeRegistry::new();
        let index = registry.create(
            ShapeType::Rect,
            rect_coords(),
            "https://example.com",
            ShapeStyle::default(),
            Secondary::default(),
        );

        let record = registry.get(index).unwrap();
        assert_eq!(record.coords, rect_coords());
        assert_eq!(record.link_url, "https://example.com");
        assert_eq!(record.index, index);
    }

    #[test]
    fn test_indices_are_monotonic_and_never_reused() {
        let mut registry = ShapeRegistry::new();
        let a = registry.create(
            ShapeType::Rect,
            rect_coords(),
            "",
            ShapeStyle::default(),
            Secondary::default(),
        );
        let b = registry.create(
            ShapeType::Circle,
            Coords::Circle(CircleCoords::new(10.0, 10.0, 20.0)),
            "",
            ShapeStyle::default(),
            Secondary::default(),
        );
        registry.remove(a);
        let c = registry.create(
            ShapeType::Rect,
            rect_coords(),
            "",
            ShapeStyle::default(),
            Secondary::default(),
        );

        assert_eq!((a, b), (0, 1));
        // The freed index is not handed out again.
        assert_eq!(c, 2);
    }

    #[test]
    fn test_update_merges_without_discarding() {
        let mut registry = ShapeRegistry::new();
        let index = registry.create(
            ShapeType::Text,
            Coords::Text(TextCoords::new(10.0, 10.0, 20.0)),
            "https://example.com",
            ShapeStyle::default(),
            Secondary::text("hello"),
        );

        let mut style = ShapeStyle::empty();
        style.set("stroke", "#123456");
        registry.update(
            index,
            ShapeUpdate {
                coords: Some(Coords::Text(TextCoords::new(50.0, 50.0, 20.0))),
                style: Some(style),
                ..ShapeUpdate::default()
            },
        );

        let record = registry.get(index).unwrap();
        assert_eq!(record.coords.as_vec(), [50.0, 50.0, 20.0]);
        // Untouched fields survive the merge.
        assert_eq!(record.link_url, "https://example.com");
        assert_eq!(record.secondary.text.as_deref(), Some("hello"));
        assert_eq!(record.style.get("stroke"), Some("#123456"));
        assert_eq!(record.style.get("fill"), Some("#ffffff"));
    }

    #[test]
    fn test_update_creates_self_sufficient_record() {
        let mut registry = ShapeRegistry::new();
        registry.update(
            7,
            ShapeUpdate {
                shape_type: Some(ShapeType::Rect),
                coords: Some(rect_coords()),
                ..ShapeUpdate::default()
            },
        );

        assert!(registry.get(7).is_some());
        // The counter moved past the externally chosen index.
        let next = registry.create(
            ShapeType::Rect,
            rect_coords(),
            "",
            ShapeStyle::default(),
            Secondary::default(),
        );
        assert_eq!(next, 8);
    }

    #[test]
    fn test_update_unknown_without_geometry_is_noop() {
        let mut registry = ShapeRegistry::new();
        registry.update(3, ShapeUpdate::coords(rect_coords()));
        assert!(registry.get(3).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_remove_then_get_is_none() {
        let mut registry = ShapeRegistry::new();
        let index = registry.create(
            ShapeType::Rect,
            rect_coords(),
            "",
            ShapeStyle::default(),
            Secondary::default(),
        );
        assert!(registry.remove(index).is_some());
        assert!(registry.get(index).is_none());
    }

    #[test]
    fn test_remove_all_empties_registry() {
        // Scenario D: a three-shape registry survives nothing.
        let mut registry = ShapeRegistry::new();
        let indices = [
            registry.create(
                ShapeType::Rect,
                rect_coords(),
                "",
                ShapeStyle::default(),
                Secondary::default(),
            ),
            registry.create(
                ShapeType::Circle,
                Coords::Circle(CircleCoords::new(10.0, 10.0, 20.0)),
                "",
                ShapeStyle::default(),
                Secondary::default(),
            ),
            registry.create(
                ShapeType::Text,
                Coords::Text(TextCoords::new(10.0, 10.0, 20.0)),
                "",
                ShapeStyle::default(),
                Secondary::text("label"),
            ),
        ];

        registry.remove_all();

        assert!(registry.get_all().is_empty());
        for index in indices {
            assert!(registry.get(index).is_none());
        }
    }

    #[test]
    fn test_get_all_is_index_ordered() {
        let mut registry = ShapeRegistry::new();
        for _ in 0..3 {
            registry.create(
                ShapeType::Rect,
                rect_coords(),
                "",
                ShapeStyle::default(),
                Secondary::default(),
            );
        }
        let indices: Vec<u32> = registry.get_all().iter().map(|r| r.index).collect();
        assert_eq!(indices, [0, 1, 2]);
    }

    #[test]
    fn test_json_round_trip() {
        let mut registry = ShapeRegistry::new();
        registry.create(
            ShapeType::Circle,
            Coords::Circle(CircleCoords::new(100.0, 100.0, 20.0)),
            "https://example.com",
            ShapeStyle::default(),
            Secondary::default(),
        );

        let json = registry.to_json().unwrap();
        let back = ShapeRegistry::from_json(&json).unwrap();
        assert_eq!(back.len(), 1);
        assert_eq!(back.get(0).unwrap().coords.as_vec(), [100.0, 100.0, 20.0]);
        // The counter survives, so new shapes keep fresh indices.
        let mut back = back;
        let next = back.create(
            ShapeType::Rect,
            rect_coords(),
            "",
            ShapeStyle::default(),
            Secondary::default(),
        );
        assert_eq!(next, 1);
    }
}
