//! Shape coordinate model.
//!
//! Each shape kind owns its coordinate tuple and the geometry operations on
//! it (vertices, resize, scale, translate); [`Coords`] is the tagged union
//! the rest of the crate dispatches through. Ordering invariants like
//! `x1 > x0` are deliberately not enforced here; the resize validator owns
//! minimum-size behavior.

mod circle;
mod ellipse;
mod rect;
mod text;

pub use circle::CircleCoords;
pub use ellipse::EllipseCoords;
pub use rect::RectCoords;
pub use text::{DEFAULT_FONT_SIZE, FONT_SIZE_RATIO, TextCoords};

use crate::error::GeometryError;
use crate::vertex::Direction;
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Closed set of shape kinds.
///
/// The poly family is reserved: the legacy surface carried the variants with
/// empty branches everywhere, so they deserialize and compare but every
/// geometry dispatch on them is a logged no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeType {
    #[default]
    Rect,
    Circle,
    Ellipse,
    Text,
    Image,
    Poly,
    Polyline,
    Polygon,
}

impl ShapeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeType::Rect => "rect",
            ShapeType::Circle => "circle",
            ShapeType::Ellipse => "ellipse",
            ShapeType::Text => "text",
            ShapeType::Image => "image",
            ShapeType::Poly => "poly",
            ShapeType::Polyline => "polyline",
            ShapeType::Polygon => "polygon",
        }
    }

    /// Whether this is one of the reserved, unimplemented poly variants.
    pub fn is_reserved(&self) -> bool {
        matches!(
            self,
            ShapeType::Poly | ShapeType::Polyline | ShapeType::Polygon
        )
    }

    /// Template tuple overlaid by partially-supplied coordinates.
    pub fn template(&self) -> Option<&'static [f64]> {
        match self {
            ShapeType::Rect | ShapeType::Image => Some(&[0.0, 0.0, 20.0, 20.0]),
            ShapeType::Circle => Some(&[0.0, 0.0, 10.0]),
            ShapeType::Ellipse => Some(&[0.0, 0.0, 5.0, 5.0]),
            ShapeType::Text => Some(&[0.0, 0.0, 12.0]),
            _ => None,
        }
    }
}

impl std::fmt::Display for ShapeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coordinate tuple of a placed shape, tagged by layout.
///
/// Rect and image share the box layout; the record's [`ShapeType`] keeps
/// them apart where it matters (defaults, secondary payload).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Coords {
    Rect(RectCoords),
    Circle(CircleCoords),
    Ellipse(EllipseCoords),
    Text(TextCoords),
}

impl Coords {
    /// Build a coordinate tuple for `shape_type` from a numeric prefix,
    /// overlaying the type's template for any missing members.
    ///
    /// Returns `None` for the reserved poly family.
    pub fn from_partial(shape_type: ShapeType, values: &[f64]) -> Option<Coords> {
        let template = shape_type.template()?;
        let mut merged: Vec<f64> = template.to_vec();
        for (slot, value) in merged.iter_mut().zip(values) {
            *slot = *value;
        }
        match shape_type {
            ShapeType::Rect | ShapeType::Image => Some(Coords::Rect(RectCoords::new(
                merged[0], merged[1], merged[2], merged[3],
            ))),
            ShapeType::Circle => {
                Some(Coords::Circle(CircleCoords::new(merged[0], merged[1], merged[2])))
            }
            ShapeType::Ellipse => Some(Coords::Ellipse(EllipseCoords::new(
                merged[0], merged[1], merged[2], merged[3],
            ))),
            ShapeType::Text => Some(Coords::Text(TextCoords::new(merged[0], merged[1], merged[2]))),
            _ => None,
        }
    }

    /// Resize by dragging the handle `direction` to `target`.
    ///
    /// Text has no handles; circle and ellipse reject diagonals. Callers
    /// treat the error as a logged no-op.
    pub fn resize(&self, direction: Direction, target: Point) -> Result<Coords, GeometryError> {
        match self {
            Coords::Rect(rect) => Ok(Coords::Rect(rect.resize(direction, target))),
            Coords::Circle(circle) => circle.resize(direction, target).map(Coords::Circle),
            Coords::Ellipse(ellipse) => ellipse.resize(direction, target).map(Coords::Ellipse),
            Coords::Text(_) => Err(GeometryError::InvalidDirection {
                shape: ShapeType::Text,
                direction,
            }),
        }
    }

    /// Shift the whole shape; extents, radii and font size are preserved by
    /// construction.
    pub fn translate(&self, delta: Vec2) -> Coords {
        match self {
            Coords::Rect(rect) => Coords::Rect(rect.translate(delta)),
            Coords::Circle(circle) => Coords::Circle(circle.translate(delta)),
            Coords::Ellipse(ellipse) => Coords::Ellipse(ellipse.translate(delta)),
            Coords::Text(text) => Coords::Text(text.translate(delta)),
        }
    }

    /// Rescale by independent width/height ratios (see [`crate::scale`]).
    pub fn scale(&self, width_ratio: f64, height_ratio: f64) -> Coords {
        match self {
            Coords::Rect(rect) => Coords::Rect(rect.scale(width_ratio, height_ratio)),
            Coords::Circle(circle) => Coords::Circle(circle.scale(width_ratio, height_ratio)),
            Coords::Ellipse(ellipse) => Coords::Ellipse(ellipse.scale(width_ratio, height_ratio)),
            Coords::Text(text) => Coords::Text(text.scale(width_ratio, height_ratio)),
        }
    }

    /// The flat tuple form, as it would appear in a legacy `coords`
    /// attribute.
    pub fn as_vec(&self) -> Vec<f64> {
        match self {
            Coords::Rect(r) => vec![r.x0, r.y0, r.x1, r.y1],
            Coords::Circle(c) => vec![c.cx, c.cy, c.r],
            Coords::Ellipse(e) => vec![e.cx, e.cy, e.rx, e.ry],
            Coords::Text(t) => vec![t.x, t.y, t.font_size],
        }
    }
}

/// Parse a legacy coordinate string ("x0,y0,x1,y1" or whitespace separated)
/// into a numeric tuple.
///
/// Empty, absent or unparseable input means "no coordinates supplied": the
/// whole tuple is discarded and callers fall back to default geometry.
pub fn parse_coords(input: &str) -> Option<Vec<f64>> {
    let values: Vec<f64> = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect::<Result<_, _>>()
        .ok()?;
    if values.is_empty() { None } else { Some(values) }
}

/// Style properties for shapes: an ordered key→value map mirroring the
/// legacy SVG presentation attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeStyle {
    properties: BTreeMap<String, String>,
}

impl ShapeStyle {
    /// An empty style map (no presentation attributes).
    pub fn empty() -> Self {
        Self {
            properties: BTreeMap::new(),
        }
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Overlay `other`'s properties onto this map, keeping untouched keys.
    pub fn merge(&mut self, other: &ShapeStyle) {
        for (key, value) in &other.properties {
            self.properties.insert(key.clone(), value.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl Default for ShapeStyle {
    fn default() -> Self {
        let mut style = Self::empty();
        style.set("fill", "#ffffff");
        style.set("fill-opacity", "0.2");
        style.set("stroke", "#ffffff");
        style.set("stroke-width", "3");
        style
    }
}
