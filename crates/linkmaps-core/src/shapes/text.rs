//! Text label coordinates.
//!
//! A text shape anchors at its baseline and is never vertex-resized, only
//! face-dragged. Glyph measurement belongs to the render layer, so the
//! helpers that need a rendered width take it as a parameter.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

use super::rect::RectCoords;

/// Fraction of the font size treated as the label's visual height.
pub const FONT_SIZE_RATIO: f64 = 0.5;

/// Default font size when none is supplied.
pub const DEFAULT_FONT_SIZE: f64 = 20.0;

/// Baseline anchor + font size, the coordinate tuple `[x, y, fontSize]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextCoords {
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
}

impl TextCoords {
    pub fn new(x: f64, y: f64, font_size: f64) -> Self {
        Self { x, y, font_size }
    }

    pub fn anchor(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Shift the anchor, preserving the font size.
    pub fn translate(&self, delta: Vec2) -> TextCoords {
        TextCoords::new(self.x + delta.x, self.y + delta.y, self.font_size)
    }

    /// The anchor scales like a point and the font size tracks the width
    /// ratio, so a label keeps its proportion to the container width.
    pub fn scale(&self, width_ratio: f64, height_ratio: f64) -> TextCoords {
        TextCoords::new(
            self.x * width_ratio,
            self.y * height_ratio,
            self.font_size * width_ratio,
        )
    }

    /// Re-center a default-placed label once its rendered width is known:
    /// the anchor shifts left by half the width and down by half the visual
    /// glyph height, so the label straddles the container midpoint.
    pub fn center_adjusted(&self, measured_width: f64) -> TextCoords {
        let center_x = measured_width / 2.0;
        let center_y = self.font_size * FONT_SIZE_RATIO / 2.0;
        TextCoords::new(self.x - center_x, self.y + center_y, self.font_size)
    }

    /// The clickable box for a rendered label: `measured_width` wide, with
    /// the visual glyph height rising above the baseline.
    pub fn to_rect_coords(&self, measured_width: f64) -> RectCoords {
        let height = self.font_size * FONT_SIZE_RATIO / 2.0;
        RectCoords::new(self.x, self.y - height, self.x + measured_width, self.y)
    }
}
