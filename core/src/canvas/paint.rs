//! Stroke and fill styling shared by every draw call.

use serde::{Deserialize, Serialize};

use super::Color;

/// Stroke width used before the first frame sets a per-bar width.
pub const DEFAULT_STROKE_WIDTH: f32 = 5.0;

/// Radius of the soft edge applied around every primitive.
pub const DEFAULT_BLUR_RADIUS: f32 = 5.0;

/// Whether closed shapes are filled or outlined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaintStyle {
    #[default]
    Fill,
    Stroke,
}

/// Shape of line ends and points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeCap {
    /// Line ends exactly at its endpoints.
    Butt,
    /// Semicircle of radius `stroke_width / 2` past each endpoint.
    #[default]
    Round,
    /// Square extension of `stroke_width / 2` past each endpoint.
    Square,
}

/// How a blur mask filter treats the shape interior and its surroundings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlurStyle {
    /// Blur inside and outside.
    Normal,
    /// Solid inside, blurred outside.
    #[default]
    Solid,
    /// Nothing inside, blurred outside.
    Outer,
    /// Blurred inside, nothing outside.
    Inner,
}

/// Soft-edge filter applied to primitives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaskFilter {
    pub radius: f32,
    pub style: BlurStyle,
}

impl MaskFilter {
    pub fn solid(radius: f32) -> Self {
        Self {
            radius,
            style: BlurStyle::Solid,
        }
    }
}

/// Style state used for every primitive of a frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    pub color: Color,
    pub stroke_width: f32,
    pub style: PaintStyle,
    pub cap: StrokeCap,
    pub anti_alias: bool,
    pub mask_filter: Option<MaskFilter>,
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            stroke_width: 0.0,
            style: PaintStyle::Fill,
            cap: StrokeCap::Butt,
            anti_alias: false,
            mask_filter: None,
        }
    }
}

impl Paint {
    /// Initial style of the visualizer: rounded caps, antialiasing and a
    /// solid blur of the given radius.
    pub fn visualizer(color: Color, blur_radius: f32) -> Self {
        let mut paint = Self::default();
        paint.set_stroke_width(DEFAULT_STROKE_WIDTH);
        paint.set_color(color);
        paint.set_stroke_cap(StrokeCap::Round);
        paint.set_anti_alias(true);
        paint.set_mask_filter(Some(MaskFilter::solid(blur_radius)));
        paint
    }

    pub fn set_stroke_width(&mut self, width: f32) {
        self.stroke_width = width;
    }

    pub fn set_style(&mut self, style: PaintStyle) {
        self.style = style;
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_mask_filter(&mut self, filter: Option<MaskFilter>) {
        self.mask_filter = filter;
    }

    pub fn set_stroke_cap(&mut self, cap: StrokeCap) {
        self.cap = cap;
    }

    pub fn set_anti_alias(&mut self, anti_alias: bool) {
        self.anti_alias = anti_alias;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visualizer_paint_defaults() {
        let paint = Paint::visualizer(Color::BLACK, DEFAULT_BLUR_RADIUS);
        assert_eq!(paint.cap, StrokeCap::Round);
        assert!(paint.anti_alias);
        assert_eq!(paint.mask_filter, Some(MaskFilter::solid(5.0)));
        assert_eq!(paint.stroke_width, DEFAULT_STROKE_WIDTH);
        assert_eq!(paint.style, PaintStyle::Fill);
    }
}
