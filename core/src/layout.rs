//! Layout model: measurement contract, drawable rect and bar widths.

use std::f32::consts::PI;

use crate::config::VisualizerConfig;

/// Size used for a dimension that is not constrained exactly.
pub const DEFAULT_SIZE: u32 = 500;

/// Height of the band at the bottom of the widget that is never drawn into.
pub const BOTTOM_BAND: f32 = 50.0;

/// How the host constrains one dimension during measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureMode {
    /// The size is imposed by the host.
    Exactly,
    /// The size is an upper bound.
    AtMost,
    /// No constraint.
    Unspecified,
}

/// Measurement constraint for one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasureSpec {
    pub mode: MeasureMode,
    pub size: u32,
}

impl MeasureSpec {
    pub fn exactly(size: u32) -> Self {
        Self {
            mode: MeasureMode::Exactly,
            size,
        }
    }

    pub fn at_most(size: u32) -> Self {
        Self {
            mode: MeasureMode::AtMost,
            size,
        }
    }

    pub fn unspecified() -> Self {
        Self {
            mode: MeasureMode::Unspecified,
            size: 0,
        }
    }

    /// Only an exact constraint is honoured; anything else falls back to
    /// `default`, even when `default` exceeds an AT_MOST bound.
    pub fn resolve(self, default: u32) -> u32 {
        match self.mode {
            MeasureMode::Exactly => self.size,
            MeasureMode::AtMost | MeasureMode::Unspecified => default,
        }
    }
}

/// Measure the widget with the stock default size.
pub fn measure(width: MeasureSpec, height: MeasureSpec) -> (u32, u32) {
    measure_with_default(width, height, DEFAULT_SIZE)
}

pub fn measure_with_default(width: MeasureSpec, height: MeasureSpec, default: u32) -> (u32, u32) {
    (width.resolve(default), height.resolve(default))
}

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Geometry shared by all renderers for the current widget size.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutState {
    pub width: f32,
    pub height: f32,
    pub rect: Rect,
    /// Half of the rect width (not of the widget).
    pub center_x: f32,
    /// Half of the rect height (not of the widget).
    pub center_y: f32,
    pub item_margin: f32,
    pub spectrum_count: usize,
    pub spectrum_ratio: f32,
    pub circle_radius: f32,
    pub bottom_band: f32,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new(&VisualizerConfig::default())
    }
}

impl LayoutState {
    /// Layout for a widget that has not been sized yet.
    pub fn new(config: &VisualizerConfig) -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            rect: Rect::default(),
            center_x: 0.0,
            center_y: 0.0,
            item_margin: config.item_margin,
            spectrum_count: config.spectrum_count,
            spectrum_ratio: config.spectrum_ratio,
            circle_radius: config.circle_radius,
            bottom_band: config.bottom_band,
        }
    }

    /// Recompute the rect and centre for a new widget size.
    pub fn on_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.rect = Rect::new(0.0, 0.0, width, height - self.bottom_band);
        self.center_x = self.rect.width() / 2.0;
        self.center_y = self.rect.height() / 2.0;
    }

    /// Horizontal budget per bin in the linear modes.
    pub fn bar_width(&self) -> f32 {
        let count = self.spectrum_count as f32;
        (self.rect.width() - (count - 1.0) * self.item_margin) / count
    }

    /// Arc-length budget per bin along the base circle.
    pub fn arc_bar_width(&self) -> f32 {
        let count = self.spectrum_count as f32;
        (2.0 * PI * self.circle_radius - (count - 1.0) * self.item_margin) / count
    }

    /// Horizontal position of bin `i`.
    #[inline]
    pub fn bar_x(&self, i: usize) -> f32 {
        self.rect.width() * i as f32 / self.spectrum_count as f32
    }

    /// Horizontal midline of the rect.
    #[inline]
    pub fn mid_y(&self) -> f32 {
        self.rect.height() / 2.0
    }

    pub fn is_degenerate(&self) -> bool {
        self.spectrum_count == 0 || self.rect.width() <= 0.0 || self.rect.height() <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(count: usize, margin: f32) -> LayoutState {
        let config = VisualizerConfig {
            spectrum_count: count,
            item_margin: margin,
            ..Default::default()
        };
        LayoutState::new(&config)
    }

    #[test]
    fn test_measure_honours_exact_only() {
        assert_eq!(measure(MeasureSpec::exactly(320), MeasureSpec::exactly(240)), (320, 240));
        assert_eq!(measure(MeasureSpec::at_most(100), MeasureSpec::unspecified()), (500, 500));
        assert_eq!(measure(MeasureSpec::exactly(10), MeasureSpec::at_most(900)), (10, 500));
        assert_eq!(
            measure_with_default(MeasureSpec::unspecified(), MeasureSpec::exactly(7), 64),
            (64, 7)
        );
    }

    #[test]
    fn test_on_size_excludes_bottom_band() {
        let mut layout = layout(4, 0.0);
        layout.on_size(400.0, 450.0);
        assert_eq!(layout.rect, Rect::new(0.0, 0.0, 400.0, 400.0));
        assert_eq!(layout.center_x, 200.0);
        assert_eq!(layout.center_y, 200.0);
        assert_eq!(layout.width, 400.0);
        assert_eq!(layout.height, 450.0);
    }

    #[test]
    fn test_center_is_half_rect_not_half_widget() {
        let mut layout = layout(4, 0.0);
        layout.on_size(300.0, 250.0);
        assert_eq!(layout.center_x, 150.0);
        assert_eq!(layout.center_y, 100.0);
    }

    #[test]
    fn test_bar_width_subtracts_margins() {
        let mut layout = layout(4, 10.0);
        layout.on_size(430.0, 450.0);
        assert!((layout.bar_width() - 100.0).abs() < 1e-4);
    }

    #[test]
    fn test_arc_bar_width() {
        let mut layout = layout(4, 0.0);
        layout.circle_radius = 100.0;
        assert!((layout.arc_bar_width() - 2.0 * PI * 100.0 / 4.0).abs() < 1e-3);
    }

    #[test]
    fn test_negative_widths_are_permitted() {
        let mut layout = layout(60, 12.0);
        layout.on_size(100.0, 500.0);
        assert!(layout.bar_width() < 0.0);
        assert!(!layout.is_degenerate());
    }

    #[test]
    fn test_degenerate_layouts() {
        let mut unsized_layout = layout(4, 0.0);
        assert!(unsized_layout.is_degenerate());

        unsized_layout.on_size(400.0, 50.0);
        assert!(unsized_layout.is_degenerate(), "rect height is zero");

        let mut empty = layout(0, 0.0);
        empty.on_size(400.0, 450.0);
        assert!(empty.is_degenerate());
    }

    #[test]
    fn test_bar_x_spacing() {
        let mut layout = layout(4, 0.0);
        layout.on_size(400.0, 450.0);
        let xs: Vec<f32> = (0..4).map(|i| layout.bar_x(i)).collect();
        assert_eq!(xs, vec![0.0, 100.0, 200.0, 300.0]);
        assert_eq!(layout.mid_y(), 200.0);
    }
}
