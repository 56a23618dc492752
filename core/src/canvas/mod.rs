//! Drawing capability consumed by the renderers.
//!
//! The host owns the real drawing surface. Renderers only ever see it through
//! the [`Canvas`] trait, styled by a [`Paint`] and fed from a reusable [`Path`].
//!
//! - [`RecordingCanvas`]: stores primitives instead of drawing them
//! - [`crate::raster::RasterCanvas`]: in-memory RGBA surface

mod color;
mod paint;
mod path;
mod recording;

pub use color::{parse_hex_color, Color};
pub use paint::{
    BlurStyle, MaskFilter, Paint, PaintStyle, StrokeCap, DEFAULT_BLUR_RADIUS, DEFAULT_STROKE_WIDTH,
};
pub use path::{Path, PathScope, PathVerb, Point};
pub use recording::{DrawCommand, RecordingCanvas};

/// Narrow 2D drawing surface.
///
/// Coordinates are surface units with the origin at the top-left corner and
/// y growing downward. Implementations may silently clip anything that falls
/// outside the surface.
pub trait Canvas {
    /// Draw a line segment with the paint's stroke width and cap.
    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, paint: &Paint);

    /// Draw a circle, filled or outlined depending on the paint style.
    fn draw_circle(&mut self, cx: f32, cy: f32, radius: f32, paint: &Paint);

    /// Draw a single point sized by the stroke width and shaped by the cap.
    fn draw_point(&mut self, x: f32, y: f32, paint: &Paint);

    /// Draw a path, filled or stroked depending on the paint style.
    fn draw_path(&mut self, path: &Path, paint: &Paint);
}
