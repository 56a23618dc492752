//! Software raster surface.
//!
//! Implements [`Canvas`] over an [`image::RgbaImage`] so frames can be
//! previewed or snapshotted without a host toolkit. Lines, circles and points
//! are rasterised from signed distance fields, which gives antialiasing and
//! the solid blur halo for free. Filled paths use the signed distance to
//! their outline under the even-odd rule.

mod shapes;

use std::path::Path as FsPath;

use image::{Rgba, RgbaImage};

use crate::canvas::{BlurStyle, Canvas, Color, Paint, PaintStyle, Path, Point, StrokeCap};
use shapes::{capsule_distance, polygon_distance, segment_box_distance};

/// Errors that can occur while creating or saving a raster surface.
#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    #[error("Invalid raster dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// In-memory RGBA canvas.
#[derive(Debug, Clone)]
pub struct RasterCanvas {
    image: RgbaImage,
}

impl RasterCanvas {
    pub fn new(width: u32, height: u32) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::InvalidDimensions { width, height });
        }
        Ok(Self {
            image: RgbaImage::new(width, height),
        })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Fill the whole surface with one colour.
    pub fn clear(&mut self, color: Color) {
        let pixel = Rgba(color.to_array());
        for p in self.image.pixels_mut() {
            *p = pixel;
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let [r, g, b, a] = self.image.get_pixel(x, y).0;
        Some(Color::rgba(r, g, b, a))
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Write the surface as a PNG file.
    pub fn save_png<P: AsRef<FsPath>>(&self, path: P) -> Result<(), RasterError> {
        self.image
            .save_with_format(path.as_ref(), image::ImageFormat::Png)?;
        log::debug!(
            "saved {}x{} frame to {}",
            self.width(),
            self.height(),
            path.as_ref().display()
        );
        Ok(())
    }

    /// Source-over blend of `color` at the given coverage. The surface stores
    /// straight (non-premultiplied) alpha.
    fn blend(&mut self, x: u32, y: u32, color: Color, coverage: f32) {
        let alpha = (color.a as f32 / 255.0) * coverage.clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }
        let dst = self.image.get_pixel_mut(x, y);
        let [dr, dg, db, da] = dst.0;
        let dst_weight = (da as f32 / 255.0) * (1.0 - alpha);
        let out_a = alpha + dst_weight;
        let mix = |s: u8, d: u8| {
            ((s as f32 * alpha + d as f32 * dst_weight) / out_a)
                .round()
                .clamp(0.0, 255.0) as u8
        };
        *dst = Rgba([
            mix(color.r, dr),
            mix(color.g, dg),
            mix(color.b, db),
            (out_a * 255.0).round() as u8,
        ]);
    }

    /// Rasterise a shape given by a distance function, where `half` is the
    /// distance at which the shape edge lies.
    fn fill_distance_field<F>(
        &mut self,
        bounds: (f32, f32, f32, f32),
        half: f32,
        paint: &Paint,
        distance: F,
    ) where
        F: Fn(f32, f32) -> f32,
    {
        let halo = halo_radius(paint);
        let (min_x, min_y, max_x, max_y) = bounds;
        let pad = halo + 1.0;
        let Some((x0, y0, x1, y1)) = self.clip(min_x - pad, min_y - pad, max_x + pad, max_y + pad)
        else {
            return;
        };

        for y in y0..y1 {
            for x in x0..x1 {
                let d = distance(x as f32 + 0.5, y as f32 + 0.5) - half;
                let coverage = edge_coverage(d, paint.anti_alias, halo);
                if coverage > 0.0 {
                    self.blend(x, y, paint.color, coverage);
                }
            }
        }
    }

    /// Clip a float box to pixel bounds, `None` when nothing is visible.
    fn clip(&self, min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Option<(u32, u32, u32, u32)> {
        if !(min_x.is_finite() && min_y.is_finite() && max_x.is_finite() && max_y.is_finite()) {
            return None;
        }
        let x0 = min_x.floor().max(0.0) as u32;
        let y0 = min_y.floor().max(0.0) as u32;
        let x1 = (max_x.ceil().max(0.0) as u32).min(self.width());
        let y1 = (max_y.ceil().max(0.0) as u32).min(self.height());
        (x0 < x1 && y0 < y1).then_some((x0, y0, x1, y1))
    }

    fn stroke_segment(&mut self, from: Point, to: Point, cap: StrokeCap, paint: &Paint) {
        if !(from.is_finite() && to.is_finite() && paint.stroke_width.is_finite()) {
            return;
        }
        let half = paint.stroke_width.abs().max(1.0) / 2.0;
        let bounds = (
            from.x.min(to.x) - half,
            from.y.min(to.y) - half,
            from.x.max(to.x) + half,
            from.y.max(to.y) + half,
        );
        match cap {
            StrokeCap::Round => self.fill_distance_field(bounds, half, paint, |x, y| {
                capsule_distance(x, y, from, to)
            }),
            StrokeCap::Butt => self.fill_distance_field(bounds, 0.0, paint, |x, y| {
                segment_box_distance(x, y, from, to, half, 0.0)
            }),
            StrokeCap::Square => self.fill_distance_field(bounds, 0.0, paint, |x, y| {
                segment_box_distance(x, y, from, to, half, half)
            }),
        }
    }

    fn fill_polygon(&mut self, contours: &[(Vec<Point>, bool)], paint: &Paint) {
        if !contours.iter().all(|(points, _)| points.iter().all(Point::is_finite)) {
            return;
        }
        let bounds = contours.iter().flat_map(|(points, _)| points.iter()).fold(
            (f32::INFINITY, f32::INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY),
            |(min_x, min_y, max_x, max_y), p| {
                (min_x.min(p.x), min_y.min(p.y), max_x.max(p.x), max_y.max(p.y))
            },
        );
        self.fill_distance_field(bounds, 0.0, paint, |x, y| polygon_distance(x, y, contours));
    }
}

/// Width of the soft halo a solid blur paints outside the shape.
fn halo_radius(paint: &Paint) -> f32 {
    match paint.mask_filter {
        Some(filter) if filter.style == BlurStyle::Solid && filter.radius > 0.0 => filter.radius,
        _ => 0.0,
    }
}

/// Coverage of a pixel whose centre lies `d` outside the shape edge
/// (negative inside).
fn edge_coverage(d: f32, anti_alias: bool, halo: f32) -> f32 {
    let solid = if anti_alias {
        (0.5 - d).clamp(0.0, 1.0)
    } else if d <= 0.0 {
        1.0
    } else {
        0.0
    };
    if halo > 0.0 && d > 0.0 && d < halo {
        let falloff = 1.0 - d / halo;
        return solid.max(0.5 * falloff * falloff);
    }
    solid
}

impl Canvas for RasterCanvas {
    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, paint: &Paint) {
        self.stroke_segment(Point::new(x0, y0), Point::new(x1, y1), paint.cap, paint);
    }

    fn draw_circle(&mut self, cx: f32, cy: f32, radius: f32, paint: &Paint) {
        let finite = [cx, cy, radius, paint.stroke_width].iter().all(|v| v.is_finite());
        if !finite {
            return;
        }
        let center = Point::new(cx, cy);
        match paint.style {
            PaintStyle::Fill => {
                let bounds = (cx - radius, cy - radius, cx + radius, cy + radius);
                self.fill_distance_field(bounds, radius, paint, |x, y| {
                    Point::new(x, y).distance_to(center)
                });
            }
            PaintStyle::Stroke => {
                let half = paint.stroke_width.abs().max(1.0) / 2.0;
                let outer = radius + half;
                let bounds = (cx - outer, cy - outer, cx + outer, cy + outer);
                self.fill_distance_field(bounds, half, paint, |x, y| {
                    (Point::new(x, y).distance_to(center) - radius).abs()
                });
            }
        }
    }

    fn draw_point(&mut self, x: f32, y: f32, paint: &Paint) {
        // Only round points are discs; every other cap yields a square.
        let cap = match paint.cap {
            StrokeCap::Round => StrokeCap::Round,
            StrokeCap::Butt | StrokeCap::Square => StrokeCap::Square,
        };
        let at = Point::new(x, y);
        self.stroke_segment(at, at, cap, paint);
    }

    fn draw_path(&mut self, path: &Path, paint: &Paint) {
        let contours = path.contours();
        match paint.style {
            PaintStyle::Fill => self.fill_polygon(&contours, paint),
            PaintStyle::Stroke => {
                for (points, closed) in &contours {
                    for pair in points.windows(2) {
                        self.stroke_segment(pair[0], pair[1], paint.cap, paint);
                    }
                    if *closed && points.len() > 2 {
                        self.stroke_segment(points[points.len() - 1], points[0], paint.cap, paint);
                    }
                }
            }
        }
    }
}
