//! Circular modes: bars radiating from a base circle, optionally netted.

use super::{FrameContext, ModeRenderer, VisualMode};
use crate::canvas::{PaintStyle, PathScope, Point};
use crate::layout::LayoutState;

/// Stroke width of the base circle outline.
const BASE_CIRCLE_STROKE: f32 = 2.0;

/// Inner and outer endpoints of the radial bar for bin `i`.
///
/// Bin `i` sits at `(360 / N) * (i + 1)` degrees with `x = cx + r sin θ` and
/// `y = cy + r cos θ`, so the last bin lands on 360°. The bar starts half an
/// arc width outside the base circle and grows by `spectrum_ratio * magnitude`.
pub fn radial_endpoints(layout: &LayoutState, i: usize, magnitude: f32) -> (Point, Point) {
    let angle = (360.0 / layout.spectrum_count as f64 * (i + 1) as f64).to_radians();
    let (sin, cos) = angle.sin_cos();
    let cx = layout.center_x as f64;
    let cy = layout.center_y as f64;

    let inner_r = layout.circle_radius as f64 + layout.arc_bar_width() as f64 / 2.0;
    let outer_r = inner_r + (layout.spectrum_ratio * magnitude) as f64;

    (
        Point::new((cx + inner_r * sin) as f32, (cy + inner_r * cos) as f32),
        Point::new((cx + outer_r * sin) as f32, (cy + outer_r * cos) as f32),
    )
}

/// Outline the base circle, then switch the paint to filled arc-width bars.
fn draw_base_circle(frame: &mut FrameContext<'_>) {
    let layout = frame.layout;
    let arc_width = layout.arc_bar_width();

    frame.paint.set_style(PaintStyle::Stroke);
    frame.paint.set_stroke_width(BASE_CIRCLE_STROKE);
    frame.canvas.draw_circle(
        layout.center_x,
        layout.center_y,
        layout.circle_radius,
        frame.paint,
    );

    frame.paint.set_stroke_width(arc_width);
    frame.paint.set_style(PaintStyle::Fill);
}

/// Bars radiating outward from a base circle.
pub struct CircleRenderer;

impl ModeRenderer for CircleRenderer {
    fn mode(&self) -> VisualMode {
        VisualMode::Circle
    }

    fn render(&self, frame: &mut FrameContext<'_>) {
        draw_base_circle(frame);

        let layout = frame.layout;
        for (i, &magnitude) in frame.magnitudes[..layout.spectrum_count].iter().enumerate() {
            let (inner, outer) = radial_endpoints(layout, i, magnitude);
            frame
                .canvas
                .draw_line(inner.x, inner.y, outer.x, outer.y, frame.paint);
        }
    }
}

/// Circle bars plus a stroked polyline from the first inner point through
/// every outer point.
pub struct NetRenderer;

impl ModeRenderer for NetRenderer {
    fn mode(&self) -> VisualMode {
        VisualMode::Net
    }

    fn render(&self, frame: &mut FrameContext<'_>) {
        draw_base_circle(frame);

        let layout = frame.layout;
        let mut path = PathScope::new(frame.path);

        for (i, &magnitude) in frame.magnitudes[..layout.spectrum_count].iter().enumerate() {
            let (inner, outer) = radial_endpoints(layout, i, magnitude);
            frame
                .canvas
                .draw_line(inner.x, inner.y, outer.x, outer.y, frame.paint);
            if i == 0 {
                path.move_to(inner.x, inner.y);
            }
            path.line_to(outer.x, outer.y);
        }

        frame.paint.set_style(PaintStyle::Stroke);
        frame.canvas.draw_path(&path, frame.paint);
    }
}
