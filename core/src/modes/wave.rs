//! Wave mode: filled polygon below the midline.

use super::{FrameContext, ModeRenderer, VisualMode, BASELINE_OFFSET};
use crate::canvas::PathScope;

/// Closed polygon from the left edge of the midline through every bin to the
/// right edge of the midline.
pub struct WaveRenderer;

impl ModeRenderer for WaveRenderer {
    fn mode(&self) -> VisualMode {
        VisualMode::Wave
    }

    fn render(&self, frame: &mut FrameContext<'_>) {
        let layout = frame.layout;
        let mid_y = layout.mid_y();
        let mut path = PathScope::new(frame.path);

        path.move_to(0.0, layout.center_y);
        for (i, &magnitude) in frame.magnitudes[..layout.spectrum_count].iter().enumerate() {
            path.line_to(layout.bar_x(i), mid_y + BASELINE_OFFSET + magnitude);
        }
        path.line_to(layout.rect.width(), layout.center_y);
        path.close();

        frame.canvas.draw_path(&path, frame.paint);
    }
}
