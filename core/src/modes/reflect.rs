//! Reflect mode: bars mirrored about the midline.

use super::{FrameContext, ModeRenderer, VisualMode, BASELINE_OFFSET};

/// Two bars per bin, one up and one down, both scaled by the spectrum ratio.
pub struct ReflectRenderer;

impl ModeRenderer for ReflectRenderer {
    fn mode(&self) -> VisualMode {
        VisualMode::Reflect
    }

    fn render(&self, frame: &mut FrameContext<'_>) {
        let layout = frame.layout;
        let mid_y = layout.mid_y();
        let baseline = mid_y + BASELINE_OFFSET;

        for (i, &magnitude) in frame.magnitudes[..layout.spectrum_count].iter().enumerate() {
            let x = layout.bar_x(i);
            let extent = layout.spectrum_ratio * magnitude;
            frame.canvas.draw_line(x, mid_y, x, baseline - extent, frame.paint);
            frame.canvas.draw_line(x, mid_y, x, baseline + extent, frame.paint);
        }
    }
}
