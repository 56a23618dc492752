//! Single mode: vertical bars dropping from the midline.

use super::{FrameContext, ModeRenderer, VisualMode, BASELINE_OFFSET};

/// One bar per bin from the midline up by the raw magnitude.
pub struct SingleRenderer;

impl ModeRenderer for SingleRenderer {
    fn mode(&self) -> VisualMode {
        VisualMode::Single
    }

    fn render(&self, frame: &mut FrameContext<'_>) {
        let layout = frame.layout;
        let mid_y = layout.mid_y();

        for (i, &magnitude) in frame.magnitudes[..layout.spectrum_count].iter().enumerate() {
            let x = layout.bar_x(i);
            frame
                .canvas
                .draw_line(x, mid_y, x, mid_y + BASELINE_OFFSET - magnitude, frame.paint);
        }
    }
}
