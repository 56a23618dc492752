//! Grain mode: two rows of points.

use super::{FrameContext, ModeRenderer, VisualMode, BASELINE_OFFSET};

/// Upper row follows the raw magnitude; the lower row follows it at half
/// amplitude around the quarter line.
pub struct GrainRenderer;

impl ModeRenderer for GrainRenderer {
    fn mode(&self) -> VisualMode {
        VisualMode::Grain
    }

    fn render(&self, frame: &mut FrameContext<'_>) {
        let layout = frame.layout;
        let mid_y = layout.mid_y();
        let quarter_y = layout.rect.height() / 4.0;

        for (i, &magnitude) in frame.magnitudes[..layout.spectrum_count].iter().enumerate() {
            let x = layout.bar_x(i);
            frame
                .canvas
                .draw_point(x, mid_y + BASELINE_OFFSET - magnitude, frame.paint);
            frame.canvas.draw_point(
                x,
                quarter_y + BASELINE_OFFSET + (mid_y - magnitude) / 2.0,
                frame.paint,
            );
        }
    }
}
