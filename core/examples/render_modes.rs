//! Example: Render every visual mode from a synthetic spectrum.
//!
//! Writes one PNG per mode plus a JSON dump of the recorded wave frame.
//!
//! Run with:
//!     cargo run --example render_modes [output_dir]

use std::f32::consts::PI;
use std::path::PathBuf;

use anyhow::Context;
use visualize_view::{
    BuiltinColors, Color, MeasureSpec, RasterCanvas, RecordingCanvas, VisualMode, VisualizeView,
    VisualizerConfig,
};

/// Synthetic spectrum: a low-frequency hump with a smaller ripple on top.
fn synthetic_magnitudes(count: usize, frame: usize) -> Vec<f32> {
    let phase = frame as f32 * 0.35;
    (0..count)
        .map(|i| {
            let t = i as f32 / count as f32;
            let hump = 110.0 * (1.0 - t).powi(2);
            let ripple = 25.0 * (t * 6.0 * PI + phase).sin().abs();
            hump + ripple
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let output_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("frames"));
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("creating {}", output_dir.display()))?;

    println!("Visualize View - Mode Gallery");
    println!("=============================\n");

    let config = VisualizerConfig {
        color: Some("#00ff88".to_string()),
        ..Default::default()
    };
    let mut view = VisualizeView::with_config(config, &BuiltinColors)?;
    let (width, height) = view.measure(MeasureSpec::exactly(720), MeasureSpec::exactly(770));
    view.on_size(width, height);

    println!("  Resolution: {}x{}", width, height);
    println!("  Bins: {}\n", view.layout().spectrum_count);

    for (frame, mode) in VisualMode::all().iter().enumerate() {
        view.set_mode(*mode);
        view.set_data(synthetic_magnitudes(view.layout().spectrum_count, frame));

        let mut canvas = RasterCanvas::new(width, height)?;
        canvas.clear(Color::BLACK);
        view.draw(&mut canvas);

        let output_path = output_dir.join(format!("{}.png", mode.name()));
        canvas
            .save_png(&output_path)
            .with_context(|| format!("saving {}", output_path.display()))?;
        println!("  {:<8} {} -> {}", mode.name(), mode.description(), output_path.display());
    }

    view.set_mode(VisualMode::Wave);
    let mut recording = RecordingCanvas::new();
    view.draw(&mut recording);
    let dump_path = output_dir.join("wave.json");
    std::fs::write(&dump_path, recording.to_json()?)
        .with_context(|| format!("writing {}", dump_path.display()))?;

    println!("\nDone! Frames in: {}", output_dir.display());

    Ok(())
}
