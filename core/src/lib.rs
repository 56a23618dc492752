//! Visualize View Core
//!
//! Host-agnostic renderer that turns a vector of pre-scaled audio magnitudes
//! into a stylised 2D frame.
//!
//! # Features
//!
//! - Layout model: measurement contract, drawable rect, bar and arc widths
//! - Six visual modes: single, circle, net, reflect, wave, grain
//! - Narrow `Canvas` capability so any host surface can be targeted
//! - Recording canvas for inspection and JSON frame dumps
//! - Software raster canvas with PNG export via `image`
//!
//! # Example
//! ```
//! use visualize_view::{BuiltinColors, MeasureSpec, RecordingCanvas, VisualMode, VisualizeView};
//!
//! let mut view = VisualizeView::new(&BuiltinColors);
//! let (w, h) = view.measure(MeasureSpec::exactly(720), MeasureSpec::unspecified());
//! view.on_size(w, h);
//! view.set_mode(VisualMode::Reflect);
//! view.set_data(vec![10.0_f32; 60]);
//!
//! let mut canvas = RecordingCanvas::new();
//! view.draw(&mut canvas);
//! assert_eq!(canvas.len(), 120);
//! ```

pub mod canvas;
pub mod config;
pub mod layout;
pub mod modes;
pub mod raster;
pub mod view;

// Re-export commonly used types
pub use canvas::{
    parse_hex_color, Canvas, Color, DrawCommand, MaskFilter, Paint, PaintStyle, Path, PathVerb,
    Point, RecordingCanvas, StrokeCap,
};
pub use config::{BuiltinColors, ColorResources, ConfigError, VisualizerConfig};
pub use layout::{measure, LayoutState, MeasureMode, MeasureSpec, Rect};
pub use modes::{draw_frame, renderer_for, FrameContext, ModeRenderer, VisualMode};
pub use raster::{RasterCanvas, RasterError};
pub use view::VisualizeView;
