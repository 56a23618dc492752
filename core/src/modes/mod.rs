//! Visual modes.
//!
//! Each mode maps the magnitude vector to drawing primitives against the
//! current [`LayoutState`]:
//! - Single: vertical bars dropping from the midline
//! - Circle: bars radiating outward from a base circle
//! - Net: circle bars joined by a polyline through their tips
//! - Reflect: bars mirrored above and below the midline
//! - Wave: filled polygon below the midline
//! - Grain: two rows of points

mod circle;
mod grain;
mod reflect;
mod single;
mod wave;

pub use circle::{radial_endpoints, CircleRenderer, NetRenderer};
pub use grain::GrainRenderer;
pub use reflect::ReflectRenderer;
pub use single::SingleRenderer;
pub use wave::WaveRenderer;

use serde::{Deserialize, Serialize};

use crate::canvas::{Canvas, Paint, PaintStyle, Path};
use crate::layout::LayoutState;

/// Vertical offset applied to bar baselines in every linear mode.
pub(crate) const BASELINE_OFFSET: f32 = 2.0;

/// Available visual modes. Discriminants are the stable host-facing ids.
///
/// Serialized by canonical name; deserialization also takes the aliases
/// accepted by [`VisualMode::from_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualMode {
    #[serde(alias = "bars")]
    Single = 0,
    #[serde(alias = "radial")]
    Circle = 1,
    #[serde(alias = "web")]
    Net = 2,
    #[serde(alias = "mirror")]
    Reflect = 3,
    #[default]
    #[serde(alias = "waveform")]
    Wave = 4,
    #[serde(alias = "dots", alias = "points")]
    Grain = 5,
}

impl VisualMode {
    pub fn from_id(id: i32) -> Option<Self> {
        match id {
            0 => Some(Self::Single),
            1 => Some(Self::Circle),
            2 => Some(Self::Net),
            3 => Some(Self::Reflect),
            4 => Some(Self::Wave),
            5 => Some(Self::Grain),
            _ => None,
        }
    }

    pub fn id(self) -> i32 {
        self as i32
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "single" | "bars" => Some(Self::Single),
            "circle" | "radial" => Some(Self::Circle),
            "net" | "web" => Some(Self::Net),
            "reflect" | "mirror" => Some(Self::Reflect),
            "wave" | "waveform" => Some(Self::Wave),
            "grain" | "dots" | "points" => Some(Self::Grain),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Circle => "circle",
            Self::Net => "net",
            Self::Reflect => "reflect",
            Self::Wave => "wave",
            Self::Grain => "grain",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Single => "Vertical bars dropping from the midline",
            Self::Circle => "Bars radiating outward from a base circle",
            Self::Net => "Radial bars joined by a polyline through their tips",
            Self::Reflect => "Bars mirrored above and below the midline",
            Self::Wave => "Filled polygon tracing the spectrum below the midline",
            Self::Grain => "Two rows of points per bin",
        }
    }

    pub fn all() -> &'static [Self] {
        &[
            Self::Single,
            Self::Circle,
            Self::Net,
            Self::Reflect,
            Self::Wave,
            Self::Grain,
        ]
    }
}

/// Everything a renderer touches while drawing one frame.
pub struct FrameContext<'a> {
    pub canvas: &'a mut dyn Canvas,
    pub paint: &'a mut Paint,
    /// Reusable buffer; must be empty when the renderer returns.
    pub path: &'a mut Path,
    pub layout: &'a LayoutState,
    /// At least `layout.spectrum_count` values.
    pub magnitudes: &'a [f32],
}

/// Strategy for one visual mode.
pub trait ModeRenderer: Send + Sync {
    /// Draw one full frame. Stroke width is preset to the linear bar width
    /// and the style to fill.
    fn render(&self, frame: &mut FrameContext<'_>);

    /// Mode identifier.
    fn mode(&self) -> VisualMode;
}

static RENDERERS: [&dyn ModeRenderer; 6] = [
    &SingleRenderer,
    &CircleRenderer,
    &NetRenderer,
    &ReflectRenderer,
    &WaveRenderer,
    &GrainRenderer,
];

/// Renderer for a mode, looked up by id without allocating.
///
/// # Example
/// ```
/// use visualize_view::modes::{renderer_for, VisualMode};
///
/// let renderer = renderer_for(VisualMode::Net);
/// assert_eq!(renderer.mode(), VisualMode::Net);
/// ```
pub fn renderer_for(mode: VisualMode) -> &'static dyn ModeRenderer {
    RENDERERS[mode.id() as usize]
}

/// Draw one frame in the given mode.
///
/// Degenerate layouts and vectors shorter than the spectrum count produce an
/// empty frame.
pub fn draw_frame(mode: VisualMode, frame: &mut FrameContext<'_>) {
    let layout = frame.layout;
    if layout.is_degenerate() {
        log::trace!(
            "skipping frame: degenerate layout {}x{} with {} bins",
            layout.rect.width(),
            layout.rect.height(),
            layout.spectrum_count
        );
        return;
    }
    if frame.magnitudes.len() < layout.spectrum_count {
        log::debug!(
            "skipping frame: {} magnitudes for {} bins",
            frame.magnitudes.len(),
            layout.spectrum_count
        );
        return;
    }

    frame.paint.set_stroke_width(layout.bar_width());
    frame.paint.set_style(PaintStyle::Fill);

    renderer_for(mode).render(frame);
    debug_assert!(frame.path.is_empty(), "{:?} left the path buffer dirty", mode);
}
