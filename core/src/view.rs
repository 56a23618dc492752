//! Host-facing visualizer component.
//!
//! The host pushes magnitude vectors, selects a mode, forwards measurement
//! and size changes, and calls [`VisualizeView::draw`] whenever its frame
//! scheduler redraws. The view never draws on its own; it only requests a
//! redraw through [`VisualizeView::take_redraw_request`] and the optional
//! invalidate callback.

use std::fmt;
use std::sync::Arc;

use crate::canvas::{Canvas, Color, Paint, Path};
use crate::config::{
    validate_circle_radius, validate_item_margin, validate_spectrum_count,
    validate_spectrum_ratio, ColorResources, ConfigError, VisualizerConfig,
};
use crate::layout::{measure_with_default, LayoutState, MeasureSpec};
use crate::modes::{draw_frame, FrameContext, VisualMode};

/// Callback invoked every time the view wants to be redrawn.
pub type InvalidateCallback = Box<dyn FnMut() + Send>;

/// Audio magnitude visualizer.
pub struct VisualizeView {
    layout: LayoutState,
    paint: Paint,
    path: Path,
    mode: Option<VisualMode>,
    data: Option<Arc<[f32]>>,
    default_size: u32,
    redraw_requested: bool,
    on_invalidate: Option<InvalidateCallback>,
}

impl fmt::Debug for VisualizeView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisualizeView")
            .field("layout", &self.layout)
            .field("paint", &self.paint)
            .field("mode", &self.mode)
            .field("data_len", &self.data.as_ref().map(|d| d.len()))
            .field("redraw_requested", &self.redraw_requested)
            .finish_non_exhaustive()
    }
}

impl VisualizeView {
    /// View with default attributes, coloured by the host's `black` resource.
    pub fn new(resources: &dyn ColorResources) -> Self {
        let config = VisualizerConfig::default();
        let color = config
            .resolve_color(resources)
            .unwrap_or(Color::BLACK);
        Self::from_parts(&config, color)
    }

    /// View with explicit attributes.
    pub fn with_config(
        config: VisualizerConfig,
        resources: &dyn ColorResources,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let color = config.resolve_color(resources)?;
        Ok(Self::from_parts(&config, color))
    }

    fn from_parts(config: &VisualizerConfig, color: Color) -> Self {
        log::info!(
            "visualizer created: {} bins, mode {}, color {}",
            config.spectrum_count,
            config.mode.name(),
            color.to_hex()
        );
        Self {
            layout: LayoutState::new(config),
            paint: Paint::visualizer(color, config.blur_radius),
            path: Path::with_capacity(config.spectrum_count + 3),
            mode: Some(config.mode),
            data: None,
            default_size: config.default_size,
            redraw_requested: false,
            on_invalidate: None,
        }
    }

    /// Register the host hook used to schedule redraws.
    pub fn set_invalidate_callback(&mut self, callback: InvalidateCallback) {
        self.on_invalidate = Some(callback);
    }

    /// Replace the magnitude vector and schedule a redraw.
    pub fn set_data(&mut self, data: impl Into<Arc<[f32]>>) {
        self.data = Some(data.into());
        self.invalidate();
    }

    /// Drop the magnitude vector; the next frame draws nothing.
    pub fn clear_data(&mut self) {
        if self.data.take().is_some() {
            self.invalidate();
        }
    }

    pub fn data(&self) -> Option<&[f32]> {
        self.data.as_deref()
    }

    /// Switch mode. A redraw is scheduled only while a vector is held.
    pub fn set_mode(&mut self, mode: VisualMode) {
        self.select_mode(Some(mode));
    }

    /// Switch mode by host id. Unknown ids leave the view drawing nothing.
    pub fn set_mode_id(&mut self, id: i32) {
        let mode = VisualMode::from_id(id);
        if mode.is_none() {
            log::debug!("unknown mode id {}, frames will be empty", id);
        }
        self.select_mode(mode);
    }

    fn select_mode(&mut self, mode: Option<VisualMode>) {
        log::debug!("mode changed: {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
        self.invalidate_if_data();
    }

    pub fn mode(&self) -> Option<VisualMode> {
        self.mode
    }

    pub fn set_color(&mut self, color: Color) {
        self.paint.set_color(color);
        self.invalidate_if_data();
    }

    pub fn set_spectrum_count(&mut self, count: usize) -> Result<(), ConfigError> {
        validate_spectrum_count(count)?;
        self.layout.spectrum_count = count;
        self.invalidate_if_data();
        Ok(())
    }

    pub fn set_item_margin(&mut self, margin: f32) -> Result<(), ConfigError> {
        validate_item_margin(margin)?;
        self.layout.item_margin = margin;
        self.invalidate_if_data();
        Ok(())
    }

    pub fn set_spectrum_ratio(&mut self, ratio: f32) -> Result<(), ConfigError> {
        validate_spectrum_ratio(ratio)?;
        self.layout.spectrum_ratio = ratio;
        self.invalidate_if_data();
        Ok(())
    }

    pub fn set_circle_radius(&mut self, radius: f32) -> Result<(), ConfigError> {
        validate_circle_radius(radius)?;
        self.layout.circle_radius = radius;
        self.invalidate_if_data();
        Ok(())
    }

    /// Resolve the widget size from the host's constraints.
    pub fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> (u32, u32) {
        measure_with_default(width, height, self.default_size)
    }

    /// Recompute the layout for a new widget size.
    pub fn on_size(&mut self, width: u32, height: u32) {
        self.layout.on_size(width as f32, height as f32);
        log::debug!(
            "layout: {}x{} -> rect {}x{}",
            width,
            height,
            self.layout.rect.width(),
            self.layout.rect.height()
        );
    }

    /// Draw one frame for the current mode. Clears any pending redraw request.
    pub fn draw(&mut self, canvas: &mut dyn Canvas) {
        self.redraw_requested = false;

        let Some(data) = self.data.as_deref() else {
            return;
        };
        let Some(mode) = self.mode else {
            log::trace!("no mode selected, skipping frame");
            return;
        };

        let mut frame = FrameContext {
            canvas,
            paint: &mut self.paint,
            path: &mut self.path,
            layout: &self.layout,
            magnitudes: data,
        };
        draw_frame(mode, &mut frame);
    }

    /// Whether a redraw was requested since the last call or draw.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    pub fn layout(&self) -> &LayoutState {
        &self.layout
    }

    pub fn paint(&self) -> &Paint {
        &self.paint
    }

    /// Reusable path buffer; empty between frames.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn invalidate_if_data(&mut self) {
        if self.data.is_some() {
            self.invalidate();
        }
    }

    fn invalidate(&mut self) {
        self.redraw_requested = true;
        if let Some(callback) = self.on_invalidate.as_mut() {
            callback();
        }
    }
}
