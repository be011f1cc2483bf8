use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::core::{
    PanBounds, PlotGeometry, PlotPoint, Sample, Transform, TransformState, to_plot_space,
};
use crate::error::ChartResult;
use crate::extensions::ChartPlugin;
use crate::interaction::OverlayState;
use crate::render::Renderer;

use super::LineChartConfig;
use super::validation::{validate_chart_style, validate_samples, validate_tooltip_config};

/// Interactive single-series line chart bound to one drawing surface.
///
/// Samples and plot-space geometry are fixed at construction; only the
/// pan/zoom transform and the hover overlay change afterwards, and only
/// through the input handlers. Dropping the chart removes everything it drew
/// from the surface.
pub struct LineChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: LineChartConfig,
    pub(super) geometry: PlotGeometry,
    pub(super) samples: Vec<Sample>,
    pub(super) plot_points: Vec<PlotPoint>,
    pub(super) transform: TransformState,
    pub(super) overlay: OverlayState,
    pub(super) plugins: IndexMap<String, Box<dyn ChartPlugin>>,
    pub(super) disposed: bool,
}

impl<R: Renderer> LineChart<R> {
    /// Validates the configuration, precomputes plot-space points and draws
    /// the initial frame.
    pub fn new(renderer: R, samples: Vec<Sample>, config: LineChartConfig) -> ChartResult<Self> {
        validate_samples(&samples)?;
        validate_tooltip_config(config.tooltip)?;
        validate_chart_style(config.style)?;
        let geometry = PlotGeometry::new(config.margin, config.dimensions)?;
        let plot_points = to_plot_space(&samples, &geometry, config.start_from_zero);

        debug!(
            samples = samples.len(),
            amplitude = geometry.amplitude(),
            visible_width = geometry.visible_width(),
            start_from_zero = config.start_from_zero,
            "line chart constructed"
        );

        let mut chart = Self {
            renderer,
            config,
            geometry,
            samples,
            plot_points,
            transform: TransformState::new(),
            overlay: OverlayState::default(),
            plugins: IndexMap::new(),
            disposed: false,
        };
        chart.render(true)?;
        Ok(chart)
    }

    #[must_use]
    pub fn config(&self) -> &LineChartConfig {
        &self.config
    }

    #[must_use]
    pub fn geometry(&self) -> &PlotGeometry {
        &self.geometry
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[must_use]
    pub fn plot_points(&self) -> &[PlotPoint] {
        &self.plot_points
    }

    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform.transform()
    }

    #[must_use]
    pub fn overlay(&self) -> OverlayState {
        self.overlay
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Host adapters use this to report surface resizes and draw into
    /// externally owned contexts.
    #[cfg_attr(not(feature = "gtk4-adapter"), allow(dead_code))]
    pub(crate) fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Width of the data layer as measured by the renderer after the last
    /// pass.
    #[must_use]
    pub fn rendered_width(&self) -> f64 {
        self.renderer
            .content_bounds()
            .map_or(0.0, |bounds| bounds.width)
    }

    /// Current clamp band for `pan_x`.
    #[must_use]
    pub fn pan_bounds(&self) -> PanBounds {
        PanBounds::new(self.rendered_width(), self.geometry.visible_width())
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Removes every primitive this chart drew and unregisters all plugins.
    ///
    /// Input handlers become no-ops afterwards. Calling it twice is harmless.
    pub fn dispose(&mut self) -> ChartResult<()> {
        if self.disposed {
            return Ok(());
        }
        self.disposed = true;
        self.plugins.clear();
        self.renderer.clear()
    }
}

impl<R: Renderer> Drop for LineChart<R> {
    fn drop(&mut self) {
        if let Err(err) = self.dispose() {
            warn!(error = %err, "failed to clear drawing surface on drop");
        }
    }
}
