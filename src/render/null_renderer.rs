use crate::core::BoundingBox;
use crate::error::ChartResult;
use crate::render::{DataLayer, OverlayLayer, RenderFrame, Renderer};

/// Headless renderer used by tests and embedders without a real backend.
///
/// It validates every frame and retains the resulting scene, so callers can
/// inspect exactly what a backend would show. Without `full_clear`, data
/// primitives accumulate on top of the previous pass the way a retained-mode
/// surface would.
#[derive(Debug, Clone, PartialEq)]
pub struct NullRenderer {
    surface: BoundingBox,
    data: DataLayer,
    overlay: OverlayLayer,
    pub render_count: usize,
    pub last_line_count: usize,
    pub last_marker_count: usize,
}

impl NullRenderer {
    #[must_use]
    pub fn new(surface: BoundingBox) -> Self {
        Self {
            surface,
            data: DataLayer::default(),
            overlay: OverlayLayer::default(),
            render_count: 0,
            last_line_count: 0,
            last_marker_count: 0,
        }
    }

    /// Data layer as currently retained on the surface.
    #[must_use]
    pub fn data_layer(&self) -> &DataLayer {
        &self.data
    }

    #[must_use]
    pub fn overlay_layer(&self) -> &OverlayLayer {
        &self.overlay
    }

    pub fn set_surface_bounds(&mut self, surface: BoundingBox) {
        self.surface = surface;
    }
}

impl Default for NullRenderer {
    fn default() -> Self {
        Self::new(BoundingBox::new(0.0, 0.0, 600.0, 400.0))
    }
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        if frame.full_clear {
            self.data = frame.data.clone();
        } else {
            self.data.translate_x = frame.data.translate_x;
            self.data.lines.extend(frame.data.lines.iter().copied());
            self.data.markers.extend(frame.data.markers.iter().copied());
        }
        self.overlay = frame.overlay.clone();
        self.render_count += 1;
        self.last_line_count = frame.data.lines.len();
        self.last_marker_count = frame.data.markers.len();
        Ok(())
    }

    fn render_overlay(&mut self, overlay: &OverlayLayer) -> ChartResult<()> {
        overlay.validate()?;
        self.overlay = overlay.clone();
        Ok(())
    }

    fn content_bounds(&self) -> Option<BoundingBox> {
        self.data.bounds()
    }

    fn surface_bounds(&self) -> BoundingBox {
        self.surface
    }

    fn clear(&mut self) -> ChartResult<()> {
        self.data = DataLayer::default();
        self.overlay = OverlayLayer::default();
        Ok(())
    }
}
