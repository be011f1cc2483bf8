mod frame;
mod null_renderer;
mod primitives;

pub use frame::{DataLayer, OverlayLayer, RenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive,
};

use crate::core::BoundingBox;
use crate::error::ChartResult;

/// Drawing surface contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame` so drawing code stays
/// isolated from geometry and interaction logic. They also answer the two
/// measurement queries the chart needs after each pass: the extent of the
/// drawn data layer and the on-screen rectangle of the surface itself.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;

    /// Replaces only the hover overlay, keeping the data layer as drawn.
    fn render_overlay(&mut self, overlay: &OverlayLayer) -> ChartResult<()>;

    /// Bounding box of the data layer drawn by the last successful pass, in
    /// local (untranslated) coordinates. `None` before the first pass.
    fn content_bounds(&self) -> Option<BoundingBox>;

    /// On-screen rectangle of the surface, used to convert raw pointer
    /// coordinates into surface-relative ones.
    fn surface_bounds(&self) -> BoundingBox;

    /// Removes every primitive drawn so far.
    fn clear(&mut self) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
