use tracing::trace;

use crate::core::to_pixel_space;
use crate::error::ChartResult;
use crate::render::{
    CirclePrimitive, DataLayer, LinePrimitive, OverlayLayer, RectPrimitive, RenderFrame,
    Renderer, TextHAlign, TextPrimitive,
};

use super::{LineChart, PluginEvent};

impl<R: Renderer> LineChart<R> {
    /// Redraws segments and markers under the live transform.
    ///
    /// With `full_clear` the surface drops everything from earlier passes
    /// first, so repeated calls without state changes leave the same scene.
    pub fn render(&mut self, full_clear: bool) -> ChartResult<()> {
        if self.disposed {
            return Ok(());
        }
        let frame = self.build_frame(full_clear);
        self.renderer.render(&frame)?;
        trace!(
            full_clear,
            lines = frame.data.lines.len(),
            markers = frame.data.markers.len(),
            pan_x = frame.data.translate_x,
            "chart rendered"
        );
        self.emit_plugin_event(PluginEvent::Rendered { full_clear });
        Ok(())
    }

    /// Materializes the frame the next `render` call would draw.
    #[must_use]
    pub fn build_frame(&self, full_clear: bool) -> RenderFrame {
        let dimensions = self.geometry.dimensions();
        let mut frame =
            RenderFrame::new(dimensions.width, dimensions.height).with_full_clear(full_clear);
        frame.data = self.data_layer();
        frame.overlay = self.overlay_layer();
        frame
    }

    pub(super) fn data_layer(&self) -> DataLayer {
        let transform = self.transform.transform();
        let style = self.config.style;
        let pixels: Vec<_> = self
            .plot_points
            .iter()
            .map(|point| to_pixel_space(*point, transform, &self.geometry))
            .collect();

        let lines = pixels
            .windows(2)
            .map(|pair| {
                LinePrimitive::new(
                    pair[0].x,
                    pair[0].y,
                    pair[1].x,
                    pair[1].y,
                    style.line_width,
                    style.line_color,
                )
            })
            .collect();
        let markers = pixels
            .iter()
            .map(|pixel| {
                CirclePrimitive::new(
                    pixel.x,
                    pixel.y,
                    self.geometry.marker_radius(),
                    style.marker_color,
                )
            })
            .collect();

        DataLayer {
            translate_x: transform.pan_x,
            lines,
            markers,
        }
    }

    pub(super) fn overlay_layer(&self) -> OverlayLayer {
        let mut layer = OverlayLayer::default();
        if !self.overlay.is_visible() {
            return layer;
        }
        let Some(hover) = self.overlay.hover() else {
            return layer;
        };

        let style = self.config.style;
        let tooltip = self.config.tooltip;
        let surface_height = self.renderer.surface_bounds().height;
        let guide_bottom = if surface_height > 0.0 {
            surface_height
        } else {
            self.geometry.dimensions().height
        };

        layer.guide = Some(LinePrimitive::new(
            hover.guide_x,
            0.0,
            hover.guide_x,
            guide_bottom,
            style.guide_width,
            style.guide_color,
        ));
        layer.tooltip_box = Some(
            RectPrimitive::new(
                hover.tooltip.x,
                hover.tooltip.y,
                tooltip.width,
                tooltip.height,
                style.tooltip_fill_color,
            )
            .with_corner_radius(style.tooltip_corner_radius),
        );
        layer.tooltip_texts = tooltip_lines(hover.sample.x, hover.sample.y)
            .into_iter()
            .enumerate()
            .map(|(line, text)| {
                TextPrimitive::new(
                    text,
                    hover.tooltip.x + tooltip.text_inset,
                    hover.tooltip.y + tooltip.line_height * (line as f64 + 1.0),
                    style.tooltip_font_size_px,
                    style.tooltip_text_color,
                    TextHAlign::Left,
                )
            })
            .collect();
        layer
    }

    /// Pushes the current overlay without redrawing the data layer.
    pub(super) fn refresh_overlay(&mut self) -> ChartResult<()> {
        if self.disposed {
            return Ok(());
        }
        let overlay = self.overlay_layer();
        self.renderer.render_overlay(&overlay)
    }
}

/// Tooltip text lines for a sample's raw values.
#[must_use]
pub fn tooltip_lines(x: f64, y: f64) -> [String; 2] {
    [format!("x: {x}"), format!("y: {y}")]
}

#[cfg(test)]
mod tests {
    use super::tooltip_lines;

    #[test]
    fn tooltip_lines_print_integers_without_fraction() {
        assert_eq!(tooltip_lines(7.0, 1250.5), ["x: 7".to_owned(), "y: 1250.5".to_owned()]);
    }
}
