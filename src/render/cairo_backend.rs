use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::io::Write;

use crate::core::BoundingBox;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, OverlayLayer, RectPrimitive, RenderFrame, Renderer, TextHAlign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub markers_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
}

/// Renderers that can draw into an externally owned Cairo context, such as a
/// GTK `DrawingArea` draw callback.
pub trait CairoContextRenderer: Renderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;

    /// Updates the on-screen rectangle reported by `surface_bounds`.
    fn set_surface_bounds(&mut self, bounds: BoundingBox);

    /// With painting disabled, `Renderer` passes only measure and retain the
    /// frame; pixels come from `render_on_cairo_context` alone.
    fn set_offscreen_painting(&mut self, enabled: bool);
}

/// Cairo + Pango renderer backend.
///
/// Draws either into its own image surface (`Renderer::render`) or into an
/// external context (`CairoContextRenderer`). Cairo is immediate-mode, so a
/// pass without `full_clear` paints over the previous pixels and the tracked
/// content bounds grow accordingly. The last scene is retained so an
/// overlay-only update can repaint the image surface from it.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    surface_bounds: BoundingBox,
    clear_color: Color,
    content_bounds: Option<BoundingBox>,
    retained: Option<RenderFrame>,
    paint_offscreen: bool,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidConfig(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            surface_bounds: BoundingBox::new(0.0, 0.0, f64::from(width), f64::from(height)),
            clear_color: Color::rgb(0.0, 0.0, 0.0),
            content_bounds: None,
            retained: None,
            paint_offscreen: true,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn offscreen_painting(&self) -> bool {
        self.paint_offscreen
    }

    /// Scene of the last successful pass, with the overlay as last pushed.
    #[must_use]
    pub fn retained_frame(&self) -> Option<&RenderFrame> {
        self.retained.as_ref()
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Encodes the image surface as PNG.
    pub fn write_png<W: Write>(&self, writer: &mut W) -> ChartResult<()> {
        self.surface
            .write_to_png(writer)
            .map_err(|err| ChartError::Backend(format!("failed to write png: {err}")))
    }

    fn paint_clear(&self, context: &Context) -> ChartResult<()> {
        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        if frame.full_clear {
            self.paint_clear(context)?;
        }

        let mut stats = CairoRenderStats::default();

        context
            .save()
            .map_err(|err| map_backend_error("failed to save context", err))?;
        context.translate(frame.data.translate_x, 0.0);
        let drawn = draw_data_layer(context, frame, &mut stats);
        let restored = context
            .restore()
            .map_err(|err| map_backend_error("failed to restore context", err));
        drawn.and(restored)?;

        self.commit_pass(frame);

        if let Some(guide) = frame.overlay.guide {
            apply_color(context, guide.color);
            context.set_line_width(guide.stroke_width);
            context.move_to(guide.x1, guide.y1);
            context.line_to(guide.x2, guide.y2);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke guide line", err))?;
            stats.lines_drawn += 1;
        }

        if let Some(rect) = frame.overlay.tooltip_box {
            append_rect_path(context, rect);
            apply_color(context, rect.fill_color);
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill tooltip box", err))?;
            stats.rects_drawn += 1;
        }

        for text in &frame.overlay.tooltip_texts {
            let layout = pangocairo::functions::create_layout(context);
            let font_description =
                FontDescription::from_string(&format!("Sans {}", text.font_size_px));
            layout.set_font_description(Some(&font_description));
            layout.set_text(&text.text);

            let (text_width, _) = layout.pixel_size();
            let x = match text.h_align {
                TextHAlign::Left => text.x,
                TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
                TextHAlign::Right => text.x - f64::from(text_width),
            };
            let baseline = f64::from(layout.baseline()) / f64::from(pango::SCALE);

            apply_color(context, text.color);
            context.move_to(x, text.y - baseline);
            pangocairo::functions::show_layout(context, &layout);
            stats.texts_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }

    /// Records a data layer that reached the surface: grows or replaces the
    /// content bounds and updates the retained scene.
    fn commit_pass(&mut self, frame: &RenderFrame) {
        let previous = if frame.full_clear {
            None
        } else {
            self.content_bounds
        };
        self.content_bounds = match (previous, frame.data.bounds()) {
            (Some(previous), Some(current)) => Some(previous.union(current)),
            (previous, current) => current.or(previous),
        };
        self.retain(frame);
    }

    fn retain(&mut self, frame: &RenderFrame) {
        if !frame.full_clear {
            if let Some(retained) = self.retained.as_mut() {
                retained.data.translate_x = frame.data.translate_x;
                retained.data.lines.extend(frame.data.lines.iter().copied());
                retained.data.markers.extend(frame.data.markers.iter().copied());
                retained.overlay = frame.overlay.clone();
                return;
            }
        }
        self.retained = Some(frame.clone().with_full_clear(true));
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        if !self.paint_offscreen {
            frame.validate()?;
            self.commit_pass(frame);
            return Ok(());
        }
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }

    fn render_overlay(&mut self, overlay: &OverlayLayer) -> ChartResult<()> {
        overlay.validate()?;
        if !self.paint_offscreen {
            if let Some(retained) = self.retained.as_mut() {
                retained.overlay = overlay.clone();
            }
            return Ok(());
        }
        let Some(retained) = self.retained.as_ref() else {
            return Ok(());
        };
        let mut frame = retained.clone();
        frame.overlay = overlay.clone();
        self.render(&frame)
    }

    fn content_bounds(&self) -> Option<BoundingBox> {
        self.content_bounds
    }

    fn surface_bounds(&self) -> BoundingBox {
        self.surface_bounds
    }

    fn clear(&mut self) -> ChartResult<()> {
        self.content_bounds = None;
        self.retained = None;
        if !self.paint_offscreen {
            return Ok(());
        }
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.paint_clear(&context)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }

    fn set_surface_bounds(&mut self, bounds: BoundingBox) {
        self.surface_bounds = bounds;
    }

    fn set_offscreen_painting(&mut self, enabled: bool) {
        self.paint_offscreen = enabled;
    }
}

fn draw_data_layer(
    context: &Context,
    frame: &RenderFrame,
    stats: &mut CairoRenderStats,
) -> ChartResult<()> {
    for line in &frame.data.lines {
        apply_color(context, line.color);
        context.set_line_width(line.stroke_width);
        context.move_to(line.x1, line.y1);
        context.line_to(line.x2, line.y2);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke line", err))?;
        stats.lines_drawn += 1;
    }
    for marker in &frame.data.markers {
        apply_color(context, marker.fill_color);
        context.new_sub_path();
        context.arc(marker.cx, marker.cy, marker.radius, 0.0, TAU);
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill marker", err))?;
        stats.markers_drawn += 1;
    }
    Ok(())
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn append_rect_path(context: &Context, rect: RectPrimitive) {
    if rect.corner_radius <= 0.0 {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        return;
    }

    let radius = rect
        .corner_radius
        .min(rect.width * 0.5)
        .min(rect.height * 0.5);
    let left = rect.x;
    let top = rect.y;
    let right = rect.x + rect.width;
    let bottom = rect.y + rect.height;

    context.new_sub_path();
    context.arc(right - radius, top + radius, radius, -FRAC_PI_2, 0.0);
    context.arc(right - radius, bottom - radius, radius, 0.0, FRAC_PI_2);
    context.arc(left + radius, bottom - radius, radius, FRAC_PI_2, PI);
    context.arc(left + radius, top + radius, radius, PI, PI + FRAC_PI_2);
    context.close_path();
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
