use tracing::trace;

use crate::core::{PixelPoint, Transform, nearest_sample, nearest_sample_index};
use crate::error::ChartResult;
use crate::interaction::{GestureTick, HoverTarget, InputEvent, place_tooltip};
use crate::render::Renderer;

use super::{LineChart, PluginEvent};

impl<R: Renderer> LineChart<R> {
    /// Routes one raw input event to its handler.
    pub fn handle_input(&mut self, event: InputEvent) -> ChartResult<()> {
        match event {
            InputEvent::PointerMove { client_x, client_y } => {
                self.pointer_move(client_x, client_y).map(|_| ())
            }
            InputEvent::PointerEnter => self.pointer_enter(),
            InputEvent::PointerLeave => self.pointer_leave(),
            InputEvent::Gesture(tick) => self.gesture(tick),
        }
    }

    /// Resolves the sample under the pointer and moves the guide line and
    /// tooltip onto it.
    ///
    /// Returns `None` when the rounded index has no sample; the overlay is
    /// then left exactly as it was.
    pub fn pointer_move(
        &mut self,
        client_x: f64,
        client_y: f64,
    ) -> ChartResult<Option<HoverTarget>> {
        if self.disposed {
            return Ok(None);
        }

        let pointer = self.surface_pointer(client_x, client_y);
        let transform = self.transform.transform();
        let content_x = pointer.x - transform.pan_x;

        let Some(found) = nearest_sample(&self.samples, content_x, transform, &self.geometry)
        else {
            let index = nearest_sample_index(content_x, transform, &self.geometry);
            trace!(index, pointer_x = pointer.x, "no sample under pointer");
            self.emit_plugin_event(PluginEvent::HoverMissed { index });
            return Ok(None);
        };

        let target = HoverTarget {
            position: found.position,
            sample: found.sample,
            guide_x: self.geometry.pixel_x(found.sample.x, transform.zoom) + transform.pan_x,
            pointer,
            tooltip: place_tooltip(pointer, self.config.tooltip),
        };
        let shown = self.overlay.resolve_hover(target);
        self.refresh_overlay()?;

        self.emit_plugin_event(PluginEvent::HoverResolved {
            position: found.position,
            sample: found.sample,
        });
        if shown {
            self.emit_plugin_event(PluginEvent::OverlayShown);
        }
        Ok(Some(target))
    }

    /// Shows the guide line and tooltip with their last content.
    pub fn pointer_enter(&mut self) -> ChartResult<()> {
        if self.disposed || !self.overlay.show() {
            return Ok(());
        }
        self.refresh_overlay()?;
        self.emit_plugin_event(PluginEvent::OverlayShown);
        Ok(())
    }

    pub fn pointer_leave(&mut self) -> ChartResult<()> {
        if self.disposed || !self.overlay.hide() {
            return Ok(());
        }
        self.refresh_overlay()?;
        self.emit_plugin_event(PluginEvent::OverlayHidden);
        Ok(())
    }

    /// Applies one pan-or-zoom tick.
    ///
    /// The overlay is hidden first. When the zoom changes, the sample under
    /// the pointer keeps its on-screen x through a corrective pan, which is
    /// dropped like any other pan when it would leave the bounds. The frame
    /// is always redrawn once the tick is applied.
    pub fn gesture(&mut self, tick: GestureTick) -> ChartResult<()> {
        if self.disposed {
            return Ok(());
        }

        let before = self.transform.transform();
        let overlay_hidden = self.overlay.hide();
        let pointer = self.surface_pointer(tick.client_x, tick.client_y);

        let anchor = if tick.wheel_delta != 0.0 {
            nearest_sample(
                &self.samples,
                pointer.x - before.pan_x,
                before,
                &self.geometry,
            )
        } else {
            None
        };

        if tick.movement_x != 0.0 {
            self.transform.apply_pan(tick.movement_x, self.pan_bounds());
        }

        if tick.wheel_delta != 0.0 {
            let anchor_before = anchor.map(|anchor| {
                self.geometry.pixel_x(anchor.sample.x, before.zoom) + self.transform.pan_x()
            });
            let zoom = self.commit_zoom(tick.wheel_delta)?;
            let recentre = if zoom == before.zoom {
                None
            } else {
                anchor.zip(anchor_before)
            };
            if let Some((anchor, anchor_before)) = recentre {
                let anchor_after =
                    self.geometry.pixel_x(anchor.sample.x, zoom) + self.transform.pan_x();
                let accepted = self
                    .transform
                    .apply_pan(anchor_before - anchor_after, self.pan_bounds());
                trace!(
                    position = anchor.position,
                    anchor_before,
                    anchor_after,
                    accepted,
                    "zoom re-centred on sample"
                );
            }
        }

        self.render(true)?;

        if overlay_hidden {
            self.emit_plugin_event(PluginEvent::OverlayHidden);
        }
        self.emit_transform_change(before);
        Ok(())
    }

    /// Shifts the data layer by `delta_px` and redraws.
    ///
    /// Returns `false` when the pan was dropped because it would leave the
    /// pan bounds; nothing is redrawn in that case.
    pub fn apply_pan(&mut self, delta_px: f64) -> ChartResult<bool> {
        if self.disposed {
            return Ok(false);
        }
        let before = self.transform.transform();
        if !self.transform.apply_pan(delta_px, self.pan_bounds()) {
            return Ok(false);
        }
        self.render(true)?;
        self.emit_transform_change(before);
        Ok(true)
    }

    /// Applies one wheel step and returns the committed zoom.
    ///
    /// Zoom changes the rendered width, so the chart draws once at the new
    /// zoom, pulls `pan_x` back into the re-measured bounds and draws again.
    pub fn apply_zoom(&mut self, wheel_delta: f64) -> ChartResult<f64> {
        if self.disposed {
            return Ok(self.transform.zoom());
        }
        let before = self.transform.transform();
        let zoom = self.commit_zoom(wheel_delta)?;
        self.emit_transform_change(before);
        Ok(zoom)
    }

    fn commit_zoom(&mut self, wheel_delta: f64) -> ChartResult<f64> {
        let zoom = self.transform.apply_zoom(wheel_delta);
        self.render(true)?;
        let bounds = self.pan_bounds();
        if self.transform.clamp_pan(bounds) {
            trace!(
                pan_x = self.transform.pan_x(),
                min = bounds.min,
                "pan re-clamped after zoom"
            );
        }
        self.render(true)?;
        Ok(zoom)
    }

    fn surface_pointer(&self, client_x: f64, client_y: f64) -> PixelPoint {
        let surface = self.renderer.surface_bounds();
        PixelPoint::new(client_x - surface.x, client_y - surface.y)
    }

    fn emit_transform_change(&mut self, before: Transform) {
        let after = self.transform.transform();
        if after == before {
            return;
        }
        trace!(pan_x = after.pan_x, zoom = after.zoom, "transform changed");
        self.emit_plugin_event(PluginEvent::TransformChanged {
            pan_x: after.pan_x,
            zoom: after.zoom,
        });
    }
}
