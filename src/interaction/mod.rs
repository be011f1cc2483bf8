use serde::{Deserialize, Serialize};

use crate::core::{PixelPoint, Sample};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OverlayVisibility {
    #[default]
    Hidden,
    Visible,
}

/// Fixed tooltip box geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipConfig {
    pub width: f64,
    pub height: f64,
    /// Gap between the pointer and the nearest tooltip corner.
    pub pointer_offset: f64,
    /// Extra room required beyond the box size before the default up-left
    /// placement is used.
    pub flip_margin: f64,
    pub text_inset: f64,
    pub line_height: f64,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            width: 100.0,
            height: 50.0,
            pointer_offset: 3.0,
            flip_margin: 8.0,
            text_inset: 10.0,
            line_height: 20.0,
        }
    }
}

/// Top-left corner of the tooltip box in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipPlacement {
    pub x: f64,
    pub y: f64,
    pub flipped_x: bool,
    pub flipped_y: bool,
}

/// Places the tooltip above and left of the pointer, flipping each axis
/// independently to below/right when the pointer is too close to the near
/// edge for the box to fit.
#[must_use]
pub fn place_tooltip(pointer: PixelPoint, config: TooltipConfig) -> TooltipPlacement {
    let flipped_x = pointer.x < config.width + config.flip_margin;
    let flipped_y = pointer.y < config.height + config.flip_margin;

    let x = if flipped_x {
        pointer.x + config.pointer_offset
    } else {
        pointer.x - config.width - config.pointer_offset
    };
    let y = if flipped_y {
        pointer.y + config.pointer_offset
    } else {
        pointer.y - config.height - config.pointer_offset
    };

    TooltipPlacement {
        x,
        y,
        flipped_x,
        flipped_y,
    }
}

/// Overlay content for the sample currently under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoverTarget {
    pub position: usize,
    pub sample: Sample,
    /// Guide line x in surface coordinates (pan included).
    pub guide_x: f64,
    pub pointer: PixelPoint,
    pub tooltip: TooltipPlacement,
}

/// Visibility and content of the hover guide line and tooltip.
///
/// Starts hidden. Pointer-enter and a resolved hover show it, pointer-leave
/// and gesture ticks hide it. Hiding keeps the last content so a later
/// pointer-enter shows it again until the next move refreshes it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OverlayState {
    visibility: OverlayVisibility,
    hover: Option<HoverTarget>,
}

impl OverlayState {
    #[must_use]
    pub fn visibility(self) -> OverlayVisibility {
        self.visibility
    }

    #[must_use]
    pub fn is_visible(self) -> bool {
        self.visibility == OverlayVisibility::Visible
    }

    #[must_use]
    pub fn hover(self) -> Option<HoverTarget> {
        self.hover
    }

    /// Returns `true` when the visibility changed.
    pub fn show(&mut self) -> bool {
        self.set_visibility(OverlayVisibility::Visible)
    }

    /// Returns `true` when the visibility changed.
    pub fn hide(&mut self) -> bool {
        self.set_visibility(OverlayVisibility::Hidden)
    }

    /// Replaces content and shows the overlay.
    pub fn resolve_hover(&mut self, target: HoverTarget) -> bool {
        self.hover = Some(target);
        self.show()
    }

    fn set_visibility(&mut self, visibility: OverlayVisibility) -> bool {
        let changed = self.visibility != visibility;
        self.visibility = visibility;
        changed
    }
}

/// One combined pan-or-zoom tick from the pointing device.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GestureTick {
    /// Horizontal pointer movement since the previous tick.
    pub movement_x: f64,
    /// Wheel delta; positive zooms out, negative zooms in.
    pub wheel_delta: f64,
    pub client_x: f64,
    pub client_y: f64,
}

impl GestureTick {
    #[must_use]
    pub const fn pan(movement_x: f64, client_x: f64, client_y: f64) -> Self {
        Self {
            movement_x,
            wheel_delta: 0.0,
            client_x,
            client_y,
        }
    }

    #[must_use]
    pub const fn zoom(wheel_delta: f64, client_x: f64, client_y: f64) -> Self {
        Self {
            movement_x: 0.0,
            wheel_delta,
            client_x,
            client_y,
        }
    }
}

/// Raw input delivered by the host event source. Pointer coordinates are in
/// the same space as `Renderer::surface_bounds`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    PointerMove { client_x: f64, client_y: f64 },
    PointerEnter,
    PointerLeave,
    Gesture(GestureTick),
}

#[cfg(test)]
mod tests {
    use super::{OverlayState, OverlayVisibility};

    #[test]
    fn overlay_starts_hidden_and_reports_transitions() {
        let mut overlay = OverlayState::default();
        assert_eq!(overlay.visibility(), OverlayVisibility::Hidden);
        assert!(overlay.show());
        assert!(!overlay.show());
        assert!(overlay.hide());
        assert!(overlay.hover().is_none());
    }
}
