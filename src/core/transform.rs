use serde::{Deserialize, Serialize};
use tracing::trace;

/// Wheel delta that corresponds to one full zoom unit.
pub const WHEEL_DELTA_PER_ZOOM_UNIT: f64 = 240.0;

/// Zoom never goes below the initial fit.
pub const MIN_ZOOM: f64 = 1.0;

/// Current horizontal pan offset and zoom factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub pan_x: f64,
    pub zoom: f64,
}

impl Transform {
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            pan_x: 0.0,
            zoom: MIN_ZOOM,
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Closed interval `[min, 0]` that `pan_x` must stay within.
///
/// When the rendered content fits inside the visible width the interval
/// collapses to `[0, 0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanBounds {
    pub min: f64,
    pub max: f64,
}

impl PanBounds {
    #[must_use]
    pub fn new(rendered_width: f64, visible_width: f64) -> Self {
        let overflow = (rendered_width - visible_width).max(0.0);
        Self {
            min: -overflow,
            max: 0.0,
        }
    }

    #[must_use]
    pub fn contains(self, pan_x: f64) -> bool {
        pan_x >= self.min && pan_x <= self.max
    }

    #[must_use]
    pub fn clamp(self, pan_x: f64) -> f64 {
        pan_x.clamp(self.min, self.max)
    }
}

/// Single-owner pan/zoom state.
///
/// Pans are all-or-nothing: a delta that would leave the bounds is dropped,
/// which is the normal outcome of dragging against an edge. Zoom is clamped at
/// [`MIN_ZOOM`]; because zoom changes the rendered width, callers re-measure
/// the content and then call [`TransformState::clamp_pan`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransformState {
    transform: Transform,
}

impl TransformState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    #[must_use]
    pub fn pan_x(&self) -> f64 {
        self.transform.pan_x
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.transform.zoom
    }

    /// Shifts the pan offset by `delta_px` if the result stays in `bounds`.
    ///
    /// Returns `true` when the pan was accepted.
    pub fn apply_pan(&mut self, delta_px: f64, bounds: PanBounds) -> bool {
        if !delta_px.is_finite() {
            return false;
        }
        let candidate = self.transform.pan_x + delta_px;
        if !bounds.contains(candidate) {
            trace!(
                pan_x = self.transform.pan_x,
                delta_px,
                min = bounds.min,
                "pan dropped outside bounds"
            );
            return false;
        }
        self.transform.pan_x = candidate;
        true
    }

    /// Applies one wheel step and returns the committed zoom.
    ///
    /// Positive deltas zoom out, negative deltas zoom in.
    pub fn apply_zoom(&mut self, wheel_delta: f64) -> f64 {
        if !wheel_delta.is_finite() {
            return self.transform.zoom;
        }
        let candidate = self.transform.zoom - wheel_delta / WHEEL_DELTA_PER_ZOOM_UNIT;
        self.transform.zoom = if candidate < MIN_ZOOM {
            MIN_ZOOM
        } else {
            candidate
        };
        trace!(zoom = self.transform.zoom, wheel_delta, "zoom committed");
        self.transform.zoom
    }

    /// Pulls `pan_x` back into `bounds`. Returns `true` when it moved.
    pub fn clamp_pan(&mut self, bounds: PanBounds) -> bool {
        let clamped = bounds.clamp(self.transform.pan_x);
        if clamped == self.transform.pan_x {
            return false;
        }
        self.transform.pan_x = clamped;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::PanBounds;

    #[test]
    fn pan_bounds_collapse_when_content_fits() {
        let bounds = PanBounds::new(120.0, 580.0);
        assert_eq!(bounds.min, 0.0);
        assert_eq!(bounds.max, 0.0);
        assert!(bounds.contains(0.0));
        assert!(!bounds.contains(-0.5));
    }
}
