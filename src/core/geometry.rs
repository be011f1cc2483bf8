use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::transform::Transform;
use crate::core::types::{PixelPoint, Sample};
use crate::error::{ChartError, ChartResult};

/// Outer chart margins in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }
}

impl Default for Margin {
    fn default() -> Self {
        Self::uniform(10.0)
    }
}

/// Surface size plus marker radius (`point`) and the horizontal distance
/// between adjacent sample indices at zoom 1.0 (`points_spacing`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub point: f64,
    pub points_spacing: f64,
}

impl Dimensions {
    #[must_use]
    pub const fn new(width: f64, height: f64, point: f64, points_spacing: f64) -> Self {
        Self {
            width,
            height,
            point,
            points_spacing,
        }
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::new(600.0, 400.0, 2.0, 8.0)
    }
}

/// Margins inflated by the marker radius on all four sides, so markers at the
/// extremes are never clipped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spacing {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Spacing {
    #[must_use]
    pub fn derive(margin: Margin, point: f64) -> Self {
        Self {
            top: margin.top + point,
            right: margin.right + point,
            bottom: margin.bottom + point,
            left: margin.left + point,
        }
    }
}

/// Sample after vertical scaling/inversion, before horizontal spacing, zoom
/// and pan are applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

impl PlotPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Validated layout derived once from margins and dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotGeometry {
    margin: Margin,
    dimensions: Dimensions,
    spacing: Spacing,
    amplitude: f64,
}

impl PlotGeometry {
    pub fn new(margin: Margin, dimensions: Dimensions) -> ChartResult<Self> {
        for (name, value) in [
            ("margin.top", margin.top),
            ("margin.right", margin.right),
            ("margin.bottom", margin.bottom),
            ("margin.left", margin.left),
            ("dimensions.point", dimensions.point),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "`{name}` must be finite and >= 0"
                )));
            }
        }
        for (name, value) in [
            ("dimensions.width", dimensions.width),
            ("dimensions.height", dimensions.height),
            ("dimensions.points_spacing", dimensions.points_spacing),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "`{name}` must be finite and > 0"
                )));
            }
        }

        let spacing = Spacing::derive(margin, dimensions.point);
        let amplitude = dimensions.height - spacing.top - spacing.bottom;
        if amplitude <= 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "plot height {} leaves no vertical amplitude after spacing",
                dimensions.height
            )));
        }
        if dimensions.width - margin.left - margin.right <= 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "plot width {} leaves no visible width after margins",
                dimensions.width
            )));
        }

        Ok(Self {
            margin,
            dimensions,
            spacing,
            amplitude,
        })
    }

    #[must_use]
    pub fn margin(&self) -> Margin {
        self.margin
    }

    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    #[must_use]
    pub fn spacing(&self) -> Spacing {
        self.spacing
    }

    /// Vertical pixel extent available for data.
    #[must_use]
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Usable horizontal extent the content scrolls within.
    #[must_use]
    pub fn visible_width(&self) -> f64 {
        self.dimensions.width - self.margin.left - self.margin.right
    }

    #[must_use]
    pub fn marker_radius(&self) -> f64 {
        self.dimensions.point
    }

    #[must_use]
    pub fn points_spacing(&self) -> f64 {
        self.dimensions.points_spacing
    }

    /// Horizontal pixel position of a plot-space `x` at the given zoom,
    /// excluding pan.
    #[must_use]
    pub fn pixel_x(&self, plot_x: f64, zoom: f64) -> f64 {
        plot_x * self.dimensions.points_spacing * zoom + self.spacing.left
    }

    #[must_use]
    pub fn pixel_y(&self, plot_y: f64) -> f64 {
        plot_y + self.spacing.top
    }
}

/// Scales samples to fill the vertical amplitude, inverted so larger values
/// sit higher.
///
/// The baseline is zero when `start_from_zero` is set and the minimum sample
/// otherwise. A zero-height value range cannot be scaled; those series are
/// flattened to mid-amplitude.
#[must_use]
pub fn to_plot_space(
    samples: &[Sample],
    geometry: &PlotGeometry,
    start_from_zero: bool,
) -> Vec<PlotPoint> {
    let amplitude = geometry.amplitude();
    let Some(min_y) = samples.iter().map(|s| OrderedFloat(s.y)).min() else {
        return Vec::new();
    };
    let max_y = samples
        .iter()
        .map(|s| OrderedFloat(s.y))
        .max()
        .map_or(min_y.0, |v| v.0);

    let (baseline, top) = if start_from_zero {
        (min_y.0.min(0.0), max_y.max(0.0))
    } else {
        (min_y.0, max_y)
    };
    let range = top - baseline;

    if !(range.is_finite() && range > 0.0) {
        let flat = amplitude / 2.0;
        return samples.iter().map(|s| PlotPoint::new(s.x, flat)).collect();
    }

    let scale = amplitude / range;
    samples
        .iter()
        .map(|s| {
            let y = amplitude - (s.y - baseline) * scale;
            PlotPoint::new(s.x, y.clamp(0.0, amplitude))
        })
        .collect()
}

/// Maps a plot-space point to surface pixels under `transform`.
///
/// Pan is not included: the renderer applies it as a translation of the whole
/// data layer.
#[must_use]
pub fn to_pixel_space(
    point: PlotPoint,
    transform: Transform,
    geometry: &PlotGeometry,
) -> PixelPoint {
    PixelPoint::new(
        geometry.pixel_x(point.x, transform.zoom),
        geometry.pixel_y(point.y),
    )
}

#[cfg(test)]
mod tests {
    use super::{Dimensions, Margin, PlotGeometry, Spacing};

    #[test]
    fn spacing_inflates_every_side_by_marker_radius() {
        let spacing = Spacing::derive(Margin::new(1.0, 2.0, 3.0, 4.0), 2.5);
        assert_eq!(spacing.top, 3.5);
        assert_eq!(spacing.right, 4.5);
        assert_eq!(spacing.bottom, 5.5);
        assert_eq!(spacing.left, 6.5);
    }

    #[test]
    fn default_geometry_amplitude_and_visible_width() {
        let geometry =
            PlotGeometry::new(Margin::default(), Dimensions::default()).expect("valid geometry");
        assert_eq!(geometry.amplitude(), 400.0 - 12.0 - 12.0);
        assert_eq!(geometry.visible_width(), 580.0);
    }
}
