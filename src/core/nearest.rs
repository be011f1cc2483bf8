use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::core::geometry::PlotGeometry;
use crate::core::transform::Transform;
use crate::core::types::Sample;

/// Sample resolved for a hover position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NearestSample {
    /// Position of the sample in the input sequence.
    pub position: usize,
    pub sample: Sample,
}

/// Inverts the horizontal pixel mapping and rounds to the nearest sample
/// index. `content_x` is in data-layer coordinates, i.e. pointer x minus pan.
///
/// The result is clamped at zero but not at the upper end.
#[must_use]
pub fn nearest_sample_index(content_x: f64, transform: Transform, geometry: &PlotGeometry) -> f64 {
    let step = geometry.points_spacing() * transform.zoom;
    let raw = ((content_x - geometry.spacing().left) / step).round();
    if raw <= 0.0 { 0.0 } else { raw }
}

/// Finds the sample whose `x` equals `index` exactly.
///
/// `samples` must be sorted by strictly increasing `x`.
#[must_use]
pub fn find_sample_by_index(samples: &[Sample], index: f64) -> Option<NearestSample> {
    if !index.is_finite() {
        return None;
    }
    let position = samples
        .binary_search_by(|sample| sample.x.partial_cmp(&index).unwrap_or(Ordering::Less))
        .ok()?;
    Some(NearestSample {
        position,
        sample: samples[position],
    })
}

/// Resolves the sample under `content_x`, or `None` when the rounded index
/// has no matching sample (sparse `x` values, or past the end of the series).
#[must_use]
pub fn nearest_sample(
    samples: &[Sample],
    content_x: f64,
    transform: Transform,
    geometry: &PlotGeometry,
) -> Option<NearestSample> {
    find_sample_by_index(samples, nearest_sample_index(content_x, transform, geometry))
}

#[cfg(test)]
mod tests {
    use super::find_sample_by_index;
    use crate::core::Sample;

    #[test]
    fn negative_zero_index_matches_first_sample() {
        let samples = [Sample::new(0.0, 1.0), Sample::new(1.0, 2.0)];
        let found = find_sample_by_index(&samples, -0.0).expect("first sample");
        assert_eq!(found.position, 0);
    }
}
