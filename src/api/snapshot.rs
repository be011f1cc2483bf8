use serde::{Deserialize, Serialize};

use crate::core::{PlotPoint, Sample, Transform};
use crate::error::{ChartError, ChartResult};
use crate::interaction::OverlayState;
use crate::render::Renderer;

use super::LineChart;

pub const CHART_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable deterministic view of chart state, used by regression tests
/// and debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub transform: Transform,
    pub overlay: OverlayState,
    pub rendered_width: f64,
    pub visible_width: f64,
    pub amplitude: f64,
    pub samples: Vec<Sample>,
    pub plot_points: Vec<PlotPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: ChartSnapshot,
}

impl ChartSnapshot {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        let payload = ChartSnapshotJsonContractV1 {
            schema_version: CHART_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }

    /// Accepts either a versioned payload or a bare snapshot object.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<ChartSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: ChartSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != CHART_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: Renderer> LineChart<R> {
    #[must_use]
    pub fn snapshot(&self) -> ChartSnapshot {
        ChartSnapshot {
            transform: self.transform.transform(),
            overlay: self.overlay,
            rendered_width: self.rendered_width(),
            visible_width: self.geometry.visible_width(),
            amplitude: self.geometry.amplitude(),
            samples: self.samples.clone(),
            plot_points: self.plot_points.clone(),
        }
    }
}
