mod chart;
mod chart_config;
mod interaction_controller;
mod plugin_dispatch;
mod plugin_registry;
mod render_coordinator;
mod snapshot;
mod validation;

pub use chart::LineChart;
pub use chart_config::{ChartStyle, LineChartConfig};
pub use render_coordinator::tooltip_lines;
pub use snapshot::{CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshot, ChartSnapshotJsonContractV1};

pub use crate::extensions::PluginEvent;
