//! Host-facing extension points.

pub mod plugins;

pub use plugins::{ChartPlugin, PluginContext, PluginEvent};
