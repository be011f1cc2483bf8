use serde::{Deserialize, Serialize};

use crate::core::{Sample, Transform};
use crate::interaction::OverlayVisibility;

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub transform: Transform,
    pub rendered_width: f64,
    pub visible_width: f64,
    pub samples_len: usize,
    pub overlay: OverlayVisibility,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PluginEvent {
    Rendered { full_clear: bool },
    TransformChanged { pan_x: f64, zoom: f64 },
    HoverResolved { position: usize, sample: Sample },
    HoverMissed { index: f64 },
    OverlayShown,
    OverlayHidden,
}

/// Observer hook for host-side logic such as linked views or analytics.
///
/// Plugins see events and a read-only context; they cannot mutate chart
/// internals.
pub trait ChartPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: PluginEvent, context: PluginContext);
}
