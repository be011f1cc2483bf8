use crate::extensions::PluginContext;
use crate::render::Renderer;

use super::{LineChart, PluginEvent};

impl<R: Renderer> LineChart<R> {
    pub(super) fn plugin_context(&self) -> PluginContext {
        PluginContext {
            transform: self.transform.transform(),
            rendered_width: self.rendered_width(),
            visible_width: self.geometry.visible_width(),
            samples_len: self.samples.len(),
            overlay: self.overlay.visibility(),
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: PluginEvent) {
        if self.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in self.plugins.values_mut() {
            plugin.on_event(event, context);
        }
    }
}
