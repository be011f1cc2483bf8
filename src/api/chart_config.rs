use serde::{Deserialize, Serialize};

use crate::core::{Dimensions, Margin};
use crate::error::{ChartError, ChartResult};
use crate::interaction::TooltipConfig;
use crate::render::Color;

/// Colors and stroke sizes for every drawn primitive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub line_color: Color,
    pub line_width: f64,
    pub marker_color: Color,
    pub guide_color: Color,
    pub guide_width: f64,
    pub tooltip_fill_color: Color,
    pub tooltip_corner_radius: f64,
    pub tooltip_text_color: Color,
    pub tooltip_font_size_px: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            line_color: Color::from_rgb8(0x00, 0x84, 0x8C),
            line_width: 1.0,
            marker_color: Color::from_rgb8(0xF1, 0xF2, 0xF2),
            guide_color: Color::from_rgb8(200, 200, 200),
            guide_width: 2.0,
            tooltip_fill_color: Color::rgba(1.0, 1.0, 1.0, 0.2),
            tooltip_corner_radius: 1.0,
            tooltip_text_color: Color::rgb(1.0, 1.0, 1.0),
            tooltip_font_size_px: 12.0,
        }
    }
}

/// Construction configuration for [`super::LineChart`].
///
/// Every field has a serde default, so a JSON document only needs the values
/// it overrides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineChartConfig {
    #[serde(default)]
    pub margin: Margin,
    #[serde(default)]
    pub dimensions: Dimensions,
    /// Use zero instead of the minimum sample as the vertical baseline.
    #[serde(default)]
    pub start_from_zero: bool,
    #[serde(default = "default_tooltip_config")]
    pub tooltip: TooltipConfig,
    #[serde(default = "default_chart_style")]
    pub style: ChartStyle,
}

impl LineChartConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            margin: Margin::default(),
            dimensions: Dimensions::default(),
            start_from_zero: false,
            tooltip: default_tooltip_config(),
            style: default_chart_style(),
        }
    }

    #[must_use]
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn with_dimensions(mut self, dimensions: Dimensions) -> Self {
        self.dimensions = dimensions;
        self
    }

    #[must_use]
    pub fn with_start_from_zero(mut self, start_from_zero: bool) -> Self {
        self.start_from_zero = start_from_zero;
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: TooltipConfig) -> Self {
        self.tooltip = tooltip;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to parse chart config json: {e}"))
        })
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize chart config json: {e}"))
        })
    }
}

impl Default for LineChartConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn default_tooltip_config() -> TooltipConfig {
    TooltipConfig::default()
}

fn default_chart_style() -> ChartStyle {
    ChartStyle::default()
}
