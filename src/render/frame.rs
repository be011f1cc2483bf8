use crate::core::BoundingBox;
use crate::error::{ChartError, ChartResult};
use crate::render::{CirclePrimitive, LinePrimitive, RectPrimitive, TextPrimitive};

/// Line segments and sample markers, drawn in local coordinates and shifted
/// horizontally by `translate_x` (the current pan).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataLayer {
    pub translate_x: f64,
    pub lines: Vec<LinePrimitive>,
    pub markers: Vec<CirclePrimitive>,
}

impl DataLayer {
    /// Extent of the layer in local coordinates, before `translate_x`.
    ///
    /// Returns `None` for an empty layer.
    #[must_use]
    pub fn bounds(&self) -> Option<BoundingBox> {
        self.lines
            .iter()
            .map(|line| line.bounds())
            .chain(self.markers.iter().map(|marker| marker.bounds()))
            .reduce(BoundingBox::union)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.markers.is_empty()
    }
}

/// Hover guide line plus tooltip box and text, in surface coordinates.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OverlayLayer {
    pub guide: Option<LinePrimitive>,
    pub tooltip_box: Option<RectPrimitive>,
    pub tooltip_texts: Vec<TextPrimitive>,
}

impl OverlayLayer {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guide.is_none() && self.tooltip_box.is_none() && self.tooltip_texts.is_empty()
    }

    pub fn validate(&self) -> ChartResult<()> {
        if let Some(guide) = self.guide {
            guide.validate()?;
        }
        if let Some(tooltip_box) = self.tooltip_box {
            tooltip_box.validate()?;
        }
        for text in &self.tooltip_texts {
            text.validate()?;
        }
        Ok(())
    }
}

/// Backend-agnostic scene for one chart draw pass.
///
/// With `full_clear` set, backends discard everything drawn by earlier passes
/// before drawing this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub width: f64,
    pub height: f64,
    pub full_clear: bool,
    pub data: DataLayer,
    pub overlay: OverlayLayer,
}

impl RenderFrame {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            full_clear: true,
            data: DataLayer::default(),
            overlay: OverlayLayer::default(),
        }
    }

    #[must_use]
    pub fn with_full_clear(mut self, full_clear: bool) -> Self {
        self.full_clear = full_clear;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.width.is_finite()
            || !self.height.is_finite()
            || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(ChartError::InvalidData(format!(
                "frame size must be finite and > 0: width={}, height={}",
                self.width, self.height
            )));
        }
        if !self.data.translate_x.is_finite() {
            return Err(ChartError::InvalidData(
                "data layer translation must be finite".to_owned(),
            ));
        }

        for line in &self.data.lines {
            line.validate()?;
        }
        for marker in &self.data.markers {
            marker.validate()?;
        }
        self.overlay.validate()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty() && self.overlay.is_empty()
    }
}
