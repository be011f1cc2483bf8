use crate::core::Sample;
use crate::error::{ChartError, ChartResult};
use crate::interaction::TooltipConfig;

use super::ChartStyle;

pub(super) fn validate_samples(samples: &[Sample]) -> ChartResult<()> {
    if samples.is_empty() {
        return Err(ChartError::InvalidData(
            "line data must contain at least one sample".to_owned(),
        ));
    }

    if let Some(index) = samples.iter().position(|sample| !sample.is_finite()) {
        return Err(ChartError::InvalidData(format!(
            "sample at index {index} must have finite x and y"
        )));
    }

    if let Some(index) = samples
        .windows(2)
        .position(|pair| pair[1].x <= pair[0].x)
    {
        return Err(ChartError::InvalidData(format!(
            "sample x values must be strictly increasing (index {})",
            index + 1
        )));
    }

    Ok(())
}

pub(super) fn validate_chart_style(style: ChartStyle) -> ChartResult<ChartStyle> {
    style.line_color.validate()?;
    style.marker_color.validate()?;
    style.guide_color.validate()?;
    style.tooltip_fill_color.validate()?;
    style.tooltip_text_color.validate()?;

    for (name, value) in [
        ("line_width", style.line_width),
        ("guide_width", style.guide_width),
        ("tooltip_font_size_px", style.tooltip_font_size_px),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "style `{name}` must be finite and > 0"
            )));
        }
    }
    if !style.tooltip_corner_radius.is_finite() || style.tooltip_corner_radius < 0.0 {
        return Err(ChartError::InvalidConfig(
            "style `tooltip_corner_radius` must be finite and >= 0".to_owned(),
        ));
    }

    Ok(style)
}

pub(super) fn validate_tooltip_config(config: TooltipConfig) -> ChartResult<TooltipConfig> {
    for (name, value) in [
        ("width", config.width),
        ("height", config.height),
        ("line_height", config.line_height),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "tooltip `{name}` must be finite and > 0"
            )));
        }
    }
    for (name, value) in [
        ("pointer_offset", config.pointer_offset),
        ("flip_margin", config.flip_margin),
        ("text_inset", config.text_inset),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "tooltip `{name}` must be finite and >= 0"
            )));
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::validate_samples;
    use crate::ChartError;
    use crate::core::Sample;

    #[test]
    fn rejects_repeated_x() {
        let err = validate_samples(&[Sample::new(0.0, 1.0), Sample::new(0.0, 2.0)])
            .expect_err("duplicate x must fail");
        assert!(matches!(err, ChartError::InvalidData(_)));
    }

    #[test]
    fn accepts_single_sample() {
        assert!(validate_samples(&[Sample::new(3.0, 1.0)]).is_ok());
    }
}
