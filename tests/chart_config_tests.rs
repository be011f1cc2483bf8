use line_chart_rs::ChartError;
use line_chart_rs::api::{ChartStyle, LineChart, LineChartConfig};
use line_chart_rs::core::{Dimensions, Margin, Sample};
use line_chart_rs::interaction::TooltipConfig;
use line_chart_rs::render::{Color, NullRenderer};

fn two_samples() -> Vec<Sample> {
    vec![Sample::new(0.0, 1.0), Sample::new(1.0, 2.0)]
}

#[test]
fn empty_json_yields_defaults() {
    let config = LineChartConfig::from_json_str("{}").expect("parse");
    assert_eq!(config, LineChartConfig::default());
    assert_eq!(config.margin, Margin::uniform(10.0));
    assert_eq!(config.dimensions, Dimensions::new(600.0, 400.0, 2.0, 8.0));
    assert!(!config.start_from_zero);
}

#[test]
fn partial_json_overrides_only_named_fields() {
    let config = LineChartConfig::from_json_str(
        r#"{
            "margin": { "top": 20 },
            "dimensions": { "width": 900, "points_spacing": 4 },
            "start_from_zero": true,
            "style": { "line_width": 3 }
        }"#,
    )
    .expect("parse");

    assert_eq!(config.margin, Margin::new(20.0, 10.0, 10.0, 10.0));
    assert_eq!(config.dimensions, Dimensions::new(900.0, 400.0, 2.0, 4.0));
    assert!(config.start_from_zero);
    assert_eq!(config.style.line_width, 3.0);
    assert_eq!(config.style.line_color, ChartStyle::default().line_color);
    assert_eq!(config.tooltip, TooltipConfig::default());
}

#[test]
fn json_output_parses_back() {
    let config = LineChartConfig::default()
        .with_margin(Margin::new(5.0, 6.0, 7.0, 8.0))
        .with_start_from_zero(true);
    let json = config.to_json_pretty().expect("serialize");
    assert_eq!(LineChartConfig::from_json_str(&json).expect("parse"), config);
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = LineChartConfig::from_json_str("{ margin: 3").expect_err("must fail");
    assert!(matches!(err, ChartError::InvalidConfig(_)));
}

#[test]
fn default_style_uses_documented_palette() {
    let style = ChartStyle::default();
    assert_eq!(style.line_color, Color::from_rgb8(0x00, 0x84, 0x8C));
    assert_eq!(style.marker_color, Color::from_rgb8(0xF1, 0xF2, 0xF2));
    assert_eq!(style.guide_color, Color::from_rgb8(200, 200, 200));
    assert_eq!(style.guide_width, 2.0);
}

#[test]
fn chart_rejects_bad_samples() {
    let cases = [
        Vec::new(),
        vec![Sample::new(0.0, 1.0), Sample::new(0.0, 2.0)],
        vec![Sample::new(1.0, 1.0), Sample::new(0.0, 2.0)],
        vec![Sample::new(0.0, f64::NAN)],
        vec![Sample::new(f64::INFINITY, 1.0)],
    ];
    for samples in cases {
        let result = LineChart::new(NullRenderer::default(), samples, LineChartConfig::default());
        assert!(matches!(result, Err(ChartError::InvalidData(_))));
    }
}

#[test]
fn chart_rejects_bad_layout_and_style() {
    let too_short =
        LineChartConfig::default().with_dimensions(Dimensions::new(600.0, 20.0, 2.0, 8.0));
    let no_line = LineChartConfig::default().with_style(ChartStyle {
        line_width: 0.0,
        ..ChartStyle::default()
    });
    let bad_tooltip = LineChartConfig::default().with_tooltip(TooltipConfig {
        width: -1.0,
        ..TooltipConfig::default()
    });

    for config in [too_short, no_line, bad_tooltip] {
        let result = LineChart::new(NullRenderer::default(), two_samples(), config);
        assert!(matches!(result, Err(ChartError::InvalidConfig(_))));
    }
}

#[test]
fn out_of_range_color_is_rejected() {
    let config = LineChartConfig::default().with_style(ChartStyle {
        marker_color: Color::rgba(1.5, 0.0, 0.0, 1.0),
        ..ChartStyle::default()
    });
    let result = LineChart::new(NullRenderer::default(), two_samples(), config);
    assert!(result.is_err());
}
