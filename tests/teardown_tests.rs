use std::cell::RefCell;
use std::rc::Rc;

use line_chart_rs::ChartResult;
use line_chart_rs::api::{LineChart, LineChartConfig};
use line_chart_rs::core::{BoundingBox, Sample};
use line_chart_rs::interaction::GestureTick;
use line_chart_rs::render::{NullRenderer, OverlayLayer, RenderFrame, Renderer};

/// Renderer handle that outlives the chart so the surface can be inspected
/// after drop.
#[derive(Clone, Default)]
struct SharedRenderer(Rc<RefCell<NullRenderer>>);

impl Renderer for SharedRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        self.0.borrow_mut().render(frame)
    }

    fn render_overlay(&mut self, overlay: &OverlayLayer) -> ChartResult<()> {
        self.0.borrow_mut().render_overlay(overlay)
    }

    fn content_bounds(&self) -> Option<BoundingBox> {
        self.0.borrow().content_bounds()
    }

    fn surface_bounds(&self) -> BoundingBox {
        self.0.borrow().surface_bounds()
    }

    fn clear(&mut self) -> ChartResult<()> {
        self.0.borrow_mut().clear()
    }
}

fn samples() -> Vec<Sample> {
    (0..101).map(|i| Sample::new(f64::from(i), 1.0)).collect()
}

#[test]
fn dispose_clears_surface_and_silences_handlers() {
    let mut chart =
        LineChart::new(NullRenderer::default(), samples(), LineChartConfig::default())
            .expect("chart init");
    chart.pointer_move(36.0, 200.0).expect("hover");

    chart.dispose().expect("dispose");
    assert!(chart.is_disposed());
    assert!(chart.renderer().data_layer().is_empty());
    assert!(chart.renderer().overlay_layer().is_empty());
    let render_count = chart.renderer().render_count;

    assert!(chart.pointer_move(36.0, 200.0).expect("move").is_none());
    assert!(!chart.apply_pan(-10.0).expect("pan"));
    chart.gesture(GestureTick::zoom(-240.0, 36.0, 200.0)).expect("gesture");
    chart.render(true).expect("render");

    assert_eq!(chart.transform().zoom, 1.0);
    assert_eq!(chart.renderer().render_count, render_count);
    assert!(chart.renderer().data_layer().is_empty());
    chart.dispose().expect("second dispose");
}

#[test]
fn dropping_chart_clears_what_it_drew() {
    let surface = SharedRenderer::default();
    {
        let mut chart = LineChart::new(surface.clone(), samples(), LineChartConfig::default())
            .expect("chart init");
        chart.pointer_move(36.0, 200.0).expect("hover");
        assert_eq!(surface.0.borrow().data_layer().markers.len(), 101);
        assert!(!surface.0.borrow().overlay_layer().is_empty());
    }

    assert!(surface.0.borrow().data_layer().is_empty());
    assert!(surface.0.borrow().overlay_layer().is_empty());
}
