//! GTK4 binding: forwards pointer, scroll and drag input from a
//! `DrawingArea` to a [`LineChart`] and paints it from the widget's draw
//! callback.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gtk::prelude::*;
use gtk4 as gtk;
use tracing::warn;

use crate::api::LineChart;
use crate::core::BoundingBox;
use crate::interaction::{GestureTick, InputEvent};
use crate::render::CairoContextRenderer;

/// GTK reports one wheel notch as a scroll delta of 1.0; the chart expects
/// browser-style wheel deltas.
pub const WHEEL_DELTA_PER_SCROLL_STEP: f64 = 120.0;

pub type SharedLineChart<R> = Rc<RefCell<LineChart<R>>>;

/// Owns the event controllers attached to one drawing area.
///
/// Dropping the adapter removes every controller it attached, detaches the
/// draw callback and disposes the chart.
pub struct GtkLineChartAdapter<R: CairoContextRenderer + 'static> {
    chart: SharedLineChart<R>,
    drawing_area: gtk::DrawingArea,
    controllers: Vec<gtk::EventController>,
}

impl<R: CairoContextRenderer + 'static> GtkLineChartAdapter<R> {
    #[must_use]
    pub fn attach(drawing_area: &gtk::DrawingArea, mut chart: LineChart<R>) -> Self {
        chart.renderer_mut().set_offscreen_painting(false);
        let dimensions = chart.geometry().dimensions();
        drawing_area.set_content_width(dimensions.width.round() as i32);
        drawing_area.set_content_height(dimensions.height.round() as i32);

        let chart = Rc::new(RefCell::new(chart));
        install_draw_func(drawing_area, &chart);

        let pointer = Rc::new(Cell::new((0.0, 0.0)));
        let controllers = vec![
            motion_controller(drawing_area, &chart, &pointer),
            scroll_controller(drawing_area, &chart, &pointer),
            drag_controller(drawing_area, &chart),
        ];
        for controller in &controllers {
            drawing_area.add_controller(controller.clone());
        }

        Self {
            chart,
            drawing_area: drawing_area.clone(),
            controllers,
        }
    }

    #[must_use]
    pub fn chart(&self) -> &SharedLineChart<R> {
        &self.chart
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }
}

impl<R: CairoContextRenderer + 'static> Drop for GtkLineChartAdapter<R> {
    fn drop(&mut self) {
        for controller in self.controllers.drain(..) {
            self.drawing_area.remove_controller(&controller);
        }
        self.drawing_area.set_draw_func(|_, _, _, _| {});

        match self.chart.try_borrow_mut() {
            Ok(mut chart) => {
                if let Err(err) = chart.dispose() {
                    warn!(error = %err, "failed to dispose chart on adapter drop");
                }
            }
            Err(_) => warn!("chart borrowed during adapter drop; skipping dispose"),
        }
        self.drawing_area.queue_draw();
    }
}

fn install_draw_func<R: CairoContextRenderer + 'static>(
    drawing_area: &gtk::DrawingArea,
    chart: &SharedLineChart<R>,
) {
    let chart = Rc::clone(chart);
    drawing_area.set_draw_func(move |_, context, width, height| {
        let Ok(mut chart) = chart.try_borrow_mut() else {
            return;
        };
        if chart.is_disposed() {
            return;
        }
        chart.renderer_mut().set_surface_bounds(BoundingBox::new(
            0.0,
            0.0,
            f64::from(width),
            f64::from(height),
        ));
        let frame = chart.build_frame(true);
        if let Err(err) = chart.renderer_mut().render_on_cairo_context(context, &frame) {
            warn!(error = %err, "failed to draw chart frame");
        }
    });
}

fn motion_controller<R: CairoContextRenderer + 'static>(
    drawing_area: &gtk::DrawingArea,
    chart: &SharedLineChart<R>,
    pointer: &Rc<Cell<(f64, f64)>>,
) -> gtk::EventController {
    let motion = gtk::EventControllerMotion::new();
    {
        let chart = Rc::clone(chart);
        let drawing_area = drawing_area.clone();
        motion.connect_enter(move |_, _, _| {
            dispatch(&chart, &drawing_area, InputEvent::PointerEnter);
        });
    }
    {
        let chart = Rc::clone(chart);
        let drawing_area = drawing_area.clone();
        let pointer = Rc::clone(pointer);
        motion.connect_motion(move |_, x, y| {
            pointer.set((x, y));
            dispatch(
                &chart,
                &drawing_area,
                InputEvent::PointerMove {
                    client_x: x,
                    client_y: y,
                },
            );
        });
    }
    {
        let chart = Rc::clone(chart);
        let drawing_area = drawing_area.clone();
        motion.connect_leave(move |_| {
            dispatch(&chart, &drawing_area, InputEvent::PointerLeave);
        });
    }
    motion.upcast()
}

fn scroll_controller<R: CairoContextRenderer + 'static>(
    drawing_area: &gtk::DrawingArea,
    chart: &SharedLineChart<R>,
    pointer: &Rc<Cell<(f64, f64)>>,
) -> gtk::EventController {
    let scroll = gtk::EventControllerScroll::new(gtk::EventControllerScrollFlags::VERTICAL);
    let chart = Rc::clone(chart);
    let drawing_area = drawing_area.clone();
    let pointer = Rc::clone(pointer);
    scroll.connect_scroll(move |_, _, dy| {
        if dy.abs() > f64::EPSILON {
            let (x, y) = pointer.get();
            let tick = GestureTick::zoom(dy * WHEEL_DELTA_PER_SCROLL_STEP, x, y);
            dispatch(&chart, &drawing_area, InputEvent::Gesture(tick));
        }
        gtk::glib::Propagation::Stop
    });
    scroll.upcast()
}

fn drag_controller<R: CairoContextRenderer + 'static>(
    drawing_area: &gtk::DrawingArea,
    chart: &SharedLineChart<R>,
) -> gtk::EventController {
    let drag = gtk::GestureDrag::new();
    let last_offset_x = Rc::new(Cell::new(0.0));
    {
        let last_offset_x = Rc::clone(&last_offset_x);
        drag.connect_drag_begin(move |_, _, _| {
            last_offset_x.set(0.0);
        });
    }
    {
        let chart = Rc::clone(chart);
        let drawing_area = drawing_area.clone();
        drag.connect_drag_update(move |gesture, offset_x, offset_y| {
            let movement_x = offset_x - last_offset_x.get();
            last_offset_x.set(offset_x);
            let (start_x, start_y) = gesture.start_point().unwrap_or((0.0, 0.0));
            let tick = GestureTick::pan(movement_x, start_x + offset_x, start_y + offset_y);
            dispatch(&chart, &drawing_area, InputEvent::Gesture(tick));
        });
    }
    drag.upcast()
}

fn dispatch<R: CairoContextRenderer>(
    chart: &SharedLineChart<R>,
    drawing_area: &gtk::DrawingArea,
    event: InputEvent,
) {
    {
        let Ok(mut chart) = chart.try_borrow_mut() else {
            return;
        };
        if let Err(err) = chart.handle_input(event) {
            warn!(error = %err, ?event, "chart input handler failed");
        }
    }
    drawing_area.queue_draw();
}
