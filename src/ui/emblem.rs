use gtk4 as gtk;

use gtk::glib;
use gtk::DrawingArea;
use gtk4::prelude::*;
use log::warn;
use std::cell::Cell;
use std::f64::consts::PI;
use std::rc::Rc;

use crate::app::AppConfig;

const MARGIN: f64 = 10.0;
const LINE_WIDTH: f64 = 3.0;

/// Vertex order that turns five points on a circle into a star outline
const STAR_ORDER: [usize; 5] = [0, 2, 4, 1, 3];

/// Five points evenly spaced on a circle, the first pointing straight down
/// before `rotation` is applied.
pub fn star_points(cx: f64, cy: f64, radius: f64, rotation: f64) -> [(f64, f64); 5] {
    let step = PI * 2.0 / 5.0;
    let mut points = [(0.0, 0.0); 5];
    for (i, point) in points.iter_mut().enumerate() {
        let angle = i as f64 * step + PI / 2.0 + rotation;
        *point = (cx + radius * angle.cos(), cy + radius * angle.sin());
    }
    points
}

pub fn create_emblem(config: &AppConfig) -> DrawingArea {
    let drawing_area = DrawingArea::builder()
        .content_width(config.emblem_size)
        .content_height(config.emblem_size)
        .valign(gtk::Align::Center)
        .build();

    let rotation = Rc::new(Cell::new(0.0_f64));

    drawing_area.set_draw_func({
        let rotation = rotation.clone();
        move |_, cr, width, height| {
            if let Err(e) = draw_emblem(cr, width, height, rotation.get()) {
                warn!("Failed to draw emblem: {}", e);
            }
        }
    });

    let step = config.rotation_step;
    glib::timeout_add_local(config.animation_interval, {
        let drawing_area = drawing_area.downgrade();
        move || {
            let Some(drawing_area) = drawing_area.upgrade() else {
                return glib::ControlFlow::Break;
            };
            rotation.set(rotation.get() + step);
            drawing_area.queue_draw();
            glib::ControlFlow::Continue
        }
    });

    drawing_area
}

fn draw_emblem(
    cr: &gtk::cairo::Context,
    width: i32,
    height: i32,
    rotation: f64,
) -> Result<(), gtk::cairo::Error> {
    let cx = width as f64 / 2.0;
    let cy = height as f64 / 2.0;
    let radius = (cx.min(cy) - MARGIN).max(1.0);

    let points = star_points(cx, cy, radius, rotation);

    cr.set_source_rgb(0.0, 0.0, 0.0);
    cr.set_line_width(LINE_WIDTH);

    cr.new_path();
    cr.arc(cx, cy, radius, 0.0, 2.0 * PI);
    cr.stroke()?;

    let (x, y) = points[STAR_ORDER[0]];
    cr.move_to(x, y);
    for &i in &STAR_ORDER[1..] {
        let (x, y) = points[i];
        cr.line_to(x, y);
    }
    cr.close_path();
    cr.stroke_preserve()?;

    cr.set_source_rgba(139.0 / 255.0, 0.0, 0.0, 100.0 / 255.0);
    cr.fill()?;

    Ok(())
}
