//! Drawing abstraction between the session state and an actual canvas.
//!
//! The render pass only needs three capabilities, so tests can drive it
//! with a recording double and assert on draw order without a browser.

use crate::geom::Point;

use super::TrainerConfig;
use super::session::TrainerSession;

/// Minimal drawing surface: clear to background, stroke a polyline, report
/// size in CSS pixels.
pub trait DrawSurface {
    fn clear(&mut self);
    fn draw_polyline(&mut self, points: &[Point], color: &str, line_width: f64);
    fn size(&self) -> (f64, f64);
}

const GRID_COLOR: &str = "#e2e8f0";

/// Full redraw in fixed order: grid, guide, finished user strokes, then the
/// in-progress stroke. Strokes are short-lived and low-volume, so redrawing
/// everything per update beats incremental bookkeeping.
pub fn render<S: DrawSurface>(surface: &mut S, session: &TrainerSession, config: &TrainerConfig) {
    surface.clear();
    draw_grid(surface);

    for stroke in session.target() {
        surface.draw_polyline(stroke, &config.guide_color, 3.0);
    }
    for stroke in session.user_strokes() {
        surface.draw_polyline(stroke, &config.stroke_color, 4.0);
    }
    if let Some(stroke) = session.current_stroke() {
        surface.draw_polyline(stroke, &config.stroke_color, 4.0);
    }
}

/// Practice-square backdrop: border rect (half-pixel inset for crisp 1px
/// lines) and center cross.
fn draw_grid<S: DrawSurface>(surface: &mut S) {
    let (w, h) = surface.size();
    let border = [
        Point::new(0.5, 0.5),
        Point::new(w - 0.5, 0.5),
        Point::new(w - 0.5, h - 0.5),
        Point::new(0.5, h - 0.5),
        Point::new(0.5, 0.5),
    ];
    surface.draw_polyline(&border, GRID_COLOR, 1.0);
    surface.draw_polyline(
        &[Point::new(w / 2.0, 0.0), Point::new(w / 2.0, h)],
        GRID_COLOR,
        1.0,
    );
    surface.draw_polyline(
        &[Point::new(0.0, h / 2.0), Point::new(w, h / 2.0)],
        GRID_COLOR,
        1.0,
    );
}
