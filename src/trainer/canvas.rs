//! Browser binding for the trainer: a high-DPI `<canvas>` surface and the
//! mouse/touch listeners feeding the capture session.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, Element, HtmlCanvasElement, MouseEvent, TouchEvent, window,
};

use crate::geom::Point;

use super::session::TrainerSession;
use super::surface::{DrawSurface, render};
use super::{Target, TrainerConfig};

/// Canvas-backed implementation of [`DrawSurface`]. The backing store is
/// scaled by `devicePixelRatio` with a matching context transform, so all
/// drawing happens in CSS pixel coordinates.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    fn create(width: f64, height: f64) -> Result<Self, JsValue> {
        let doc = window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let ratio = window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);

        let canvas: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
        canvas.set_class_name("kt-card");
        canvas.set_width((width * ratio).floor() as u32);
        canvas.set_height((height * ratio).floor() as u32);
        // touch-action:none keeps the browser from turning traces into scrolls
        canvas
            .set_attribute(
                "style",
                &format!("width:{width}px; height:{height}px; touch-action:none;"),
            )
            .ok();

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into()?;
        ctx.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0)?;
        ctx.set_line_cap("round");
        ctx.set_line_join("round");

        Ok(Self {
            canvas,
            ctx,
            width,
            height,
        })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl DrawSurface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
        self.ctx.set_fill_style_str("#ffffff");
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
    }

    fn draw_polyline(&mut self, points: &[Point], color: &str, line_width: f64) {
        if points.is_empty() {
            return;
        }
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(line_width);
        self.ctx.begin_path();
        self.ctx.move_to(points[0].x, points[0].y);
        for p in &points[1..] {
            self.ctx.line_to(p.x, p.y);
        }
        self.ctx.stroke();
    }

    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}

struct Inner {
    config: TrainerConfig,
    session: TrainerSession,
    surface: Option<CanvasSurface>,
}

impl Inner {
    fn redraw(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            render(surface, &self.session, &self.config);
        }
    }
}

type ScoreCallback = Rc<RefCell<Option<Box<dyn FnMut(f64)>>>>;

/// One mounted trainer. Cheap to clone (shared handles), and each instance
/// owns its surface and strokes exclusively; two trainers never share state.
#[derive(Clone)]
pub struct StrokeTrainer {
    inner: Rc<RefCell<Inner>>,
    on_score: ScoreCallback,
}

impl StrokeTrainer {
    pub fn new(config: TrainerConfig) -> Self {
        let session = TrainerSession::new(config.target.clone(), config.tolerance());
        Self {
            inner: Rc::new(RefCell::new(Inner {
                config,
                session,
                surface: None,
            })),
            on_score: Rc::new(RefCell::new(None)),
        }
    }

    /// Callback fired with the score in `[0, 1]` after every completed
    /// stroke.
    pub fn set_on_score(&self, callback: impl FnMut(f64) + 'static) {
        *self.on_score.borrow_mut() = Some(Box::new(callback));
    }

    /// Mount into the element matched by `selector`. A missing host (or a
    /// pre-DOM environment) is a silent no-op so callers may mount before
    /// their layout exists.
    pub fn mount_in(&self, selector: &str) -> Result<(), JsValue> {
        let Some(doc) = window().and_then(|w| w.document()) else {
            return Ok(());
        };
        match doc.query_selector(selector)? {
            Some(host) => self.mount(&host),
            None => Ok(()),
        }
    }

    /// Attach the drawing surface under `host`, wire input listeners and
    /// render the guide.
    pub fn mount(&self, host: &Element) -> Result<(), JsValue> {
        let surface = {
            let inner = self.inner.borrow();
            CanvasSurface::create(inner.config.width, inner.config.height)?
        };
        host.set_inner_html("");
        host.append_child(surface.canvas())?;
        let canvas = surface.canvas().clone();
        {
            let mut inner = self.inner.borrow_mut();
            inner.surface = Some(surface);
            inner.redraw();
        }
        self.wire_input(&canvas)
    }

    /// Clear the attempt and repaint the guide. The target is kept and no
    /// score is emitted; the host resets its own score display.
    pub fn reset(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.session.reset();
        inner.redraw();
    }

    /// Replace the guide character. Implies [`reset`](Self::reset).
    pub fn set_target(&self, target: Target) {
        let mut inner = self.inner.borrow_mut();
        inner.session.set_target(target);
        inner.redraw();
    }

    /// Last emitted score (`0.0` before any stroke or after a reset).
    pub fn score(&self) -> f64 {
        self.inner.borrow().session.last_score()
    }

    fn wire_input(&self, canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
        {
            let trainer = self.clone();
            let canvas_down = canvas.clone();
            let closure = Closure::wrap(Box::new(move |evt: MouseEvent| {
                let (x, y) =
                    local_pos(&canvas_down, evt.client_x() as f64, evt.client_y() as f64);
                trainer.handle_begin(x, y);
            }) as Box<dyn FnMut(_)>);
            canvas.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        {
            let trainer = self.clone();
            let canvas_move = canvas.clone();
            let closure = Closure::wrap(Box::new(move |evt: MouseEvent| {
                let (x, y) =
                    local_pos(&canvas_move, evt.client_x() as f64, evt.client_y() as f64);
                trainer.handle_move(x, y);
            }) as Box<dyn FnMut(_)>);
            canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        // Leaving the surface mid-stroke counts as lifting the pen.
        for event in ["mouseup", "mouseleave"] {
            let trainer = self.clone();
            let closure = Closure::wrap(Box::new(move |_evt: MouseEvent| {
                trainer.handle_end();
            }) as Box<dyn FnMut(_)>);
            canvas.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        {
            let trainer = self.clone();
            let canvas_start = canvas.clone();
            let closure = Closure::wrap(Box::new(move |evt: TouchEvent| {
                evt.prevent_default();
                if let Some((x, y)) = touch_pos(&canvas_start, &evt) {
                    trainer.handle_begin(x, y);
                }
            }) as Box<dyn FnMut(_)>);
            canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        {
            let trainer = self.clone();
            let canvas_tmove = canvas.clone();
            let closure = Closure::wrap(Box::new(move |evt: TouchEvent| {
                evt.prevent_default();
                if let Some((x, y)) = touch_pos(&canvas_tmove, &evt) {
                    trainer.handle_move(x, y);
                }
            }) as Box<dyn FnMut(_)>);
            canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        {
            let trainer = self.clone();
            let closure = Closure::wrap(Box::new(move |evt: TouchEvent| {
                evt.prevent_default();
                trainer.handle_end();
            }) as Box<dyn FnMut(_)>);
            canvas.add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    fn handle_begin(&self, x: f64, y: f64) {
        let emitted = {
            let mut inner = self.inner.borrow_mut();
            let emitted = inner.session.begin(x, y);
            inner.redraw();
            emitted
        };
        if let Some(score) = emitted {
            self.emit(score);
        }
    }

    fn handle_move(&self, x: f64, y: f64) {
        let mut inner = self.inner.borrow_mut();
        if inner.session.sample(x, y) {
            inner.redraw();
        }
    }

    fn handle_end(&self) {
        let emitted = {
            let mut inner = self.inner.borrow_mut();
            let emitted = inner.session.end();
            inner.redraw();
            emitted
        };
        if let Some(score) = emitted {
            self.emit(score);
        }
    }

    // Session borrow is released before the callback runs, so a callback
    // may call back into the trainer (e.g. reset on a perfect score).
    fn emit(&self, score: f64) {
        if let Some(callback) = self.on_score.borrow_mut().as_mut() {
            callback(score);
        }
    }
}

/// Translate page-space client coordinates into surface-local space.
/// Shared by the mouse and touch paths.
fn local_pos(canvas: &HtmlCanvasElement, client_x: f64, client_y: f64) -> (f64, f64) {
    let rect = canvas.get_bounding_client_rect();
    (client_x - rect.left(), client_y - rect.top())
}

/// Surface-local position of the primary (first) touch point, if any.
fn touch_pos(canvas: &HtmlCanvasElement, evt: &TouchEvent) -> Option<(f64, f64)> {
    let touch = evt.touches().get(0)?;
    Some(local_pos(
        canvas,
        touch.client_x() as f64,
        touch.client_y() as f64,
    ))
}
