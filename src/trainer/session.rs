//! Capture state machine for one practice attempt.
//!
//! A session owns the guide target, the finished user strokes and the
//! in-progress stroke. It is deliberately free of any DOM or canvas types;
//! the canvas layer feeds it surface-local coordinates and renders from its
//! accessors.

use crate::geom::{Point, dist};

use super::score::similarity;
use super::{Stroke, Target};

/// Minimum spacing (surface units) between recorded points of a stroke.
/// High-frequency input events closer than this are dropped.
const MIN_SAMPLE_DIST: f64 = 1.5;

/// Session state for one trainer instance. Mutated only through the capture
/// operations below; the hosting page never touches strokes directly.
pub struct TrainerSession {
    target: Target,
    user_strokes: Vec<Stroke>,
    current: Option<Stroke>,
    last_score: f64,
    tolerance: f64,
}

impl TrainerSession {
    pub fn new(target: Target, tolerance: f64) -> Self {
        Self {
            target,
            user_strokes: Vec::new(),
            current: None,
            last_score: 0.0,
            tolerance,
        }
    }

    /// Start a new stroke at `(x, y)`.
    ///
    /// A stroke already in progress means the platform dropped a release
    /// event; it is finalized first rather than silently discarded, and the
    /// score from that finalization (if any) is returned so the caller can
    /// still emit it.
    pub fn begin(&mut self, x: f64, y: f64) -> Option<f64> {
        let emitted = if self.current.is_some() {
            self.end()
        } else {
            None
        };
        self.current = Some(vec![Point::new(x, y)]);
        emitted
    }

    /// Append `(x, y)` to the in-progress stroke if it moved far enough
    /// from the last recorded point. Returns whether a point was recorded
    /// (callers redraw only then). No-op without an in-progress stroke.
    pub fn sample(&mut self, x: f64, y: f64) -> bool {
        let Some(stroke) = self.current.as_mut() else {
            return false;
        };
        let p = Point::new(x, y);
        if let Some(&last) = stroke.last() {
            if dist(last, p) <= MIN_SAMPLE_DIST {
                return false;
            }
        }
        stroke.push(p);
        true
    }

    /// Finish the in-progress stroke: keep it if it has at least two
    /// points, discard a single dab, then rescore. Returns the new score,
    /// or `None` when no stroke was in progress (stray release events are
    /// ignored).
    pub fn end(&mut self) -> Option<f64> {
        let stroke = self.current.take()?;
        if stroke.len() > 1 {
            self.user_strokes.push(stroke);
        }
        self.last_score = similarity(&self.target, &self.user_strokes, self.tolerance);
        Some(self.last_score)
    }

    /// Drop all recorded and in-progress ink, keeping the target. Does not
    /// emit a score; the caller resets its score display.
    pub fn reset(&mut self) {
        self.user_strokes.clear();
        self.current = None;
        self.last_score = 0.0;
    }

    /// Swap in a new guide character, clearing the attempt.
    pub fn set_target(&mut self, target: Target) {
        self.target = target;
        self.reset();
    }

    pub fn target(&self) -> &[Stroke] {
        &self.target
    }

    pub fn user_strokes(&self) -> &[Stroke] {
        &self.user_strokes
    }

    pub fn current_stroke(&self) -> Option<&Stroke> {
        self.current.as_ref()
    }

    pub fn last_score(&self) -> f64 {
        self.last_score
    }
}
