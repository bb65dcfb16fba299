//! Canvas stroke trainer: record freehand strokes over a guide character and
//! grade how closely they follow it.
//!
//! The module is split so the algorithmic part stays testable without a
//! browser: [`session`] owns the capture state machine and triggers
//! [`score`], both pure; [`surface`] defines the small drawing abstraction
//! the render pass targets; [`canvas`] binds everything to a real
//! `<canvas>` element and its mouse/touch events; [`targets`] holds the
//! per-character guide generators.

pub mod canvas;
pub mod score;
pub mod session;
pub mod surface;
pub mod targets;

pub use canvas::StrokeTrainer;
pub use session::TrainerSession;
pub use surface::DrawSurface;

use crate::geom::Point;

/// One continuous pen path, press to release.
pub type Stroke = Vec<Point>;

/// Ordered reference strokes for one character. Order encodes canonical
/// stroke order and is significant for scoring.
pub type Target = Vec<Stroke>;

/// Reference surface size the tolerance constant is calibrated against.
pub const REFERENCE_SIZE: f64 = 320.0;

/// Distance (CSS px at the reference size) at which a traced point stops
/// earning credit.
pub const TOLERANCE_PX: f64 = 24.0;

/// Trainer construction options. All fields have usable defaults.
#[derive(Clone, Debug)]
pub struct TrainerConfig {
    pub width: f64,
    pub height: f64,
    /// Ink color for user strokes.
    pub stroke_color: String,
    /// Color for the reference guide.
    pub guide_color: String,
    /// Initial guide character; empty means nothing to trace yet.
    pub target: Target,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            width: REFERENCE_SIZE,
            height: REFERENCE_SIZE,
            stroke_color: "#1d4ed8".to_string(),
            guide_color: "#94a3b8".to_string(),
            target: Vec::new(),
        }
    }
}

impl TrainerConfig {
    /// Proximity tolerance scaled to this surface size so guides keep the
    /// same relative strictness at any configured dimensions.
    pub fn tolerance(&self) -> f64 {
        TOLERANCE_PX * (self.width.min(self.height) / REFERENCE_SIZE)
    }
}
