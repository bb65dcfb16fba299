// Native tests for the capture state machine and the headless render pass.
// A recording DrawSurface double stands in for the canvas, so draw order is
// asserted without any browser.

use kana_trace::Point;
use kana_trace::trainer::session::TrainerSession;
use kana_trace::trainer::surface::{DrawSurface, render};
use kana_trace::trainer::{Target, TrainerConfig};

fn guide() -> Target {
    vec![
        vec![Point::new(0.0, 0.0), Point::new(100.0, 0.0)],
        vec![Point::new(0.0, 50.0), Point::new(100.0, 50.0)],
    ]
}

fn draw_line(session: &mut TrainerSession, y: f64) -> Option<f64> {
    session.begin(0.0, y);
    session.sample(50.0, y);
    session.sample(100.0, y);
    session.end()
}

#[test]
fn reset_clears_strokes_and_keeps_target() {
    let mut session = TrainerSession::new(guide(), 24.0);
    draw_line(&mut session, 0.0);
    draw_line(&mut session, 50.0);
    assert_eq!(session.user_strokes().len(), 2);

    session.reset();
    assert!(session.user_strokes().is_empty());
    assert!(session.current_stroke().is_none());
    assert_eq!(session.target(), guide().as_slice());
    assert_eq!(session.last_score(), 0.0);

    // Reset is idempotent.
    session.reset();
    assert!(session.user_strokes().is_empty());
    assert_eq!(session.target(), guide().as_slice());
}

#[test]
fn near_duplicate_points_are_dropped() {
    let mut session = TrainerSession::new(guide(), 24.0);
    session.begin(0.0, 0.0);
    // Within the 1.5-unit spacing threshold: not recorded.
    assert!(!session.sample(1.0, 1.0));
    // Far enough: recorded.
    assert!(session.sample(5.0, 0.0));
    session.end();
    assert_eq!(session.user_strokes().len(), 1);
    assert_eq!(session.user_strokes()[0].len(), 2);
}

#[test]
fn single_dab_is_discarded_but_still_rescores() {
    let mut session = TrainerSession::new(guide(), 24.0);
    session.begin(10.0, 10.0);
    let score = session.end();
    assert!(session.user_strokes().is_empty(), "dab must be discarded");
    // The attempt still ended, so a (zero) score is reported.
    assert_eq!(score, Some(0.0));
}

#[test]
fn stray_events_without_begin_are_noops() {
    let mut session = TrainerSession::new(guide(), 24.0);
    assert!(!session.sample(10.0, 10.0));
    assert_eq!(session.end(), None);
    assert!(session.user_strokes().is_empty());
}

#[test]
fn begin_during_stroke_finalizes_the_previous_one() {
    // A lost release event must not silently drop recorded ink.
    let mut session = TrainerSession::new(guide(), 24.0);
    session.begin(0.0, 0.0);
    session.sample(100.0, 0.0);
    let emitted = session.begin(0.0, 50.0);
    assert_eq!(session.user_strokes().len(), 1);
    assert!(emitted.is_some(), "defensive finalize reports a score");
    assert!(session.current_stroke().is_some());
}

#[test]
fn set_target_replaces_guide_and_clears_attempt() {
    let mut session = TrainerSession::new(guide(), 24.0);
    draw_line(&mut session, 0.0);
    let new_target: Target = vec![vec![Point::new(0.0, 0.0), Point::new(0.0, 100.0)]];
    session.set_target(new_target.clone());
    assert!(session.user_strokes().is_empty());
    assert_eq!(session.target(), new_target.as_slice());
}

#[test]
fn score_is_emitted_per_completed_stroke() {
    let mut session = TrainerSession::new(guide(), 24.0);
    // First stroke matches target stroke 0 exactly: count term is 1/2.
    let first = draw_line(&mut session, 0.0).expect("score after stroke");
    assert!((first - (0.3 * 0.5 + 0.7)).abs() < 1e-9, "got {}", first);
    // Second stroke completes the character.
    let second = draw_line(&mut session, 50.0).expect("score after stroke");
    assert!((second - 1.0).abs() < 1e-9, "got {}", second);
    assert_eq!(session.last_score(), second);
}

// --- Headless render pass ----------------------------------------------------

#[derive(Debug, PartialEq)]
enum Op {
    Clear,
    Polyline { color: String, points: usize },
}

struct RecordingSurface {
    ops: Vec<Op>,
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }
    fn draw_polyline(&mut self, points: &[Point], color: &str, _line_width: f64) {
        self.ops.push(Op::Polyline {
            color: color.to_string(),
            points: points.len(),
        });
    }
    fn size(&self) -> (f64, f64) {
        (320.0, 320.0)
    }
}

#[test]
fn render_order_is_grid_guide_user_current() {
    let config = TrainerConfig {
        target: guide(),
        ..TrainerConfig::default()
    };
    let mut session = TrainerSession::new(config.target.clone(), config.tolerance());
    draw_line(&mut session, 0.0);
    session.begin(0.0, 50.0);
    session.sample(40.0, 50.0);

    let mut surface = RecordingSurface { ops: Vec::new() };
    render(&mut surface, &session, &config);

    assert_eq!(surface.ops[0], Op::Clear);
    let colors: Vec<&str> = surface.ops[1..]
        .iter()
        .map(|op| match op {
            Op::Polyline { color, .. } => color.as_str(),
            Op::Clear => panic!("unexpected mid-pass clear"),
        })
        .collect();
    // 3 grid lines, 2 guide strokes, 1 finished stroke, 1 in-progress stroke.
    assert_eq!(
        colors,
        vec![
            "#e2e8f0", "#e2e8f0", "#e2e8f0", "#94a3b8", "#94a3b8", "#1d4ed8", "#1d4ed8",
        ]
    );
}

#[test]
fn tolerance_scales_with_surface_size() {
    let reference = TrainerConfig::default();
    assert!((reference.tolerance() - 24.0).abs() < 1e-9);
    let half = TrainerConfig {
        width: 160.0,
        height: 160.0,
        ..TrainerConfig::default()
    };
    assert!((half.tolerance() - 12.0).abs() < 1e-9);
}
