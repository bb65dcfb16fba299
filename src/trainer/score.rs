//! Similarity scoring between recorded user strokes and a guide character.
//!
//! The score is a coarse geometric heuristic, not handwriting recognition:
//! a stroke-count term (did the user draw the right number of strokes)
//! weighted 30% against a proximity term (how close the ink stays to the
//! guide) weighted 70%. User stroke `i` is compared only against target
//! stroke `i`; drawing correct shapes in the wrong order scores poorly,
//! which is accepted as part of teaching stroke order.

use crate::geom::{Point, clamp01, dist_point_to_segment};

use super::Stroke;

/// Upper bound on evaluated points per stroke. Long strokes are sampled at
/// a fixed stride so cost stays bounded and deterministic.
const MAX_SAMPLED_POINTS: usize = 200;

/// Weight of the stroke-count term in the final score.
const COUNT_WEIGHT: f64 = 0.3;

/// Weight of the proximity term in the final score.
const PROXIMITY_WEIGHT: f64 = 0.7;

/// Grade `user` strokes against `target` strokes. Returns a value in
/// `[0, 1]`; `0` whenever either side is empty.
pub fn similarity(target: &[Stroke], user: &[Stroke], tolerance: f64) -> f64 {
    if target.is_empty() || user.is_empty() {
        return 0.0;
    }

    let count_term = count_term(target.len(), user.len());

    let pairs = user.len().min(target.len());
    let mut accum = 0.0;
    let mut evaluated = 0usize;
    for i in 0..pairs {
        let segments = segments_of(&target[i]);
        if let Some(s) = stroke_proximity(&user[i], &segments, tolerance) {
            accum += s;
            evaluated += 1;
        }
    }
    // Pairs without samples (empty user stroke or segment-less target
    // stroke) are excluded from the mean rather than counted as zero.
    let proximity_term = if evaluated > 0 {
        accum / evaluated as f64
    } else {
        0.0
    };

    COUNT_WEIGHT * count_term + PROXIMITY_WEIGHT * proximity_term
}

/// Symmetric penalty for drawing the wrong number of strokes: `1` only on
/// an exact count match, falling off as `min / max`.
pub fn count_term(target_count: usize, user_count: usize) -> f64 {
    debug_assert!(target_count > 0 && user_count > 0);
    target_count.min(user_count) as f64 / target_count.max(user_count) as f64
}

/// Consecutive point pairs of a target stroke. A single-point stroke yields
/// one zero-length segment so a dab guide still attracts credit; an empty
/// stroke yields none.
fn segments_of(stroke: &Stroke) -> Vec<(Point, Point)> {
    if stroke.len() == 1 {
        return vec![(stroke[0], stroke[0])];
    }
    stroke.windows(2).map(|w| (w[0], w[1])).collect()
}

/// Mean per-point credit for one user stroke against one target stroke's
/// segments. Each sampled point earns `1 - d / tolerance` (clamped) for its
/// distance `d` to the nearest segment. `None` when there is nothing to
/// sample.
fn stroke_proximity(user: &Stroke, segments: &[(Point, Point)], tolerance: f64) -> Option<f64> {
    if user.is_empty() || segments.is_empty() {
        return None;
    }
    let stride = (user.len() / MAX_SAMPLED_POINTS).max(1);
    let mut credit = 0.0;
    let mut sampled = 0usize;
    for p in user.iter().copied().step_by(stride) {
        let best = segments
            .iter()
            .map(|&(a, b)| dist_point_to_segment(p, a, b))
            .fold(f64::INFINITY, f64::min);
        credit += clamp01(1.0 - best / tolerance);
        sampled += 1;
    }
    Some(credit / sampled as f64)
}
