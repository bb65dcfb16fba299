//! Hand-authored guide strokes per character.
//!
//! Each generator takes the surface size and returns strokes scaled
//! proportionally, so guides stay correct at any configured dimensions.
//! Stroke order follows the canonical order taught for each character; the
//! paths themselves are deliberately coarse polylines, good enough to trace
//! against rather than typographically exact.

use crate::geom::Point;

use super::Target;

/// Guide strokes for `character`, scaled to a `width` × `height` surface.
/// `None` for characters without an authored guide yet.
pub fn target_for(character: &str, width: f64, height: f64) -> Option<Target> {
    match character {
        "あ" => Some(hiragana_a(width, height)),
        "い" => Some(hiragana_i(width, height)),
        "く" => Some(hiragana_ku(width, height)),
        "ア" => Some(katakana_a(width, height)),
        "一" => Some(kanji_one(width, height)),
        "二" => Some(kanji_two(width, height)),
        "三" => Some(kanji_three(width, height)),
        "十" => Some(kanji_ten(width, height)),
        _ => None,
    }
}

fn stroke(w: f64, h: f64, coords: &[(f64, f64)]) -> Vec<Point> {
    coords
        .iter()
        .map(|&(fx, fy)| Point::new(w * fx, h * fy))
        .collect()
}

/// Hiragana あ, 3 strokes: short top bar, the looping body, center vertical.
fn hiragana_a(w: f64, h: f64) -> Target {
    vec![
        stroke(w, h, &[(0.25, 0.20), (0.45, 0.20), (0.55, 0.25)]),
        stroke(
            w,
            h,
            &[
                (0.35, 0.35),
                (0.60, 0.35),
                (0.70, 0.50),
                (0.60, 0.65),
                (0.35, 0.65),
                (0.25, 0.50),
                (0.35, 0.35),
            ],
        ),
        stroke(w, h, &[(0.55, 0.20), (0.55, 0.75)]),
    ]
}

/// Hiragana い, 2 strokes: long curved left stroke, short right stroke.
fn hiragana_i(w: f64, h: f64) -> Target {
    vec![
        stroke(
            w,
            h,
            &[(0.30, 0.25), (0.28, 0.45), (0.32, 0.62), (0.42, 0.70)],
        ),
        stroke(w, h, &[(0.62, 0.30), (0.66, 0.45), (0.64, 0.58)]),
    ]
}

/// Hiragana く, 1 stroke: angle bracket opening right.
fn hiragana_ku(w: f64, h: f64) -> Target {
    vec![stroke(w, h, &[(0.62, 0.20), (0.38, 0.46), (0.62, 0.72)])]
}

/// Katakana ア, 2 strokes: diagonal from upper right, then the left
/// vertical.
fn katakana_a(w: f64, h: f64) -> Target {
    vec![
        stroke(
            w,
            h,
            &[(0.75, 0.20), (0.55, 0.35), (0.38, 0.55), (0.28, 0.70)],
        ),
        stroke(w, h, &[(0.32, 0.18), (0.32, 0.78)]),
    ]
}

/// Kanji 一 (one), a single horizontal.
fn kanji_one(w: f64, h: f64) -> Target {
    vec![stroke(w, h, &[(0.20, 0.50), (0.80, 0.50)])]
}

/// Kanji 二 (two), short bar over long bar.
fn kanji_two(w: f64, h: f64) -> Target {
    vec![
        stroke(w, h, &[(0.28, 0.35), (0.72, 0.35)]),
        stroke(w, h, &[(0.20, 0.65), (0.80, 0.65)]),
    ]
}

/// Kanji 三 (three), top to bottom, longest bar last.
fn kanji_three(w: f64, h: f64) -> Target {
    vec![
        stroke(w, h, &[(0.28, 0.30), (0.72, 0.30)]),
        stroke(w, h, &[(0.32, 0.50), (0.68, 0.50)]),
        stroke(w, h, &[(0.20, 0.72), (0.80, 0.72)]),
    ]
}

/// Kanji 十 (ten), horizontal then vertical.
fn kanji_ten(w: f64, h: f64) -> Target {
    vec![
        stroke(w, h, &[(0.20, 0.45), (0.80, 0.45)]),
        stroke(w, h, &[(0.50, 0.20), (0.50, 0.80)]),
    ]
}
