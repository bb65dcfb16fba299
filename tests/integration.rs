// Integration tests (native) for the `kana-trace` crate.
// These tests avoid wasm-specific functionality and exercise pure Rust logic so
// they can run under `cargo test` on the host.

use kana_trace::TRACEABLE_CHARACTERS;
use kana_trace::trainer::targets::target_for;
use kana_trace::trainer::{TrainerConfig, TrainerSession};

// Basic dataset sanity check: ensure the traceable set is non-empty.
#[test]
fn traceable_dataset_nonempty() {
    assert!(!TRACEABLE_CHARACTERS.is_empty());
}

// Full capture round: feeding a guide back through begin/sample/end, stroke
// by stroke in canonical order, must converge to a perfect score.
#[test]
fn retracing_a_guide_scores_one() {
    let config = TrainerConfig::default();
    let target = target_for("あ", config.width, config.height).unwrap();
    let mut session = TrainerSession::new(target.clone(), config.tolerance());

    let mut last = 0.0;
    for stroke in &target {
        session.begin(stroke[0].x, stroke[0].y);
        for p in &stroke[1..] {
            session.sample(p.x, p.y);
        }
        last = session.end().expect("completed stroke reports a score");
    }
    assert!((last - 1.0).abs() < 1e-9, "expected 1.0, got {}", last);
    assert_eq!(session.user_strokes().len(), target.len());
}
