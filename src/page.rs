//! Minimal practice page hosting one trainer instance.
//!
//! Builds its own DOM (character heading, canvas host, score readout, reset
//! button, character selector) and talks to the trainer only through the
//! documented operations, exactly like an embedding application would.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, MouseEvent, window};

use crate::TRACEABLE_CHARACTERS;
use crate::trainer::targets::target_for;
use crate::trainer::{StrokeTrainer, TrainerConfig};

const SURFACE_SIZE: f64 = 320.0;

pub fn mount_practice_page() -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = doc.body().ok_or_else(|| JsValue::from_str("no body"))?;

    let (first_char, _) = TRACEABLE_CHARACTERS[0];

    // Page scaffold (reuse on repeated calls)
    if doc.get_element_by_id("kt-practice").is_none() {
        let container = doc.create_element("div")?;
        container.set_id("kt-practice");
        container
            .set_attribute(
                "style",
                "position:fixed; left:50%; top:50%; transform:translate(-50%,-50%); \
                 display:flex; flex-direction:column; align-items:center; gap:10px; \
                 font-family:'Fira Code', monospace; color:#1e293b;",
            )
            .ok();

        let heading = doc.create_element("div")?;
        heading.set_id("kt-char");
        heading.set_text_content(Some(first_char));
        heading
            .set_attribute(
                "style",
                "font-size:42px; font-family:'Noto Serif JP', serif;",
            )
            .ok();
        container.append_child(&heading)?;

        let host = doc.create_element("div")?;
        host.set_id("kt-canvas-host");
        container.append_child(&host)?;

        let score = doc.create_element("div")?;
        score.set_id("kt-score");
        score.set_text_content(Some("Score: 0%"));
        score
            .set_attribute("style", "font-size:18px; letter-spacing:0.5px;")
            .ok();
        container.append_child(&score)?;

        let controls = doc.create_element("div")?;
        controls.set_id("kt-controls");
        controls
            .set_attribute("style", "display:flex; gap:6px; flex-wrap:wrap;")
            .ok();
        let reset = doc.create_element("button")?;
        reset.set_id("kt-reset");
        reset.set_text_content(Some("Reset"));
        controls.append_child(&reset)?;
        for &(character, _) in TRACEABLE_CHARACTERS {
            let btn = doc.create_element("button")?;
            btn.set_id(&format!("kt-pick-{character}"));
            btn.set_text_content(Some(character));
            controls.append_child(&btn)?;
        }
        container.append_child(&controls)?;
        body.append_child(&container)?;
    }

    let trainer = StrokeTrainer::new(TrainerConfig {
        width: SURFACE_SIZE,
        height: SURFACE_SIZE,
        target: target_for(first_char, SURFACE_SIZE, SURFACE_SIZE).unwrap_or_default(),
        ..TrainerConfig::default()
    });
    trainer.set_on_score(|score| {
        if let Some(doc) = window().and_then(|w| w.document()) {
            show_score(&doc, score);
        }
    });
    trainer.mount_in("#kt-canvas-host")?;

    // Reset button clears ink and the score display
    {
        let trainer_reset = trainer.clone();
        let closure = Closure::wrap(Box::new(move |_evt: MouseEvent| {
            trainer_reset.reset();
            if let Some(doc) = window().and_then(|w| w.document()) {
                show_score(&doc, 0.0);
            }
        }) as Box<dyn FnMut(_)>);
        if let Some(btn) = doc.get_element_by_id("kt-reset") {
            btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        }
        closure.forget();
    }

    // Character selector swaps the target (which implies a reset)
    for &(character, _) in TRACEABLE_CHARACTERS {
        let trainer_pick = trainer.clone();
        let closure = Closure::wrap(Box::new(move |_evt: MouseEvent| {
            if let Some(target) = target_for(character, SURFACE_SIZE, SURFACE_SIZE) {
                trainer_pick.set_target(target);
            }
            if let Some(doc) = window().and_then(|w| w.document()) {
                if let Some(el) = doc.get_element_by_id("kt-char") {
                    el.set_text_content(Some(character));
                }
                show_score(&doc, 0.0);
            }
        }) as Box<dyn FnMut(_)>);
        if let Some(btn) = doc.get_element_by_id(&format!("kt-pick-{character}")) {
            btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        }
        closure.forget();
    }

    Ok(())
}

fn show_score(doc: &Document, score: f64) {
    if let Some(el) = doc.get_element_by_id("kt-score") {
        let pct = (score * 100.0).round() as i32;
        el.set_text_content(Some(&format!("Score: {pct}%")));
    }
}
