//! Kana Trace core crate.
//!
//! Canvas stroke-order trainer for JLPT N5 characters: the user traces a
//! guide character on a practice square and gets a similarity score after
//! every completed stroke. The scoring core (`geom`, `trainer::score`,
//! `trainer::session`) is browser-free and tested natively; the wasm layer
//! (`trainer::canvas`, `page`) binds it to a real canvas element.

use wasm_bindgen::prelude::*;

pub mod geom;
mod page;
pub mod trainer;

pub use geom::Point;
pub use trainer::{Stroke, StrokeTrainer, Target, TrainerConfig, TrainerSession};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// Traceable character dataset
// Pairs of (character, romaji reading). Every entry has a guide-stroke
// generator in `trainer::targets`; the practice page builds its selector
// from this list.
// -----------------------------------------------------------------------------

pub const TRACEABLE_CHARACTERS: &[(&str, &str)] = &[
    ("あ", "a"), ("い", "i"), ("く", "ku"), ("ア", "a"),
    ("一", "ichi"), ("二", "ni"), ("三", "san"), ("十", "juu"),
];

// -----------------------------------------------------------------------------
// Unified entrypoint
// -----------------------------------------------------------------------------

#[wasm_bindgen]
pub fn start_trainer() -> Result<(), JsValue> {
    page::mount_practice_page()
}
