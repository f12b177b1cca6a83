//! WASM API for chord diagrams
//!
//! JavaScript-facing entry points. Chord data arrives either as a JS object
//! (the page's `chords` mapping) or as YAML text. Any problem with the data
//! degrades to the inline fallback so one bad reference cannot break a page.

use wasm_bindgen::prelude::*;

use crate::data::raw::RawChordFile;
use crate::data::{ChordBook, ChordDataError};
use crate::renderers::chord_diagram::{self, ChordDiagramRenderer};
use crate::settings::DiagramSettings;

/// Render one chord from a JS mapping of chord id → descriptor
#[wasm_bindgen(js_name = renderChord)]
pub fn render_chord(chords: JsValue, chord_id: &str) -> String {
    let book = serde_wasm_bindgen::from_value::<serde_json::Value>(chords)
        .map_err(|e| e.to_string())
        .and_then(|value| RawChordFile::from_value(value).map_err(|e| e.to_string()))
        .map(ChordBook::from_raw);
    match book {
        Ok(book) => ChordDiagramRenderer::render_with_settings(&book, chord_id, &book.settings()),
        Err(e) => {
            log::warn!("Unusable chord data for '{}': {}", chord_id, e);
            chord_diagram::not_found(chord_id)
        }
    }
}

/// Render one chord from YAML chord data
#[wasm_bindgen(js_name = renderChordYaml)]
pub fn render_chord_yaml(yaml: &str, chord_id: &str) -> String {
    render_from_yaml(yaml, chord_id)
}

/// Render a chord sheet (several diagrams in order) from YAML chord data
#[wasm_bindgen(js_name = renderChordSheetYaml)]
pub fn render_chord_sheet_yaml(yaml: &str, chord_ids: Vec<String>) -> String {
    let ids: Vec<&str> = chord_ids.iter().map(String::as_str).collect();
    match load_yaml(yaml) {
        Ok(book) => ChordDiagramRenderer::render_sheet(&book, &ids, &book.settings()),
        Err(e) => {
            log::warn!("Unusable chord data for sheet: {}", e);
            ChordDiagramRenderer::render_sheet(&ChordBook::new(), &ids, &DiagramSettings::default())
        }
    }
}

fn load_yaml(yaml: &str) -> Result<ChordBook, ChordDataError> {
    ChordBook::from_yaml_str(yaml)
}

pub(crate) fn render_from_yaml(yaml: &str, chord_id: &str) -> String {
    match load_yaml(yaml) {
        Ok(book) => ChordDiagramRenderer::render_with_settings(&book, chord_id, &book.settings()),
        Err(e) => {
            log::warn!("Unusable chord data for '{}': {}", chord_id, e);
            chord_diagram::not_found(chord_id)
        }
    }
}
