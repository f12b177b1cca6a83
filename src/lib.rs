//! Chord Diagram WASM Module
//!
//! Renders guitar chord diagrams as self-contained inline SVG for a static
//! site's `chord` shortcode, and loads the chord data those diagrams come from.

pub mod api;
pub mod data;
pub mod models;
pub mod renderers;
pub mod settings;

// Re-export commonly used types
pub use data::{ChordBook, ChordDataError, ChordLookup};
pub use models::chord::*;
pub use renderers::ChordDiagramRenderer;
pub use settings::{DiagramSettings, FretRangePolicy};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    init_panic_hook();
    init_logging();

    log::info!("Chord diagram WASM module initialized");
}

#[cfg(feature = "console_error_panic_hook")]
fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

#[cfg(not(feature = "console_error_panic_hook"))]
fn init_panic_hook() {}

#[cfg(feature = "console_log")]
fn init_logging() {
    // A second init (module re-instantiated) keeps the existing logger.
    let _ = console_log::init_with_level(log::Level::Debug);
}

#[cfg(not(feature = "console_log"))]
fn init_logging() {}
