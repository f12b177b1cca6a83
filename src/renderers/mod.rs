//! Renderers module
//!
//! This module contains the rendering logic that turns chord data into
//! inline markup.

pub mod svg;
pub mod chord_diagram;

// Re-export commonly used types
pub use chord_diagram::ChordDiagramRenderer;
