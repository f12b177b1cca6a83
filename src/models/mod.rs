//! Models module for the chord diagram renderer
//!
//! This module contains the typed chord data consumed by the renderers.

pub mod chord;

// Re-export commonly used types
pub use chord::*;
