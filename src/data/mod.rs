//! Chord data loading
//!
//! Turns YAML/JSON chord data into typed descriptors. This is the one place
//! raw fret values are inspected.

pub mod book;
pub mod errors;
pub mod raw;

pub use book::{ChordBook, ChordLookup};
pub use errors::ChordDataError;
