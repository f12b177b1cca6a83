//! Error types for chord data loading
//!
//! Rendering never fails; only turning data files into descriptors can.
//! Errors about a single chord entry are collected by `ChordBook` rather than
//! failing the whole file.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChordDataError {
    /// Data file could not be read
    #[error("Failed to read chord data: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed YAML
    #[error("Failed to parse chord data as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Malformed JSON
    #[error("Failed to parse chord data as JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// One chord entry has the wrong shape; its siblings are unaffected
    #[error("Chord '{chord}' is malformed: {source}")]
    InvalidEntry {
        chord: String,
        source: serde_json::Error,
    },

    #[error("Invalid settings block: {0}")]
    InvalidSettings(serde_json::Error),

    /// Data file extension is not one of yml, yaml, json
    #[error("Unsupported chord data extension: {0}")]
    UnsupportedExtension(String),

    #[error("Chord '{chord}' lists {found} frets, expected 6")]
    WrongStringCount { chord: String, found: usize },

    #[error("Chord '{chord}' has invalid position {position} (must be >= 1)")]
    InvalidPosition { chord: String, position: i64 },

    /// Fretted marker lies above the diagram's top fret line
    #[error("Chord '{chord}' string {string} is fretted at {fret}, above position {position}")]
    FretBelowPosition {
        chord: String,
        string: usize,
        fret: u32,
        position: u32,
    },
}
