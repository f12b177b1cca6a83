//! Chord book: the id → descriptor mapping a page renders against.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use super::raw::RawChordFile;
use super::ChordDataError;
use crate::models::ChordDescriptor;
use crate::settings::DiagramSettings;

/// Resolves chord identifiers to descriptors.
///
/// The renderer takes its lookup as an explicit parameter; any mapping the
/// caller already has can serve as one.
pub trait ChordLookup {
    fn chord(&self, id: &str) -> Option<&ChordDescriptor>;
}

impl ChordLookup for HashMap<String, ChordDescriptor> {
    fn chord(&self, id: &str) -> Option<&ChordDescriptor> {
        self.get(id)
    }
}

impl ChordLookup for BTreeMap<String, ChordDescriptor> {
    fn chord(&self, id: &str) -> Option<&ChordDescriptor> {
        self.get(id)
    }
}

impl<T: ChordLookup + ?Sized> ChordLookup for &T {
    fn chord(&self, id: &str) -> Option<&ChordDescriptor> {
        (**self).chord(id)
    }
}

/// Chords loaded from a data file, plus any settings that file carried.
///
/// A malformed entry is kept as a chord without frets, so it renders as
/// "not found" while its siblings render normally. The reason is kept in
/// `load_errors`.
#[derive(Debug, Default)]
pub struct ChordBook {
    chords: BTreeMap<String, ChordDescriptor>,
    settings: Option<DiagramSettings>,
    load_errors: Vec<ChordDataError>,
}

impl ChordBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse YAML chord data. Fails only when the text is not YAML or not a mapping.
    pub fn from_yaml_str(content: &str) -> Result<Self, ChordDataError> {
        let value: serde_json::Value = serde_yaml::from_str(content)?;
        Ok(Self::from_raw(RawChordFile::from_value(value)?))
    }

    pub fn from_json_str(content: &str) -> Result<Self, ChordDataError> {
        let value: serde_json::Value = serde_json::from_str(content)?;
        Ok(Self::from_raw(RawChordFile::from_value(value)?))
    }

    /// Load a data file, choosing the parser from its extension (yml, yaml, json)
    pub fn from_path(path: &Path) -> Result<Self, ChordDataError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        let loader: fn(&str) -> Result<Self, ChordDataError> = match extension.as_str() {
            "yml" | "yaml" => Self::from_yaml_str,
            "json" => Self::from_json_str,
            _ => return Err(ChordDataError::UnsupportedExtension(path.display().to_string())),
        };

        let content = fs::read_to_string(path)?;
        let book = loader(&content)?;
        log::debug!("Loaded {} chords from {}", book.len(), path.display());
        Ok(book)
    }

    pub(crate) fn from_raw(raw: RawChordFile) -> Self {
        let mut book = Self::new();

        match raw.settings {
            Ok(settings) => book.settings = settings,
            Err(e) => book.reject(e),
        }

        for (id, entry) in raw.chords {
            let name = match &entry {
                Ok(raw_chord) => raw_chord.name.clone().unwrap_or_else(|| id.clone()),
                Err(_) => id.clone(),
            };
            match entry.and_then(|raw_chord| raw_chord.into_descriptor(&id)) {
                Ok(descriptor) => {
                    book.chords.insert(id, descriptor);
                }
                Err(e) => {
                    book.reject(e);
                    book.chords.insert(
                        id,
                        ChordDescriptor {
                            name,
                            position: 1,
                            fingering: None,
                        },
                    );
                }
            }
        }
        book
    }

    fn reject(&mut self, error: ChordDataError) {
        log::warn!("Skipping chord data: {}", error);
        self.load_errors.push(error);
    }

    /// Problems found while loading; each affected entry renders as not found
    pub fn load_errors(&self) -> &[ChordDataError] {
        &self.load_errors
    }

    pub fn insert(&mut self, id: impl Into<String>, chord: ChordDescriptor) -> Option<ChordDescriptor> {
        self.chords.insert(id.into(), chord)
    }

    pub fn get(&self, id: &str) -> Option<&ChordDescriptor> {
        self.chords.get(id)
    }

    /// Chord identifiers in sorted order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.chords.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.chords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }

    /// Settings from the data file, or defaults when it had none
    pub fn settings(&self) -> DiagramSettings {
        self.settings.clone().unwrap_or_default()
    }

    /// Run `ChordDescriptor::validate` over every chord
    pub fn validate(&self) -> Result<(), ChordDataError> {
        self.chords.values().try_for_each(ChordDescriptor::validate)
    }
}

impl ChordLookup for ChordBook {
    fn chord(&self, id: &str) -> Option<&ChordDescriptor> {
        self.get(id)
    }
}

impl FromIterator<(String, ChordDescriptor)> for ChordBook {
    fn from_iter<I: IntoIterator<Item = (String, ChordDescriptor)>>(iter: I) -> Self {
        Self {
            chords: iter.into_iter().collect(),
            ..Self::default()
        }
    }
}
