//! Serde shapes for chord data files and their conversion into the typed model.
//!
//! Accepted file shapes:
//!
//! ```yaml
//! chords:
//!   g-major:
//!     name: G major
//!     position: 1
//!     fingering:
//!       frets: [3, 2, 0, 0, 0, 3]
//! settings:
//!   display_width: 120
//! ```
//!
//! or the `chords` mapping on its own at the top level.

use std::collections::BTreeMap;

use serde::de::IgnoredAny;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::ChordDataError;
use crate::models::{ChordDescriptor, Fingering, FretMarker, Frets, STRING_COUNT};
use crate::settings::DiagramSettings;

/// A single fret value as written in the data file
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawMarker {
    Number(i64),
    Text(String),
    Other(IgnoredAny),
}

impl RawMarker {
    /// Decide the marker kind; unrecognized values become `None` and draw nothing.
    pub fn to_marker(&self) -> Option<FretMarker> {
        match self {
            RawMarker::Number(0) => Some(FretMarker::Open),
            RawMarker::Number(n) if *n > 0 => u32::try_from(*n).ok().map(FretMarker::Fretted),
            RawMarker::Text(s) if is_mute_symbol(s) => Some(FretMarker::Muted),
            _ => None,
        }
    }
}

fn is_mute_symbol(s: &str) -> bool {
    matches!(s.trim(), "x" | "X" | "muted")
}

#[derive(Debug, Default, Deserialize)]
pub struct RawFingering {
    #[serde(default)]
    pub frets: Option<Vec<RawMarker>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawChord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub position: Option<i64>,
    #[serde(default)]
    pub fingering: Option<RawFingering>,
}

impl RawChord {
    /// Convert into a descriptor; `id` stands in for a missing name.
    pub fn into_descriptor(self, id: &str) -> Result<ChordDescriptor, ChordDataError> {
        let name = self.name.unwrap_or_else(|| id.to_string());

        let position = self.position.unwrap_or(1);
        let position = u32::try_from(position)
            .ok()
            .filter(|p| *p >= 1)
            .ok_or_else(|| ChordDataError::InvalidPosition {
                chord: name.clone(),
                position,
            })?;

        let fingering = match self.fingering {
            Some(raw) => Some(Fingering {
                frets: raw.frets.map(|f| convert_frets(&name, &f)).transpose()?,
            }),
            None => None,
        };

        Ok(ChordDescriptor { name, position, fingering })
    }
}

fn convert_frets(chord: &str, raw: &[RawMarker]) -> Result<Frets, ChordDataError> {
    if raw.len() != STRING_COUNT {
        return Err(ChordDataError::WrongStringCount {
            chord: chord.to_string(),
            found: raw.len(),
        });
    }
    let mut markers = [None; STRING_COUNT];
    for (slot, value) in markers.iter_mut().zip(raw) {
        *slot = value.to_marker();
    }
    Ok(Frets::new(markers))
}

/// A parsed data file. Each chord entry keeps its own parse result so one
/// malformed entry cannot take its siblings down with it.
#[derive(Debug)]
pub struct RawChordFile {
    pub chords: BTreeMap<String, Result<RawChord, ChordDataError>>,
    pub settings: Result<Option<DiagramSettings>, ChordDataError>,
}

impl RawChordFile {
    /// Split a generic data value into chord entries and settings.
    ///
    /// A top-level `chords` key selects the wrapped shape; otherwise the whole
    /// mapping is taken as chord entries. Only a value that is not a mapping at
    /// all fails here.
    pub fn from_value(value: Value) -> Result<Self, ChordDataError> {
        let (chords, settings) = match value {
            Value::Object(mut map) if map.contains_key("chords") => {
                let settings = match map.remove("settings") {
                    None | Some(Value::Null) => Ok(None),
                    Some(v) => serde_json::from_value(v)
                        .map(Some)
                        .map_err(ChordDataError::InvalidSettings),
                };
                (map.remove("chords").unwrap_or(Value::Null), settings)
            }
            other => (other, Ok(None)),
        };

        let entries: Map<String, Value> = match chords {
            Value::Null => Map::new(),
            other => serde_json::from_value(other)?,
        };

        let chords = entries
            .into_iter()
            .map(|(id, entry)| {
                let parsed = serde_json::from_value::<RawChord>(entry)
                    .map_err(|source| ChordDataError::InvalidEntry { chord: id.clone(), source });
                (id, parsed)
            })
            .collect();

        Ok(Self { chords, settings })
    }
}
