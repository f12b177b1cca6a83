//! Chord model
//!
//! Typed chord descriptors as consumed by the diagram renderer. Marker kinds
//! are decided once when chord data is loaded (see `crate::data`), so the
//! renderer never re-inspects raw values.

use crate::data::ChordDataError;

/// Number of strings on the instrument (standard six-string guitar)
pub const STRING_COUNT: usize = 6;

/// What a single string does in a chord shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FretMarker {
    /// String is not played (drawn as an "x" above the grid)
    Muted,
    /// String is played open (drawn as a hollow circle above the grid)
    Open,
    /// String is pressed at this absolute fret number
    Fretted(u32),
}

/// One marker slot per string, lowest-pitched string (low E) first.
///
/// A `None` slot is a string whose source value was not recognized; it draws nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frets([Option<FretMarker>; STRING_COUNT]);

impl Frets {
    pub fn new(markers: [Option<FretMarker>; STRING_COUNT]) -> Self {
        Self(markers)
    }

    /// Build from six known markers
    pub fn from_markers(markers: [FretMarker; STRING_COUNT]) -> Self {
        Self(markers.map(Some))
    }

    pub fn get(&self, string: usize) -> Option<FretMarker> {
        self.0.get(string).copied().flatten()
    }

    /// Iterate `(string_index, marker)` pairs in string order
    pub fn iter(&self) -> impl Iterator<Item = (usize, Option<FretMarker>)> + '_ {
        self.0.iter().copied().enumerate()
    }
}

/// Fingering block of a chord entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fingering {
    pub frets: Option<Frets>,
}

/// A chord as supplied by the page's chord data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordDescriptor {
    /// Display name, e.g. "G major"
    pub name: String,
    /// Fret represented by the topmost fret line (1 = nut)
    pub position: u32,
    pub fingering: Option<Fingering>,
}

impl ChordDescriptor {
    pub fn new(name: impl Into<String>, position: u32, frets: Frets) -> Self {
        Self {
            name: name.into(),
            position,
            fingering: Some(Fingering { frets: Some(frets) }),
        }
    }

    /// Fret markers, if the descriptor carries any
    pub fn frets(&self) -> Option<&Frets> {
        self.fingering.as_ref().and_then(|f| f.frets.as_ref())
    }

    /// Diagram begins at the nut
    pub fn starts_at_nut(&self) -> bool {
        self.position == 1
    }

    /// Check that every fretted marker sits at or below the top fret line.
    pub fn validate(&self) -> Result<(), ChordDataError> {
        if self.position < 1 {
            return Err(ChordDataError::InvalidPosition {
                chord: self.name.clone(),
                position: self.position as i64,
            });
        }
        let Some(frets) = self.frets() else {
            return Ok(());
        };
        for (string, marker) in frets.iter() {
            if let Some(FretMarker::Fretted(fret)) = marker {
                if fret < self.position {
                    return Err(ChordDataError::FretBelowPosition {
                        chord: self.name.clone(),
                        string,
                        fret,
                        position: self.position,
                    });
                }
            }
        }
        Ok(())
    }
}
