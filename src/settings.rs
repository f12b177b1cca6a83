//! Diagram rendering settings
//!
//! Settings can be given in code or read from the `settings:` block of a chord
//! data file. Every field has a default, so an empty block is valid.

use serde::{Deserialize, Serialize};

/// Default rendered width of a diagram in display units
pub const DEFAULT_DISPLAY_WIDTH: u32 = 100;

/// What to do with a fretted marker that lies above the top fret line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FretRangePolicy {
    /// Draw the dot where the arithmetic puts it, even outside the grid
    #[default]
    RenderAsIs,
    /// Emit the out-of-range fallback instead of a diagram
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramSettings {
    /// Value of the root `width` attribute; height follows the viewBox aspect ratio
    pub display_width: u32,
    pub fret_range: FretRangePolicy,
}

impl Default for DiagramSettings {
    fn default() -> Self {
        Self {
            display_width: DEFAULT_DISPLAY_WIDTH,
            fret_range: FretRangePolicy::default(),
        }
    }
}

impl DiagramSettings {
    pub fn with_display_width(mut self, width: u32) -> Self {
        self.display_width = width;
        self
    }

    pub fn with_fret_range(mut self, policy: FretRangePolicy) -> Self {
        self.fret_range = policy;
        self
    }
}
