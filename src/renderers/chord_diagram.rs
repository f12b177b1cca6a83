//! Chord diagram renderer
//!
//! Draws a six-string chord box as inline SVG:
//!
//! ```text
//!      x  o                 <- mute / open markers above the nut
//!    ┏━━┳━━┳━━┳━━┳━━┓       <- top fret line (thick at the nut)
//!    ┃  ┃  ┃  ●  ┃  ┃   5   <- position label when not at the nut
//!    ┣━━╋━━●━━╋━━╋━━┫
//! ```
//!
//! Geometry is fixed in a 160×200 viewBox. Rendering never fails: an unknown
//! chord or one without fret data produces a short inline fallback instead.

use super::svg::{elements, xml_escape, SvgDocument};
use crate::data::ChordLookup;
use crate::models::{ChordDescriptor, FretMarker, STRING_COUNT};
use crate::settings::{DiagramSettings, FretRangePolicy};

pub const VIEW_WIDTH: f64 = 160.0;
pub const VIEW_HEIGHT: f64 = 200.0;
pub const FRAME_INSET: f64 = 0.5;
pub const FRAME_RADIUS: f64 = 10.0;

pub const LABEL_Y: f64 = 30.0;
pub const GRID_LEFT: f64 = 30.0;
pub const GRID_TOP: f64 = 60.0;
pub const GRID_BOTTOM: f64 = 180.0;
pub const STRING_SPACING: f64 = 20.0;
pub const FRET_SPACING: f64 = 24.0;
/// Number of horizontal fret lines drawn (five fret cells)
pub const FRET_LINES: usize = 6;

pub const POSITION_LABEL_X: f64 = 140.0;
pub const POSITION_LABEL_Y: f64 = 76.0;
pub const MUTE_Y: f64 = 55.0;
pub const OPEN_Y: f64 = 50.0;
pub const OPEN_RADIUS: f64 = 4.0;
pub const DOT_RADIUS: f64 = 6.0;

const STYLE: &[(&str, &str)] = &[
    (".grid", "stroke: #333; stroke-width: 1"),
    (".grid-thick", "stroke: #333; stroke-width: 3"),
    (".dot", "fill: #333"),
    (".open", "fill: none; stroke: #333; stroke-width: 2"),
    (".mute", "font: 18px sans-serif; text-anchor: middle"),
    (".label", "font: 20px sans-serif; text-anchor: middle"),
    (".frame", "fill: white; stroke: #333; stroke-width: 1"),
];

/// x coordinate of string `index` (0 = lowest string)
pub fn string_x(index: usize) -> f64 {
    GRID_LEFT + index as f64 * STRING_SPACING
}

/// y coordinate of fret line `index` (0 = top line)
pub fn fret_line_y(index: usize) -> f64 {
    GRID_TOP + index as f64 * FRET_SPACING
}

/// Vertical centre of the dot for `fret` in a diagram starting at `position`
pub fn dot_y(fret: u32, position: u32) -> f64 {
    let offset = fret as f64 - position as f64;
    GRID_TOP + (offset + 0.5) * FRET_SPACING
}

fn grid_right() -> f64 {
    string_x(STRING_COUNT - 1)
}

/// Inline replacement for a chord that cannot be resolved
pub fn not_found(chord_id: &str) -> String {
    format!("<em>Chord not found: {}</em>", xml_escape(chord_id))
}

/// Inline replacement for a chord rejected by `FretRangePolicy::Reject`
pub fn out_of_range(chord_id: &str) -> String {
    format!("<em>Chord out of range: {}</em>", xml_escape(chord_id))
}

pub struct ChordDiagramRenderer;

impl ChordDiagramRenderer {
    /// Render `chord_id` from `lookup` with default settings
    pub fn render<L: ChordLookup + ?Sized>(lookup: &L, chord_id: &str) -> String {
        Self::render_with_settings(lookup, chord_id, &DiagramSettings::default())
    }

    pub fn render_with_settings<L: ChordLookup + ?Sized>(
        lookup: &L,
        chord_id: &str,
        settings: &DiagramSettings,
    ) -> String {
        let Some(chord) = lookup.chord(chord_id).filter(|c| c.frets().is_some()) else {
            log::warn!("Chord not found: {}", chord_id);
            return not_found(chord_id);
        };

        if settings.fret_range == FretRangePolicy::Reject && chord.validate().is_err() {
            log::warn!("Chord '{}' has frets above position {}", chord_id, chord.position);
            return out_of_range(chord_id);
        }

        log::debug!("Rendering chord diagram '{}' at position {}", chord_id, chord.position);
        Self::render_descriptor(chord, settings)
    }

    /// Render several chords in order, wrapped in a `chord-sheet` container
    pub fn render_sheet<L: ChordLookup + ?Sized>(lookup: &L, chord_ids: &[&str], settings: &DiagramSettings) -> String {
        let mut out = String::from("<div class=\"chord-sheet\">\n");
        for id in chord_ids {
            out.push_str(&Self::render_with_settings(lookup, id, settings));
            out.push('\n');
        }
        out.push_str("</div>");
        out
    }

    /// Draw a descriptor directly. A descriptor without frets draws an empty grid.
    pub fn render_descriptor(chord: &ChordDescriptor, settings: &DiagramSettings) -> String {
        let mut doc = SvgDocument::open(VIEW_WIDTH, VIEW_HEIGHT, settings.display_width, &chord.name);
        doc.style(STYLE);

        let out = doc.body();
        elements::rect(
            out,
            "frame",
            FRAME_INSET,
            FRAME_INSET,
            VIEW_WIDTH - 2.0 * FRAME_INSET,
            VIEW_HEIGHT - 2.0 * FRAME_INSET,
            FRAME_RADIUS,
        );
        out.push('\n');
        elements::text(out, Some("label"), VIEW_WIDTH / 2.0, LABEL_Y, &chord.name);
        out.push('\n');

        // strings
        for i in 0..STRING_COUNT {
            let x = string_x(i);
            elements::line(out, "grid", x, GRID_TOP, x, GRID_BOTTOM);
        }
        out.push('\n');

        // frets; the nut is drawn thick
        for i in 0..FRET_LINES {
            let class = if i == 0 && chord.starts_at_nut() { "grid-thick" } else { "grid" };
            let y = fret_line_y(i);
            elements::line(out, class, GRID_LEFT, y, grid_right(), y);
        }
        out.push('\n');

        if !chord.starts_at_nut() {
            elements::text(out, None, POSITION_LABEL_X, POSITION_LABEL_Y, &chord.position.to_string());
            out.push('\n');
        }

        if let Some(frets) = chord.frets() {
            for (i, marker) in frets.iter() {
                let x = string_x(i);
                match marker {
                    Some(FretMarker::Muted) => elements::text(out, Some("mute"), x, MUTE_Y, "x"),
                    Some(FretMarker::Open) => elements::circle(out, "open", x, OPEN_Y, OPEN_RADIUS),
                    Some(FretMarker::Fretted(fret)) => {
                        elements::circle(out, "dot", x, dot_y(fret, chord.position), DOT_RADIUS)
                    }
                    None => continue,
                }
                out.push('\n');
            }
        }

        doc.finish()
    }
}
