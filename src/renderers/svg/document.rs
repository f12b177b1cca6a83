//! SVG document generation
//!
//! Opens and closes the root `<svg>` element and carries the inline style block,
//! so every diagram is self-contained.

use std::fmt::Write;

use super::elements::xml_escape;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Builder for a single standalone SVG document
pub struct SvgDocument {
    buffer: String,
}

impl SvgDocument {
    /// Open the root element with an accessible label
    pub fn open(view_width: f64, view_height: f64, display_width: u32, label: &str) -> Self {
        let mut buffer = String::with_capacity(2048);
        let _ = write!(
            buffer,
            r#"<svg viewBox="0 0 {} {}" width="{}" xmlns="{}" role="img" aria-label="{}">"#,
            view_width,
            view_height,
            display_width,
            SVG_NS,
            xml_escape(label)
        );
        buffer.push('\n');
        Self { buffer }
    }

    /// Append an inline `<style>` block from `(selector, declarations)` pairs
    pub fn style(&mut self, rules: &[(&str, &str)]) {
        self.buffer.push_str("<style>\n");
        for (selector, declarations) in rules {
            let _ = writeln!(self.buffer, "  {} {{ {} }}", selector, declarations);
        }
        self.buffer.push_str("</style>\n");
    }

    /// Buffer for element writers in `super::elements`
    pub fn body(&mut self) -> &mut String {
        &mut self.buffer
    }

    pub fn finish(mut self) -> String {
        self.buffer.push_str("</svg>");
        self.buffer
    }
}
