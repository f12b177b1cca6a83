//! SVG element rendering
//!
//! Small writers for the primitives a chord diagram is made of. Each appends
//! one self-closing element (or one text element) to the output buffer.

use std::fmt::Write;

/// Escape special XML characters for text content and attribute values.
///
/// Characters outside the XML 1.0 `Char` production (C0 controls other than
/// tab, newline and carriage return, and U+FFFE/U+FFFF) are dropped.
pub fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars().filter(|c| is_xml_char(*c)) {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}')
}

pub fn line(out: &mut String, class: &str, x1: f64, y1: f64, x2: f64, y2: f64) {
    let _ = write!(
        out,
        r#"<line class="{}" x1="{}" y1="{}" x2="{}" y2="{}" />"#,
        class, x1, y1, x2, y2
    );
}

pub fn circle(out: &mut String, class: &str, cx: f64, cy: f64, r: f64) {
    let _ = write!(out, r#"<circle class="{}" cx="{}" cy="{}" r="{}" />"#, class, cx, cy, r);
}

/// Rounded rectangle
pub fn rect(out: &mut String, class: &str, x: f64, y: f64, width: f64, height: f64, radius: f64) {
    let _ = write!(
        out,
        r#"<rect class="{}" x="{}" y="{}" width="{}" height="{}" rx="{}" ry="{}" />"#,
        class, x, y, width, height, radius, radius
    );
}

/// Text element; `content` is escaped, `class` is omitted when `None`
pub fn text(out: &mut String, class: Option<&str>, x: f64, y: f64, content: &str) {
    match class {
        Some(class) => {
            let _ = write!(out, r#"<text class="{}" x="{}" y="{}">"#, class, x, y);
        }
        None => {
            let _ = write!(out, r#"<text x="{}" y="{}">"#, x, y);
        }
    }
    out.push_str(&xml_escape(content));
    out.push_str("</text>");
}
