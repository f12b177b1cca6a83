//! SVG rendering output
//!
//! Low-level SVG writing shared by the diagram renderers.

pub mod elements;
pub mod document;

pub use elements::xml_escape;
pub use document::SvgDocument;
