// Chord diagram rendering tests
//
// Checks the rendered SVG structurally by parsing it with roxmltree rather
// than matching whole strings.

use chordbook_wasm::{ChordBook, ChordDescriptor, ChordDiagramRenderer, FretMarker, Frets};
use FretMarker::*;

fn book() -> ChordBook {
    let mut book = ChordBook::new();
    book.insert("d-major", ChordDescriptor::new("D major", 1, Frets::from_markers([Muted, Open, Fretted(1), Fretted(2), Fretted(2), Muted])));
    book.insert("c-barre", ChordDescriptor::new("C major (barre)", 3, Frets::from_markers([Fretted(3), Fretted(3), Fretted(5), Fretted(5), Fretted(5), Fretted(3)])));
    book.insert("g-major", ChordDescriptor::new("G major", 1, Frets::from_markers([Fretted(3), Fretted(2), Open, Open, Open, Fretted(3)])));
    book
}

fn elements<'a, 'input>(
    doc: &'a roxmltree::Document<'input>,
    tag: &str,
    class: Option<&str>,
) -> Vec<roxmltree::Node<'a, 'input>> {
    doc.descendants()
        .filter(|n| n.has_tag_name(tag))
        .filter(|n| class.is_none() || n.attribute("class") == class)
        .collect()
}

fn num(node: &roxmltree::Node, attr: &str) -> f64 {
    node.attribute(attr).unwrap().parse().unwrap()
}

#[test]
fn test_output_is_well_formed_svg() {
    let book = book();
    for id in book.ids() {
        let svg = ChordDiagramRenderer::render(&book, id);
        let doc = roxmltree::Document::parse(&svg).expect("diagram should be valid XML");
        let root = doc.root_element();
        assert!(root.has_tag_name(("http://www.w3.org/2000/svg", "svg")));
        assert_eq!(root.attribute("viewBox"), Some("0 0 160 200"));
        assert_eq!(root.attribute("width"), Some("100"));
        assert_eq!(root.attribute("role"), Some("img"));
        assert_eq!(root.attribute("aria-label"), Some(book.get(id).unwrap().name.as_str()));
    }
}

#[test]
fn test_rendering_is_deterministic() {
    let book = book();
    assert_eq!(
        ChordDiagramRenderer::render(&book, "c-barre"),
        ChordDiagramRenderer::render(&book, "c-barre")
    );
}

#[test]
fn test_missing_chord_fallback() {
    let out = ChordDiagramRenderer::render(&book(), "no-such-chord");
    assert!(out.contains("Chord not found"));
    assert!(!out.contains("<svg"));
}

#[test]
fn test_marker_counts() {
    let svg = ChordDiagramRenderer::render(&book(), "d-major");
    let doc = roxmltree::Document::parse(&svg).unwrap();

    let mutes = elements(&doc, "text", Some("mute"));
    assert_eq!(mutes.len(), 2);
    assert!(mutes.iter().all(|n| n.text() == Some("x") && num(n, "y") == 55.0));
    assert_eq!(num(&mutes[0], "x"), 30.0);
    assert_eq!(num(&mutes[1], "x"), 130.0);

    let open = elements(&doc, "circle", Some("open"));
    assert_eq!(open.len(), 1);
    assert_eq!(num(&open[0], "cy"), 50.0);

    assert_eq!(elements(&doc, "circle", Some("dot")).len(), 3);
}

#[test]
fn test_frame_and_strings() {
    let svg = ChordDiagramRenderer::render(&book(), "g-major");
    let doc = roxmltree::Document::parse(&svg).unwrap();

    let frame = &elements(&doc, "rect", Some("frame"))[0];
    assert_eq!(num(frame, "x"), 0.5);
    assert_eq!(num(frame, "width"), 159.0);
    assert_eq!(num(frame, "rx"), 10.0);

    let strings: Vec<f64> = elements(&doc, "line", None)
        .iter()
        .filter(|n| n.attribute("x1") == n.attribute("x2"))
        .map(|n| num(n, "x1"))
        .collect();
    assert_eq!(strings, vec![30.0, 50.0, 70.0, 90.0, 110.0, 130.0]);

    let label = &elements(&doc, "text", Some("label"))[0];
    assert_eq!(label.text(), Some("G major"));
    assert_eq!(num(label, "x"), 80.0);
    assert_eq!(num(label, "y"), 30.0);
}

#[test]
fn test_fret_line_styles() {
    let book = book();

    let nut = ChordDiagramRenderer::render(&book, "g-major");
    let doc = roxmltree::Document::parse(&nut).unwrap();
    let frets: Vec<_> = elements(&doc, "line", None)
        .into_iter()
        .filter(|n| n.attribute("y1") == n.attribute("y2"))
        .collect();
    assert_eq!(frets.len(), 6);
    assert_eq!(frets[0].attribute("class"), Some("grid-thick"));
    assert!(frets[1..].iter().all(|n| n.attribute("class") == Some("grid")));

    let barre = ChordDiagramRenderer::render(&book, "c-barre");
    let doc = roxmltree::Document::parse(&barre).unwrap();
    assert!(elements(&doc, "line", None).iter().all(|n| n.attribute("class") == Some("grid")));
    let position = elements(&doc, "text", None)
        .into_iter()
        .find(|n| n.attribute("class").is_none())
        .expect("position label");
    assert_eq!(position.text(), Some("3"));
    assert_eq!((num(&position, "x"), num(&position, "y")), (140.0, 76.0));
}

#[test]
fn test_dot_positions() {
    let book = book();

    let svg = ChordDiagramRenderer::render(&book, "g-major");
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let dots = elements(&doc, "circle", Some("dot"));
    // y = 60 + (fret - position + 0.5) * 24
    assert_eq!((num(&dots[0], "cx"), num(&dots[0], "cy")), (30.0, 120.0));
    assert_eq!((num(&dots[1], "cx"), num(&dots[1], "cy")), (50.0, 96.0));
    assert_eq!(num(&dots[2], "cx"), 130.0);

    let svg = ChordDiagramRenderer::render(&book, "c-barre");
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let dots = elements(&doc, "circle", Some("dot"));
    // fret 5 at position 3 lands in the third cell
    assert_eq!(num(&dots[2], "cy"), 120.0);
    assert_eq!(num(&dots[0], "cy"), 72.0);
}

#[test]
fn test_special_characters_in_name_are_escaped() {
    let mut book = ChordBook::new();
    book.insert("odd", ChordDescriptor::new("Rock & <Roll> \"5\"", 1, Frets::from_markers([Open; 6])));
    let svg = ChordDiagramRenderer::render(&book, "odd");
    let doc = roxmltree::Document::parse(&svg).expect("escaped name keeps XML valid");
    assert_eq!(doc.root_element().attribute("aria-label"), Some("Rock & <Roll> \"5\""));

    let out = ChordDiagramRenderer::render(&book, "<missing>");
    assert_eq!(out, "<em>Chord not found: &lt;missing&gt;</em>");
}

#[test]
fn test_control_characters_in_name_keep_xml_valid() {
    let mut book = ChordBook::new();
    book.insert("ctrl", ChordDescriptor::new("C\u{1}maj", 1, Frets::from_markers([Open; 6])));
    let svg = ChordDiagramRenderer::render(&book, "ctrl");
    let doc = roxmltree::Document::parse(&svg).expect("control characters must not reach the markup");
    assert_eq!(doc.root_element().attribute("aria-label"), Some("Cmaj"));
    let label = doc.descendants().find(|n| n.attribute("class") == Some("label")).unwrap();
    assert_eq!(label.text(), Some("Cmaj"));
}
