use super::*;

fn drawing(primitives: Vec<Primitive>) -> Drawing {
    Drawing { width: 89, height: 75, primitives }
}

#[test]
fn empty_drawing_has_root_and_marker_only() {
    let svg = to_svg(&drawing(Vec::new()), &RenderConfig::default());
    assert!(svg.starts_with(
        "<svg class=\"asciiart\" width=\"89\" height=\"75\" style=\"font-family:Consolas;font-size:11px\">\n"
    ));
    assert!(svg.ends_with("</svg>\n"));
    assert_eq!(svg.matches("<marker id=\"head\"").count(), 1);
    assert!(!svg.contains("<text"));
}

#[test]
fn font_comes_from_config() {
    let config = RenderConfig { font_family: "monospace".to_owned(), font_size: 13, ..RenderConfig::default() };
    let svg = to_svg(&drawing(Vec::new()), &config);
    assert!(svg.contains("style=\"font-family:monospace;font-size:13px\""));
}

#[test]
fn text_is_escaped() {
    let svg = to_svg(
        &drawing(vec![Primitive::Text { at: Point { x: 33, y: 26 }, text: "a<b & \"c\">".to_owned() }]),
        &RenderConfig::default(),
    );
    assert!(svg.contains("<text x=\"33\" y=\"26\">a&lt;b &amp; &quot;c&quot;&gt;</text>\n"));
}

#[test]
fn arrow_carries_marker_and_line_does_not() {
    let a = Point { x: 1, y: 2 };
    let b = Point { x: 3, y: 4 };
    let svg = to_svg(
        &drawing(vec![Primitive::Arrow { from: a, to: b }, Primitive::Line { from: b, to: a }]),
        &RenderConfig::default(),
    );
    assert!(svg.contains(
        "<line x1=\"1\" y1=\"2\" x2=\"3\" y2=\"4\" style=\"stroke:rgb(220,220,220);stroke-width:4\" marker-end='url(#head)' />"
    ));
    assert!(svg.contains(
        "<line x1=\"3\" y1=\"4\" x2=\"1\" y2=\"2\" style=\"stroke:rgb(220,220,220);stroke-width:4\" />"
    ));
    assert_eq!(svg.matches("marker-end").count(), 1);
}

#[test]
fn polyline_points_are_space_separated_pairs() {
    let svg = to_svg(
        &drawing(vec![Primitive::Polyline { points: vec![Point { x: 1, y: 2 }, Point { x: 3, y: 4 }] }]),
        &RenderConfig::default(),
    );
    assert!(svg.contains("<polyline points=\"1,2 3,4\" style=\"fill:none;stroke:black;stroke-width:1\" />"));
}

#[test]
fn escape_borrows_clean_text() {
    assert!(matches!(escape("plain"), std::borrow::Cow::Borrowed("plain")));
    assert_eq!(escape("&<"), "&amp;&lt;");
}
