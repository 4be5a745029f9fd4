//! SVG serialization of a [`Drawing`].
//!
//! Pure string building. The document wrapper (sized root element plus the
//! one shared arrowhead marker) is written exactly once per drawing.

use crate::config::RenderConfig;
use crate::render::{Drawing, Point, Primitive};

const CONNECTOR_STYLE: &str = "stroke:rgb(220,220,220);stroke-width:4";
const BORDER_STYLE: &str = "fill:none;stroke:black;stroke-width:1";

const MARKER_DEFS: &str = concat!(
    "  <defs>\n",
    "    <marker id=\"head\" markerWidth=\"4\" markerHeight=\"4\"\n",
    "      style=\"fill:rgb(220,220,220)\"\n",
    "      orient=\"auto\" refY=\"2\">\n",
    "      <path d=\"M0,0 L4,2 0,4\" />\n",
    "    </marker>\n",
    "  </defs>\n",
);

/// Renders `drawing` as one self-contained `<svg>` element.
#[must_use]
pub fn to_svg(drawing: &Drawing, config: &RenderConfig) -> String {
    let mut out = String::with_capacity(256 + drawing.primitives.len() * 96);
    out.push_str(&format!(
        "<svg class=\"asciiart\" width=\"{}\" height=\"{}\" style=\"font-family:{};font-size:{}px\">\n",
        drawing.width,
        drawing.height,
        escape(&config.font_family),
        config.font_size,
    ));
    out.push_str(MARKER_DEFS);
    for primitive in &drawing.primitives {
        write_primitive(&mut out, primitive);
    }
    out.push_str("</svg>\n");
    out
}

fn write_primitive(out: &mut String, primitive: &Primitive) {
    match primitive {
        Primitive::Text { at, text } => {
            out.push_str(&format!("<text x=\"{}\" y=\"{}\">{}</text>\n", at.x, at.y, escape(text)));
        }
        Primitive::Line { from, to } => {
            out.push_str(&format!(
                "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" style=\"{CONNECTOR_STYLE}\" />\n",
                from.x, from.y, to.x, to.y,
            ));
        }
        Primitive::Arrow { from, to } => {
            out.push_str(&format!(
                "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" style=\"{CONNECTOR_STYLE}\" marker-end='url(#head)' />\n",
                from.x, from.y, to.x, to.y,
            ));
        }
        Primitive::Polyline { points } => {
            out.push_str(&format!("<polyline points=\"{}\" style=\"{BORDER_STYLE}\" />\n", join_points(points)));
        }
    }
}

fn join_points(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Escapes the four characters that are special in markup text and
/// attribute values.
#[must_use]
pub fn escape(text: &str) -> std::borrow::Cow<'_, str> {
    if !text.contains(['<', '>', '"', '&']) {
        return std::borrow::Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '&' => out.push_str("&amp;"),
            _ => out.push(c),
        }
    }
    std::borrow::Cow::Owned(out)
}

#[cfg(test)]
#[path = "svg_test.rs"]
mod tests;
