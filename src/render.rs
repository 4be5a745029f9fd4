//! Grid-to-pixel renderer.
//!
//! The renderer turns grid coordinates into pixel coordinates and records
//! [`Primitive`]s. Its only state is the running offset of the region being
//! converted: [`Renderer::nested`] shifts the offset for the duration of a
//! sub-region conversion, so a shape found inside a table cell lands at the
//! same pixels as if the whole grid had been scanned in one piece.
//!
//! Serializing the finished [`Drawing`] is the job of [`crate::svg`].

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::config::RenderConfig;
use crate::consts::{PADDING_BOTTOM_PX, PADDING_RIGHT_PX};

/// A grid cell `(x, y)` in the coordinates of the region being converted.
pub type Cell = (usize, usize);

/// A pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

/// One drawing primitive, in pixels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    /// A run of literal characters; `at` is the text anchor.
    Text { at: Point, text: String },
    /// A connector segment without a head.
    Line { from: Point, to: Point },
    /// A connector segment ending in the arrowhead marker.
    Arrow { from: Point, to: Point },
    /// Border outline through cell centres.
    Polyline { points: Vec<Point> },
}

/// The result of one top-level conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drawing {
    pub width: i64,
    pub height: i64,
    pub primitives: Vec<Primitive>,
}

impl Drawing {
    pub fn texts(&self) -> impl Iterator<Item = (&Point, &str)> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Text { at, text } => Some((at, text.as_str())),
            _ => None,
        })
    }

    pub fn arrows(&self) -> impl Iterator<Item = (&Point, &Point)> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Arrow { from, to } => Some((from, to)),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = (&Point, &Point)> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Line { from, to } => Some((from, to)),
            _ => None,
        })
    }

    pub fn polylines(&self) -> impl Iterator<Item = &[Point]> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Polyline { points } => Some(points.as_slice()),
            _ => None,
        })
    }

    /// # Errors
    ///
    /// Propagates [`serde_json::Error`]; the drawing types always serialize.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug)]
pub struct Renderer<'c> {
    config: &'c RenderConfig,
    offset_x: i64,
    offset_y: i64,
    primitives: Vec<Primitive>,
    /// Connector segments drawn so far, as absolute cell pairs in ascending order.
    segments: HashSet<((i64, i64), (i64, i64))>,
}

impl<'c> Renderer<'c> {
    /// A renderer whose origin sits `margin_x` columns and `margin_y` rows
    /// into the picture.
    #[must_use]
    pub fn new(config: &'c RenderConfig) -> Self {
        Self {
            config,
            offset_x: config.margin_x,
            offset_y: config.margin_y,
            primitives: Vec::new(),
            segments: HashSet::new(),
        }
    }

    /// Current offset, in cells, of the region being converted.
    #[must_use]
    pub fn offset(&self) -> (i64, i64) {
        (self.offset_x, self.offset_y)
    }

    #[must_use]
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Runs `f` with the offset moved by `(dx, dy)` cells; the offset is
    /// restored afterwards whatever `f` returns.
    pub fn nested<T>(&mut self, dx: usize, dy: usize, f: impl FnOnce(&mut Self) -> T) -> T {
        let (dx, dy) = (to_i64(dx), to_i64(dy));
        self.offset_x += dx;
        self.offset_y += dy;
        let result = f(self);
        self.offset_x -= dx;
        self.offset_y -= dy;
        result
    }

    /// Marks the connector segment between `from` and `to` as drawn.
    ///
    /// Returns `false` if the same segment, in either direction, was already
    /// claimed during this conversion, from this region or any other.
    pub fn claim_segment(&mut self, from: Cell, to: Cell) -> bool {
        let absolute = |(x, y): Cell| (self.offset_x + to_i64(x), self.offset_y + to_i64(y));
        let (a, b) = (absolute(from), absolute(to));
        self.segments.insert(if a <= b { (a, b) } else { (b, a) })
    }

    /// Wraps up the primitives into a drawing sized for a
    /// `grid_width × grid_height` grid.
    #[must_use]
    pub fn finish(self, grid_width: usize, grid_height: usize) -> Drawing {
        let config = self.config;
        Drawing {
            width: config.cell_width * (config.margin_x + to_i64(grid_width)) + PADDING_RIGHT_PX,
            height: config.cell_height * (config.margin_y + to_i64(grid_height)) + PADDING_BOTTOM_PX,
            primitives: self.primitives,
        }
    }

    // =========================================================================
    // COORDINATES
    // =========================================================================

    fn x2px(&self, x: usize) -> i64 {
        self.config.cell_width * (self.offset_x + to_i64(x))
    }

    fn y2px(&self, y: usize) -> i64 {
        self.config.cell_height * (self.offset_y + to_i64(y))
    }

    /// Top-left pixel of `cell`.
    #[must_use]
    pub fn cell_origin(&self, (x, y): Cell) -> Point {
        Point { x: self.x2px(x), y: self.y2px(y) }
    }

    fn cell_center(&self, (x, y): Cell) -> Point {
        Point { x: self.x2px(x) + self.config.cell_width / 2, y: self.y2px(y) + self.config.cell_height / 2 }
    }

    // =========================================================================
    // PRIMITIVES
    // =========================================================================

    /// Records `text` starting at `cell`.
    pub fn text(&mut self, cell: Cell, text: &str) {
        let origin = self.cell_origin(cell);
        let at = Point {
            x: origin.x + self.config.cell_width / 2,
            y: origin.y + (3 * self.config.cell_height) / 4,
        };
        self.primitives.push(Primitive::Text { at, text: text.to_owned() });
    }

    /// Records a border outline through the centres of `cells`.
    pub fn polyline(&mut self, cells: &[Cell]) {
        let points = cells.iter().map(|&c| self.cell_center(c)).collect();
        self.primitives.push(Primitive::Polyline { points });
    }

    /// Records a headless connector segment from `from` to `to`.
    ///
    /// Both ends are pulled in so the segment stops short of the glyphs it
    /// joins.
    pub fn line(&mut self, from: Cell, to: Cell) {
        let (cw, ch) = (self.config.cell_width, self.config.cell_height);
        let (mut a, mut b) = (self.cell_origin(from), self.cell_origin(to));
        match heading(from, to) {
            Heading::Down => {
                shift(&mut a, cw, -ch / 2);
                shift(&mut b, cw, -ch / 2);
            }
            Heading::Up => {
                shift(&mut a, cw, ch / 2);
                shift(&mut b, cw, -ch / 2);
            }
            Heading::Right => {
                shift(&mut a, -cw / 2, ch / 2);
                shift(&mut b, -cw * 2, ch / 2);
            }
            Heading::Left => {
                shift(&mut a, cw / 2, ch / 2);
                shift(&mut b, cw * 2, ch / 2);
            }
            Heading::Still => {}
        }
        self.primitives.push(Primitive::Line { from: a, to: b });
    }

    /// Records a connector segment from `from` with its head at `tip`.
    pub fn arrow(&mut self, from: Cell, tip: Cell) {
        let (cw, ch) = (self.config.cell_width, self.config.cell_height);
        let (mut a, mut b) = (self.cell_origin(from), self.cell_origin(tip));
        match heading(from, tip) {
            Heading::Down => {
                shift(&mut a, cw, -ch / 2);
                shift(&mut b, cw, ch / 2);
            }
            Heading::Up => {
                shift(&mut a, cw, 3 * ch / 2);
                shift(&mut b, cw, ch / 2);
            }
            Heading::Right => {
                shift(&mut a, cw, ch / 2);
                shift(&mut b, -cw, ch / 2);
            }
            Heading::Left => {
                shift(&mut a, cw, ch / 2);
                shift(&mut b, cw * 2, ch / 2);
            }
            Heading::Still => {}
        }
        self.primitives.push(Primitive::Arrow { from: a, to: b });
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Heading {
    Up,
    Down,
    Left,
    Right,
    Still,
}

fn heading((x1, y1): Cell, (x2, y2): Cell) -> Heading {
    if x1 == x2 {
        match y2.cmp(&y1) {
            std::cmp::Ordering::Greater => Heading::Down,
            std::cmp::Ordering::Less => Heading::Up,
            std::cmp::Ordering::Equal => Heading::Still,
        }
    } else if y1 == y2 {
        if x2 > x1 { Heading::Right } else { Heading::Left }
    } else {
        Heading::Still
    }
}

fn shift(p: &mut Point, dx: i64, dy: i64) {
    p.x += dx;
    p.y += dy;
}

fn to_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
