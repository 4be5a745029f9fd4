//! Bordered shapes: boxed icons (the folded-corner document symbol) and tables.
//!
//! Both are anchored at their top-left `+`. Shapes are validated completely
//! before anything is drawn or erased, so a partial match leaves the grid as
//! it was. The interior of a shape is converted as a grid of its own before
//! the shape is erased.

use crate::consts::{BLANK, FOLD, HORIZONTAL_BORDER, JUNCTION, VERTICAL_BORDER};
use crate::engine::convert_region;
use crate::grid::{Grid, GridError, GridMut};
use crate::render::Renderer;
use crate::turtle::{Junction, RunPattern};
use crate::view::Section;

/// Positions of consecutive corners along a section, beginning with `start`.
///
/// Each corner is the `+` ending a run of `pattern` that starts right after
/// the previous corner. The result always holds at least `start`.
///
/// ```text
/// +---+--+    corners from 0: [0, 4, 7]
/// ```
pub fn corners<G: Grid + ?Sized>(section: &Section<'_, G>, start: usize, pattern: RunPattern) -> Vec<usize> {
    let mut found = vec![start];
    let mut at = start;
    while let Some(len) = pattern.match_len(section.chars_from(at + 1)) {
        at += len;
        found.push(at);
    }
    found
}

// =============================================================================
// BOXED ICON
// =============================================================================

/// The document symbol:
///
/// ```text
/// +---+
/// |   |\
/// |   +-+
/// |     |
/// +-----+
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BoxedIcon {
    x: usize,
    y: usize,
    /// Column of the top-right corner, where the fold begins.
    x2: usize,
    /// Row of the bottom edge.
    y2: usize,
}

/// Recognizes a boxed icon anchored at `(x, y)`.
///
/// # Errors
///
/// Propagates [`GridError`] from grid access and from the nested conversion.
pub fn boxed_icon(grid: &mut dyn GridMut, x: usize, y: usize, renderer: &mut Renderer<'_>) -> Result<bool, GridError> {
    let Some(icon) = find_boxed_icon(&*grid, x, y)? else {
        return Ok(false);
    };
    let BoxedIcon { x, y, x2, y2 } = icon;

    renderer.polyline(&[(x2, y), (x, y), (x, y2), (x2 + 2, y2), (x2 + 2, y + 2), (x2, y), (x2, y + 2), (x2 + 2, y + 2)]);
    convert_region(grid, x + 1, y + 1, x2 - x - 1, y2 - y - 1, renderer)?;
    grid.fill(x, y, x2 - x + 3, y2 - y + 1, BLANK)?;
    Ok(true)
}

fn find_boxed_icon(grid: &dyn GridMut, x: usize, y: usize) -> Result<Option<BoxedIcon>, GridError> {
    if grid.char_at(x, y)? != JUNCTION {
        return Ok(None);
    }
    let top = corners(&Section::row(grid, y)?, x, RunPattern::horizontal(Junction::Required));
    let left = corners(&Section::column(grid, x)?, y, RunPattern::vertical(Junction::Required));
    let (&[_, x2], &[_, y2]) = (top.as_slice(), left.as_slice()) else {
        return Ok(None);
    };
    if x2 + 2 >= grid.width() || y2 < y + 2 {
        return Ok(None);
    }

    let notch = [
        (x2, y + 1, VERTICAL_BORDER),
        (x2 + 1, y + 1, FOLD),
        (x2, y + 2, JUNCTION),
        (x2 + 1, y + 2, HORIZONTAL_BORDER),
        (x2 + 2, y + 2, JUNCTION),
        (x2 + 2, y2, JUNCTION),
    ];
    for (cx, cy, expected) in notch {
        if grid.char_at(cx, cy)? != expected {
            return Ok(None);
        }
    }

    let top_edge = (x + 1..x2).all(|i| grid.get(i, y) == Some(HORIZONTAL_BORDER));
    let right_edge = (y + 3..y2).all(|j| grid.get(x2 + 2, j) == Some(VERTICAL_BORDER));
    let bottom_edge = (x + 1..x2 + 2).all(|i| grid.get(i, y2) == Some(HORIZONTAL_BORDER));
    let left_edge = (y + 1..y2).all(|j| grid.get(x, j) == Some(VERTICAL_BORDER));
    if !(top_edge && right_edge && bottom_edge && left_edge) {
        return Ok(None);
    }
    Ok(Some(BoxedIcon { x, y, x2, y2 }))
}

// =============================================================================
// TABLE
// =============================================================================

/// Outer bounds and cell spans of a validated table.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Table {
    left: usize,
    top: usize,
    right: usize,
    bottom: usize,
    /// `(x1, x2)` of each column, corner to corner.
    columns: Vec<(usize, usize)>,
    /// `(y1, y2)` of each row, corner to corner.
    rows: Vec<(usize, usize)>,
}

/// Recognizes a table (a grid of one or more rectangular cells) anchored at
/// `(x, y)`.
///
/// The outer border becomes one closed polyline; every cell then adds only
/// its inner dividing edges, so shared borders are drawn once. Cell contents
/// are converted in place.
///
/// # Errors
///
/// Propagates [`GridError`] from grid access and from the nested conversion.
pub fn table(grid: &mut dyn GridMut, x: usize, y: usize, renderer: &mut Renderer<'_>) -> Result<bool, GridError> {
    let Some(table) = find_table(&*grid, x, y)? else {
        return Ok(false);
    };
    let Table { left, top, right, bottom, .. } = table;

    renderer.polyline(&[(left, top), (right, top), (right, bottom), (left, bottom), (left, top)]);

    for (ci, &(cx1, cx2)) in table.columns.iter().enumerate() {
        let inner_column = ci + 1 < table.columns.len();
        for (ri, &(cy1, cy2)) in table.rows.iter().enumerate() {
            let inner_row = ri + 1 < table.rows.len();
            convert_region(grid, cx1 + 1, cy1 + 1, cx2 - cx1 - 1, cy2 - cy1 - 1, renderer)?;
            match (inner_column, inner_row) {
                (true, true) => renderer.polyline(&[(cx2, cy1), (cx2, cy2), (cx1, cy2)]),
                (true, false) => renderer.polyline(&[(cx2, cy1), (cx2, cy2)]),
                (false, true) => renderer.polyline(&[(cx1, cy2), (cx2, cy2)]),
                (false, false) => {}
            }
        }
    }

    grid.fill(left, top, right - left + 1, bottom - top + 1, BLANK)?;
    Ok(true)
}

fn find_table(grid: &dyn GridMut, x: usize, y: usize) -> Result<Option<Table>, GridError> {
    if grid.char_at(x, y)? != JUNCTION {
        return Ok(None);
    }
    let columns = corners(&Section::row(grid, y)?, x, RunPattern::horizontal(Junction::Required));
    let rows = corners(&Section::column(grid, x)?, y, RunPattern::vertical(Junction::Required));
    let (&[_, .., right], &[_, .., bottom]) = (columns.as_slice(), rows.as_slice()) else {
        return Ok(None);
    };

    let (columns, rows) = (spans(&columns), spans(&rows));
    for &(x1, x2) in &columns {
        for &(y1, y2) in &rows {
            if !is_cell(grid, x1, y1, x2, y2)? {
                return Ok(None);
            }
        }
    }
    Ok(Some(Table { left: x, top: y, right, bottom, columns, rows }))
}

/// Pairs of consecutive corners.
fn spans(corners: &[usize]) -> Vec<(usize, usize)> {
    corners.iter().zip(corners.iter().skip(1)).map(|(&a, &b)| (a, b)).collect()
}

/// Whether `(x1, y1)..=(x2, y2)` is a closed rectangle: corners are `+`,
/// edges are unbroken `-` and `|` runs.
fn is_cell(grid: &dyn GridMut, x1: usize, y1: usize, x2: usize, y2: usize) -> Result<bool, GridError> {
    for (cx, cy) in [(x1, y1), (x2, y1), (x1, y2), (x2, y2)] {
        if grid.char_at(cx, cy)? != JUNCTION {
            return Ok(false);
        }
    }
    let horizontal = (x1 + 1..x2).all(|i| {
        grid.get(i, y1) == Some(HORIZONTAL_BORDER) && grid.get(i, y2) == Some(HORIZONTAL_BORDER)
    });
    let vertical = (y1 + 1..y2).all(|j| {
        grid.get(x1, j) == Some(VERTICAL_BORDER) && grid.get(x2, j) == Some(VERTICAL_BORDER)
    });
    Ok(horizontal && vertical)
}

#[cfg(test)]
#[path = "enclosure_test.rs"]
mod tests;
