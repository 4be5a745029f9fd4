//! Arrows and the connector trees behind them.
//!
//! An arrow starts at its tip glyph. Its shaft is a run of `|` (vertical tips)
//! or `-` (horizontal tips) leading away from the tip, optionally ending in a
//! `+` junction. Every further run that leaves a junction becomes a headless
//! line; runs ending in another junction branch again.
//!
//! ```text
//!     |        +---+
//!     |        |   |
//!     ˅        ˅   ˅
//! ```
//!
//! The tip and its shaft are erased. Branch runs are drawn but stay on the
//! grid, so the enclosure pass can still use them as borders; the renderer
//! remembers them instead, so an arrow sharing a junction with an earlier one
//! does not draw them again.

use crate::consts::{BLANK, FREESTANDING_TIPS, JUNCTION, TIPS_DOWN, TIPS_LEFT, TIPS_RIGHT, TIPS_UP};
use crate::grid::{Grid, GridError, GridMut};
use crate::render::{Cell, Renderer};
use crate::turtle::{Junction, Orientation, RunPattern, Turtle};

/// `˅` or `v` with its shaft above it.
///
/// # Errors
///
/// Propagates [`GridError`] from grid access.
pub fn down_arrow(grid: &mut dyn GridMut, x: usize, y: usize, renderer: &mut Renderer<'_>) -> Result<bool, GridError> {
    arrow(grid, (x, y), TIPS_DOWN, Orientation::North, renderer)
}

/// `˄` or `^` with its shaft below it.
///
/// # Errors
///
/// Propagates [`GridError`] from grid access.
pub fn up_arrow(grid: &mut dyn GridMut, x: usize, y: usize, renderer: &mut Renderer<'_>) -> Result<bool, GridError> {
    arrow(grid, (x, y), TIPS_UP, Orientation::South, renderer)
}

/// `<` with its shaft to the right.
///
/// # Errors
///
/// Propagates [`GridError`] from grid access.
pub fn left_arrow(grid: &mut dyn GridMut, x: usize, y: usize, renderer: &mut Renderer<'_>) -> Result<bool, GridError> {
    arrow(grid, (x, y), TIPS_LEFT, Orientation::East, renderer)
}

/// `>` with its shaft to the left.
///
/// # Errors
///
/// Propagates [`GridError`] from grid access.
pub fn right_arrow(grid: &mut dyn GridMut, x: usize, y: usize, renderer: &mut Renderer<'_>) -> Result<bool, GridError> {
    arrow(grid, (x, y), TIPS_RIGHT, Orientation::West, renderer)
}

/// Where a shaft traced away from a tip ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Shaft {
    end: Cell,
    heading: Orientation,
    at_junction: bool,
}

fn arrow(
    grid: &mut dyn GridMut,
    tip: Cell,
    tips: &[char],
    shaft_side: Orientation,
    renderer: &mut Renderer<'_>,
) -> Result<bool, GridError> {
    let glyph = grid.char_at(tip.0, tip.1)?;
    if !tips.contains(&glyph) {
        return Ok(false);
    }

    // ˄ and ˅ carry no ASCII meaning, so they may also sit at the near end
    // of their shaft: `˅` on top of a `|` run. The head still points the way
    // the glyph does.
    let mut shaft = trace_shaft(&*grid, tip, shaft_side)?;
    let mut flipped = false;
    if shaft.is_none() && FREESTANDING_TIPS.contains(&glyph) {
        shaft = trace_shaft(&*grid, tip, shaft_side.opposite())?;
        flipped = true;
    }
    let Some(shaft) = shaft else {
        return Ok(false);
    };

    grid.set_char_at(tip.0, tip.1, BLANK)?;
    for (x, y) in cells_between(tip, shaft.end) {
        grid.set_char_at(x, y, BLANK)?;
    }
    if !shaft.at_junction {
        grid.set_char_at(shaft.end.0, shaft.end.1, BLANK)?;
    }

    if flipped {
        renderer.arrow(tip, shaft.end);
    } else {
        renderer.arrow(shaft.end, tip);
    }
    if shaft.at_junction {
        trace_branches(&*grid, shaft.end, shaft.heading, renderer)?;
    }
    Ok(true)
}

fn trace_shaft(grid: &dyn GridMut, tip: Cell, heading: Orientation) -> Result<Option<Shaft>, GridError> {
    let mut turtle = Turtle::new(grid, tip.0, tip.1, heading)?;
    if turtle.advance_while_matching(RunPattern::along(heading, Junction::Optional))?.is_none() {
        return Ok(None);
    }
    Ok(Some(Shaft { end: turtle.position(), heading, at_junction: turtle.current()? == JUNCTION }))
}

/// Draws every run leaving the junction at `at`, except the one the trace
/// arrived by, and follows runs that end in further junctions.
///
/// Segments already drawn by any connector of this conversion are skipped,
/// as are runs that form the shaft of another arrow: that arrow draws them.
fn trace_branches(
    grid: &dyn GridMut,
    at: Cell,
    heading: Orientation,
    renderer: &mut Renderer<'_>,
) -> Result<(), GridError> {
    let junction = Turtle::new(grid, at.0, at.1, heading)?;
    for orientation in heading.opposite().others() {
        let mut probe = junction.facing(orientation);
        if probe.advance_while_matching(RunPattern::along(orientation, Junction::Optional))?.is_none() {
            continue;
        }
        let at_junction = probe.current()? == JUNCTION;
        if !at_junction && feeds_tip(&probe)? {
            continue;
        }
        let far = probe.position();
        if !renderer.claim_segment(at, far) {
            continue;
        }
        renderer.line(at, far);
        if at_junction {
            trace_branches(grid, far, orientation, renderer)?;
        }
    }
    Ok(())
}

/// Whether the cell past the end of a run holds a tip pointing onward, making
/// the run that tip's shaft.
fn feeds_tip<G: Grid + ?Sized>(end: &Turtle<'_, G>) -> Result<bool, GridError> {
    let mut next = *end;
    if next.advance(1).is_err() {
        return Ok(false);
    }
    let tips = match end.orientation() {
        Orientation::North => TIPS_UP,
        Orientation::East => TIPS_RIGHT,
        Orientation::South => TIPS_DOWN,
        Orientation::West => TIPS_LEFT,
    };
    Ok(tips.contains(&next.current()?))
}

/// Cells strictly between two cells of the same row or column.
fn cells_between((x1, y1): Cell, (x2, y2): Cell) -> Vec<Cell> {
    if x1 == x2 {
        (y1.min(y2) + 1..y1.max(y2)).map(|y| (x1, y)).collect()
    } else if y1 == y2 {
        (x1.min(x2) + 1..x1.max(x2)).map(|x| (x, y1)).collect()
    } else {
        Vec::new()
    }
}

#[cfg(test)]
#[path = "connector_test.rs"]
mod tests;
