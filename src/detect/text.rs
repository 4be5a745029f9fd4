//! Runs of literal characters.

use crate::consts::{BLANK, HORIZONTAL_BORDER, JUNCTION, VERTICAL_BORDER};
use crate::grid::{GridError, GridMut};
use crate::render::Renderer;
use crate::view::Section;

/// A text run starting at `(x, y)`.
///
/// The run extends right until a `+` or `|`, or until a space that is either
/// in the last column or followed by another space or a `+`. Single spaces
/// between words stay inside the run; trailing ones are not part of it.
///
/// # Errors
///
/// Propagates [`GridError`] from grid access.
pub fn text(grid: &mut dyn GridMut, x: usize, y: usize, renderer: &mut Renderer<'_>) -> Result<bool, GridError> {
    if matches!(grid.char_at(x, y)?, BLANK | JUNCTION | HORIZONTAL_BORDER | VERTICAL_BORDER) {
        return Ok(false);
    }

    let width = grid.width();
    let mut end = x;
    for i in x..width {
        match grid.char_at(i, y)? {
            JUNCTION | VERTICAL_BORDER => break,
            BLANK => {
                if i + 1 == width || matches!(grid.char_at(i + 1, y)?, BLANK | JUNCTION) {
                    break;
                }
            }
            _ => end = i + 1,
        }
    }

    let run = Section::row(&*grid, y)?.slice(x, end)?;
    renderer.text((x, y), &run);
    grid.fill(x, y, end - x, 1, BLANK)?;
    Ok(true)
}

#[cfg(test)]
#[path = "text_test.rs"]
mod tests;
