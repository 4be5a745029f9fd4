//! Conversion engine: runs the detector passes over a grid.

use tracing::{debug, trace};

use crate::config::RenderConfig;
use crate::detect::PASSES;
use crate::grid::{Grid, GridError, GridMut};
use crate::render::{Drawing, Renderer};
use crate::view::SubGridMut;

/// Converts `grid` into a drawing.
///
/// The input grid is left alone; recognition runs on a private copy.
///
/// # Errors
///
/// Returns [`GridError`] only if a detector addresses a cell outside the grid,
/// which valid input never causes.
pub fn convert(grid: &dyn Grid, config: &RenderConfig) -> Result<Drawing, GridError> {
    let mut work = grid.to_char_grid();
    let mut renderer = Renderer::new(config);
    scan(&mut work, &mut renderer)?;
    let drawing = renderer.finish(grid.width(), grid.height());
    debug!(
        width = grid.width(),
        height = grid.height(),
        primitives = drawing.primitives.len(),
        "converted grid"
    );
    Ok(drawing)
}

/// Runs every pass over `grid`, column by column, top to bottom.
///
/// At each cell the first detector of the current pass that matches claims
/// it. Claimed cells are blank afterwards, so no later detector sees them.
///
/// # Errors
///
/// Propagates the first [`GridError`] raised by a detector.
pub fn scan(grid: &mut dyn GridMut, renderer: &mut Renderer<'_>) -> Result<(), GridError> {
    for pass in &PASSES {
        for x in 0..grid.width() {
            for y in 0..grid.height() {
                for detect in pass.detectors {
                    if detect(grid, x, y, renderer)? {
                        trace!(pass = pass.name, x, y, "artifact claimed");
                        break;
                    }
                }
            }
        }
    }
    Ok(())
}

/// Converts the `width × height` window at `(x, y)` as a grid of its own,
/// with the renderer's offset shifted onto the window.
///
/// # Errors
///
/// Returns [`GridError::RegionOutOfBounds`] when the window does not fit, and
/// propagates errors from the nested scan.
pub fn convert_region(
    grid: &mut dyn GridMut,
    x: usize,
    y: usize,
    width: usize,
    height: usize,
    renderer: &mut Renderer<'_>,
) -> Result<(), GridError> {
    let mut region = SubGridMut::new(&mut *grid, x, y, width, height)?;
    renderer.nested(x, y, |r| scan(&mut region, r))
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod tests;
