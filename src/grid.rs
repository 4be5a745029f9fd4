//! Rectangular character grids.
//!
//! A [`Grid`] is the read-only view of a diagram: `width × height` cells,
//! origin top-left, y growing downward. [`GridMut`] adds single-cell writes
//! and rectangular fill. Two concrete grids live here:
//!
//! - [`TextGrid`] keeps the input lines as they are; cells past the end of a
//!   short line read as space.
//! - [`CharGrid`] is a dense, owned, mutable buffer. Conversion always works on
//!   a private `CharGrid` copy because detectors erase what they claim.
//!
//! Windows over a grid (sub-regions, rows, columns) are in [`crate::view`].

use crate::view::{Section, SubGrid};

/// Errors produced by bounds-checked grid access.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// A cell coordinate fell outside `[0, width) × [0, height)`.
    #[error("cell ({x}, {y}) out of bounds for {width}x{height} grid")]
    OutOfBounds { x: usize, y: usize, width: usize, height: usize },

    /// A requested window does not fit inside its parent grid.
    #[error(
        "region at ({x}, {y}) sized {width}x{height} out of bounds for {outer_width}x{outer_height} grid"
    )]
    RegionOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        outer_width: usize,
        outer_height: usize,
    },
}

/// Read access to a rectangular character grid.
pub trait Grid {
    fn width(&self) -> usize;

    fn height(&self) -> usize;

    /// The cell at `(x, y)`, or `None` when the coordinate is out of bounds.
    fn get(&self, x: usize, y: usize) -> Option<char>;

    /// Bounds-checked read.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] when `(x, y)` is outside the grid.
    fn char_at(&self, x: usize, y: usize) -> Result<char, GridError> {
        self.get(x, y).ok_or(GridError::OutOfBounds { x, y, width: self.width(), height: self.height() })
    }

    /// Whether `(x, y)` addresses a cell of this grid.
    fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width() && y < self.height()
    }

    /// A window of `width × height` cells whose top-left corner is `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::RegionOutOfBounds`] when the window does not fit.
    fn sub_region(&self, x: usize, y: usize, width: usize, height: usize) -> Result<SubGrid<'_, Self>, GridError>
    where
        Self: Sized,
    {
        SubGrid::new(self, x, y, width, height)
    }

    /// Row `y` as a one-dimensional view.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] when `y >= height`.
    fn row(&self, y: usize) -> Result<Section<'_, Self>, GridError>
    where
        Self: Sized,
    {
        Section::row(self, y)
    }

    /// Column `x` as a one-dimensional view.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] when `x >= width`.
    fn column(&self, x: usize) -> Result<Section<'_, Self>, GridError>
    where
        Self: Sized,
    {
        Section::column(self, x)
    }

    /// An independent, mutable snapshot of every cell.
    fn to_char_grid(&self) -> CharGrid {
        let width = self.width();
        let height = self.height();
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(self.get(x, y).unwrap_or(' '));
            }
        }
        CharGrid { width, height, cells }
    }

    /// The grid's text, every row terminated by `'\n'`.
    fn to_text(&self) -> String {
        let mut out = String::with_capacity((self.width() + 1) * self.height());
        for y in 0..self.height() {
            for x in 0..self.width() {
                out.push(self.get(x, y).unwrap_or(' '));
            }
            out.push('\n');
        }
        out
    }
}

/// Write access on top of [`Grid`].
pub trait GridMut: Grid {
    /// Bounds-checked single-cell write.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] when `(x, y)` is outside the grid.
    fn set_char_at(&mut self, x: usize, y: usize, c: char) -> Result<(), GridError>;

    /// Sets every cell of the `width × height` rectangle at `(x, y)` to `c`.
    ///
    /// The rectangle is validated up front; nothing is written when it does
    /// not fit.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::RegionOutOfBounds`] when the rectangle does not fit.
    fn fill(&mut self, x: usize, y: usize, width: usize, height: usize, c: char) -> Result<(), GridError> {
        check_region(self.width(), self.height(), x, y, width, height)?;
        for yy in y..y + height {
            for xx in x..x + width {
                self.set_char_at(xx, yy, c)?;
            }
        }
        Ok(())
    }
}

/// Cell-by-cell equivalence of two grids of any kind.
#[must_use]
pub fn same_cells(a: &dyn Grid, b: &dyn Grid) -> bool {
    if a.width() != b.width() || a.height() != b.height() {
        return false;
    }
    (0..a.height()).all(|y| (0..a.width()).all(|x| a.get(x, y) == b.get(x, y)))
}

pub(crate) fn check_region(
    outer_width: usize,
    outer_height: usize,
    x: usize,
    y: usize,
    width: usize,
    height: usize,
) -> Result<(), GridError> {
    let fits_x = x.checked_add(width).is_some_and(|end| end <= outer_width);
    let fits_y = y.checked_add(height).is_some_and(|end| end <= outer_height);
    if fits_x && fits_y {
        Ok(())
    } else {
        Err(GridError::RegionOutOfBounds { x, y, width, height, outer_width, outer_height })
    }
}

// =============================================================================
// TEXT GRID
// =============================================================================

/// An immutable grid over line-oriented text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextGrid {
    lines: Vec<Vec<char>>,
    width: usize,
}

impl TextGrid {
    /// Builds a grid from lines: height is the line count, width the longest
    /// line in `char`s.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines: Vec<Vec<char>> = lines.into_iter().map(|l| l.as_ref().chars().collect()).collect();
        let width = lines.iter().map(Vec::len).max().unwrap_or(0);
        Self { lines, width }
    }

    /// Builds a grid from a text block; `\n` and `\r\n` both end a line.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(text.lines())
    }
}

impl Grid for TextGrid {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.lines.len()
    }

    fn get(&self, x: usize, y: usize) -> Option<char> {
        if x >= self.width {
            return None;
        }
        let line = self.lines.get(y)?;
        Some(line.get(x).copied().unwrap_or(' '))
    }
}

// =============================================================================
// CHAR GRID
// =============================================================================

/// A dense, owned, mutable grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharGrid {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl CharGrid {
    /// A `width × height` grid filled with `c`.
    #[must_use]
    pub fn filled(width: usize, height: usize, c: char) -> Self {
        Self { width, height, cells: vec![c; width * height] }
    }

    /// Shorthand for `TextGrid::from_text(text).to_char_grid()`.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        TextGrid::from_text(text).to_char_grid()
    }

    /// Whether every cell is a space.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|&c| c == ' ')
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }
}

impl Grid for CharGrid {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn get(&self, x: usize, y: usize) -> Option<char> {
        self.index(x, y).map(|i| self.cells[i])
    }
}

impl GridMut for CharGrid {
    fn set_char_at(&mut self, x: usize, y: usize, c: char) -> Result<(), GridError> {
        let (width, height) = (self.width, self.height);
        let i = self.index(x, y).ok_or(GridError::OutOfBounds { x, y, width, height })?;
        self.cells[i] = c;
        Ok(())
    }
}

impl std::fmt::Display for CharGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_text())
    }
}

#[cfg(test)]
#[path = "grid_test.rs"]
mod tests;
