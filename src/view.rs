//! Zero-copy windows over a grid.
//!
//! [`SubGrid`] and [`SubGridMut`] are rectangular windows defined by an offset
//! and an extent; [`Section`] is a single row or column. None of them copy
//! cells. Writes through a [`SubGridMut`] land in the backing grid, and a
//! window over a window simply stacks the offsets.

use crate::grid::{Grid, GridError, GridMut, check_region};

// =============================================================================
// RECTANGULAR WINDOWS
// =============================================================================

/// A read-only rectangular window over another grid.
#[derive(Debug)]
pub struct SubGrid<'a, G: Grid + ?Sized> {
    parent: &'a G,
    x: usize,
    y: usize,
    width: usize,
    height: usize,
}

impl<'a, G: Grid + ?Sized> SubGrid<'a, G> {
    /// # Errors
    ///
    /// Returns [`GridError::RegionOutOfBounds`] when the window does not fit
    /// inside `parent`.
    pub fn new(parent: &'a G, x: usize, y: usize, width: usize, height: usize) -> Result<Self, GridError> {
        check_region(parent.width(), parent.height(), x, y, width, height)?;
        Ok(Self { parent, x, y, width, height })
    }

    /// Offset of this window's origin inside its parent.
    #[must_use]
    pub fn offset(&self) -> (usize, usize) {
        (self.x, self.y)
    }
}

impl<G: Grid + ?Sized> Clone for SubGrid<'_, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G: Grid + ?Sized> Copy for SubGrid<'_, G> {}

impl<G: Grid + ?Sized> Grid for SubGrid<'_, G> {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn get(&self, x: usize, y: usize) -> Option<char> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.parent.get(self.x + x, self.y + y)
    }
}

/// A mutable rectangular window over another grid.
///
/// Holds the exclusive borrow of its parent for as long as it lives, so the
/// backing grid cannot be touched (or dropped) behind its back.
#[derive(Debug)]
pub struct SubGridMut<'a, G: GridMut + ?Sized> {
    parent: &'a mut G,
    x: usize,
    y: usize,
    width: usize,
    height: usize,
}

impl<'a, G: GridMut + ?Sized> SubGridMut<'a, G> {
    /// # Errors
    ///
    /// Returns [`GridError::RegionOutOfBounds`] when the window does not fit
    /// inside `parent`.
    pub fn new(parent: &'a mut G, x: usize, y: usize, width: usize, height: usize) -> Result<Self, GridError> {
        check_region(parent.width(), parent.height(), x, y, width, height)?;
        Ok(Self { parent, x, y, width, height })
    }

    #[must_use]
    pub fn offset(&self) -> (usize, usize) {
        (self.x, self.y)
    }
}

impl<G: GridMut + ?Sized> Grid for SubGridMut<'_, G> {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn get(&self, x: usize, y: usize) -> Option<char> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.parent.get(self.x + x, self.y + y)
    }
}

impl<G: GridMut + ?Sized> GridMut for SubGridMut<'_, G> {
    fn set_char_at(&mut self, x: usize, y: usize, c: char) -> Result<(), GridError> {
        if x >= self.width || y >= self.height {
            return Err(GridError::OutOfBounds { x, y, width: self.width, height: self.height });
        }
        self.parent.set_char_at(self.x + x, self.y + y, c)
    }
}

// =============================================================================
// ROWS AND COLUMNS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Row(usize),
    Column(usize),
}

/// One row or one column of a grid, indexed from its start.
#[derive(Debug)]
pub struct Section<'a, G: Grid + ?Sized> {
    grid: &'a G,
    axis: Axis,
}

impl<'a, G: Grid + ?Sized> Section<'a, G> {
    /// Row `y` of `grid`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] when `y >= grid.height()`.
    pub fn row(grid: &'a G, y: usize) -> Result<Self, GridError> {
        if y >= grid.height() {
            return Err(GridError::OutOfBounds { x: 0, y, width: grid.width(), height: grid.height() });
        }
        Ok(Self { grid, axis: Axis::Row(y) })
    }

    /// Column `x` of `grid`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] when `x >= grid.width()`.
    pub fn column(grid: &'a G, x: usize) -> Result<Self, GridError> {
        if x >= grid.width() {
            return Err(GridError::OutOfBounds { x, y: 0, width: grid.width(), height: grid.height() });
        }
        Ok(Self { grid, axis: Axis::Column(x) })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self.axis {
            Axis::Row(_) => self.grid.width(),
            Axis::Column(_) => self.grid.height(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn get(&self, i: usize) -> Option<char> {
        match self.axis {
            Axis::Row(y) => self.grid.get(i, y),
            Axis::Column(x) => self.grid.get(x, i),
        }
    }

    /// Bounds-checked read of the `i`-th cell.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] with the grid coordinate of `i`.
    pub fn char_at(&self, i: usize) -> Result<char, GridError> {
        match self.axis {
            Axis::Row(y) => self.grid.char_at(i, y),
            Axis::Column(x) => self.grid.char_at(x, i),
        }
    }

    /// Cells `start..` in order.
    pub fn chars_from(&self, start: usize) -> impl Iterator<Item = char> + '_ {
        (start..self.len()).filter_map(move |i| self.get(i))
    }

    /// Cells `..end` read back to front, beginning with cell `end - 1`.
    pub fn chars_before(&self, end: usize) -> impl Iterator<Item = char> + '_ {
        (0..end.min(self.len())).rev().filter_map(move |i| self.get(i))
    }

    /// The cells `start..end` collected into a string.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] when `end` is past the section.
    pub fn slice(&self, start: usize, end: usize) -> Result<String, GridError> {
        (start..end).map(|i| self.char_at(i)).collect()
    }
}

impl<G: Grid + ?Sized> Clone for Section<'_, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G: Grid + ?Sized> Copy for Section<'_, G> {}

impl<G: Grid + ?Sized> std::fmt::Display for Section<'_, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use std::fmt::Write as _;
        for c in self.chars_from(0) {
            f.write_char(c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "view_test.rs"]
mod tests;
