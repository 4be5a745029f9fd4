//! Directional cursor for tracing border and connector runs.
//!
//! A [`Turtle`] sits on one cell of one grid and faces one of four
//! [`Orientation`]s. Besides plain stepping it can try to swallow a
//! [`RunPattern`] lying ahead of it: for East and South the cells after the
//! cursor are read forward, for North and West the cells before the cursor
//! are read back to front. One matcher therefore serves all four directions.

use crate::consts::{HORIZONTAL_BORDER, JUNCTION, VERTICAL_BORDER};
use crate::grid::{Grid, GridError};
use crate::view::Section;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    North,
    East,
    South,
    West,
}

impl Orientation {
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// The three orientations other than `self`, in declaration order.
    pub fn others(self) -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().filter(move |o| *o != self)
    }

    /// East and West.
    #[must_use]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::East | Self::West)
    }
}

/// Whether a run must end in a junction or merely may.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Junction {
    Required,
    Optional,
}

/// One or more `border` characters followed by a [`JUNCTION`] glyph.
///
/// `-` runs are `RunPattern::horizontal(..)`, `|` runs `RunPattern::vertical(..)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunPattern {
    pub border: char,
    pub junction: Junction,
}

impl RunPattern {
    #[must_use]
    pub fn horizontal(junction: Junction) -> Self {
        Self { border: HORIZONTAL_BORDER, junction }
    }

    #[must_use]
    pub fn vertical(junction: Junction) -> Self {
        Self { border: VERTICAL_BORDER, junction }
    }

    /// The run along `orientation`'s axis.
    #[must_use]
    pub fn along(orientation: Orientation, junction: Junction) -> Self {
        if orientation.is_horizontal() { Self::horizontal(junction) } else { Self::vertical(junction) }
    }

    /// Length of the longest match anchored at the first character of `chars`.
    pub fn match_len(self, chars: impl IntoIterator<Item = char>) -> Option<usize> {
        let mut chars = chars.into_iter().peekable();
        let mut len = 0;
        while chars.next_if_eq(&self.border).is_some() {
            len += 1;
        }
        if len == 0 {
            return None;
        }
        if chars.next_if_eq(&JUNCTION).is_some() {
            return Some(len + 1);
        }
        match self.junction {
            Junction::Required => None,
            Junction::Optional => Some(len),
        }
    }
}

/// A position and heading on one grid.
#[derive(Debug)]
pub struct Turtle<'a, G: Grid + ?Sized> {
    grid: &'a G,
    x: usize,
    y: usize,
    orientation: Orientation,
}

impl<G: Grid + ?Sized> Clone for Turtle<'_, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G: Grid + ?Sized> Copy for Turtle<'_, G> {}

impl<'a, G: Grid + ?Sized> Turtle<'a, G> {
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] when `(x, y)` is not a cell of `grid`.
    pub fn new(grid: &'a G, x: usize, y: usize, orientation: Orientation) -> Result<Self, GridError> {
        grid.char_at(x, y)?;
        Ok(Self { grid, x, y, orientation })
    }

    #[must_use]
    pub fn x(&self) -> usize {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> usize {
        self.y
    }

    #[must_use]
    pub fn position(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    /// A copy of this turtle facing `orientation`.
    #[must_use]
    pub fn facing(&self, orientation: Orientation) -> Self {
        Self { orientation, ..*self }
    }

    /// The character under the turtle.
    ///
    /// # Errors
    ///
    /// Propagates the grid's bounds check; cannot fail for a turtle built by
    /// [`Turtle::new`] on an unchanged grid.
    pub fn current(&self) -> Result<char, GridError> {
        self.grid.char_at(self.x, self.y)
    }

    /// Moves `n` cells ahead.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] and leaves the turtle in place when
    /// the target cell is outside the grid.
    pub fn advance(&mut self, n: usize) -> Result<(), GridError> {
        let (width, height) = (self.grid.width(), self.grid.height());
        let target = match self.orientation {
            Orientation::North => self.y.checked_sub(n).map(|y| (self.x, y)),
            Orientation::East => self.x.checked_add(n).map(|x| (x, self.y)),
            Orientation::South => self.y.checked_add(n).map(|y| (self.x, y)),
            Orientation::West => self.x.checked_sub(n).map(|x| (x, self.y)),
        };
        match target {
            Some((x, y)) if x < width && y < height => {
                self.x = x;
                self.y = y;
                Ok(())
            }
            _ => Err(GridError::OutOfBounds { x: self.x, y: self.y, width, height }),
        }
    }

    /// Tries to match `pattern` on the cells ahead and, on success, moves onto
    /// the last matched cell.
    ///
    /// Returns the match length, or `None` with the turtle unmoved.
    ///
    /// # Errors
    ///
    /// Fails only when the turtle no longer addresses a row/column of its
    /// grid.
    pub fn advance_while_matching(&mut self, pattern: RunPattern) -> Result<Option<usize>, GridError> {
        let matched = match self.orientation {
            Orientation::North => pattern.match_len(Section::column(self.grid, self.x)?.chars_before(self.y)),
            Orientation::East => pattern.match_len(Section::row(self.grid, self.y)?.chars_from(self.x + 1)),
            Orientation::South => pattern.match_len(Section::column(self.grid, self.x)?.chars_from(self.y + 1)),
            Orientation::West => pattern.match_len(Section::row(self.grid, self.y)?.chars_before(self.x)),
        };
        if let Some(len) = matched {
            self.advance(len)?;
        }
        Ok(matched)
    }
}

impl<G: Grid + ?Sized> std::fmt::Display for Turtle<'_, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x={}, y={}, orientation={:?}", self.x, self.y, self.orientation)
    }
}

#[cfg(test)]
#[path = "turtle_test.rs"]
mod tests;
