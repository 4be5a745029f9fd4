//! Artifact detectors.
//!
//! A detector looks at one cell of the working grid. If the neighbourhood
//! starting there is its shape, it records primitives on the renderer, erases
//! the characters it consumed and returns `true`; otherwise it returns `false`
//! and has touched nothing. Erasing is what marks a region as claimed: later
//! detectors only ever see blanks there.
//!
//! Detectors are grouped into [`PASSES`], run in order by
//! [`crate::engine::scan`]:
//!
//! | Pass | Detectors |
//! |------|-----------|
//! | connectors | [`connector::down_arrow`], [`connector::up_arrow`], [`connector::left_arrow`], [`connector::right_arrow`] |
//! | enclosures | [`enclosure::boxed_icon`], [`enclosure::table`] |
//! | text | [`text::text`] |
//!
//! Adding a shape means appending a function to one of the lists.

pub mod connector;
pub mod enclosure;
pub mod text;

use crate::grid::{GridError, GridMut};
use crate::render::Renderer;

/// Tries to recognize a shape whose anchor is the cell `(x, y)`.
pub type Detector = fn(&mut dyn GridMut, usize, usize, &mut Renderer<'_>) -> Result<bool, GridError>;

/// One full scan of the grid with a fixed detector priority.
#[derive(Debug, Clone, Copy)]
pub struct Pass {
    pub name: &'static str,
    pub detectors: &'static [Detector],
}

pub const PASSES: [Pass; 3] = [
    Pass {
        name: "connectors",
        detectors: &[connector::down_arrow, connector::up_arrow, connector::left_arrow, connector::right_arrow],
    },
    Pass { name: "enclosures", detectors: &[enclosure::boxed_icon, enclosure::table] },
    Pass { name: "text", detectors: &[text::text] },
];

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
