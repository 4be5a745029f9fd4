//! ASCII-art diagrams to SVG.
//!
//! Recognizes boxes, tables, folded-corner document icons, arrows with their
//! connector trees, and text in a plain-text block, and renders them as one
//! self-contained SVG fragment. Recognition works on a private copy of the
//! input grid: each detector erases what it claims, so every character ends up
//! in at most one shape.
//!
//! ```text
//! +-------+
//! | hello |
//! +-------+
//! ```
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`grid`] | Grid traits and the text-backed and owned grids |
//! | [`view`] | Sub-region, row and column windows over a grid |
//! | [`turtle`] | Directional cursor and border-run matching |
//! | [`detect`] | Shape detectors, grouped in priority passes |
//! | [`engine`] | Pass scanning and nested sub-region conversion |
//! | [`render`] | Grid-to-pixel renderer and the [`render::Drawing`] it produces |
//! | [`svg`] | SVG serialization |
//! | [`filter`] | Diagram blocks inside HTML documents |
//! | [`config`] | Render and filter settings |
//! | [`consts`] | Glyphs and default metrics |

pub mod config;
pub mod consts;
pub mod detect;
pub mod engine;
pub mod filter;
pub mod grid;
pub mod render;
pub mod svg;
pub mod turtle;
pub mod view;

pub use config::{ConfigError, FilterConfig, RenderConfig};
pub use engine::convert;
pub use filter::{BlockFilter, FilterError};
pub use grid::{CharGrid, Grid, GridError, GridMut, TextGrid};
pub use render::{Drawing, Point, Primitive};

/// Converts a text block to an SVG fragment.
///
/// # Errors
///
/// Propagates [`GridError`] from [`convert`].
pub fn text_to_svg(text: &str, config: &RenderConfig) -> Result<String, GridError> {
    let drawing = convert(&TextGrid::from_text(text), config)?;
    Ok(svg::to_svg(&drawing, config))
}

/// Converts a text block to its [`Drawing`].
///
/// # Errors
///
/// Propagates [`GridError`] from [`convert`].
pub fn text_to_drawing(text: &str, config: &RenderConfig) -> Result<Drawing, GridError> {
    convert(&TextGrid::from_text(text), config)
}
