//! Glyphs and metrics shared across the crate.

// ── Glyphs ──────────────────────────────────────────────────────

/// Corner of a box or table, bend of a connector.
pub const JUNCTION: char = '+';

pub const HORIZONTAL_BORDER: char = '-';

pub const VERTICAL_BORDER: char = '|';

pub const BLANK: char = ' ';

/// Diagonal stroke of a boxed icon's folded corner.
pub const FOLD: char = '\\';

/// Arrow tips by the direction they point to.
pub const TIPS_DOWN: &[char] = &['˅', 'v'];
pub const TIPS_UP: &[char] = &['˄', '^'];
pub const TIPS_LEFT: &[char] = &['<'];
pub const TIPS_RIGHT: &[char] = &['>'];

/// Tips that never occur in prose and may sit at either end of their shaft.
pub const FREESTANDING_TIPS: &[char] = &['˅', '˄'];

// ── Metrics ─────────────────────────────────────────────────────

/// Cell size in pixels.
pub const DEFAULT_CELL_WIDTH: i64 = 6;
pub const DEFAULT_CELL_HEIGHT: i64 = 15;

/// Blank cells between the SVG origin and the grid.
pub const DEFAULT_MARGIN_X: i64 = 5;
pub const DEFAULT_MARGIN_Y: i64 = 1;

/// Extra pixels added to the root element beyond the last cell.
pub const PADDING_RIGHT_PX: i64 = 35;
pub const PADDING_BOTTOM_PX: i64 = 15;

pub const DEFAULT_FONT_FAMILY: &str = "Consolas";
pub const DEFAULT_FONT_SIZE_PX: u32 = 11;

/// Default delimiter of a diagram block inside an HTML document.
pub const DEFAULT_BLOCK_PATTERN: &str = r#"<pre class="asciiart"><code>\.?([^<]*)</code></pre>"#;
