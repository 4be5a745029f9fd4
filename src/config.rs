//! Render and filter settings, with defaults and environment overrides.

use crate::consts::{
    DEFAULT_BLOCK_PATTERN, DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH, DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE_PX,
    DEFAULT_MARGIN_X, DEFAULT_MARGIN_Y,
};

pub const ENV_CELL_WIDTH: &str = "ASCIIART_CELL_WIDTH";
pub const ENV_CELL_HEIGHT: &str = "ASCIIART_CELL_HEIGHT";
pub const ENV_FONT_FAMILY: &str = "ASCIIART_FONT_FAMILY";
pub const ENV_FONT_SIZE: &str = "ASCIIART_FONT_SIZE";
pub const ENV_PATTERN: &str = "ASCIIART_PATTERN";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable holds something that does not parse.
    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: String, value: String },

    /// Cell metrics must be at least one pixel.
    #[error("{var} must be positive, got {value}")]
    NotPositive { var: String, value: i64 },
}

/// Pixel metrics and typography of the generated SVG.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub cell_width: i64,
    pub cell_height: i64,
    /// Columns of empty space left of the grid.
    pub margin_x: i64,
    /// Rows of empty space above the grid.
    pub margin_y: i64,
    pub font_family: String,
    pub font_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            cell_width: DEFAULT_CELL_WIDTH,
            cell_height: DEFAULT_CELL_HEIGHT,
            margin_x: DEFAULT_MARGIN_X,
            margin_y: DEFAULT_MARGIN_Y,
            font_family: DEFAULT_FONT_FAMILY.to_owned(),
            font_size: DEFAULT_FONT_SIZE_PX,
        }
    }
}

impl RenderConfig {
    /// Build render config from environment variables.
    ///
    /// Optional:
    /// - `ASCIIART_CELL_WIDTH`: default 6
    /// - `ASCIIART_CELL_HEIGHT`: default 15
    /// - `ASCIIART_FONT_FAMILY`: default `Consolas`
    /// - `ASCIIART_FONT_SIZE`: default 11
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set but unusable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            cell_width: env_parse(ENV_CELL_WIDTH, defaults.cell_width)?,
            cell_height: env_parse(ENV_CELL_HEIGHT, defaults.cell_height)?,
            font_family: std::env::var(ENV_FONT_FAMILY).unwrap_or(defaults.font_family),
            font_size: env_parse(ENV_FONT_SIZE, defaults.font_size)?,
            ..defaults
        };
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::NotPositive`] for a zero or negative cell size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (var, value) in [(ENV_CELL_WIDTH, self.cell_width), (ENV_CELL_HEIGHT, self.cell_height)] {
            if value <= 0 {
                return Err(ConfigError::NotPositive { var: var.to_owned(), value });
            }
        }
        Ok(())
    }
}

/// Settings of the block locator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    /// Regular expression matching one diagram block; group 1 is the diagram.
    pub pattern: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self { pattern: DEFAULT_BLOCK_PATTERN.to_owned() }
    }
}

impl FilterConfig {
    /// Build filter config from environment variables.
    ///
    /// Optional:
    /// - `ASCIIART_PATTERN`: default matches `<pre class="asciiart"><code>…</code></pre>`
    #[must_use]
    pub fn from_env() -> Self {
        Self { pattern: std::env::var(ENV_PATTERN).unwrap_or_else(|_| DEFAULT_BLOCK_PATTERN.to_owned()) }
    }
}

fn env_parse<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidValue { var: key.to_owned(), value: raw }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
