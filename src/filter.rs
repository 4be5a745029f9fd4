//! Diagram blocks inside larger documents.
//!
//! A [`BlockFilter`] finds every match of its delimiter pattern, takes
//! capture group 1 as HTML-escaped diagram text, converts it and splices the
//! SVG in place of the whole match. Everything outside the matches is copied
//! as is.

use regex::Regex;
use tracing::debug;

use crate::config::{FilterConfig, RenderConfig};
use crate::grid::GridError;

#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    #[error("invalid block pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("block pattern {0:?} has no capture group for the diagram text")]
    MissingCaptureGroup(String),

    #[error("diagram conversion failed: {0}")]
    Convert(#[from] GridError),
}

#[derive(Debug, Clone)]
pub struct BlockFilter {
    pattern: Regex,
}

impl BlockFilter {
    /// # Errors
    ///
    /// Returns [`FilterError::Pattern`] when the pattern does not compile and
    /// [`FilterError::MissingCaptureGroup`] when it has no group 1.
    pub fn new(config: &FilterConfig) -> Result<Self, FilterError> {
        let pattern = Regex::new(&config.pattern)?;
        if pattern.captures_len() < 2 {
            return Err(FilterError::MissingCaptureGroup(config.pattern.clone()));
        }
        Ok(Self { pattern })
    }

    /// Replaces every diagram block in `document` by its SVG rendering.
    ///
    /// Returns the new document and the number of blocks replaced.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::Convert`] when a block fails to convert.
    pub fn filter(&self, document: &str, config: &RenderConfig) -> Result<(String, usize), FilterError> {
        let mut out = String::with_capacity(document.len());
        let mut last = 0;
        let mut blocks = 0;
        for captures in self.pattern.captures_iter(document) {
            let (Some(whole), Some(body)) = (captures.get(0), captures.get(1)) else {
                continue;
            };
            let diagram = unescape(body.as_str());
            let svg = crate::text_to_svg(&diagram, config)?;
            debug!(offset = whole.start(), len = whole.len(), "converted diagram block");

            out.push_str(&document[last..whole.start()]);
            out.push_str(&svg);
            last = whole.end();
            blocks += 1;
        }
        out.push_str(&document[last..]);
        Ok((out, blocks))
    }
}

/// Reverses the entity escapes of HTML text content. `&amp;` goes last so
/// `&amp;lt;` decodes to the literal `&lt;`.
#[must_use]
pub fn unescape(text: &str) -> String {
    text.replace("&lt;", "<").replace("&gt;", ">").replace("&quot;", "\"").replace("&amp;", "&")
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
