//! Wrapping text in SGR escape sequences.

use crate::style::{Resolved, ResolvedStyle, StyleOptions, StyleResolver};

/// Escape sequence restoring the terminal's default rendition.
pub const RESET: &str = "\x1b[0m";

impl ResolvedStyle {
    /// Returns the SGR sequence selecting this style, e.g. `\x1b[1;93;40m`.
    pub fn sgr(&self) -> String {
        format!("\x1b[{}m", self)
    }

    /// Wraps `text` in this style followed by [`RESET`].
    ///
    /// ```rust
    /// use styleprint::ResolvedStyle;
    ///
    /// let styled = ResolvedStyle::new(5, 91, 40).apply("Hello world!");
    /// assert_eq!(styled, "\x1b[5;91;40mHello world!\x1b[0m");
    /// ```
    pub fn apply(&self, text: &str) -> String {
        format!("\x1b[{}m{}{}", self, text, RESET)
    }
}

impl StyleResolver {
    /// Resolves `options` and wraps `text` in the resulting style.
    ///
    /// Pure: nothing is written anywhere, warnings are returned.
    pub fn format(&self, text: &str, options: &StyleOptions) -> Resolved<String> {
        self.resolve(options).map(|style| style.apply(text))
    }
}
