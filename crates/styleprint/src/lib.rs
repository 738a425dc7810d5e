//! # Styleprint - Keyword-Driven ANSI Text Styling
//!
//! Styleprint wraps text in ANSI SGR escape sequences chosen by name: a font
//! (`bold`, `underline`, ...), a foreground color, a background color, or a
//! named style type that bundles all three.
//!
//! ## Core Concepts
//!
//! - [`StyleRegistries`]: Name tables for fonts, colors, background colors,
//!   aliases and style types
//! - [`StyleOptions`]: One style request, with keyword synonyms per slot
//! - [`StyleResolver`]: Turns a request into a [`ResolvedStyle`], reporting
//!   unknown names as [`StyleWarning`]s instead of failing
//! - [`Printer`]: Joins, formats and writes styled text to a stream
//!
//! Output is always `ESC[{font};{color};{background}m{text}ESC[0m`. No
//! terminal detection is done; an ANSI-capable terminal is assumed.
//!
//! ## Quick Start
//!
//! ```rust
//! use styleprint::{StyleOptions, StyleResolver, TypeSpec};
//!
//! let mut resolver = StyleResolver::default();
//! resolver.register_alias("rouge", "red");
//! resolver.register_type("cool", TypeSpec::new("roman", "blue", "red"));
//!
//! let alert = resolver.format("Hello world!", &StyleOptions::new().style_type("alert"));
//! assert_eq!(alert.value, "\x1b[5;91;40mHello world!\x1b[0m");
//!
//! let moon = resolver.format(
//!     "Hello moon!",
//!     &StyleOptions::new().color("w").background("rouge").font("italic"),
//! );
//! assert_eq!(moon.value, "\x1b[3;97;41mHello moon!\x1b[0m");
//!
//! let odd = resolver.format("?", &StyleOptions::new().color("teal"));
//! assert_eq!(odd.warnings[0].to_string(), "unknown color 'teal', defaulting to 'gray'");
//! ```
//!
//! ## Registry Files
//!
//! Aliases and types can also be loaded from YAML, see [`RegistryConfig`].

mod format;
mod print;
pub mod registry;
pub mod style;

pub use format::RESET;
pub use print::{sformat, sprint, Printer, WarningPolicy};
pub use registry::{ConfigError, Registry, RegistryConfig, StyleRegistries, TypeEntry, TypeSpec};
pub use style::{
    OptionKey, Resolved, ResolvedStyle, Slot, StyleOptions, StyleResolver, StyleWarning,
};
