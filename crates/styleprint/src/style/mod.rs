//! Style requests and their resolution.
//!
//! - [`StyleOptions`]: A keyword-value style request
//! - [`StyleResolver`]: Turns requests into [`ResolvedStyle`] codes
//! - [`StyleWarning`]: Unknown names reported during resolution

mod options;
mod resolver;
mod warning;

pub use options::{OptionKey, Slot, StyleOptions};
pub use resolver::{Resolved, ResolvedStyle, StyleResolver};
pub use warning::StyleWarning;
