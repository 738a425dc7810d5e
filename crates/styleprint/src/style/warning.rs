//! Recoverable problems reported during style resolution.

use super::options::Slot;

/// A name the resolver could not find, and what it did instead.
///
/// Resolution never fails. Each unknown name is replaced by a documented
/// fallback and reported once through one of these records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleWarning {
    /// The requested style type is not registered; no type defaults applied.
    UnknownType { name: String },
    UnknownFont { name: String, fallback: String },
    UnknownColor { name: String, fallback: String },
    UnknownBackground { name: String, fallback: String },
}

impl StyleWarning {
    pub(crate) fn unknown_name(slot: Slot, name: &str) -> Self {
        let (name, fallback) = (name.to_string(), slot.fallback_name().to_string());
        match slot {
            Slot::Font => StyleWarning::UnknownFont { name, fallback },
            Slot::Color => StyleWarning::UnknownColor { name, fallback },
            Slot::Background => StyleWarning::UnknownBackground { name, fallback },
        }
    }

    /// The slot this warning concerns, or `None` for unknown types.
    pub fn slot(&self) -> Option<Slot> {
        match self {
            StyleWarning::UnknownType { .. } => None,
            StyleWarning::UnknownFont { .. } => Some(Slot::Font),
            StyleWarning::UnknownColor { .. } => Some(Slot::Color),
            StyleWarning::UnknownBackground { .. } => Some(Slot::Background),
        }
    }

    /// The name that was not found.
    pub fn name(&self) -> &str {
        match self {
            StyleWarning::UnknownType { name }
            | StyleWarning::UnknownFont { name, .. }
            | StyleWarning::UnknownColor { name, .. }
            | StyleWarning::UnknownBackground { name, .. } => name,
        }
    }
}

impl std::fmt::Display for StyleWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleWarning::UnknownType { name } => write!(f, "unknown type '{}' ignored", name),
            StyleWarning::UnknownFont { name, fallback }
            | StyleWarning::UnknownColor { name, fallback }
            | StyleWarning::UnknownBackground { name, fallback } => {
                let label = self.slot().map_or("name", Slot::label);
                write!(f, "unknown {} '{}', defaulting to '{}'", label, name, fallback)
            }
        }
    }
}

impl std::error::Error for StyleWarning {}
