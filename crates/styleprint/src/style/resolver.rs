//! Resolution of style requests into SGR codes.
//!
//! [`StyleResolver::resolve`] turns a loosely specified [`StyleOptions`]
//! into a [`ResolvedStyle`] in five steps:
//!
//! 1. **Aliases**: every option value naming an alias is replaced by the
//!    alias target. One hop only; targets are not substituted again.
//! 2. **Type**: a non-empty `type` seeds the short keys (`f`, `c`, `bc`)
//!    that are absent. Explicit values always win. An unregistered type is
//!    reported and contributes nothing.
//! 3. **Slots**: each slot takes its first non-empty keyword value, or the
//!    slot default.
//! 4. **Validation**: names missing from their table are replaced by the
//!    slot fallback (`roman`, `gray`, `none`) and reported.
//! 5. **Lookup**: names are mapped to their codes.
//!
//! Resolution is infallible; problems come back as [`StyleWarning`]s.

use crate::registry::{Registry, StyleRegistries, TypeSpec};

use super::options::{OptionKey, Slot, StyleOptions};
use super::warning::StyleWarning;

/// The SGR codes for one styled span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolvedStyle {
    pub font: u8,
    pub color: u8,
    pub background: u8,
}

impl ResolvedStyle {
    pub fn new(font: u8, color: u8, background: u8) -> Self {
        Self {
            font,
            color,
            background,
        }
    }
}

/// `font;color;background`, the parameter list of the SGR sequence.
impl std::fmt::Display for ResolvedStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{};{};{}", self.font, self.color, self.background)
    }
}

/// A resolution result together with the warnings raised producing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<T> {
    pub value: T,
    pub warnings: Vec<StyleWarning>,
}

impl<T> Resolved<T> {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolved<U> {
        Resolved {
            value: f(self.value),
            warnings: self.warnings,
        }
    }

    pub fn into_parts(self) -> (T, Vec<StyleWarning>) {
        (self.value, self.warnings)
    }
}

/// Resolves style requests against an owned set of registries.
///
/// Each resolver is independent; registering an alias on one does not
/// affect another.
///
/// # Concurrency
///
/// Registration takes `&mut self` and resolution `&self`. A resolver shared
/// between threads that register and resolve concurrently must be wrapped
/// in external synchronization such as `Arc<RwLock<StyleResolver>>`.
///
/// # Example
///
/// ```rust
/// use styleprint::{ResolvedStyle, StyleOptions, StyleResolver};
///
/// let mut resolver = StyleResolver::default();
/// resolver.register_alias("rouge", "red");
///
/// let resolved = resolver.resolve(&StyleOptions::new().style_type("alert").color("rouge"));
/// assert_eq!(resolved.value, ResolvedStyle::new(5, 91, 40));
/// assert!(resolved.warnings.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StyleResolver {
    registries: StyleRegistries,
}

impl StyleResolver {
    pub fn new(registries: StyleRegistries) -> Self {
        Self { registries }
    }

    pub fn registries(&self) -> &StyleRegistries {
        &self.registries
    }

    /// See [`StyleRegistries::register_alias`].
    pub fn register_alias(&mut self, name: impl Into<String>, target: impl Into<String>) {
        self.registries.register_alias(name, target);
    }

    /// See [`StyleRegistries::register_type`].
    pub fn register_type(&mut self, name: impl Into<String>, spec: TypeSpec) {
        self.registries.register_type(name, spec);
    }

    /// Resolves `options` into SGR codes.
    ///
    /// Unknown names never fail the call; each is replaced by a fallback
    /// and reported once in the returned warnings.
    pub fn resolve(&self, options: &StyleOptions) -> Resolved<ResolvedStyle> {
        let mut options = options.clone();
        let mut warnings = Vec::new();

        self.substitute_aliases(&mut options);
        self.expand_type(&mut options, &mut warnings);

        let [font, color, background] =
            Slot::ALL.map(|slot| self.lookup(slot, &options, &mut warnings));

        Resolved {
            value: ResolvedStyle::new(font, color, background),
            warnings,
        }
    }

    fn substitute_aliases(&self, options: &mut StyleOptions) {
        let aliases = self.registries.aliases();
        for value in options.values_mut() {
            if let Some(target) = aliases.get(value) {
                *value = target.clone();
            }
        }
    }

    fn expand_type(&self, options: &mut StyleOptions, warnings: &mut Vec<StyleWarning>) {
        let name = match options.get(OptionKey::Type) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => return,
        };

        let Some(spec) = self.registries.types().get(&name) else {
            warnings.push(StyleWarning::UnknownType { name });
            return;
        };

        for (slot, component) in [
            (Slot::Font, &spec.font),
            (Slot::Color, &spec.color),
            (Slot::Background, &spec.background),
        ] {
            let key = slot.short_key();
            if !options.contains(key) {
                options.insert(key, component.as_str());
            }
        }
    }

    fn lookup(
        &self,
        slot: Slot,
        options: &StyleOptions,
        warnings: &mut Vec<StyleWarning>,
    ) -> u8 {
        let table = self.table(slot);
        let name = options.slot_value(slot).unwrap_or(slot.default_name());

        if let Some(&code) = table.get(name) {
            return code;
        }

        warnings.push(StyleWarning::unknown_name(slot, name));
        // Fallback names are built-in and fixed tables never shrink.
        table.get(slot.fallback_name()).copied().unwrap_or_default()
    }

    fn table(&self, slot: Slot) -> &Registry<u8> {
        match slot {
            Slot::Font => self.registries.fonts(),
            Slot::Color => self.registries.colors(),
            Slot::Background => self.registries.backgrounds(),
        }
    }
}
