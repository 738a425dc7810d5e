//! Name tables backing style resolution.
//!
//! This module provides:
//!
//! - [`Registry`]: A name → value map that only ever grows
//! - [`TypeSpec`]: The (font, color, background) names a style type seeds
//! - [`StyleRegistries`]: The five tables a resolver consults
//! - [`RegistryConfig`]: Aliases and types loaded from a YAML document
//!
//! Fonts, colors and background colors are fixed once the registries are
//! built. Aliases and types can be added at any time before resolution.

mod builtin;
mod config;

use std::collections::HashMap;

pub use config::{ConfigError, RegistryConfig, TypeEntry};

/// A mapping from canonical name to value.
///
/// Inserting an existing name overwrites its value. There is no removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry<V> {
    entries: HashMap<String, V>,
}

impl<V> Registry<V> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Returns the value registered under `name`.
    pub fn get(&self, name: &str) -> Option<&V> {
        self.entries.get(name)
    }

    /// Returns `true` if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Inserts or overwrites an entry.
    pub fn insert(&mut self, name: impl Into<String>, value: V) {
        self.entries.insert(name.into(), value);
    }

    /// Returns all registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for Registry<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Into<String>, V> FromIterator<(N, V)> for Registry<V> {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// The font, color and background names a style type fills in.
///
/// Component names are not checked when the type is registered; unknown
/// names surface as warnings when the type is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSpec {
    pub font: String,
    pub color: String,
    pub background: String,
}

impl TypeSpec {
    pub fn new(
        font: impl Into<String>,
        color: impl Into<String>,
        background: impl Into<String>,
    ) -> Self {
        Self {
            font: font.into(),
            color: color.into(),
            background: background.into(),
        }
    }
}

/// The complete set of tables consulted by a [`StyleResolver`](crate::StyleResolver).
///
/// Construct with [`StyleRegistries::builtin`] (also the `Default`) and extend
/// with aliases and types:
///
/// ```rust
/// use styleprint::{StyleRegistries, TypeSpec};
///
/// let registries = StyleRegistries::builtin()
///     .with_alias("rouge", "red")
///     .with_type("cool", TypeSpec::new("roman", "blue", "red"));
///
/// assert_eq!(registries.aliases().get("rouge").map(String::as_str), Some("red"));
/// assert!(registries.types().contains("cool"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRegistries {
    fonts: Registry<u8>,
    colors: Registry<u8>,
    backgrounds: Registry<u8>,
    aliases: Registry<String>,
    types: Registry<TypeSpec>,
}

impl StyleRegistries {
    /// Creates registries holding the built-in fonts, colors, background
    /// colors, single-letter aliases and style types.
    pub fn builtin() -> Self {
        Self {
            fonts: builtin::FONTS.iter().copied().collect(),
            colors: builtin::COLORS.iter().copied().collect(),
            backgrounds: builtin::BACKGROUND_COLORS.iter().copied().collect(),
            aliases: builtin::ALIASES
                .iter()
                .map(|&(n, target)| (n, target.to_string()))
                .collect(),
            types: builtin::TYPES
                .iter()
                .map(|&(n, (f, c, b))| (n, TypeSpec::new(f, c, b)))
                .collect(),
        }
    }

    pub fn fonts(&self) -> &Registry<u8> {
        &self.fonts
    }

    pub fn colors(&self) -> &Registry<u8> {
        &self.colors
    }

    pub fn backgrounds(&self) -> &Registry<u8> {
        &self.backgrounds
    }

    pub fn aliases(&self) -> &Registry<String> {
        &self.aliases
    }

    pub fn types(&self) -> &Registry<TypeSpec> {
        &self.types
    }

    /// Registers `name` as an alias for `target`.
    ///
    /// Aliases share one namespace across fonts, colors, backgrounds and
    /// types. `target` is not checked here.
    pub fn register_alias(&mut self, name: impl Into<String>, target: impl Into<String>) {
        let (name, target) = (name.into(), target.into());
        tracing::debug!(%name, %target, "registering alias");
        self.aliases.insert(name, target);
    }

    /// Registers a style type, overwriting any type of the same name.
    pub fn register_type(&mut self, name: impl Into<String>, spec: TypeSpec) {
        let name = name.into();
        tracing::debug!(
            %name,
            font = %spec.font,
            color = %spec.color,
            background = %spec.background,
            "registering type"
        );
        self.types.insert(name, spec);
    }

    /// Adds an alias, returning the updated registries for chaining.
    pub fn with_alias(mut self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.register_alias(name, target);
        self
    }

    /// Adds a style type, returning the updated registries for chaining.
    pub fn with_type(mut self, name: impl Into<String>, spec: TypeSpec) -> Self {
        self.register_type(name, spec);
        self
    }

    /// Registers every alias and type found in `config`.
    pub fn apply_config(&mut self, config: &RegistryConfig) {
        for (name, target) in &config.aliases {
            self.register_alias(name.as_str(), target.as_str());
        }
        for (name, entry) in &config.types {
            self.register_type(name.as_str(), entry.to_spec());
        }
    }
}

impl Default for StyleRegistries {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_insert_overwrites() {
        let mut reg: Registry<u8> = Registry::new();
        reg.insert("a", 1);
        reg.insert("a", 2);
        assert_eq!(reg.get("a"), Some(&2));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn test_registry_names_sorted() {
        let reg: Registry<u8> = [("b", 2), ("c", 3), ("a", 1)].into_iter().collect();
        assert_eq!(reg.names(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_registry_default_is_empty() {
        let reg: Registry<String> = Registry::default();
        assert!(reg.is_empty());
        assert!(!reg.contains("anything"));
    }

    #[test]
    fn test_builtin_tables_sizes() {
        let regs = StyleRegistries::builtin();
        assert_eq!(regs.fonts().len(), 8);
        assert_eq!(regs.colors().len(), 21);
        assert_eq!(regs.backgrounds().len(), 9);
        assert_eq!(regs.aliases().len(), 8);
        assert_eq!(regs.types().len(), 6);
    }

    #[test]
    fn test_builtin_codes() {
        let regs = StyleRegistries::builtin();
        assert_eq!(regs.fonts().get("strikethrough"), Some(&9));
        assert_eq!(regs.fonts().get("default"), Some(&0));
        assert_eq!(regs.colors().get("darkgray"), Some(&90));
        assert_eq!(regs.colors().get("default"), Some(&38));
        assert_eq!(regs.backgrounds().get("none"), Some(&40));
        assert_eq!(regs.backgrounds().get("white"), Some(&47));
    }

    #[test]
    fn test_builtin_type_synonyms_share_triples() {
        let regs = StyleRegistries::builtin();
        assert_eq!(regs.types().get("error"), regs.types().get("fail"));
        assert_eq!(regs.types().get("success"), regs.types().get("okay"));
    }

    #[test]
    fn test_register_alias_does_not_validate_target() {
        let mut regs = StyleRegistries::builtin();
        regs.register_alias("mystery", "no-such-name");
        assert_eq!(
            regs.aliases().get("mystery").map(String::as_str),
            Some("no-such-name")
        );
    }

    #[test]
    fn test_register_type_overwrites_builtin() {
        let regs = StyleRegistries::builtin()
            .with_type("warning", TypeSpec::new("underline", "cyan", "black"));
        assert_eq!(
            regs.types().get("warning"),
            Some(&TypeSpec::new("underline", "cyan", "black"))
        );
    }

    #[test]
    fn test_registration_never_shrinks_builtins() {
        let before = StyleRegistries::builtin();
        let after = before
            .clone()
            .with_alias("rouge", "red")
            .with_type("cool", TypeSpec::new("roman", "blue", "red"));
        assert_eq!(after.fonts(), before.fonts());
        assert_eq!(after.colors(), before.colors());
        assert_eq!(after.backgrounds(), before.backgrounds());
        assert_eq!(after.aliases().len(), before.aliases().len() + 1);
        assert_eq!(after.types().len(), before.types().len() + 1);
    }
}
