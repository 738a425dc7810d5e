//! Style request options and their keyword synonyms.
//!
//! A request names up to three slots (font, color, background) plus an
//! optional style type. Every slot accepts several keywords; when more than
//! one is given, the first non-empty value in the slot's priority list wins.
//!
//! | Slot | Keywords, in priority order | Default |
//! |------------|--------------------------------------------------|-----------|
//! | Font | `font`, `f` | `default` |
//! | Color | `color`, `c` | `default` |
//! | Background | `backgroundcolor`, `bgcolor`, `bgc`, `bcolor`, `bc` | `none` |

/// A recognized option keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKey {
    Font,
    F,
    Color,
    C,
    BackgroundColor,
    BgColor,
    Bgc,
    BColor,
    Bc,
    Type,
}

impl OptionKey {
    /// Every key, in declaration order.
    pub const ALL: [OptionKey; 10] = [
        OptionKey::Font,
        OptionKey::F,
        OptionKey::Color,
        OptionKey::C,
        OptionKey::BackgroundColor,
        OptionKey::BgColor,
        OptionKey::Bgc,
        OptionKey::BColor,
        OptionKey::Bc,
        OptionKey::Type,
    ];

    /// Looks up a keyword, ignoring ASCII case.
    ///
    /// Returns `None` for keywords that are not part of the option surface.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(keyword))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OptionKey::Font => "font",
            OptionKey::F => "f",
            OptionKey::Color => "color",
            OptionKey::C => "c",
            OptionKey::BackgroundColor => "backgroundcolor",
            OptionKey::BgColor => "bgcolor",
            OptionKey::Bgc => "bgc",
            OptionKey::BColor => "bcolor",
            OptionKey::Bc => "bc",
            OptionKey::Type => "type",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for OptionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the three positions in an SGR style triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Font,
    Color,
    Background,
}

impl Slot {
    pub const ALL: [Slot; 3] = [Slot::Font, Slot::Color, Slot::Background];

    /// Keywords feeding this slot, highest priority first.
    pub fn keys(self) -> &'static [OptionKey] {
        match self {
            Slot::Font => &[OptionKey::Font, OptionKey::F],
            Slot::Color => &[OptionKey::Color, OptionKey::C],
            Slot::Background => &[
                OptionKey::BackgroundColor,
                OptionKey::BgColor,
                OptionKey::Bgc,
                OptionKey::BColor,
                OptionKey::Bc,
            ],
        }
    }

    /// The keyword a style type fills when it is absent.
    pub fn short_key(self) -> OptionKey {
        match self {
            Slot::Font => OptionKey::F,
            Slot::Color => OptionKey::C,
            Slot::Background => OptionKey::Bc,
        }
    }

    /// Name used when no keyword for this slot has a value.
    pub fn default_name(self) -> &'static str {
        match self {
            Slot::Font | Slot::Color => "default",
            Slot::Background => "none",
        }
    }

    /// Name substituted when the requested name is not registered.
    ///
    /// Note the color fallback is `gray`, not `default`.
    pub fn fallback_name(self) -> &'static str {
        match self {
            Slot::Font => "roman",
            Slot::Color => "gray",
            Slot::Background => "none",
        }
    }

    /// Human-readable slot name used in warnings.
    pub fn label(self) -> &'static str {
        match self {
            Slot::Font => "font",
            Slot::Color => "color",
            Slot::Background => "background color",
        }
    }
}

/// The keyword values of one style request.
///
/// A key can be absent, present with a value, or present but empty. The
/// distinction matters: a style type only fills keys that are absent, and
/// slot resolution skips empty values.
///
/// # Example
///
/// ```rust
/// use styleprint::{OptionKey, StyleOptions};
///
/// let opts = StyleOptions::new().color("red").set(OptionKey::Bgc, "blue");
/// assert_eq!(opts.get(OptionKey::Color), Some("red"));
/// assert_eq!(opts.get(OptionKey::Bgc), Some("blue"));
/// assert_eq!(opts.get(OptionKey::Font), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleOptions {
    values: [Option<String>; 10],
}

impl StyleOptions {
    /// Creates an empty request, which resolves to the default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds options from `(keyword, value)` pairs.
    ///
    /// Unrecognized keywords are ignored. Later pairs overwrite earlier
    /// pairs for the same keyword.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut opts = Self::new();
        for (keyword, value) in pairs {
            if let Some(key) = OptionKey::from_keyword(keyword.as_ref()) {
                opts.insert(key, value);
            }
        }
        opts
    }

    /// Sets `key`, returning the updated options for chaining.
    pub fn set(mut self, key: OptionKey, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn font(self, value: impl Into<String>) -> Self {
        self.set(OptionKey::Font, value)
    }

    pub fn color(self, value: impl Into<String>) -> Self {
        self.set(OptionKey::Color, value)
    }

    pub fn background(self, value: impl Into<String>) -> Self {
        self.set(OptionKey::BackgroundColor, value)
    }

    pub fn style_type(self, value: impl Into<String>) -> Self {
        self.set(OptionKey::Type, value)
    }

    pub fn insert(&mut self, key: OptionKey, value: impl Into<String>) {
        self.values[key.index()] = Some(value.into());
    }

    /// Returns the value for `key` if present, even when empty.
    pub fn get(&self, key: OptionKey) -> Option<&str> {
        self.values[key.index()].as_deref()
    }

    /// Returns `true` if `key` was given, even with an empty value.
    pub fn contains(&self, key: OptionKey) -> bool {
        self.values[key.index()].is_some()
    }

    /// Returns the first non-empty value among the slot's keywords.
    pub fn slot_value(&self, slot: Slot) -> Option<&str> {
        slot.keys()
            .iter()
            .filter_map(|&key| self.get(key))
            .find(|value| !value.is_empty())
    }

    /// Iterates over present keys and their values.
    pub fn iter(&self) -> impl Iterator<Item = (OptionKey, &str)> {
        OptionKey::ALL
            .into_iter()
            .filter_map(|key| self.get(key).map(|value| (key, value)))
    }

    pub(crate) fn values_mut(&mut self) -> impl Iterator<Item = &mut String> {
        self.values.iter_mut().flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }
}
