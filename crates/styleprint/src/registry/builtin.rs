//! Built-in style tables.

/// SGR attribute codes for font weight and decoration.
pub(super) const FONTS: &[(&str, u8)] = &[
    ("roman", 0),
    ("bold", 1),
    ("italic", 3),
    ("underline", 4),
    ("blink", 5),
    ("mark", 7),
    ("strikethrough", 9),
    ("default", 0),
];

/// Foreground color codes. `default` renders the same as `gray`.
pub(super) const COLORS: &[(&str, u8)] = &[
    ("black", 30),
    ("darkred", 31),
    ("darkgreen", 32),
    ("darkyellow", 33),
    ("blue", 34),
    ("darkmagenta", 35),
    ("darkcyan", 36),
    ("lightgrey", 37),
    ("lightgray", 37),
    ("grey", 38),
    ("gray", 38),
    ("darkgrey", 90),
    ("darkgray", 90),
    ("red", 91),
    ("green", 92),
    ("yellow", 93),
    ("violet", 94),
    ("magenta", 95),
    ("cyan", 96),
    ("white", 97),
    ("default", 38),
];

/// Background color codes. `none` is the black background.
pub(super) const BACKGROUND_COLORS: &[(&str, u8)] = &[
    ("none", 40),
    ("black", 40),
    ("red", 41),
    ("green", 42),
    ("yellow", 43),
    ("blue", 44),
    ("magenta", 45),
    ("cyan", 46),
    ("white", 47),
];

pub(super) const ALIASES: &[(&str, &str)] = &[
    ("r", "red"),
    ("g", "green"),
    ("b", "blue"),
    ("k", "black"),
    ("c", "cyan"),
    ("m", "magenta"),
    ("y", "yellow"),
    ("w", "white"),
];

/// Style types as (font, color, background).
pub(super) const TYPES: &[(&str, (&str, &str, &str))] = &[
    ("warning", ("bold", "yellow", "none")),
    ("alert", ("blink", "red", "none")),
    ("fail", ("roman", "red", "none")),
    ("error", ("roman", "red", "none")),
    ("okay", ("roman", "green", "none")),
    ("success", ("roman", "green", "none")),
];
