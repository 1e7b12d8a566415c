//! Built-in religion tables.
//!
//! These are process-wide constants. The runtime [`Catalog`](super::Catalog)
//! is built from them once at startup, optionally extended by the config file.

/// Every religion record known to the program, as `(id, display name)`.
pub const RELIGIONS: &[(&str, &str)] = &[
    ("hindu", "Hindu"),
    ("muslim", "Muslim"),
    ("christian", "Christian"),
    ("sikh", "Sikh"),
    ("jain", "Jain"),
    ("buddhist", "Buddhist"),
    ("parsi", "Parsi"),
    ("other", "Other"),
];

/// The religions offered on the selection screen, in display order.
pub const FEATURED: &[&str] = &["hindu", "muslim", "sikh", "jain", "christian", "other"];

/// Glyph shown on each religion card.
pub const SYMBOLS: &[(&str, &str)] = &[
    ("hindu", "🕉️"),
    ("muslim", "☪️"),
    ("christian", "✝️"),
    ("sikh", "☬"),
    ("jain", "🤲"),
    ("buddhist", "☸️"),
    ("parsi", "🔥"),
    ("other", "🙏"),
];

/// Glyph for ids with no entry in [`SYMBOLS`].
pub const FALLBACK_SYMBOL: &str = "🙏";
