//! Theme token categories
//!
//! The category set mirrors the Tailwind v4 theme namespaces. The set is
//! closed: the extractor iterates [`ThemeCategory::ALL`] in declaration order
//! and derives its scan patterns from [`ThemeCategory::prefix`], so category
//! dispatch is a data table rather than per-category code.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A semantic category of theme tokens, identified by its CSS prefix.
///
/// A declaration `--color-primary: #ff0000;` belongs to
/// [`ThemeCategory::Color`] with token name `primary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeCategory {
    Color,
    Text,
    Shadow,
    Radius,
    Font,
    Spacing,
    Breakpoint,
    Container,
    Tracking,
    Leading,
    Blur,
    Animation,
}

impl ThemeCategory {
    /// Every category in declaration order.
    ///
    /// Scan order and the key order of serialized output both follow this
    /// table.
    pub const ALL: [ThemeCategory; 12] = [
        ThemeCategory::Color,
        ThemeCategory::Text,
        ThemeCategory::Shadow,
        ThemeCategory::Radius,
        ThemeCategory::Font,
        ThemeCategory::Spacing,
        ThemeCategory::Breakpoint,
        ThemeCategory::Container,
        ThemeCategory::Tracking,
        ThemeCategory::Leading,
        ThemeCategory::Blur,
        ThemeCategory::Animation,
    ];

    /// The custom-property prefix for this category (`color` in
    /// `--color-primary`).
    pub fn prefix(&self) -> &'static str {
        match self {
            ThemeCategory::Color => "color",
            ThemeCategory::Text => "text",
            ThemeCategory::Shadow => "shadow",
            ThemeCategory::Radius => "radius",
            ThemeCategory::Font => "font",
            ThemeCategory::Spacing => "spacing",
            ThemeCategory::Breakpoint => "breakpoint",
            ThemeCategory::Container => "container",
            ThemeCategory::Tracking => "tracking",
            ThemeCategory::Leading => "leading",
            ThemeCategory::Blur => "blur",
            ThemeCategory::Animation => "animation",
        }
    }
}

impl fmt::Display for ThemeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefix())
    }
}
