//! Token records and the per-category extraction result
//!
//! [`ExtractedTheme`] is the normalized output model: every category field is
//! always present, so serializers can render it without knowing which
//! categories matched. Field names follow the JSON shape consumers expect
//! (`lineHeight`, omitted when absent).

use serde::{Deserialize, Serialize};

use super::category::ThemeCategory;

/// A single extracted design token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeToken {
    /// Suffix of the custom property after the category prefix
    /// (`primary` in `--color-primary`).
    pub name: String,

    /// Raw declaration value, trimmed. May contain commas and parentheses,
    /// e.g. multi-layer shadows.
    pub value: String,

    /// Line height merged from a companion `--<name>--line-height`
    /// declaration, if one exists.
    #[serde(rename = "lineHeight", default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<String>,
}

impl ThemeToken {
    /// Create a token with the given name and value
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            line_height: None,
        }
    }

    /// Attach a line height to this token
    pub fn with_line_height(mut self, line_height: impl Into<String>) -> Self {
        self.line_height = Some(line_height.into());
        self
    }
}

/// Extraction result: an ordered token list per category.
///
/// Every field is always present; categories with no matching declarations
/// hold an empty vector. Within a category, tokens appear in first-appearance
/// order of their base declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedTheme {
    pub color: Vec<ThemeToken>,
    pub text: Vec<ThemeToken>,
    pub shadow: Vec<ThemeToken>,
    pub radius: Vec<ThemeToken>,
    pub font: Vec<ThemeToken>,
    pub spacing: Vec<ThemeToken>,
    pub breakpoint: Vec<ThemeToken>,
    pub container: Vec<ThemeToken>,
    pub tracking: Vec<ThemeToken>,
    pub leading: Vec<ThemeToken>,
    pub blur: Vec<ThemeToken>,
    pub animation: Vec<ThemeToken>,
}

impl ExtractedTheme {
    /// The tokens extracted for one category
    pub fn tokens(&self, category: ThemeCategory) -> &[ThemeToken] {
        match category {
            ThemeCategory::Color => &self.color,
            ThemeCategory::Text => &self.text,
            ThemeCategory::Shadow => &self.shadow,
            ThemeCategory::Radius => &self.radius,
            ThemeCategory::Font => &self.font,
            ThemeCategory::Spacing => &self.spacing,
            ThemeCategory::Breakpoint => &self.breakpoint,
            ThemeCategory::Container => &self.container,
            ThemeCategory::Tracking => &self.tracking,
            ThemeCategory::Leading => &self.leading,
            ThemeCategory::Blur => &self.blur,
            ThemeCategory::Animation => &self.animation,
        }
    }

    pub(crate) fn tokens_mut(&mut self, category: ThemeCategory) -> &mut Vec<ThemeToken> {
        match category {
            ThemeCategory::Color => &mut self.color,
            ThemeCategory::Text => &mut self.text,
            ThemeCategory::Shadow => &mut self.shadow,
            ThemeCategory::Radius => &mut self.radius,
            ThemeCategory::Font => &mut self.font,
            ThemeCategory::Spacing => &mut self.spacing,
            ThemeCategory::Breakpoint => &mut self.breakpoint,
            ThemeCategory::Container => &mut self.container,
            ThemeCategory::Tracking => &mut self.tracking,
            ThemeCategory::Leading => &mut self.leading,
            ThemeCategory::Blur => &mut self.blur,
            ThemeCategory::Animation => &mut self.animation,
        }
    }

    /// Iterate `(category, tokens)` pairs in category-declaration order
    pub fn iter(&self) -> impl Iterator<Item = (ThemeCategory, &[ThemeToken])> + '_ {
        ThemeCategory::ALL
            .into_iter()
            .map(move |category| (category, self.tokens(category)))
    }

    /// Total number of tokens across all categories
    pub fn token_count(&self) -> usize {
        self.iter().map(|(_, tokens)| tokens.len()).sum()
    }

    /// True when no category matched anything
    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, tokens)| tokens.is_empty())
    }
}
