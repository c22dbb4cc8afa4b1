//! The extractor core
//!
//! Scans a blob of CSS custom-property declarations and groups matching
//! tokens by category. The scan patterns are data, not code: one
//! (base, line-height) regex pair per category, derived from
//! [`ThemeCategory::ALL`] and compiled once for the process.
//!
//! The scan is two-pass per category. The base pass collects
//! `--<prefix>-<name>: <value>;` declarations into an insertion-ordered
//! accumulator keyed by name; the auxiliary pass merges
//! `--<prefix>-<name>--line-height: <value>;` declarations into the entry
//! sharing their name. Orphan line-height declarations never produce a token.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use super::category::ThemeCategory;
use super::token::{ExtractedTheme, ThemeToken};

/// Suffix distinguishing an auxiliary line-height declaration from a base one.
///
/// The base pattern also matches auxiliary declarations (capturing e.g.
/// `display-1--line-height` as a name), so materialization filters out every
/// accumulated name containing this suffix.
const LINE_HEIGHT_SUFFIX: &str = "--line-height";

/// Collapses whitespace runs that span a newline into a single space, so a
/// declaration split across physical lines scans as one logical line.
/// Whitespace within a single line is left untouched.
static NEWLINE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\n\s*").expect("newline pattern"));

/// Compiled scan patterns for one category
struct CategoryPattern {
    category: ThemeCategory,
    base: Regex,
    line_height: Regex,
}

/// Scan patterns for every category, compiled once in declaration order.
///
/// The identifier class is letters, digits and hyphens; the value capture
/// runs to the terminating semicolon. Anchoring on `--<prefix>-` keeps
/// matching prefix-exact: `--colors-primary` does not match the `color`
/// patterns, and `text` cannot match inside `display-text`.
static CATEGORY_PATTERNS: Lazy<Vec<CategoryPattern>> = Lazy::new(|| {
    ThemeCategory::ALL
        .iter()
        .map(|&category| {
            let prefix = category.prefix();
            let base = Regex::new(&format!(r"--{prefix}-([a-zA-Z0-9-]+):\s*([^;]+);"))
                .expect("base pattern");
            let line_height =
                Regex::new(&format!(r"--{prefix}-([a-zA-Z0-9-]+)--line-height:\s*([^;]+);"))
                    .expect("line-height pattern");
            CategoryPattern {
                category,
                base,
                line_height,
            }
        })
        .collect()
});

/// Extract categorized theme tokens from a block of CSS custom-property
/// declarations.
///
/// Unmatched text is ignored; the function never fails, and the result
/// always carries all categories. An empty input yields all-empty
/// categories.
///
/// ```
/// use tailex::theme::extract_theme;
///
/// let theme = extract_theme("--color-primary: #ff0000;\n--text-heading: 1.5rem;");
/// assert_eq!(theme.color[0].name, "primary");
/// assert_eq!(theme.text[0].value, "1.5rem");
/// assert!(theme.spacing.is_empty());
/// ```
pub fn extract_theme(css: &str) -> ExtractedTheme {
    let sanitized = NEWLINE_RUN.replace_all(css, " ");

    let mut theme = ExtractedTheme::default();
    for pattern in CATEGORY_PATTERNS.iter() {
        *theme.tokens_mut(pattern.category) = parse_category(&sanitized, pattern);
    }
    theme
}

/// Run the base and line-height scans for one category over sanitized CSS
fn parse_category(css: &str, pattern: &CategoryPattern) -> Vec<ThemeToken> {
    // Keyed by name: re-declarations overwrite the value but keep the
    // first-insertion position.
    let mut tokens: IndexMap<String, ThemeToken> = IndexMap::new();

    for caps in pattern.base.captures_iter(css) {
        let name = caps[1].to_string();
        let value = caps[2].trim().to_string();
        tokens.insert(name.clone(), ThemeToken::new(name, value));
    }

    for caps in pattern.line_height.captures_iter(css) {
        if let Some(token) = tokens.get_mut(&caps[1]) {
            token.line_height = Some(caps[2].trim().to_string());
        }
    }

    tokens
        .into_values()
        .filter(|token| !token.name.contains(LINE_HEIGHT_SUFFIX))
        .collect()
}
