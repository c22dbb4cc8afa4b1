//! # tailex
//!
//! An extractor for Tailwind theme design tokens.
//!
//! Feed it a block of CSS custom-property declarations (a Tailwind v4
//! `@theme` body, a `:root` rule, or any pasted fragment) and it returns the
//! declarations grouped by semantic category: colors, text sizes, shadows,
//! radii and so on. Text tokens absorb their companion
//! `--<name>--line-height` declarations instead of producing separate
//! entries.
//!
//! ```
//! use tailex::theme::extract_theme;
//!
//! let theme = extract_theme("--color-primary: #ff0000;\n--radius-sm: 4px;");
//! assert_eq!(theme.color[0].name, "primary");
//! assert_eq!(theme.radius[0].value, "4px");
//! assert!(theme.shadow.is_empty());
//! ```
//!
//! ## Testing
//!
//! Tests use the vetted CSS fixtures in [`theme::testing`] instead of
//! inlining declarations, so fixture changes propagate to every test.

pub mod formats;
pub mod theme;
