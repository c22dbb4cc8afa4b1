//! Integration tests for per-category extraction
//!
//! Tests the base declaration scan across the full category table:
//! - Use the canonical fixtures in `tailex::theme::testing` for CSS content
//! - One assertion path per category via rstest rows
//! - Verify names, values and order, not just counts

use rstest::rstest;
use tailex::theme::testing::samples;
use tailex::theme::{extract_theme, ExtractedTheme, ThemeCategory, ThemeToken};

#[rstest]
#[case(ThemeCategory::Color, "primary", "#ff0000")]
#[case(ThemeCategory::Text, "heading", "1.5rem")]
#[case(ThemeCategory::Shadow, "lg", "0 10px 15px rgba(0, 0, 0, 0.1)")]
#[case(ThemeCategory::Radius, "sm", "4px")]
#[case(ThemeCategory::Font, "sans", "ui-sans-serif, system-ui, sans-serif")]
#[case(ThemeCategory::Spacing, "4", "16px")]
#[case(ThemeCategory::Breakpoint, "md", "768px")]
#[case(ThemeCategory::Container, "width", "1200px")]
#[case(ThemeCategory::Tracking, "wide", "0.1em")]
#[case(ThemeCategory::Leading, "relaxed", "1.625")]
#[case(ThemeCategory::Blur, "md", "8px")]
#[case(ThemeCategory::Animation, "fast", "200ms")]
fn test_kitchen_sink_extracts_each_category(
    #[case] category: ThemeCategory,
    #[case] name: &str,
    #[case] value: &str,
) {
    let theme = extract_theme(samples::KITCHEN_SINK);
    let tokens = theme.tokens(category);

    assert_eq!(tokens.len(), 1, "category {category}");
    assert_eq!(tokens[0].name, name);
    assert_eq!(tokens[0].value, value);
    assert_eq!(tokens[0].line_height, None);
}

#[test]
fn test_tokens_keep_first_appearance_order() {
    let theme = extract_theme("--color-primary: #ff0000;\n--color-secondary: #00ff00;");

    assert_eq!(
        theme.color,
        vec![
            ThemeToken::new("primary", "#ff0000"),
            ThemeToken::new("secondary", "#00ff00"),
        ]
    );
}

#[test]
fn test_missing_categories_are_empty() {
    let theme = extract_theme("--color-primary: #ff0000;\n--text-heading: 1.5rem;");

    assert!(!theme.color.is_empty());
    assert!(!theme.text.is_empty());
    for category in ThemeCategory::ALL {
        if category != ThemeCategory::Color && category != ThemeCategory::Text {
            assert!(theme.tokens(category).is_empty(), "category {category}");
        }
    }
}

#[test]
fn test_empty_input_yields_all_empty_categories() {
    assert_eq!(extract_theme(""), ExtractedTheme::default());
}

#[test]
fn test_unmatched_declarations_contribute_nothing() {
    let theme = extract_theme(samples::NOISE);
    assert!(theme.is_empty());
}

#[test]
fn test_noise_does_not_disturb_real_declarations() {
    let css = format!("--color-primary: #ff0000;\n{}", samples::NOISE);
    let theme = extract_theme(&css);

    assert_eq!(theme.color, vec![ThemeToken::new("primary", "#ff0000")]);
    assert_eq!(theme.token_count(), 1);
}
