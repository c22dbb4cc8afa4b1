//! Integration tests for whitespace normalization
//!
//! Declarations may span physical lines (multi-layer shadows with the layer
//! comma at the break). The scan collapses newline-adjacent whitespace into
//! a single space so each declaration matches as one logical line, while
//! whitespace inside a single line is preserved exactly.

use tailex::theme::testing::samples;
use tailex::theme::{extract_theme, ThemeToken};

#[test]
fn test_multiline_shadow_layers_collapse_to_one_value() {
    let theme = extract_theme(samples::LAYERED_SHADOWS);

    assert_eq!(
        theme.shadow,
        vec![
            ThemeToken::new(
                "normal",
                "0px 1px 4px 0px rgba(96, 100, 136, 0.04), 1px 4px 16px 0px rgba(96, 100, 136, 0.08)",
            ),
            ThemeToken::new(
                "strong",
                "1px -2px 10px 0px rgba(96, 100, 136, 0.1), -1px 4px 16px 0px rgba(96, 100, 136, 0.12)",
            ),
            ThemeToken::new(
                "heavy",
                "1px 8px 20px 0px rgba(70, 79, 94, 0.2), -1px -8px 16px 0px rgba(50, 55, 63, 0.16)",
            ),
        ]
    );
}

#[test]
fn test_whitespace_within_a_single_line_is_preserved() {
    let theme = extract_theme("--color-primary: rgb(0,  0,  0);");

    assert_eq!(theme.color[0].value, "rgb(0,  0,  0)");
}

#[test]
fn test_blank_lines_between_declarations_are_harmless() {
    let theme = extract_theme("--color-a: #111;\n\n\n--color-b: #222;");

    assert_eq!(
        theme.color,
        vec![ThemeToken::new("a", "#111"), ThemeToken::new("b", "#222")]
    );
}

#[test]
fn test_typography_snapshot() {
    let theme = extract_theme(samples::TYPOGRAPHY);

    insta::assert_debug_snapshot!(theme.text, @r###"
    [
        ThemeToken {
            name: "display-1",
            value: "3rem",
            line_height: Some(
                "130%",
            ),
        },
        ThemeToken {
            name: "display-2",
            value: "2.5rem",
            line_height: Some(
                "130%",
            ),
        },
        ThemeToken {
            name: "title-1",
            value: "2rem",
            line_height: Some(
                "130%",
            ),
        },
    ]
    "###);
}

#[test]
fn test_noise_snapshot_is_all_empty() {
    let theme = extract_theme(samples::NOISE);

    insta::assert_debug_snapshot!(theme, @r###"
    ExtractedTheme {
        color: [],
        text: [],
        shadow: [],
        radius: [],
        font: [],
        spacing: [],
        breakpoint: [],
        container: [],
        tracking: [],
        leading: [],
        blur: [],
        animation: [],
    }
    "###);
}
