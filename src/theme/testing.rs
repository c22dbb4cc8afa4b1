//! Canonical CSS fixtures for tests and docs
//!
//! Test content lives here rather than inline in test files. Declarations
//! people paste from real themes regularly get small details wrong (missing
//! semicolons, wrong dash counts), which leads to false positives in tests;
//! keeping the vetted fixtures in one place means every test exercises the
//! same sources and fixture fixes propagate everywhere.

/// Vetted CSS sample blocks
pub mod samples {
    /// One declaration for every category, in category-declaration order.
    pub const KITCHEN_SINK: &str = "\
  --color-primary: #ff0000;
  --text-heading: 1.5rem;
  --shadow-lg: 0 10px 15px rgba(0, 0, 0, 0.1);
  --radius-sm: 4px;
  --font-sans: ui-sans-serif, system-ui, sans-serif;
  --spacing-4: 16px;
  --breakpoint-md: 768px;
  --container-width: 1200px;
  --tracking-wide: 0.1em;
  --leading-relaxed: 1.625;
  --blur-md: 8px;
  --animation-fast: 200ms;
";

    /// A typography scale where each text size carries a companion
    /// line-height declaration, surrounded by tokens of other categories.
    pub const TYPOGRAPHY: &str = "\
  --font-sans: var(--font-freesentation), sans-serif;
  --font-mukta: var(--font-mukta), sans-serif;
  --text-display-1: 3rem;
  --text-display-1--line-height: 130%;
  --text-display-2: 2.5rem;
  --text-display-2--line-height: 130%;
  --text-title-1: 2rem;
  --text-title-1--line-height: 130%;
  --shadow-normal: 0px 1px 4px 0px rgba(96, 100, 136, 0.04);
  --color-primary: #18a0fb;
  --radius-lg: calc(1rem - 6px);
";

    /// Multi-layer shadow values split across physical lines, with the layer
    /// comma at the line break. Exercises whitespace normalization.
    pub const LAYERED_SHADOWS: &str = "  --shadow-normal: 0px 1px 4px 0px rgba(96, 100, 136, 0.04),
    1px 4px 16px 0px rgba(96, 100, 136, 0.08);
  --shadow-strong: 1px -2px 10px 0px rgba(96, 100, 136, 0.1),
    -1px 4px 16px 0px rgba(96, 100, 136, 0.12);
  --shadow-heavy: 1px 8px 20px 0px rgba(70, 79, 94, 0.2),
    -1px -8px 16px 0px rgba(50, 55, 63, 0.16);";

    /// Declarations that belong to no category: an unknown prefix, a plural
    /// near-miss of `color`, an embedded `text`, and a property missing the
    /// leading dashes.
    pub const NOISE: &str = "\
  --unknown-variable: some-value;
  --colors-primary: #123456;
  --display-text-large: 2rem;
  spacing-4: 16px;
";
}
