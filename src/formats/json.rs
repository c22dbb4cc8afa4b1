//! Pretty-printed JSON output
//!
//! The consumer-facing shape: category keys in declaration order, token
//! objects with `name`/`value` and `lineHeight` only when present.

use crate::theme::ExtractedTheme;

use super::registry::{FormatError, Formatter};

/// Serializes a theme as pretty-printed JSON
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, theme: &ExtractedTheme) -> Result<String, FormatError> {
        serde_json::to_string_pretty(theme)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Pretty-printed JSON, one key per category"
    }
}
