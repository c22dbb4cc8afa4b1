//! YAML output

use crate::theme::ExtractedTheme;

use super::registry::{FormatError, Formatter};

/// Serializes a theme as YAML
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, theme: &ExtractedTheme) -> Result<String, FormatError> {
        serde_yaml::to_string(theme).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "YAML, one key per category"
    }
}
