//! Output format implementations for extracted themes
//!
//! This module contains the format implementations for serializing an
//! [`ExtractedTheme`](crate::theme::ExtractedTheme) to text:
//! - `json`: pretty-printed JSON, the shape consumers render and copy
//! - `yaml`: YAML, for config-file workflows

pub mod json;
pub mod registry;
pub mod yaml;

pub use json::JsonFormatter;
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use yaml::YamlFormatter;
