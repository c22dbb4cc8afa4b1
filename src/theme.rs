//! Main module for theme-token extraction

pub mod category;
pub mod extract;
pub mod testing;
pub mod token;

pub use category::ThemeCategory;
pub use extract::extract_theme;
pub use token::{ExtractedTheme, ThemeToken};
