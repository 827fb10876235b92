//! JSON Schema for the configuration file.

use crate::config::FitpaperConfig;

/// Generates a JSON Schema for the fitpaper configuration.
#[must_use]
pub fn generate_schema() -> schemars::Schema { schemars::schema_for!(FitpaperConfig) }

/// Generates a pretty-printed JSON Schema string.
#[must_use]
pub fn generate_schema_json() -> String {
    serde_json::to_string_pretty(&generate_schema()).unwrap_or_default()
}
