//! CLI output formatting utilities.

use std::path::Path;

use colored::Colorize;

use crate::wallpaper::ProbeError;

/// Shortens a path to at most `max_chars` characters, keeping its tail.
///
/// The file name is the interesting part of a wallpaper path, so the
/// leading directories are elided first.
#[must_use]
pub fn shorten_path(path: &Path, max_chars: usize) -> String {
    let text = path.display().to_string();
    let char_count = text.chars().count();

    if char_count <= max_chars {
        return text;
    }
    if max_chars <= 1 {
        return "…".to_string();
    }

    let skip = char_count - (max_chars - 1);
    let tail: String = text.chars().skip(skip).collect();
    format!("…{tail}")
}

/// Formats a boolean as a colored check mark or cross.
#[must_use]
pub fn format_bool(value: bool) -> String {
    if value {
        "✓".green().to_string()
    } else {
        "✗".red().to_string()
    }
}

/// Short human-readable reason for a failed probe.
#[must_use]
pub fn probe_reason(err: &ProbeError) -> String {
    match err {
        ProbeError::Open { source, .. } => format!("unreadable: {source}"),
        ProbeError::Format { .. } => "not an image".to_string(),
    }
}
