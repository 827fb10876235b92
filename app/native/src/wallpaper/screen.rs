//! Screen geometry and primary display detection.
//!
//! The selector only ever needs a snapshot of the primary screen's pixel
//! size, captured once at the start of a run. Detection goes through the
//! [`DisplayQuery`] trait so tests and configuration overrides can bypass
//! the real display server.

use thiserror::Error;
use xcap::Monitor;

/// Errors that can occur while querying the display.
#[derive(Debug, Error)]
pub enum ScreenError {
    /// Monitor enumeration failed.
    #[error("Failed to enumerate monitors: {0}")]
    MonitorEnumeration(String),
    /// No monitor was reported at all.
    #[error("No monitor found")]
    NoMonitor,
    /// The monitor reported a zero or unreadable size.
    #[error("Invalid screen size: {0}")]
    InvalidSize(String),
}

/// Immutable snapshot of the target screen dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenGeometry {
    width: u32,
    height: u32,
}

impl ScreenGeometry {
    /// Creates a screen geometry, rejecting zero dimensions.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        Some(Self { width, height })
    }

    #[must_use]
    pub const fn width(self) -> u32 { self.width }

    #[must_use]
    pub const fn height(self) -> u32 { self.height }

    /// Returns `height / width`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn aspect_ratio(self) -> f32 { self.height as f32 / self.width as f32 }
}

impl std::fmt::Display for ScreenGeometry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Source of the primary screen bounds.
pub trait DisplayQuery {
    /// Returns the bounds of the primary screen.
    ///
    /// # Errors
    ///
    /// Returns an error if no usable monitor can be found.
    fn primary_bounds(&self) -> Result<ScreenGeometry, ScreenError>;
}

/// Queries the real display server through `xcap`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrimaryDisplay;

impl DisplayQuery for PrimaryDisplay {
    fn primary_bounds(&self) -> Result<ScreenGeometry, ScreenError> {
        let monitors =
            Monitor::all().map_err(|e| ScreenError::MonitorEnumeration(e.to_string()))?;

        // Fall back to the first monitor when none reports itself as primary
        let primary = match monitors.iter().position(|m| m.is_primary().unwrap_or(false)) {
            Some(index) => monitors.into_iter().nth(index),
            None => monitors.into_iter().next(),
        }
        .ok_or(ScreenError::NoMonitor)?;

        let width = primary.width().map_err(|e| ScreenError::InvalidSize(e.to_string()))?;
        let height = primary.height().map_err(|e| ScreenError::InvalidSize(e.to_string()))?;

        let geometry = ScreenGeometry::new(width, height)
            .ok_or_else(|| ScreenError::InvalidSize(format!("{width}x{height}")))?;

        tracing::debug!(screen = %geometry, "detected primary screen");
        Ok(geometry)
    }
}

/// A fixed geometry, used for configuration overrides.
#[derive(Debug, Clone, Copy)]
pub struct FixedDisplay(pub ScreenGeometry);

impl DisplayQuery for FixedDisplay {
    fn primary_bounds(&self) -> Result<ScreenGeometry, ScreenError> { Ok(self.0) }
}
