//! Image header probing.
//!
//! Only the header is read; pixel data is never decoded. The reader is owned
//! by [`probe`] and dropped before it returns, so no file handle outlives a
//! single probe regardless of the outcome.

use std::path::Path;

use image::ImageReader;
use thiserror::Error;

/// Errors that can occur while probing an image.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The file could not be opened or read.
    #[error("Failed to open image {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// The file is not a recognized image or its header is corrupt.
    #[error("Invalid image file {path}: {message}")]
    Format { path: String, message: String },
}

/// Pixel dimensions read from an image header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageProbe {
    pub width: u32,
    pub height: u32,
}

impl ImageProbe {
    /// Returns `height / width`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn aspect_ratio(self) -> f32 { self.height as f32 / self.width as f32 }
}

/// Reads the pixel dimensions of an image file.
///
/// The format is sniffed from the file content rather than trusted from the
/// extension.
///
/// # Errors
///
/// Returns [`ProbeError::Open`] if the file cannot be read and
/// [`ProbeError::Format`] if it is not a parseable image.
pub fn probe(path: &Path) -> Result<ImageProbe, ProbeError> {
    let open_error = |source: std::io::Error| ProbeError::Open {
        path: path.display().to_string(),
        source,
    };

    let reader =
        ImageReader::open(path).map_err(open_error)?.with_guessed_format().map_err(open_error)?;

    let (width, height) = reader.into_dimensions().map_err(|e| ProbeError::Format {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    if width == 0 || height == 0 {
        return Err(ProbeError::Format {
            path: path.display().to_string(),
            message: format!("empty image ({width}x{height})"),
        });
    }

    Ok(ImageProbe { width, height })
}
