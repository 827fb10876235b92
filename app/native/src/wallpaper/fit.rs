//! Geometric compatibility between an image and the screen.

use super::probe::ImageProbe;
use super::screen::ScreenGeometry;

/// Maximum relative deviation between the image and screen aspect ratios.
pub const ASPECT_TOLERANCE: f32 = 489.0 / 2200.0;

/// Outcome of testing an image against the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FitVerdict {
    /// The image covers the screen and its proportions are close enough.
    Fits,
    /// The image is smaller than the screen in at least one dimension.
    TooSmall,
    /// The image is large enough but its proportions differ too much.
    AspectMismatch {
        /// `|image_aspect / screen_aspect - 1|`
        deviation: f32,
    },
}

impl FitVerdict {
    #[must_use]
    pub const fn is_fit(self) -> bool { matches!(self, Self::Fits) }
}

impl std::fmt::Display for FitVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fits => write!(f, "fits"),
            Self::TooSmall => write!(f, "smaller than the screen"),
            Self::AspectMismatch { deviation } => {
                write!(f, "aspect ratio off by {:.1}%", deviation * 100.0)
            }
        }
    }
}

/// Returns how far the image proportions are from the screen's.
#[must_use]
pub fn aspect_deviation(image: ImageProbe, screen: ScreenGeometry) -> f32 {
    (image.aspect_ratio() / screen.aspect_ratio() - 1.0).abs()
}

/// Tests whether an image can be used as wallpaper on the given screen.
///
/// Upscaling is never allowed, so the size check runs first; the aspect
/// check is independent of absolute resolution.
#[must_use]
pub fn evaluate(image: ImageProbe, screen: ScreenGeometry) -> FitVerdict {
    if image.height < screen.height() || image.width < screen.width() {
        return FitVerdict::TooSmall;
    }

    let deviation = aspect_deviation(image, screen);
    if deviation > ASPECT_TOLERANCE {
        return FitVerdict::AspectMismatch { deviation };
    }

    FitVerdict::Fits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_hd() -> ScreenGeometry { ScreenGeometry::new(1920, 1080).unwrap() }

    const fn image(width: u32, height: u32) -> ImageProbe { ImageProbe { width, height } }

    #[test]
    fn test_exact_match_fits() {
        assert_eq!(evaluate(image(1920, 1080), full_hd()), FitVerdict::Fits);
    }

    #[test]
    fn test_larger_same_proportions_fits() {
        assert_eq!(evaluate(image(3840, 2160), full_hd()), FitVerdict::Fits);
    }

    #[test]
    fn test_smaller_in_both_dimensions_is_too_small() {
        assert_eq!(evaluate(image(1800, 1000), full_hd()), FitVerdict::TooSmall);
    }

    #[test]
    fn test_smaller_in_one_dimension_is_too_small() {
        assert_eq!(evaluate(image(4000, 1079), full_hd()), FitVerdict::TooSmall);
        assert_eq!(evaluate(image(1919, 4000), full_hd()), FitVerdict::TooSmall);
    }

    #[test]
    fn test_square_image_is_aspect_mismatch_on_wide_screen() {
        let deviation = aspect_deviation(image(1000, 1000), full_hd());
        assert!((deviation - 0.777_777_8).abs() < 1e-4);
        assert!(deviation > ASPECT_TOLERANCE);

        let verdict = evaluate(image(2000, 2000), full_hd());
        assert!(matches!(verdict, FitVerdict::AspectMismatch { .. }));
    }

    #[test]
    fn test_size_check_runs_before_aspect_check() {
        // Square and too small: reported as too small, not as aspect mismatch
        assert_eq!(evaluate(image(1000, 1000), full_hd()), FitVerdict::TooSmall);
    }

    #[test]
    fn test_sixteen_by_ten_fits_sixteen_by_nine() {
        // 0.625 / 0.5625 - 1 = 0.111, inside the tolerance band
        assert_eq!(evaluate(image(2560, 1600), full_hd()), FitVerdict::Fits);
    }

    #[test]
    fn test_four_by_three_is_outside_tolerance() {
        // 0.75 / 0.5625 - 1 = 0.333
        let verdict = evaluate(image(2048, 1536), full_hd());
        assert!(matches!(verdict, FitVerdict::AspectMismatch { .. }));
    }

    #[test]
    fn test_ultrawide_image_is_outside_tolerance() {
        // (1440 / 3440) / 0.5625 - 1 = -0.256
        let verdict = evaluate(image(3440, 1440), ScreenGeometry::new(1920, 1080).unwrap());
        assert!(matches!(verdict, FitVerdict::AspectMismatch { .. }));
    }

    #[test]
    fn test_tolerance_constant() {
        assert!((ASPECT_TOLERANCE - 0.222_272_7).abs() < 1e-6);
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(FitVerdict::Fits.to_string(), "fits");
        assert_eq!(FitVerdict::TooSmall.to_string(), "smaller than the screen");
        let mismatch = FitVerdict::AspectMismatch { deviation: 0.5 };
        assert_eq!(mismatch.to_string(), "aspect ratio off by 50.0%");
    }
}
