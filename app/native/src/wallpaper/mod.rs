//! Random wallpaper selection.
//!
//! - [`enumerate`] - Breadth-first candidate enumeration
//! - [`probe`] - Image header probing
//! - [`fit`] - Screen compatibility rules
//! - [`screen`] - Primary screen geometry
//! - [`apply`] - Desktop wallpaper collaborator
//! - [`selector`] - Bounded random selection loop

pub mod apply;
pub mod enumerate;
pub mod fit;
pub mod probe;
pub mod screen;
pub mod selector;

use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;

pub use apply::{DesktopWallpaper, WallpaperSetter};
pub use enumerate::enumerate;
pub use fit::{ASPECT_TOLERANCE, FitVerdict};
pub use probe::{ImageProbe, ProbeError};
pub use screen::{DisplayQuery, FixedDisplay, PrimaryDisplay, ScreenError, ScreenGeometry};
pub use selector::{
    FailureReason, MAX_ATTEMPTS, SelectionEvent, SelectionResult, WallpaperSelector,
};

/// Creates the random source for a run.
///
/// A seed makes the sampling order reproducible; otherwise the generator is
/// seeded from the operating system.
#[must_use]
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

/// Picks a random fitting image under `root` and applies it.
///
/// The screen is only queried once the folder is known to contain files.
///
/// # Errors
///
/// Returns an error if the screen geometry cannot be determined. Every other
/// failure is reported through the returned [`SelectionResult`].
pub fn find_and_set<D, R, A>(
    root: &Path,
    display: &D,
    selector: &mut WallpaperSelector<'_, R, A>,
) -> Result<SelectionResult, ScreenError>
where
    D: DisplayQuery + ?Sized,
    R: rand::Rng,
    A: WallpaperSetter,
{
    let mut candidates = enumerate(root);
    if candidates.is_empty() {
        tracing::info!(root = %root.display(), "no file exists in folder");
        return Ok(SelectionResult::Failure(FailureReason::NoFiles));
    }

    let screen = display.primary_bounds()?;
    tracing::debug!(count = candidates.len(), %screen, "selecting wallpaper");

    Ok(selector.select(&mut candidates, screen))
}
