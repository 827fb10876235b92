//! Bounded random wallpaper selection.
//!
//! Candidates are sampled uniformly without replacement. Each sample consumes
//! one attempt whatever its outcome, so a run probes at most
//! `min(MAX_ATTEMPTS, candidates.len())` files and applies each accepted
//! candidate at most once.

use std::path::{Path, PathBuf};

use rand::Rng;

use super::apply::WallpaperSetter;
use super::fit::{self, FitVerdict};
use super::probe::{self, ImageProbe};
use super::screen::ScreenGeometry;

/// Maximum number of candidates sampled in a single run.
pub const MAX_ATTEMPTS: usize = 50;

/// Why a run ended without applying a wallpaper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    /// The candidate list was empty to begin with.
    NoFiles,
    /// Every candidate was tried before the attempt budget ran out.
    NoFitFound,
    /// The attempt budget ran out with candidates left.
    AttemptsExhausted,
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoFiles => write!(f, "no files to choose from"),
            Self::NoFitFound => write!(f, "no candidate fits the screen"),
            Self::AttemptsExhausted => {
                write!(f, "no fitting image within {MAX_ATTEMPTS} attempts")
            }
        }
    }
}

/// Outcome of a selection run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionResult {
    /// The wallpaper at `path` was applied.
    Success { path: PathBuf },
    /// No wallpaper was applied.
    Failure(FailureReason),
}

/// Diagnostic events emitted during a run, in order.
#[derive(Debug, Clone, Copy)]
pub enum SelectionEvent<'a> {
    /// A candidate was drawn; `attempt` is 1-based.
    Testing { attempt: usize, path: &'a Path },
    /// The candidate could not be probed as an image.
    InvalidImage { path: &'a Path },
    /// The candidate was probed but does not fit.
    Rejected { path: &'a Path, probe: ImageProbe, verdict: FitVerdict },
    /// The candidate fits and is being applied.
    Applying { path: &'a Path },
    /// The apply collaborator reported failure.
    ApplyFailed { path: &'a Path },
    /// The candidate was applied; the run ends here.
    Applied { path: &'a Path },
}

/// Samples candidates until one fits the screen and is applied.
pub struct WallpaperSelector<'o, R, A> {
    rng: R,
    setter: A,
    observer: Option<Box<dyn FnMut(&SelectionEvent<'_>) + 'o>>,
}

impl<'o, R: Rng, A: WallpaperSetter> WallpaperSelector<'o, R, A> {
    /// Creates a selector with an explicit random source and apply collaborator.
    pub const fn new(rng: R, setter: A) -> Self { Self { rng, setter, observer: None } }

    /// Registers a callback receiving every [`SelectionEvent`].
    #[must_use]
    pub fn with_observer(mut self, observer: impl FnMut(&SelectionEvent<'_>) + 'o) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Returns the apply collaborator.
    pub const fn setter(&self) -> &A { &self.setter }

    fn emit(&mut self, event: &SelectionEvent<'_>) {
        if let Some(observer) = self.observer.as_mut() {
            observer(event);
        }
    }

    /// Draws and removes one candidate.
    ///
    /// A single remaining candidate is taken without consulting the RNG.
    fn draw(&mut self, candidates: &mut Vec<PathBuf>) -> PathBuf {
        let index = if candidates.len() == 1 {
            0
        } else {
            self.rng.random_range(0..candidates.len())
        };
        candidates.swap_remove(index)
    }

    /// Runs one selection over `candidates` for the given screen.
    ///
    /// Sampled candidates are removed from the list whatever their outcome.
    /// Never panics on unreadable files or apply failures; every failure is
    /// folded into the returned [`SelectionResult`].
    pub fn select(
        &mut self,
        candidates: &mut Vec<PathBuf>,
        screen: ScreenGeometry,
    ) -> SelectionResult {
        if candidates.is_empty() {
            tracing::info!("no candidates to select from");
            return SelectionResult::Failure(FailureReason::NoFiles);
        }

        let mut attempts = 0;
        while attempts < MAX_ATTEMPTS && !candidates.is_empty() {
            attempts += 1;
            let path = self.draw(candidates);
            self.emit(&SelectionEvent::Testing { attempt: attempts, path: &path });

            let image = match probe::probe(&path) {
                Ok(image) => image,
                Err(err) => {
                    tracing::debug!(error = %err, "invalid image file");
                    self.emit(&SelectionEvent::InvalidImage { path: &path });
                    continue;
                }
            };

            let verdict = fit::evaluate(image, screen);
            if !verdict.is_fit() {
                tracing::debug!(
                    path = %path.display(),
                    width = image.width,
                    height = image.height,
                    %verdict,
                    "dimensions do not fit"
                );
                self.emit(&SelectionEvent::Rejected { path: &path, probe: image, verdict });
                continue;
            }

            self.emit(&SelectionEvent::Applying { path: &path });
            if self.setter.apply(&path) {
                tracing::info!(path = %path.display(), attempts, "wallpaper applied");
                self.emit(&SelectionEvent::Applied { path: &path });
                return SelectionResult::Success { path };
            }

            tracing::warn!(path = %path.display(), "unable to set wallpaper");
            self.emit(&SelectionEvent::ApplyFailed { path: &path });
        }

        // An emptied list wins when both limits are hit on the same attempt
        let reason = if candidates.is_empty() {
            FailureReason::NoFitFound
        } else {
            FailureReason::AttemptsExhausted
        };
        tracing::info!(attempts, %reason, "unable to find an image file");
        SelectionResult::Failure(reason)
    }
}
