//! Wallpaper CLI commands.
//!
//! Thin presentation layer over [`crate::wallpaper`]: folder resolution,
//! progress output and result formatting.

use std::path::{Path, PathBuf};

use colored::Colorize;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::cli::output;
use crate::config::{self, FitpaperConfig};
use crate::error::FitpaperError;
use crate::state;
use crate::utils::path::{absolute, expand};
use crate::wallpaper::{
    self, DesktopWallpaper, DisplayQuery, FitVerdict, FixedDisplay, ImageProbe, PrimaryDisplay,
    ProbeError, ScreenGeometry, SelectionEvent, SelectionResult, WallpaperSelector, fit, probe,
};

/// Picks the folder to work on.
///
/// Priority: explicit argument, remembered folder, configured folder.
#[must_use]
pub fn choose_folder(
    argument: Option<&str>,
    remembered: Option<PathBuf>,
    configured: &str,
) -> Option<PathBuf> {
    if let Some(folder) = argument.map(expand).filter(|p| !p.as_os_str().is_empty()) {
        return Some(folder);
    }
    remembered.or_else(|| Some(expand(configured)).filter(|p| !p.as_os_str().is_empty()))
}

/// Resolves the folder for `set` and `list`.
fn resolve_folder(
    argument: Option<&str>,
    config: &FitpaperConfig,
) -> Result<PathBuf, FitpaperError> {
    choose_folder(argument, state::last_folder(), &config.path).ok_or_else(|| {
        FitpaperError::InvalidArguments(
            "No folder given and none remembered. Run `fitpaper set <FOLDER>` first.".to_string(),
        )
    })
}

/// Returns the display query for the current configuration.
fn display_for(config: &FitpaperConfig) -> Box<dyn DisplayQuery> {
    match config.screen.and_then(|s| s.geometry()) {
        Some(geometry) => {
            tracing::debug!(screen = %geometry, "using configured screen size");
            Box::new(FixedDisplay(geometry))
        }
        None => Box::new(PrimaryDisplay),
    }
}

/// Prints one progress line per selection event.
fn print_event(event: &SelectionEvent<'_>) {
    match event {
        SelectionEvent::Testing { attempt, path } => {
            println!("{} {}", format!("[{attempt:>2}] Testing file:").dimmed(), path.display());
        }
        SelectionEvent::InvalidImage { path } => {
            println!("     {} {}", "Invalid image file:".yellow(), path.display());
        }
        SelectionEvent::Rejected { probe, verdict, .. } => {
            println!(
                "     {} {}x{}, {verdict}",
                "Dimensions not fit:".yellow(),
                probe.width,
                probe.height
            );
        }
        SelectionEvent::Applying { path } => {
            println!("     {} {}", "Setting wallpaper:".cyan(), path.display());
        }
        SelectionEvent::ApplyFailed { path } => {
            println!("     {} {}", "Unable to set wallpaper:".red(), path.display());
        }
        SelectionEvent::Applied { .. } => {}
    }
}

/// Execute the set command.
pub fn execute_set(folder: Option<&str>, seed: Option<u64>) -> Result<(), FitpaperError> {
    let config = config::get_config();
    let root = resolve_folder(folder, config)?;
    let display = display_for(config);

    println!("Fetching files from {} ...", root.display());

    let mut selector =
        WallpaperSelector::new(wallpaper::rng_from_seed(seed), DesktopWallpaper::new(config.mode))
            .with_observer(print_event);

    match wallpaper::find_and_set(&root, display.as_ref(), &mut selector)? {
        SelectionResult::Success { path } => {
            println!("{} {}", "Wallpaper set successfully:".green().bold(), path.display());

            if config.remember_folder
                && let Err(err) = state::remember_folder(&absolute(&root))
            {
                tracing::warn!(error = %err, "failed to remember folder");
            }
        }
        SelectionResult::Failure(reason) => {
            println!("{} {}", "Unable to find an image file:".red().bold(), reason);
        }
    }

    Ok(())
}

/// Execute the list command.
pub fn execute_list(folder: Option<&str>, json: bool) -> Result<(), FitpaperError> {
    let root = resolve_folder(folder, config::get_config())?;
    let files = wallpaper::enumerate(&root);

    if json {
        let paths: Vec<String> = files.iter().map(|p| p.display().to_string()).collect();
        println!("{}", serde_json::to_string_pretty(&paths)?);
        return Ok(());
    }

    if files.is_empty() {
        println!("{}", format!("No file exists in {}", root.display()).dimmed());
        return Ok(());
    }

    for file in &files {
        println!("{}", file.display());
    }
    println!("{}", format!("{} files", files.len()).dimmed());
    Ok(())
}

/// Probe and fit result for one file.
struct CheckOutcome<'a> {
    path: &'a Path,
    result: Result<(ImageProbe, FitVerdict), ProbeError>,
}

fn check_file(path: &Path, screen: ScreenGeometry) -> CheckOutcome<'_> {
    let result = probe::probe(path).map(|image| (image, fit::evaluate(image, screen)));
    CheckOutcome { path, result }
}

/// Execute the check command.
pub fn execute_check(files: &[PathBuf], json: bool) -> Result<(), FitpaperError> {
    #[derive(Tabled)]
    struct CheckRow {
        #[tabled(rename = "File")]
        file: String,
        #[tabled(rename = "Size")]
        size: String,
        #[tabled(rename = "Aspect")]
        aspect: String,
        #[tabled(rename = "Fits")]
        fits: String,
        #[tabled(rename = "Reason")]
        reason: String,
    }

    let screen = display_for(config::get_config()).primary_bounds()?;
    let outcomes: Vec<CheckOutcome<'_>> = files.iter().map(|f| check_file(f, screen)).collect();

    if json {
        let entries: Vec<serde_json::Value> = outcomes
            .iter()
            .map(|o| match &o.result {
                Ok((image, verdict)) => serde_json::json!({
                    "path": o.path.display().to_string(),
                    "width": image.width,
                    "height": image.height,
                    "fits": verdict.is_fit(),
                    "verdict": verdict.to_string(),
                }),
                Err(err) => serde_json::json!({
                    "path": o.path.display().to_string(),
                    "fits": false,
                    "error": err.to_string(),
                }),
            })
            .collect();
        let value = serde_json::json!({
            "screen": { "width": screen.width(), "height": screen.height() },
            "files": entries,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let rows: Vec<CheckRow> = outcomes
        .iter()
        .map(|o| {
            let file = output::shorten_path(o.path, 48);
            match &o.result {
                Ok((image, verdict)) => CheckRow {
                    file,
                    size: format!("{}x{}", image.width, image.height),
                    aspect: format!("{:.3}", image.aspect_ratio()),
                    fits: output::format_bool(verdict.is_fit()),
                    reason: verdict.to_string(),
                },
                Err(err) => CheckRow {
                    file,
                    size: "-".to_string(),
                    aspect: "-".to_string(),
                    fits: output::format_bool(false),
                    reason: output::probe_reason(err),
                },
            }
        })
        .collect();

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..3)).with(Alignment::right()))
        .with(Modify::new(Columns::new(3..4)).with(Alignment::center()))
        .to_string();

    println!("{}", format!("Screen {screen} (aspect {:.3})", screen.aspect_ratio()).bold());
    println!("{table}");
    Ok(())
}

/// Execute the screen command.
pub fn execute_screen(json: bool) -> Result<(), FitpaperError> {
    let config = config::get_config();
    let source = if config.screen.and_then(|s| s.geometry()).is_some() {
        "configured"
    } else {
        "detected"
    };
    let screen = display_for(config).primary_bounds()?;

    if json {
        let value = serde_json::json!({
            "width": screen.width(),
            "height": screen.height(),
            "aspectRatio": screen.aspect_ratio(),
            "source": source,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!(
            "{} {screen} {}",
            "Screen:".bold(),
            format!("(aspect {:.4}, {source})", screen.aspect_ratio()).dimmed()
        );
    }
    Ok(())
}
