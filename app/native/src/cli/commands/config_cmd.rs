//! Config CLI commands.

use std::path::PathBuf;

use clap::Subcommand;
use colored::Colorize;

use crate::config::template::{create_config_file, generate_config_template};
use crate::config::{config_paths, get_config_path};
use crate::error::FitpaperError;

/// Config management commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum ConfigCommands {
    /// Initialize a new configuration file with all options documented.
    #[command(
        name = "init",
        after_long_help = r#"Examples:
  fitpaper config init              # Create config at default location
  fitpaper config init --force      # Overwrite existing config
  fitpaper config init --stdout     # Print template to stdout"#
    )]
    Init {
        /// Overwrite existing configuration file if it exists.
        #[arg(long, short)]
        force: bool,

        /// Custom path for the configuration file.
        #[arg(long, short, value_name = "PATH")]
        path: Option<PathBuf>,

        /// Print the configuration template to stdout instead of writing to a file.
        #[arg(long)]
        stdout: bool,
    },

    /// Show where fitpaper looks for its configuration file.
    Path,
}

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the configuration file cannot be written.
pub fn execute(cmd: &ConfigCommands) -> Result<(), FitpaperError> {
    match cmd {
        ConfigCommands::Init { force, path, stdout } => {
            if *stdout {
                println!("{}", generate_config_template());
                Ok(())
            } else {
                init_config(*force, path.clone())
            }
        }
        ConfigCommands::Path => {
            show_config_path();
            Ok(())
        }
    }
}

/// Initialize a new configuration file.
fn init_config(force: bool, custom_path: Option<PathBuf>) -> Result<(), FitpaperError> {
    let config_path = custom_path.unwrap_or_else(|| {
        config_paths().into_iter().next().unwrap_or_else(|| PathBuf::from("config.jsonc"))
    });

    if config_path.exists() && !force {
        return Err(FitpaperError::ConfigError(format!(
            "Configuration file already exists at: {}\nUse --force to overwrite.",
            config_path.display()
        )));
    }

    create_config_file(&config_path).map_err(|e| {
        FitpaperError::ConfigError(format!(
            "Failed to create config file {}: {e}",
            config_path.display()
        ))
    })?;

    println!("Configuration file created at: {}", config_path.display());
    Ok(())
}

/// Show the configuration file search paths.
fn show_config_path() {
    // Loading marks which file is in use
    let _ = crate::config::get_config();
    let active = get_config_path();

    println!("Configuration file search paths (in priority order):\n");
    for (i, path) in config_paths().iter().enumerate() {
        let line = format!("  {}. {}", i + 1, path.display());
        if active == Some(path) {
            println!("{} {}", line.green(), "(active)".green().bold());
        } else if path.exists() {
            println!("{line}");
        } else {
            println!("{}", line.dimmed());
        }
    }

    if let Some(path) = active
        && !config_paths().contains(path)
    {
        println!("\n{} {}", "Active:".bold(), path.display());
    }
}
