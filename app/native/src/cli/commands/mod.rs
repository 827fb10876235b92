//! CLI command definitions using Clap.
//!
//! - `wallpaper` - Selecting, listing and checking wallpapers
//! - `config_cmd` - Configuration file management

use std::io;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Generator, Shell, generate};

use crate::error::FitpaperError;
use crate::{config, schema, state};

pub mod config_cmd;
pub mod wallpaper;

pub use config_cmd::ConfigCommands;

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// fitpaper - pick a random wallpaper that fits the primary screen.
#[derive(Parser, Debug)]
#[command(name = "fitpaper")]
#[command(author, version = APP_VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a custom configuration file.
    ///
    /// Overrides the default configuration file search paths.
    /// Supports JSONC format (JSON with comments).
    #[arg(long, short, global = true, value_name = "PATH")]
    pub config: Option<String>,

    /// Print debug logs to stderr.
    ///
    /// The `FITPAPER_LOG` environment variable takes precedence.
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum Commands {
    /// Set a random wallpaper from a folder.
    ///
    /// Scans the folder and all of its subfolders, then tries random files
    /// until one is at least as large as the screen with a close enough
    /// aspect ratio. At most 50 files are tried.
    ///
    /// Without a folder, the folder of the last successful run is used,
    /// then the `path` configuration option.
    #[command(
        verbatim_doc_comment,
        after_long_help = r#"Examples:
  fitpaper set ~/Pictures/Wallpapers    # Pick from a folder and remember it
  fitpaper set                          # Pick from the remembered folder
  fitpaper set --seed 42                # Reproducible pick"#
    )]
    Set {
        /// Folder to pick the wallpaper from.
        #[arg(value_name = "FOLDER")]
        folder: Option<String>,

        /// Seed for the random number generator.
        #[arg(long, value_name = "SEED")]
        seed: Option<u64>,
    },

    /// List the candidate files of a folder.
    ///
    /// Lists every file fitpaper would consider, breadth-first.
    List {
        /// Folder to list. Defaults like `set`.
        #[arg(value_name = "FOLDER")]
        folder: Option<String>,

        /// Output as a JSON array.
        #[arg(long, short)]
        json: bool,
    },

    /// Check whether images fit the screen.
    ///
    /// Reads each image's dimensions and reports whether `set` would accept it.
    Check {
        /// Image files to check.
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,

        /// Output as JSON.
        #[arg(long, short)]
        json: bool,
    },

    /// Show the screen size images are matched against.
    Screen {
        /// Output as JSON.
        #[arg(long, short)]
        json: bool,
    },

    /// Forget the remembered folder.
    Forget,

    /// Configuration file management commands.
    ///
    /// Initialize, view, and manage the configuration file.
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Output fitpaper configuration JSON Schema.
    ///
    /// Outputs a JSON Schema to stdout that describes the structure of the
    /// configuration file.
    Schema,

    /// Generate shell completions.
    ///
    /// Usage:
    ///   eval "$(fitpaper completions --shell zsh)"
    ///   fitpaper completions --shell fish > ~/.config/fish/completions/fitpaper.fish
    Completions {
        /// The shell to generate completions for.
        #[arg(long, short, value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Returns whether debug logging was requested.
    #[must_use]
    pub const fn verbose(&self) -> bool { self.verbose }

    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command execution fails. Not finding a
    /// fitting wallpaper is not an error.
    pub fn execute(&self) -> Result<(), FitpaperError> {
        if let Some(ref path) = self.config {
            let path_buf = PathBuf::from(path);
            if !path_buf.exists() {
                return Err(FitpaperError::ConfigError(format!(
                    "Configuration file not found: {path}"
                )));
            }
            config::set_custom_config_path(path_buf);
        }

        match &self.command {
            Commands::Set { folder, seed } => wallpaper::execute_set(folder.as_deref(), *seed),
            Commands::List { folder, json } => wallpaper::execute_list(folder.as_deref(), *json),
            Commands::Check { files, json } => wallpaper::execute_check(files, *json),
            Commands::Screen { json } => wallpaper::execute_screen(*json),
            Commands::Forget => {
                if state::forget()? {
                    println!("Forgot the remembered folder.");
                } else {
                    println!("No folder was remembered.");
                }
                Ok(())
            }
            Commands::Config(cmd) => config_cmd::execute(cmd),
            Commands::Schema => {
                println!("{}", schema::generate_schema_json());
                Ok(())
            }
            Commands::Completions { shell } => {
                Self::print_completions(*shell);
                Ok(())
            }
        }
    }

    /// Print shell completions to stdout.
    fn print_completions<G: Generator>(generator: G) {
        let mut cmd = Self::command();
        generate(generator, &mut cmd, "fitpaper", &mut io::stdout());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_set_with_folder() {
        let cli = Cli::try_parse_from(["fitpaper", "set", "/walls"]).unwrap();
        match cli.command {
            Commands::Set { folder, seed } => {
                assert_eq!(folder.as_deref(), Some("/walls"));
                assert!(seed.is_none());
            }
            _ => panic!("Expected Set command"),
        }
    }

    #[test]
    fn test_cli_parses_set_without_folder() {
        let cli = Cli::try_parse_from(["fitpaper", "set", "--seed", "42"]).unwrap();
        match cli.command {
            Commands::Set { folder, seed } => {
                assert!(folder.is_none());
                assert_eq!(seed, Some(42));
            }
            _ => panic!("Expected Set command"),
        }
    }

    #[test]
    fn test_cli_rejects_invalid_seed() {
        assert!(Cli::try_parse_from(["fitpaper", "set", "--seed", "abc"]).is_err());
    }

    #[test]
    fn test_cli_parses_list_json() {
        let cli = Cli::try_parse_from(["fitpaper", "list", "--json"]).unwrap();
        match cli.command {
            Commands::List { folder, json } => {
                assert!(folder.is_none());
                assert!(json);
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_cli_parses_check_multiple_files() {
        let cli = Cli::try_parse_from(["fitpaper", "check", "a.jpg", "b.png"]).unwrap();
        match cli.command {
            Commands::Check { files, json } => {
                assert_eq!(files, vec![PathBuf::from("a.jpg"), PathBuf::from("b.png")]);
                assert!(!json);
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_check_requires_a_file() {
        assert!(Cli::try_parse_from(["fitpaper", "check"]).is_err());
    }

    #[test]
    fn test_cli_parses_forget() {
        let cli = Cli::try_parse_from(["fitpaper", "forget"]).unwrap();
        assert!(matches!(cli.command, Commands::Forget));
    }

    #[test]
    fn test_cli_parses_global_flags() {
        let cli =
            Cli::try_parse_from(["fitpaper", "screen", "--verbose", "--config", "/tmp/c.jsonc"])
                .unwrap();
        assert!(cli.verbose());
        assert_eq!(cli.config.as_deref(), Some("/tmp/c.jsonc"));
    }

    #[test]
    fn test_cli_parses_completions_zsh() {
        let cli = Cli::try_parse_from(["fitpaper", "completions", "--shell", "zsh"]).unwrap();
        match cli.command {
            Commands::Completions { shell } => assert_eq!(shell, Shell::Zsh),
            _ => panic!("Expected Completions command"),
        }
    }

    #[test]
    fn test_cli_parses_config_init() {
        let cli = Cli::try_parse_from(["fitpaper", "config", "init", "--force"]).unwrap();
        match cli.command {
            Commands::Config(ConfigCommands::Init { force, .. }) => assert!(force),
            _ => panic!("Expected Config Init command"),
        }
    }

    #[test]
    fn test_cli_command_is_valid() { Cli::command().debug_assert(); }
}
