//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Version string: crate version plus git SHA and build date for dev
/// builds, clean version for official `release` builds.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", ",
    env!("FTV_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Flight telemetry viewer: replay and report `.ast` flight logs.
#[derive(Debug, Parser)]
#[command(name = "ftv", version = VERSION, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Play a flight log in the terminal
    Play {
        /// Path to the `.ast` flight log
        file: PathBuf,

        /// Playback speed multiplier (0.1-16)
        #[arg(short, long)]
        speed: Option<f64>,
    },

    /// Show the flight card and a log summary
    Info {
        /// Path to the `.ast` flight log
        file: PathBuf,
    },

    /// Export per-sensor time-series report pages
    Report {
        /// Path to the `.ast` flight log
        file: PathBuf,

        /// Output directory (default: derived from the rocket name)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show or edit the configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the current configuration as TOML
    Show,
    /// Open the config file in $EDITOR
    Edit,
    /// Print the config file path
    Path,
}
