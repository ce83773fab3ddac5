//! CLI definitions using clap derive API
//!
//! Argument types for each command live in their own submodule:
//! - migrate: Migrate command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{DEFAULT_INPUT_DIR, DEFAULT_MAP_PATH, DEFAULT_OUTPUT_DIR};

pub mod completions;
pub mod migrate;

pub use completions::CompletionsArgs;
pub use migrate::MigrateArgs;

/// artmap - copy art images into a renamed output set
///
/// Reads a JSON mapping of output filenames to source images, checks that every
/// source image exists, then copies each one into the output directory under its
/// new name.
#[derive(Parser, Debug)]
#[command(
    name = "artmap",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Copy art images into a renamed output set driven by a JSON mapping",
    long_about = "artmap reads a JSON mapping of output filenames to source images, verifies \
                  that every source image exists, and only then copies each image into the \
                  output directory under its new name. Nothing is copied if any source is missing.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  artmap                                 \x1b[90m# Migrate using the default paths\x1b[0m\n   \
                  artmap migrate --dry-run               \x1b[90m# Validate and show planned copies\x1b[0m\n   \
                  artmap -m map.json -i art -o nft       \x1b[90m# Use custom paths\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// JSON mapping of output filenames to source images
    #[arg(
        long,
        short = 'm',
        global = true,
        env = "ARTMAP_MAP",
        value_name = "FILE",
        default_value = DEFAULT_MAP_PATH
    )]
    pub map: PathBuf,

    /// Directory containing the source images
    #[arg(
        long,
        short = 'i',
        global = true,
        env = "ARTMAP_INPUT_DIR",
        value_name = "DIR",
        default_value = DEFAULT_INPUT_DIR
    )]
    pub input: PathBuf,

    /// Directory receiving the renamed copies (created if absent)
    #[arg(
        long,
        short = 'o',
        global = true,
        env = "ARTMAP_OUTPUT_DIR",
        value_name = "DIR",
        default_value = DEFAULT_OUTPUT_DIR
    )]
    pub output: PathBuf,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Command to run (defaults to migrate)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate the mapping and copy images under their new names
    Migrate(MigrateArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
