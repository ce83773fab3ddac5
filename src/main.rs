//! artmap - art image migration helper
//!
//! Copies source images into an output directory under the names given by a
//! JSON mapping, after checking that every source image exists.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod error;
mod mapping;
mod operations;
mod ui;

use cli::{Cli, Commands, MigrateArgs};
use config::MigrationPaths;

fn main() {
    let cli = Cli::parse();
    let paths = MigrationPaths::from(&cli);

    let result = match cli.command {
        Some(Commands::Migrate(args)) => commands::migrate::run(paths, &args, cli.verbose),
        None => commands::migrate::run(paths, &MigrateArgs::default(), cli.verbose),
        Some(Commands::Version) => commands::version::run(),
        Some(Commands::Completions(args)) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
