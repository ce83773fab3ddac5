//! Migrate operation
//!
//! Load the mapping, validate every source image, then copy. Validation
//! finishes before the copy phase starts, so a missing image means nothing
//! is copied.

pub mod copy;
pub mod validation;

pub use copy::CopySummary;
pub use validation::CopyPlan;

use crate::cli::MigrateArgs;
use crate::config::MigrationPaths;
use crate::error::Result;
use crate::mapping::ArtMap;
use crate::ui::{ProgressReporter, display};

/// Options for the migrate operation
#[derive(Debug, Clone, Copy, Default)]
pub struct MigrateOptions {
    pub dry_run: bool,
    pub verbose: bool,
}

impl MigrateOptions {
    pub fn from_args(args: &MigrateArgs, verbose: bool) -> Self {
        Self {
            dry_run: args.dry_run,
            verbose,
        }
    }
}

/// What a migrate run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrateOutcome {
    /// Images were copied
    Copied(CopySummary),
    /// Dry run: validated plan, nothing copied
    Planned(CopyPlan),
}

/// Orchestrator for the migrate operation
pub struct MigrateOperation {
    paths: MigrationPaths,
    options: MigrateOptions,
}

impl MigrateOperation {
    pub fn new(paths: MigrationPaths, options: MigrateOptions) -> Self {
        Self { paths, options }
    }

    pub fn execute(&self, reporter: &mut dyn ProgressReporter) -> Result<MigrateOutcome> {
        if self.options.verbose {
            display::display_paths(&self.paths);
        }

        let map = ArtMap::load(&self.paths.map_path)?;
        if self.options.verbose && map.is_empty() {
            println!("Mapping has no entries.");
        }

        let verbose = self.options.verbose;
        let plan = validation::validate_sources(&map, &self.paths, |entry| {
            if verbose {
                display::display_entry(entry);
            }
        })?;

        for key in validation::keys_without_extension(&map) {
            display::display_warning(&format!(
                "output name '{key}' has no file extension; it is copied as-is"
            ));
        }

        if self.options.dry_run {
            return Ok(MigrateOutcome::Planned(plan));
        }

        let summary = copy::copy_images(&plan, self.paths.output_dir(), reporter)?;
        Ok(MigrateOutcome::Copied(summary))
    }
}
