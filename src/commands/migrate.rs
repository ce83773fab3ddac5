//! Migrate command implementation
//!
//! Validates the mapping and copies every image under its new name, or with
//! `--dry-run` prints the planned copies without touching the output directory.

use console::Style;

use crate::cli::MigrateArgs;
use crate::config::MigrationPaths;
use crate::error::Result;
use crate::operations::{MigrateOperation, MigrateOptions, MigrateOutcome};
use crate::operations::migrate::CopyPlan;
use crate::ui::{display, reporter_for_terminal};

/// Run migrate command
pub fn run(paths: MigrationPaths, args: &MigrateArgs, verbose: bool) -> Result<()> {
    let options = MigrateOptions::from_args(args, verbose);
    let operation = MigrateOperation::new(paths, options);

    let mut reporter = reporter_for_terminal();
    match operation.execute(reporter.as_mut())? {
        MigrateOutcome::Copied(summary) => {
            if verbose {
                println!("Copied {} {}.", summary.copied, images_label(summary.copied));
            }
            display::display_success("All images processed successfully.");
        }
        MigrateOutcome::Planned(plan) => display_plan(&plan),
    }

    Ok(())
}

/// Display the copies a dry run would make
fn display_plan(plan: &CopyPlan) {
    if plan.is_empty() {
        println!("Nothing to copy.");
    }
    for step in plan.steps() {
        println!(
            "Would copy {} to {}",
            step.source.display(),
            step.destination.display()
        );
    }

    println!(
        "{} {} {} would be copied.",
        Style::new().bold().apply_to("Dry run:"),
        plan.len(),
        images_label(plan.len())
    );
}

fn images_label(count: usize) -> &'static str {
    if count == 1 { "image" } else { "images" }
}
