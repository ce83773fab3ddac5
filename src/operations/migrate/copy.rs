//! Copy phase of the migrate operation

use std::fs;
use std::path::Path;

use crate::error::{Result, fs as fs_error};
use crate::ui::ProgressReporter;

use super::validation::CopyPlan;

/// Result of a completed copy phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopySummary {
    pub copied: usize,
}

/// Copy every planned image into `output_dir`
///
/// The output directory is created first. Existing destination files are
/// overwritten. A failed copy stops the run and leaves earlier copies in place.
pub fn copy_images(
    plan: &CopyPlan,
    output_dir: &Path,
    reporter: &mut dyn ProgressReporter,
) -> Result<CopySummary> {
    fs::create_dir_all(output_dir).map_err(|e| fs_error::create_dir_failed(output_dir, e))?;

    reporter.start(plan.len() as u64);

    let mut copied = 0;
    for step in plan.steps() {
        if let Err(e) = fs::copy(&step.source, &step.destination) {
            reporter.abandon();
            return Err(fs_error::copy_failed(&step.source, &step.destination, e));
        }
        reporter.copied(&step.source, &step.destination);
        copied += 1;
    }

    reporter.finish();
    Ok(CopySummary { copied })
}
