//! Progress presentation layer
//!
//! Copy progress goes through the [`ProgressReporter`] trait:
//! - [`InteractiveProgressReporter`] draws an indicatif bar on stderr and
//!   prints one line per copied file on stdout
//! - [`PlainProgressReporter`] prints only the per-file lines, for pipes and CI

pub mod display;

use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter for the copy phase
pub trait ProgressReporter {
    /// Called once before the first copy with the number of files to copy
    fn start(&mut self, total_files: u64);

    /// Called after each successful copy
    fn copied(&mut self, from: &Path, to: &Path);

    /// Called after the last copy
    fn finish(&mut self);

    /// Called when a copy fails part-way through
    fn abandon(&mut self);
}

/// Line printed for every copied file
pub fn copied_line(from: &Path, to: &Path) -> String {
    format!("Copied {} to {}", from.display(), to.display())
}

/// Pick a reporter for the current stderr
pub fn reporter_for_terminal() -> Box<dyn ProgressReporter> {
    if console::Term::stderr().is_term() {
        Box::new(InteractiveProgressReporter::new())
    } else {
        Box::new(PlainProgressReporter)
    }
}

/// Progress reporter with a visual progress bar
pub struct InteractiveProgressReporter {
    file_pb: ProgressBar,
}

impl InteractiveProgressReporter {
    pub fn new() -> Self {
        let file_style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} files {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let file_pb = ProgressBar::new(0);
        file_pb.set_style(file_style);

        Self { file_pb }
    }
}

impl Default for InteractiveProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for InteractiveProgressReporter {
    fn start(&mut self, total_files: u64) {
        self.file_pb.set_length(total_files);
    }

    fn copied(&mut self, from: &Path, to: &Path) {
        let line = copied_line(from, to);
        self.file_pb.suspend(|| println!("{line}"));

        // Truncate long names for display
        let name = to.file_name().map_or_else(
            || to.display().to_string(),
            |n| n.to_string_lossy().into_owned(),
        );
        let chars: Vec<char> = name.chars().collect();
        let display_name = if chars.len() > 50 {
            let tail: String = chars[chars.len() - 47..].iter().collect();
            format!("...{tail}")
        } else {
            name
        };
        self.file_pb.set_message(display_name);
        self.file_pb.inc(1);
    }

    fn finish(&mut self) {
        self.file_pb.finish_and_clear();
    }

    fn abandon(&mut self) {
        self.file_pb.abandon();
    }
}

/// Progress reporter printing only the per-file lines
#[derive(Default)]
pub struct PlainProgressReporter;

impl ProgressReporter for PlainProgressReporter {
    fn start(&mut self, _total_files: u64) {}

    fn copied(&mut self, from: &Path, to: &Path) {
        println!("{}", copied_line(from, to));
    }

    fn finish(&mut self) {}

    fn abandon(&mut self) {}
}
