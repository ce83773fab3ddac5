//! Styled console output
//!
//! Normal output goes to stdout, warnings to stderr.

use console::Style;

use crate::config::MigrationPaths;
use crate::mapping::ArtEntry;

/// Display the resolved paths (verbose mode)
pub fn display_paths(paths: &MigrationPaths) {
    let label = Style::new().bold();
    println!("{} {}", label.apply_to("Mapping:"), paths.map_path.display());
    println!("{} {}", label.apply_to("Input:"), paths.input_dir.display());
    println!("{} {}", label.apply_to("Output:"), paths.output_dir.display());
}

/// Display one mapping entry as it is checked (verbose mode)
pub fn display_entry(entry: &ArtEntry) {
    let record = serde_json::to_string(&entry.record).unwrap_or_else(|_| entry.record.image.clone());
    println!("{}", Style::new().bold().yellow().apply_to(&entry.key));
    println!("  {}", Style::new().dim().apply_to(record));
}

/// Display a non-fatal warning on stderr
pub fn display_warning(message: &str) {
    eprintln!(
        "{} {}",
        Style::new().bold().yellow().apply_to("Warning:"),
        message
    );
}

/// Display the final success line
pub fn display_success(message: &str) {
    println!("{}", Style::new().bold().green().apply_to(message));
}
