//! High-level operations
//!
//! - MigrateOperation: load mapping, validate sources, copy under new names
//!
//! The operations coordinate with:
//! - Mapping: document loading (from mapping module)
//! - Config: resolved paths (from config module)
//! - UI: Progress reporting (from ui module)

pub mod migrate;

pub use migrate::{MigrateOperation, MigrateOptions, MigrateOutcome};
