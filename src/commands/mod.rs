//! Command implementations for artmap CLI

pub mod completions;
pub mod migrate;
pub mod version;
