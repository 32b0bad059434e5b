//! CLI command implementations

pub mod generate;
pub mod patch;
pub mod surgical;
