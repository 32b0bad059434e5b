//! Compendium pack file maintenance
//!
//! Pack files are one YAML document per game item, kept under git, so
//! edits must not reflow untouched lines. The patcher reads structurally
//! to decide and edits textually to apply.

pub mod patcher;
pub mod scalar;

pub use patcher::{patch_file, PatchError, PatchOutcome};
