//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand};

use crate::cli::commands::{
    generate::GenerateArgs, patch::PatchImgArgs, surgical::SurgicalImgArgs,
};

#[derive(Parser)]
#[command(name = "swnr-tools")]
#[command(author, version, about = "SWNR system authoring utilities")]
#[command(long_about = "Authoring utilities for the SWNR Foundry VTT system: generate \
data-model boilerplate from a CSV description, and backfill img fields across YAML \
compendium pack files.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate data-model schema and form boilerplate from a CSV description
    Generate(GenerateArgs),

    /// Backfill img from prototypeToken.texture.src across pack files
    PatchImg(PatchImgArgs),

    /// Abandoned textual img patcher (kept for reference, always fails)
    SurgicalImg(SurgicalImgArgs),
}
