//! SWNR Author Tools
//!
//! Authoring utilities for a Foundry VTT system data package: generate
//! data-model boilerplate from a spreadsheet description, and backfill
//! `img` fields across YAML compendium pack files.

pub mod cli;
pub mod codegen;
pub mod packs;
