//! `swnr-tools patch-img` command - backfill img across pack files

use console::style;
use miette::Result;
use std::path::PathBuf;
use walkdir::WalkDir;

use crate::packs::patcher::is_pack_file;
use crate::packs::{patch_file, PatchOutcome};

#[derive(clap::Args, Debug)]
pub struct PatchImgArgs {
    /// Directory of pack files to process (recursively)
    pub directory: PathBuf,

    /// Report what would change without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

/// Patch statistics
#[derive(Default)]
struct PatchStats {
    files_scanned: usize,
    files_patched: usize,
    mismatches: usize,
    errors: usize,
}

pub fn run(args: PatchImgArgs) -> Result<()> {
    if !args.directory.is_dir() {
        miette::bail!("{} is not a directory", args.directory.display());
    }

    let mut stats = PatchStats::default();

    for entry in WalkDir::new(&args.directory)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !entry.file_type().is_file() || !is_pack_file(path) {
            continue;
        }
        stats.files_scanned += 1;

        // Best-effort across many files: a bad file is reported and the
        // walk moves on.
        match patch_file(path, args.dry_run) {
            Ok(PatchOutcome::Added(src)) => {
                let verb = if args.dry_run { "Would add" } else { "Added" };
                println!(
                    "{} {} img to {}: {}",
                    style("✓").green(),
                    verb,
                    path.display(),
                    src
                );
                stats.files_patched += 1;
            }
            Ok(PatchOutcome::Mismatch { img, src }) => {
                println!(
                    "{} Mismatch in {}: img='{}' vs texture.src='{}'",
                    style("!").yellow(),
                    path.display(),
                    img,
                    src
                );
                stats.mismatches += 1;
            }
            Ok(PatchOutcome::Skipped) => {}
            Err(e) => {
                println!("{} {} - {}", style("✗").red(), path.display(), e);
                stats.errors += 1;
            }
        }
    }

    println!(
        "{} {} file(s) scanned, {} patched, {} mismatched, {} errored",
        style("→").blue(),
        stats.files_scanned,
        stats.files_patched,
        stats.mismatches,
        stats.errors
    );

    Ok(())
}
