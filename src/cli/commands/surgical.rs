//! `swnr-tools surgical-img` command - abandoned textual img patcher

use miette::Result;
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
pub struct SurgicalImgArgs {
    /// Directory the patcher would have processed
    pub directory: Option<PathBuf>,
}

pub fn run(_args: SurgicalImgArgs) -> Result<()> {
    // The insert-after-first-root-key edit this command attempted lives on
    // inside `patch-img`. The standalone version never got working; the
    // entry point stays so old invocations fail loudly instead of half
    // rewriting a pack.
    miette::bail!("surgical-img never got working; kept as reference. Use `swnr-tools patch-img` instead.")
}
