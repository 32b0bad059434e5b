//! `swnr-tools generate` command - CSV description to data-model boilerplate

use console::style;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use crate::codegen::{read_templates, render};

#[derive(clap::Args, Debug)]
pub struct GenerateArgs {
    /// CSV description to read (columns: Name / Template, New Type, Attribute, Sub)
    #[arg(long, short = 'i', default_value = "data.csv")]
    pub input: PathBuf,
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let file = File::open(&args.input)
        .map_err(|e| miette::miette!("cannot open {}: {}", args.input.display(), e))?;
    let templates = read_templates(BufReader::new(file)).into_diagnostic()?;

    // Generated blocks go to stdout so they can be redirected or piped
    for template in &templates {
        print!("{}", render(template));
    }

    eprintln!(
        "{} Generated {} template(s) from {}",
        style("→").blue(),
        templates.len(),
        args.input.display()
    );

    Ok(())
}
