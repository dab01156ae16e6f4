pub mod aggregate;
pub mod cli;
pub mod datefmt;
pub mod duration;
pub mod error;
pub mod filler;
pub mod locale;
pub mod model;
pub mod template;

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::cli::{Cli, Config, normalize};
use crate::template::Template;

/// Loads the calls, fills the template and saves it. Nothing is written to
/// the output path unless every step succeeded.
pub fn generate(config: &Config) -> Result<PathBuf> {
    let calls = model::load_calls(&config.input_path)
        .context("cannot load calls")?;
    let aggregates = aggregate::aggregate(&calls)?;
    tracing::debug!(?aggregates, "computed aggregates");

    let mut template = Template::open(&config.template_path, &config.sheet)?;
    filler::fill_report(&mut template, &calls, &aggregates, &config.options)
        .with_context(|| format!("cannot fill report from {}", template.path().display()))?;

    template.save(&config.output_path)?;
    Ok(config.output_path.clone())
}

pub fn run(args: impl IntoIterator<Item = OsString>) -> Result<()> {
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => err.exit(),
    };

    let config = normalize(cli)?;
    let out = generate(&config)?;
    println!("Report saved to: {}", out.display());
    Ok(())
}
