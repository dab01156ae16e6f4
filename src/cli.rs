use std::path::PathBuf;

use clap::Parser;

use crate::datefmt::{self, DisplayZone};
use crate::error::Result;
use crate::filler::ReportOptions;
use crate::locale::Language;

#[derive(Parser, Debug)]
#[command(
    name = "callreport",
    version,
    about = "Fill an xlsx call report template from a JSON call log",
    long_about = None
)]
pub struct Cli {
    /// Report template (.xlsx) containing the #tag cells
    pub template: PathBuf,

    /// JSON array of calls
    pub input: PathBuf,

    /// Where to write the filled report
    pub output: PathBuf,

    /// Generation date printed in the header (dd.mm.yyyy or yyyy-mm-dd); defaults to today
    #[arg(long)]
    pub date: Option<String>,

    /// Language of the report title and time units
    #[arg(long, value_enum, default_value_t = Language::Ru)]
    pub lang: Language,

    /// Template sheet holding the tags
    #[arg(long, default_value = "Sheet1")]
    pub sheet: String,

    /// Render call timestamps in UTC instead of local time
    #[arg(long)]
    pub utc: bool,
}

/// Everything a run needs, resolved once from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    pub template_path: PathBuf,
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub sheet: String,
    pub options: ReportOptions,
}

pub fn normalize(cli: Cli) -> Result<Config> {
    let generation_date = match cli.date.as_deref() {
        Some(value) => datefmt::parse_generation_date(value)?,
        None => datefmt::today(),
    };
    let zone = if cli.utc {
        DisplayZone::Utc
    } else {
        DisplayZone::Local
    };

    Ok(Config {
        template_path: cli.template,
        input_path: cli.input,
        output_path: cli.output,
        sheet: cli.sheet,
        options: ReportOptions {
            language: cli.lang,
            zone,
            generation_date,
        },
    })
}
