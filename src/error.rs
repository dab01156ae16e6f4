use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a report run.
///
/// None of these are recoverable: the run stops at the first one and the
/// template is never saved.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("cannot read call data {}: {source}", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot decode call data {}: {source}", path.display())]
    InputDecode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("call data {} contains no calls", path.display())]
    EmptyDataset { path: PathBuf },

    #[error("no calls to report")]
    NoCalls,

    #[error("total talk time overflows after {calls} calls")]
    TalkTimeOverflow { calls: usize },

    #[error("cannot open template {}: {message}", path.display())]
    TemplateOpen { path: PathBuf, message: String },

    #[error("tag {tag} wasn't found in {}", template.display())]
    TagNotFound { tag: String, template: PathBuf },

    #[error("cannot write cell {address}: {message}")]
    TemplateWrite { address: String, message: String },

    #[error("cannot save report {}: {message}", path.display())]
    TemplateSave { path: PathBuf, message: String },

    #[error("timestamp {0} is out of range")]
    TimestampOutOfRange(i64),

    #[error("invalid date {0:?}, expected dd.mm.yyyy or yyyy-mm-dd")]
    InvalidDate(String),
}

pub type Result<T, E = ReportError> = std::result::Result<T, E>;
