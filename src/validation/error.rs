//! Failures that prevent a verdict from being produced.

use crate::parser::ParsingError;
use std::path::PathBuf;
use thiserror::Error;

/// Setup failure of a validation run.
///
/// Problems with the submission itself are never a [SetupError]; they end up
/// as [InvalidReason](crate::validation::InvalidReason)s in the report.
#[derive(Error, Debug)]
pub enum SetupError {
    #[error("failed to load goldstandard tree from {}: {source}", .path.display())]
    Goldstandard {
        path: PathBuf,
        #[source]
        source: ParsingError,
    },

    #[error("failed to serialize validation report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write results to {}: {source}", .path.display())]
    WriteResults {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
