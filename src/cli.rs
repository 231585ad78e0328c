//! Command line interface of the `nwkcheck` binary.

use crate::validation::{self, SetupError, ValidationConfig, ValidationReport};
use clap::Parser;
use std::path::PathBuf;

/// Validate a Newick prediction tree against a goldstandard tree.
///
/// Always writes a JSON result record to the results file; an invalid
/// submission is a verdict, not a failure.
#[derive(Parser, Debug)]
#[command(name = "nwkcheck", version, about)]
pub struct Cli {
    /// Submission file; absent if the submission is not a file entity
    #[arg(short = 's', long = "submission_file")]
    pub submission_file: Option<PathBuf>,

    /// Goldstandard (truth) Newick file
    #[arg(short = 'g', long = "goldstandard")]
    pub goldstandard: PathBuf,

    /// Synapse entity type of the submission
    #[arg(short = 'e', long = "entity_type")]
    pub entity_type: String,

    /// Results file to write the JSON record to
    #[arg(short = 'r', long = "results")]
    pub results: PathBuf,

    /// Round written to the result record
    #[arg(long, default_value_t = validation::config::DEFAULT_ROUND)]
    pub round: u32,

    /// Keep underscores in unquoted labels instead of reading them as spaces
    #[arg(long)]
    pub preserve_underscores: bool,
}

impl Cli {
    /// Returns the validation settings selected on the command line.
    pub fn config(&self) -> ValidationConfig {
        ValidationConfig::default()
            .with_round(self.round)
            .with_preserve_underscores(self.preserve_underscores)
    }

    /// Returns the submission path, `None` if not given.
    pub fn submission(&self) -> Option<&std::path::Path> {
        self.submission_file.as_deref()
    }

    /// Validates the submission and writes the result record.
    pub fn run(&self) -> Result<ValidationReport, SetupError> {
        validation::run(
            self.submission(),
            &self.entity_type,
            &self.goldstandard,
            &self.results,
            &self.config(),
        )
    }
}
