//! Validation of a submitted file and writing of its result record.

use crate::validation::config::ValidationConfig;
use crate::validation::error::SetupError;
use crate::validation::reason::InvalidReason;
use crate::validation::report::ValidationReport;
use crate::validation::validator::TreeValidator;
use std::fs;
use std::path::Path;

/// Validates a submission file against the goldstandard file.
///
/// Everything wrong with the submission is reported as a verdict:
/// - no `submission` path: the entry is not a file, named by `entity_type`;
///   the goldstandard is not read at all
/// - unreadable or malformed Newick: single parse reason, no further checks
/// - otherwise the result of [TreeValidator::validate_tree]
///
/// The goldstandard is loaded before the submission and must be valid; any
/// failure to load it is a [SetupError].
///
/// # Arguments
/// * `submission` - Path of the submitted file, `None` if not a file entity
/// * `entity_type` - Entity type of the submission, used in the verdict only
/// * `goldstandard` - Path of the goldstandard Newick file
/// * `config` - Validation settings
pub fn validate_submission(
    submission: Option<&Path>,
    entity_type: &str,
    goldstandard: &Path,
    config: &ValidationConfig,
) -> Result<ValidationReport, SetupError> {
    let invalid_reasons = match submission {
        None => vec![InvalidReason::NotAFileEntity {
            entity_type: entity_type.to_string(),
        }],
        Some(path) => validate_file(path, goldstandard, config)?,
    };

    let report = ValidationReport::from_reasons(&invalid_reasons, config);
    if report.is_valid() {
        tracing::info!("submission validated");
    } else {
        tracing::warn!(num_reasons = invalid_reasons.len(), "submission invalid");
    }
    Ok(report)
}

/// Runs [validate_submission] and writes the report as JSON to `results`.
///
/// # Returns
/// The written report; a written report always counts as success,
/// whatever its status.
pub fn run(
    submission: Option<&Path>,
    entity_type: &str,
    goldstandard: &Path,
    results: &Path,
    config: &ValidationConfig,
) -> Result<ValidationReport, SetupError> {
    let report = validate_submission(submission, entity_type, goldstandard, config)?;
    write_report(&report, results)?;
    Ok(report)
}

/// Writes `report` as JSON to `path`, replacing any existing file.
pub fn write_report(report: &ValidationReport, path: &Path) -> Result<(), SetupError> {
    let json = report.to_json()?;
    fs::write(path, json).map_err(|source| SetupError::WriteResults {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "wrote results");
    Ok(())
}

fn validate_file(
    submission: &Path,
    goldstandard: &Path,
    config: &ValidationConfig,
) -> Result<Vec<InvalidReason>, SetupError> {
    let parser = config.newick_parser();
    let goldstandard_tree = parser
        .read_file(goldstandard)
        .map_err(|source| SetupError::Goldstandard {
            path: goldstandard.to_path_buf(),
            source,
        })?;
    tracing::debug!(
        num_cell_lines = goldstandard_tree.taxon_namespace().num_taxa(),
        "loaded goldstandard"
    );

    let invalid_reasons = match parser.read_file(submission) {
        Err(err) => vec![InvalidReason::InvalidNewick {
            details: err.to_string(),
        }],
        Ok(prediction_tree) => TreeValidator::with_root_label(config.root_label())
            .validate_tree(&prediction_tree, &goldstandard_tree),
    };
    Ok(invalid_reasons)
}
