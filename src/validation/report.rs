//! The result record of a validation run.

use crate::validation::config::ValidationConfig;
use crate::validation::reason::InvalidReason;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Verdict of a validation run.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationStatus {
    Validated,
    Invalid,
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ValidationStatus::Validated => write!(f, "VALIDATED"),
            ValidationStatus::Invalid => write!(f, "INVALID"),
        }
    }
}

/// Result record written for each submission.
///
/// Serializes to
/// `{"prediction_file_errors": "...", "prediction_file_status": "VALIDATED", "round": 1}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Reasons joined by newlines, truncated to the configured number of characters
    pub prediction_file_errors: String,
    pub prediction_file_status: ValidationStatus,
    pub round: u32,
}

impl ValidationReport {
    /// Builds the record for the given reasons; no reasons means `VALIDATED`.
    pub fn from_reasons(invalid_reasons: &[InvalidReason], config: &ValidationConfig) -> Self {
        let joined = invalid_reasons
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");

        let prediction_file_status = if invalid_reasons.is_empty() {
            ValidationStatus::Validated
        } else {
            ValidationStatus::Invalid
        };

        Self {
            prediction_file_errors: truncate_chars(&joined, config.max_error_chars()),
            prediction_file_status,
            round: config.round(),
        }
    }

    /// Returns `true` if the submission passed validation.
    pub fn is_valid(&self) -> bool {
        self.prediction_file_status == ValidationStatus::Validated
    }

    /// Serializes the record to its JSON form.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Keeps the first `max_chars` characters (not bytes) of `s`.
fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((byte_index, _)) => s[..byte_index].to_string(),
        None => s.to_string(),
    }
}
