//! Reasons for rejecting a submission.

use thiserror::Error;

/// A single reason why a submitted prediction tree is invalid.
///
/// These are verdicts, not failures of the validator: they are collected,
/// rendered with [Display](std::fmt::Display) and written to the result record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidReason {
    /// The submission is not a file (e.g. a folder or project).
    #[error("Expected FileEntity type but found {entity_type}")]
    NotAFileEntity { entity_type: String },

    /// The submission could not be read or is not valid Newick.
    #[error("Prediction tree not a valid Newick tree format: {details}")]
    InvalidNewick { details: String },

    /// Neither an internal node nor a taxon is labeled as root.
    #[error("Prediction tree must contain '{root_label}' node")]
    MissingRoot { root_label: String },

    /// Both an internal node and a taxon are labeled as root.
    #[error("Prediction tree must have a single '{root_label}' node")]
    MultipleRoots { root_label: String },

    /// The submission does not cover all goldstandard taxa.
    #[error(
        "Prediction tree must use the correct identifier names, and contain {} cell lines.",
        format_thousands(.num_cell_lines)
    )]
    LeafMismatch { num_cell_lines: usize },
}

/// Formats `n` with `,` as thousands separator, e.g. `12345` as `12,345`.
pub(crate) fn format_thousands(n: &usize) -> String {
    let digits = n.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(ch);
    }
    formatted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(&0), "0");
        assert_eq!(format_thousands(&999), "999");
        assert_eq!(format_thousands(&1000), "1,000");
        assert_eq!(format_thousands(&1234567), "1,234,567");
    }

    #[test]
    fn test_messages() {
        let folder = InvalidReason::NotAFileEntity {
            entity_type: "folder".to_string(),
        };
        assert_eq!(folder.to_string(), "Expected FileEntity type but found folder");

        let mismatch = InvalidReason::LeafMismatch { num_cell_lines: 2048 };
        assert_eq!(
            mismatch.to_string(),
            "Prediction tree must use the correct identifier names, and contain 2,048 cell lines."
        );

        let missing = InvalidReason::MissingRoot {
            root_label: "root".to_string(),
        };
        assert_eq!(missing.to_string(), "Prediction tree must contain 'root' node");
    }
}
