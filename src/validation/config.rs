//! Configuration of a validation run.

use crate::newick::NewickParser;

/// Label identifying the root of a prediction tree
pub const DEFAULT_ROOT_LABEL: &str = "root";

/// Maximum number of characters of the joined error string in a result record
pub const DEFAULT_MAX_ERROR_CHARS: usize = 500;

/// Challenge round written to the result record
pub const DEFAULT_ROUND: u32 = 1;

/// Settings for validating a submission, built with `with_*` methods.
///
/// # Example
/// ```
/// use nwkcheck::validation::ValidationConfig;
///
/// let config = ValidationConfig::default().with_round(2);
/// assert_eq!(config.round(), 2);
/// assert_eq!(config.root_label(), "root");
/// assert_eq!(config.max_error_chars(), 500);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    root_label: String,
    max_error_chars: usize,
    round: u32,
    preserve_underscores: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            root_label: DEFAULT_ROOT_LABEL.to_string(),
            max_error_chars: DEFAULT_MAX_ERROR_CHARS,
            round: DEFAULT_ROUND,
            preserve_underscores: false,
        }
    }
}

impl ValidationConfig {
    /// Sets the label identifying the root.
    pub fn with_root_label<S: Into<String>>(mut self, root_label: S) -> Self {
        self.root_label = root_label.into();
        self
    }

    /// Sets the maximum number of characters of the joined error string.
    pub fn with_max_error_chars(mut self, max_error_chars: usize) -> Self {
        self.max_error_chars = max_error_chars;
        self
    }

    /// Sets the round written to the result record.
    pub fn with_round(mut self, round: u32) -> Self {
        self.round = round;
        self
    }

    /// Reads both trees keeping underscores in unquoted labels instead of
    /// converting them to spaces.
    pub fn with_preserve_underscores(mut self, preserve_underscores: bool) -> Self {
        self.preserve_underscores = preserve_underscores;
        self
    }

    pub fn root_label(&self) -> &str {
        &self.root_label
    }

    pub fn max_error_chars(&self) -> usize {
        self.max_error_chars
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn preserve_underscores(&self) -> bool {
        self.preserve_underscores
    }

    /// Returns the [NewickParser] used for both goldstandard and submission.
    pub fn newick_parser(&self) -> NewickParser {
        let mut parser = NewickParser::new();
        parser.set_preserve_underscores(self.preserve_underscores);
        parser
    }
}
