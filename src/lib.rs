//! Nwkcheck is a library and command line tool to validate phylogenetic
//! prediction trees in Newick format against a goldstandard tree.
//!
//! Core functionality provided:
//! - Newick: Parse Newick strings and files into rooted trees of arbitrary
//!   arity, keeping leaf labels (taxa) and internal node labels apart.
//!   See [crate::newick].
//! - Tree model: [Tree] arena with a per-tree
//!   [TaxonNamespace](crate::model::TaxonNamespace). See [crate::model].
//! - Validation: Check that a prediction has a single `root` and uses all
//!   goldstandard cell-line identifiers, and produce a JSON result record.
//!   See [crate::validation].
//!
//! # Usage patterns
//!
//! Check two parsed trees:
//! ```
//! use nwkcheck::{parse_newick_str, validate_tree};
//!
//! let goldstandard = parse_newick_str("((A,B),C);")?;
//! let prediction = parse_newick_str("((A,B),C)root;")?;
//! assert!(validate_tree(&prediction, &goldstandard).is_empty());
//!
//! let incomplete = parse_newick_str("(A,B)root;")?;
//! let reasons = validate_tree(&incomplete, &goldstandard);
//! assert!(reasons[0].to_string().contains("3 cell lines"));
//! # Ok::<(), nwkcheck::parser::ParsingError>(())
//! ```
//!
//! Validate files and write the result record:
//! ```no_run
//! use nwkcheck::validation::{run, ValidationConfig};
//! use std::path::Path;
//!
//! let report = run(
//!     Some(Path::new("prediction.nwk")),
//!     "org.sagebionetworks.repo.model.FileEntity",
//!     Path::new("goldstandard.nwk"),
//!     Path::new("results.json"),
//!     &ValidationConfig::default(),
//! )?;
//! println!("{}", report.prediction_file_status);
//! # Ok::<(), nwkcheck::validation::SetupError>(())
//! ```

pub mod cli;
pub mod model;
pub mod newick;
pub mod parser;
pub mod validation;

pub use crate::model::Tree;
pub use crate::validation::{InvalidReason, ValidationReport, ValidationStatus, validate_tree};

use crate::parser::ParsingError;
use std::path::Path;

// ============================================================================
// Quick Newick API
// ============================================================================
/// Parse a Newick string using default settings, returning a [Tree].
///
/// See [`newick::parse_str`] for full documentation.
pub fn parse_newick_str<S: AsRef<str>>(newick: S) -> Result<Tree, ParsingError> {
    newick::parse_str(newick)
}

/// Parse the first tree of a Newick file using default settings.
///
/// See [`newick::parse_file`] for full documentation.
pub fn parse_newick_file<P: AsRef<Path>>(path: P) -> Result<Tree, ParsingError> {
    newick::parse_file(path)
}
