//! Validation of prediction trees against a goldstandard tree.
//!
//! # Rules
//! A prediction tree is valid if
//! 1. it has exactly one representation of its root: an internal vertex
//!    labeled `root`, or a taxon named `root` (but not both), and
//! 2. its taxa include every goldstandard taxon. A `root` taxon of the
//!    prediction counts as expected label; additional taxa are allowed.
//!
//! # Entry points
//! * [TreeValidator] / [validate_tree] - check two parsed trees,
//!   generic over [LabeledTree]
//! * [validate_submission] - load both files and produce a [ValidationReport]
//! * [run] - as above and write the report as JSON
//!
//! Every problem with a submission is an [InvalidReason] in the report;
//! only goldstandard or output problems are a [SetupError].

pub mod config;
pub mod error;
pub mod labeled_tree;
pub mod reason;
pub mod report;
pub mod submission;
pub mod validator;

pub use config::ValidationConfig;
pub use error::SetupError;
pub use labeled_tree::LabeledTree;
pub use reason::InvalidReason;
pub use report::{ValidationReport, ValidationStatus};
pub use submission::{run, validate_submission, write_report};
pub use validator::{TreeValidator, valid_leaf_names, validate_tree};
