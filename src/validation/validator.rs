//! Structural and leaf-label checks of a prediction tree.

use crate::validation::config::DEFAULT_ROOT_LABEL;
use crate::validation::labeled_tree::LabeledTree;
use crate::validation::reason::InvalidReason;
use std::collections::HashSet;

// =#========================================================================#=
// TREE VALIDATOR
// =#========================================================================#=
/// Checks a prediction tree against a goldstandard tree.
///
/// A prediction tree needs exactly one representation of its root: either an
/// internal vertex labeled with the root label, or a taxon of that name.
/// It must further contain every goldstandard taxon; extra taxa are fine.
///
/// # Example
/// ```
/// use nwkcheck::newick::parse_str;
/// use nwkcheck::validation::TreeValidator;
///
/// let goldstandard = parse_str("((A,B),C);")?;
/// let prediction = parse_str("((A,B),(C,D))root;")?;
///
/// assert!(TreeValidator::new().validate_tree(&prediction, &goldstandard).is_empty());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct TreeValidator {
    root_label: String,
}

impl Default for TreeValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeValidator {
    /// Creates a validator looking for the default root label `root`.
    pub fn new() -> Self {
        Self::with_root_label(DEFAULT_ROOT_LABEL)
    }

    /// Creates a validator looking for the given root label.
    pub fn with_root_label<S: Into<String>>(root_label: S) -> Self {
        Self {
            root_label: root_label.into(),
        }
    }

    /// Returns the root label this validator looks for.
    pub fn root_label(&self) -> &str {
        &self.root_label
    }

    /// Validates a prediction tree against the goldstandard.
    ///
    /// # Returns
    /// The reasons the prediction is invalid, empty if valid. At most one
    /// reason is reported: root problems take precedence and skip the
    /// leaf-label check.
    pub fn validate_tree<P, G>(&self, prediction: &P, goldstandard: &G) -> Vec<InvalidReason>
    where
        P: LabeledTree,
        G: LabeledTree,
    {
        let root_node_exists = prediction.has_node_label(&self.root_label);
        let root_taxon_exists = prediction.has_taxon_label(&self.root_label);

        let mut invalid_reasons = Vec::new();
        match (root_node_exists, root_taxon_exists) {
            (false, false) => invalid_reasons.push(InvalidReason::MissingRoot {
                root_label: self.root_label.clone(),
            }),
            (true, true) => invalid_reasons.push(InvalidReason::MultipleRoots {
                root_label: self.root_label.clone(),
            }),
            _ => {
                if !self.valid_leaf_names(prediction, goldstandard) {
                    invalid_reasons.push(InvalidReason::LeafMismatch {
                        num_cell_lines: goldstandard.num_taxa(),
                    });
                }
            }
        }

        if !invalid_reasons.is_empty() {
            tracing::debug!(?invalid_reasons, "prediction tree rejected");
        }
        invalid_reasons
    }

    /// Checks that the prediction uses the correct leaf labels, i.e. that every
    /// goldstandard taxon is also a taxon of the prediction.
    ///
    /// A taxon named like the root label in the prediction is expected rather
    /// than a surplus label, so it is added to the goldstandard labels first.
    pub fn valid_leaf_names<P, G>(&self, prediction: &P, goldstandard: &G) -> bool
    where
        P: LabeledTree,
        G: LabeledTree,
    {
        let mut goldstandard_leaves: HashSet<&str> = goldstandard.taxon_labels().collect();
        if prediction.has_taxon_label(&self.root_label) {
            goldstandard_leaves.insert(self.root_label.as_str());
        }

        let prediction_leaves: HashSet<&str> = prediction.taxon_labels().collect();
        let missing = goldstandard_leaves.difference(&prediction_leaves).count();
        if missing > 0 {
            tracing::debug!(
                missing,
                required = goldstandard_leaves.len(),
                "prediction tree lacks goldstandard taxa"
            );
        }
        missing == 0
    }
}

/// Validates `prediction` against `goldstandard` with the default root label.
///
/// See [TreeValidator::validate_tree].
pub fn validate_tree<P: LabeledTree, G: LabeledTree>(
    prediction: &P,
    goldstandard: &G,
) -> Vec<InvalidReason> {
    TreeValidator::new().validate_tree(prediction, goldstandard)
}

/// Checks leaf labels of `prediction` against `goldstandard` with the default root label.
///
/// See [TreeValidator::valid_leaf_names].
pub fn valid_leaf_names<P: LabeledTree, G: LabeledTree>(prediction: &P, goldstandard: &G) -> bool {
    TreeValidator::new().valid_leaf_names(prediction, goldstandard)
}
