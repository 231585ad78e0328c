//! The narrow view of a tree that validation needs.

use crate::model::Tree;

/// Label lookups a tree has to offer to be validated.
///
/// Node labels and taxon labels are separate namespaces: an internal vertex
/// labeled `root` is found by [has_node_label](Self::has_node_label), a leaf
/// named `root` by [has_taxon_label](Self::has_taxon_label).
pub trait LabeledTree {
    /// Returns `true` if some vertex carries `label` as plain node label.
    fn has_node_label(&self, label: &str) -> bool;

    /// Returns `true` if some leaf is bound to a taxon labeled `label`.
    /// For a [Tree] the match ignores case.
    fn has_taxon_label(&self, label: &str) -> bool;

    /// Enumerates the taxon labels of the tree, each once.
    fn taxon_labels(&self) -> impl Iterator<Item = &str>;

    /// Number of taxa of the tree.
    fn num_taxa(&self) -> usize {
        self.taxon_labels().count()
    }
}

impl LabeledTree for Tree {
    fn has_node_label(&self, label: &str) -> bool {
        self.find_node_with_label(label).is_some()
    }

    fn has_taxon_label(&self, label: &str) -> bool {
        self.find_node_with_taxon_label(label).is_some()
    }

    fn taxon_labels(&self) -> impl Iterator<Item = &str> {
        self.taxon_namespace().labels()
    }

    fn num_taxa(&self) -> usize {
        self.taxon_namespace().num_taxa()
    }
}
