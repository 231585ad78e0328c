//! Vertex module for phylogenetic tree representation.

use crate::model::taxon_namespace::TaxonIndex;
use crate::model::tree::VertexIndex;

/// Length of the edge from a vertex to its parent.
pub type BranchLength = f64;

// =#========================================================================#=
// VERTEX
// =#========================================================================#=
/// Represents a vertex (node) in a phylogenetic tree.
///
/// A vertex is either a leaf (no children) or internal (one or more
/// children); the root is the unique vertex without a parent.
///
/// # Invariants
/// - `index` is the position of the vertex in the tree arena
/// - `taxon` is only ever set on leaves
/// - `label` holds a plain node label and is only set on internal vertices;
///   leaf labels live in the [TaxonNamespace](crate::model::TaxonNamespace)
/// - `parent` is `None` only for the root (and during construction)
#[derive(PartialEq, Debug, Clone)]
pub struct Vertex {
    index: VertexIndex,
    parent: Option<VertexIndex>,
    children: Vec<VertexIndex>,
    label: Option<String>,
    taxon: Option<TaxonIndex>,
    branch_length: Option<BranchLength>,
}

impl Vertex {
    /// Creates a new leaf vertex.
    ///
    /// # Arguments
    /// * `index` - The unique index of this vertex in the tree (arena)
    /// * `taxon` - Taxon of this leaf, `None` for an unlabeled leaf
    /// * `branch_length` - Distance to parent
    pub fn new_leaf(
        index: VertexIndex,
        taxon: Option<TaxonIndex>,
        branch_length: Option<BranchLength>,
    ) -> Self {
        Vertex {
            index,
            parent: None,
            children: Vec::new(),
            label: None,
            taxon,
            branch_length,
        }
    }

    /// Creates a new internal vertex.
    ///
    /// # Arguments
    /// * `index` - The unique index of this vertex in the tree (arena)
    /// * `children` - Indices of child vertices; must be non-empty
    /// * `label` - Optional plain node label
    /// * `branch_length` - Distance to parent
    pub fn new_internal(
        index: VertexIndex,
        children: Vec<VertexIndex>,
        label: Option<String>,
        branch_length: Option<BranchLength>,
    ) -> Self {
        debug_assert!(!children.is_empty());
        Vertex {
            index,
            parent: None,
            children,
            label,
            taxon: None,
            branch_length,
        }
    }

    /// Returns the index of this vertex.
    pub fn index(&self) -> VertexIndex {
        self.index
    }

    /// Returns the index of the parent, `None` for the root.
    pub fn parent(&self) -> Option<VertexIndex> {
        self.parent
    }

    pub(crate) fn set_parent(&mut self, parent: VertexIndex) {
        self.parent = Some(parent);
    }

    /// Returns the child indices in order of appearance.
    pub fn children(&self) -> &[VertexIndex] {
        &self.children
    }

    /// Returns the plain node label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the taxon index if this is a labeled leaf.
    pub fn taxon(&self) -> Option<TaxonIndex> {
        self.taxon
    }

    /// Returns the branch length, if any.
    pub fn branch_length(&self) -> Option<BranchLength> {
        self.branch_length
    }

    /// Returns `true` if this vertex has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns `true` if this vertex has children.
    pub fn is_internal(&self) -> bool {
        !self.children.is_empty()
    }

    /// Returns `true` if this vertex has no parent.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
