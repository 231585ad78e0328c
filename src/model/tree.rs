//! Provides the tree representation.
//!
//! * [Tree] - Rooted tree of arbitrary arity using the arena pattern,
//!   owning the [TaxonNamespace] of its leaves.
//! * [VertexIndex] as type used to index vertices in tree

use crate::model::taxon_namespace::{DuplicateTaxon, TaxonNamespace};
use crate::model::vertex::{BranchLength, Vertex};

/// Index of a vertex in a tree (arena).
pub type VertexIndex = usize;

// =$========================================================================$=
// TREE
// =$========================================================================$=
/// A rooted phylogenetic tree represented using the arena pattern on [Vertex].
///
/// Vertices are stored in a contiguous vector and referenced by
/// [VertexIndex].
///
/// # Structure
/// - All vertices are stored in the arena; the index of the root is maintained.
/// - No assumption on order of indices is maintained.
/// - Labeled leaves reference a taxon in the tree's own [TaxonNamespace];
///   internal vertices may carry plain labels that are not taxa.
///
/// # Construction
/// Bottom-up: add leaves, then internal vertices over already added children,
/// and finally mark the root with [`Tree::set_root`].
///
/// # Example
/// ```
/// use nwkcheck::model::Tree;
///
/// let mut tree = Tree::new();
/// let a = tree.add_leaf(Some("A"), Some(1.0)).unwrap();
/// let b = tree.add_leaf(Some("B"), Some(1.0)).unwrap();
/// let root = tree.add_internal(vec![a, b], Some("root".to_string()), None);
/// tree.set_root(root);
///
/// assert!(tree.is_valid());
/// assert!(tree.find_node_with_label("root").is_some());
/// assert!(tree.find_node_with_taxon_label("root").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Tree {
    /// Vertices of this tree (arena pattern)
    vertices: Vec<Vertex>,

    /// Index of the root of this tree, `None` during construction
    root_index: Option<VertexIndex>,

    /// Taxa referenced by the leaves of this tree
    taxon_namespace: TaxonNamespace,
}

// ============================================================================
// Construction (pub)
// ============================================================================
impl Tree {
    /// Creates a new empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty tree with capacity for `num_vertices` vertices.
    pub fn with_capacity(num_vertices: usize) -> Self {
        Tree {
            vertices: Vec::with_capacity(num_vertices),
            root_index: None,
            taxon_namespace: TaxonNamespace::with_capacity(num_vertices / 2 + 1),
        }
    }

    /// Adds a leaf to the tree, assigning a unique index, which gets returned.
    ///
    /// # Arguments
    /// * `taxon_label` - Label of the leaf, registered as taxon; `None` for an
    ///   unlabeled leaf
    /// * `branch_length` - Length of incoming branch
    ///
    /// # Errors
    /// Returns [DuplicateTaxon] if another leaf already carries this label.
    pub fn add_leaf(
        &mut self,
        taxon_label: Option<&str>,
        branch_length: Option<BranchLength>,
    ) -> Result<VertexIndex, DuplicateTaxon> {
        let taxon = taxon_label
            .map(|label| self.taxon_namespace.add_taxon(label))
            .transpose()?;
        let index = self.vertices.len();
        self.vertices
            .push(Vertex::new_leaf(index, taxon, branch_length));
        Ok(index)
    }

    /// Adds an internal vertex over the given children, assigning a unique
    /// index, which gets returned.
    ///
    /// # Panics
    /// Panics if any child index is out of bounds.
    pub fn add_internal(
        &mut self,
        children: Vec<VertexIndex>,
        label: Option<String>,
        branch_length: Option<BranchLength>,
    ) -> VertexIndex {
        let index = self.vertices.len();
        for &child in &children {
            self.vertices[child].set_parent(index);
        }
        self.vertices
            .push(Vertex::new_internal(index, children, label, branch_length));
        index
    }

    /// Marks the vertex at `index` as root.
    pub fn set_root(&mut self, index: VertexIndex) {
        self.root_index = Some(index);
    }
}

// ============================================================================
// Getters / Accessors, etc. (pub)
// ============================================================================
impl Tree {
    /// Returns a reference to the root vertex, `None` if not set.
    pub fn root(&self) -> Option<&Vertex> {
        self.root_index.map(|index| &self.vertices[index])
    }

    /// Returns a reference to the vertex at the given index.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn vertex(&self, index: VertexIndex) -> &Vertex {
        &self.vertices[index]
    }

    /// Returns the number of vertices in this tree.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of leaves in this tree.
    pub fn num_leaves(&self) -> usize {
        self.vertices.iter().filter(|v| v.is_leaf()).count()
    }

    /// Returns the number of internal vertices in this tree (root included).
    pub fn num_internal(&self) -> usize {
        self.vertices.iter().filter(|v| v.is_internal()).count()
    }

    /// Returns the taxon namespace of this tree.
    pub fn taxon_namespace(&self) -> &TaxonNamespace {
        &self.taxon_namespace
    }

    /// Returns the taxon label of a vertex, `None` if it is not a labeled leaf.
    pub fn taxon_label(&self, vertex: &Vertex) -> Option<&str> {
        vertex
            .taxon()
            .and_then(|taxon| self.taxon_namespace.get_label(taxon))
    }

    /// Returns the first vertex in pre-order whose plain node label equals `label`.
    ///
    /// Taxon labels of leaves are not considered.
    pub fn find_node_with_label(&self, label: &str) -> Option<&Vertex> {
        self.pre_order_iter().find(|v| v.label() == Some(label))
    }

    /// Returns the first vertex in pre-order whose taxon label equals `label`,
    /// ignoring case like all lookups in the [TaxonNamespace].
    pub fn find_node_with_taxon_label(&self, label: &str) -> Option<&Vertex> {
        let taxon = self.taxon_namespace.get_index(label)?;
        self.pre_order_iter().find(|v| v.taxon() == Some(taxon))
    }

    /// Validates the tree structure and all index references.
    ///
    /// Checks:
    /// - Root is set, in bounds, and has no parent
    /// - All vertex indices match their position in the arena
    /// - All child indices are valid and point back to correct parent
    /// - Every vertex is reachable from the root
    /// - Only leaves reference taxa, and only internal vertices carry labels
    pub fn is_valid(&self) -> bool {
        let Some(root_index) = self.root_index else {
            return false;
        };
        if root_index >= self.vertices.len() || !self.vertices[root_index].is_root() {
            return false;
        }

        for (index, vertex) in self.vertices.iter().enumerate() {
            if vertex.index() != index {
                return false;
            }
            if vertex.is_leaf() && vertex.label().is_some() {
                return false;
            }
            if vertex.is_internal() && vertex.taxon().is_some() {
                return false;
            }
            if let Some(taxon) = vertex.taxon() {
                if taxon >= self.taxon_namespace.num_taxa() {
                    return false;
                }
            }
            for &child in vertex.children() {
                if child >= self.vertices.len() || self.vertices[child].parent() != Some(index) {
                    return false;
                }
            }
        }

        self.pre_order_iter().count() == self.vertices.len()
    }
}

impl std::ops::Index<VertexIndex> for Tree {
    type Output = Vertex;

    fn index(&self, index: VertexIndex) -> &Self::Output {
        &self.vertices[index]
    }
}

// ============================================================================
// Traversal (pub)
// ============================================================================
impl Tree {
    /// Returns an iterator over the tree in pre-order (parents before children).
    ///
    /// Children are visited in their order of appearance.
    pub fn pre_order_iter(&self) -> PreOrderIter<'_> {
        PreOrderIter::new(self)
    }
}

/// Iterator for pre-order traversal (parents before children).
///
/// This iterator uses a stack-based approach to traverse the tree without recursion.
pub struct PreOrderIter<'a> {
    tree: &'a Tree,
    stack: Vec<VertexIndex>,
}

impl<'a> PreOrderIter<'a> {
    fn new(tree: &'a Tree) -> Self {
        let stack = tree.root_index.into_iter().collect();
        PreOrderIter { tree, stack }
    }
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = &'a Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let vertex = &self.tree[index];

        // Push children in reverse, so first child is processed first
        self.stack.extend(vertex.children().iter().rev());

        Some(vertex)
    }
}
