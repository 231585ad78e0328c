//! Data model for rooted phylogenetic trees.
//!
//! # Tree representation
//! Trees are represented by [Tree], which uses the arena pattern to store
//! [Vertex] nodes referenced by [VertexIndex]. Vertices may have any number
//! of children, so multifurcating trees and single-leaf trees are supported.
//!
//! # Label handling
//! Two kinds of labels exist and are kept apart:
//! - Leaf labels are taxa, stored once per tree in its [TaxonNamespace]
//!   and referenced from leaves by [TaxonIndex].
//! - Internal vertex labels (e.g. `(A,B)root;`) are plain node labels.
//!
//! The [validation](crate::validation) module relies on exactly this distinction
//! to decide how a `root` is represented in a tree.

pub mod taxon_namespace;
pub mod tree;
pub mod vertex;

pub use taxon_namespace::{DuplicateTaxon, TaxonIndex, TaxonNamespace};
pub use tree::{PreOrderIter, Tree, VertexIndex};
pub use vertex::{BranchLength, Vertex};
