//! Taxon namespace of a phylogenetic tree.
//!
//! - [TaxonNamespace]: Ordered storage and lookup for the leaf labels (taxa) of a tree.

use std::collections::HashMap;
use thiserror::Error;

/// Index of a taxon in a [TaxonNamespace].
pub type TaxonIndex = usize;

/// Returned when a taxon label is added to a namespace that already holds it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("taxon '{0}' already present in namespace")]
pub struct DuplicateTaxon(pub String);

// =#========================================================================#=
// TAXON NAMESPACE
// =#========================================================================#=
/// Maps taxon labels (strings) to compact indices, in order of first insertion.
///
/// Every labeled leaf of a [Tree](crate::model::Tree) references exactly one
/// taxon; no two leaves of one tree share a taxon.
///
/// Labels are stored as given, but lookups and the duplicate check ignore
/// case: `HeLa` and `HELA` name the same taxon.
///
/// # Example
/// ```
/// use nwkcheck::model::TaxonNamespace;
///
/// let mut taxa = TaxonNamespace::with_capacity(3);
/// let idx_a = taxa.add_taxon("HCC1954").unwrap(); // idx_a = 0
/// let idx_b = taxa.add_taxon("MCF7").unwrap();    // idx_b = 1
///
/// assert!(taxa.add_taxon("hcc1954").is_err());
/// assert_eq!(taxa.get_label(idx_b), Some("MCF7"));
/// assert_eq!(taxa.get_index("HCC1954"), Some(idx_a));
/// assert_eq!(taxa.get_index("mcf7"), Some(idx_b));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TaxonNamespace {
    /// List of unique labels
    labels: Vec<String>,
    /// Map from case-folded label to its index
    map: HashMap<String, TaxonIndex>,
}

impl TaxonNamespace {
    /// Creates an empty namespace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty namespace with pre-allocated capacity.
    pub fn with_capacity(num_taxa: usize) -> Self {
        TaxonNamespace {
            labels: Vec::with_capacity(num_taxa),
            map: HashMap::with_capacity(num_taxa),
        }
    }

    /// Adds a new taxon and returns its index.
    ///
    /// # Errors
    /// Returns [DuplicateTaxon] if `label` is already in the namespace,
    /// in any letter case.
    pub fn add_taxon(&mut self, label: &str) -> Result<TaxonIndex, DuplicateTaxon> {
        let key = fold_case(label);
        if self.map.contains_key(&key) {
            return Err(DuplicateTaxon(label.to_string()));
        }
        let idx = self.labels.len();
        self.labels.push(label.to_string());
        self.map.insert(key, idx);
        Ok(idx)
    }

    /// Retrieves the index for a given label ignoring case, `None` if absent.
    pub fn get_index(&self, label: &str) -> Option<TaxonIndex> {
        self.map.get(&fold_case(label)).copied()
    }

    /// Retrieves the label for a given index, `None` if out of range.
    pub fn get_label(&self, index: TaxonIndex) -> Option<&str> {
        self.labels.get(index).map(|s| s.as_str())
    }

    /// Checks if a label exists in the namespace, ignoring case.
    pub fn contains_label(&self, label: &str) -> bool {
        self.get_index(label).is_some()
    }

    /// Returns the number of taxa.
    pub fn num_taxa(&self) -> usize {
        self.labels.len()
    }

    /// Iterates over the labels in insertion order, as written.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(|s| s.as_str())
    }
}

fn fold_case(label: &str) -> String {
    label.to_lowercase()
}

impl std::ops::Index<TaxonIndex> for TaxonNamespace {
    type Output = str;

    fn index(&self, index: TaxonIndex) -> &Self::Output {
        &self.labels[index]
    }
}
