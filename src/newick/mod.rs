//! Newick format parser for phylogenetic trees.
//!
//! This module provides [NewickParser] to parse Newick format strings
//! into [Tree]s.
//!
//! # Quick API
//! For simple use cases with default settings:
//! * [`parse_file`] - parses a file, returns its first [Tree]
//! * [`parse_str`] - parses a single string, returns a [Tree]
//!
//! # Full API
//! For more control, configure a [NewickParser] and provide a [ByteParser]:
//! * [`NewickParser::parse_tree`] - parse a single tree
//! * [`NewickParser::parse_all`] - parse all trees until EOF
//! * [`NewickParser::parse_first`] - parse all trees, keep the first
//!
//! # Format
//! The accepted grammar:
//! * `tree ::= subtree ';'`
//! * `subtree ::= internal_vertex | leaf`
//! * `internal_vertex ::= '(' subtree { ',' subtree } ')' [label] [branch_length]`
//! * `leaf ::= [label] [branch_length]`
//! * `branch_length ::= ':' number`
//!
//! Furthermore:
//! * Vertices may have any number of children, and leaves may be unlabeled
//! * Labels are unquoted, or single quoted with `''` for a literal quote
//! * Leaf labels are taxa and must be unique within a tree, ignoring case;
//!   internal labels are plain node labels
//! * `_` in unquoted labels reads as a space unless underscores are preserved
//! * Whitespace can occur between elements,
//!   just not within an unquoted label or a branch_length
//! * Comments are square brackets and can occur anywhere where whitespace is allowed;
//!   annotations such as `[&R]` or `[&rate=0.5]` are treated as comments
//! * The final `;` of the last tree may be omitted

mod defs;
pub mod parser;

pub use parser::NewickParser;

use crate::model::Tree;
use crate::parser::ParsingError;
use crate::parser::byte_parser::ByteParser;
use std::path::Path;

// ============================================================================
// QUICK PARSING API (pub)
// ============================================================================
/// Parses a Newick file and returns its first tree.
///
/// This is a convenience function using default settings.
/// Every tree in the file has to be valid, even though only
/// the first one is returned.
///
/// # Arguments
/// * `path` - Path to the file (accepting `&str`, `String`, `Path`, or `PathBuf`)
///
/// # Returns
/// * [Tree] - First tree of the file
/// * [ParsingError] - If file reading fails, the file holds no tree,
///   or the Newick format is invalid
///
/// # Example
/// ```no_run
/// use nwkcheck::newick::parse_file;
///
/// let tree = parse_file("goldstandard.nwk")?;
/// println!("Goldstandard has {} cell lines", tree.taxon_namespace().num_taxa());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Tree, ParsingError> {
    let path = path.as_ref();
    let tree = NewickParser::new().read_file(path)?;
    tracing::debug!(
        path = %path.display(),
        num_taxa = tree.taxon_namespace().num_taxa(),
        "parsed newick file"
    );
    Ok(tree)
}

/// Parses a single Newick string to obtain a [Tree].
///
/// # Example
/// ```
/// use nwkcheck::newick::parse_str;
///
/// let tree = parse_str("(Fratercula_cirrhata,(Fratercula_arctica,Fratercula_corniculata));")?;
/// assert_eq!(tree.num_leaves(), 3);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse_str<S: AsRef<str>>(newick: S) -> Result<Tree, ParsingError> {
    let mut byte_parser = ByteParser::for_str(newick.as_ref());
    NewickParser::new().parse_tree(&mut byte_parser)
}
