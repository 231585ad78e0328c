//! Structs and logic to parse Newick strings.
//!
//! This module provides the [NewickParser] struct, which offers methods
//! to parse files or single strings into [Tree]s.

use crate::model::{BranchLength, Tree, VertexIndex};
use crate::newick::defs::{DEFAULT_NUM_VERTICES_GUESS, NEWICK_LABEL_DELIMITERS};
use crate::parser::byte_parser::ByteParser;
use crate::parser::byte_source::ByteSource;
use crate::parser::parsing_error::{ParsingError, ParsingErrorType};
use std::path::Path;

// =#========================================================================#=
// NEWICK PARSER
// =#========================================================================#=
/// Parser (configuration) for single/multiple Newick format phylogenetic trees.
///
/// Each parsed [Tree] gets its own taxon namespace; the leaf labels of a
/// tree must be unique.
///
/// # Configuration
/// By default `_` in unquoted labels is read as a space, so `A_B` and
/// `'A B'` name the same taxon. Quoted labels are always kept verbatim.
/// * [`with_preserved_underscores()`](Self::with_preserved_underscores)
///     - Keeps `_` in unquoted labels as is.
///
/// # Parsing
/// * [`parse_tree`](Self::parse_tree) - Parse single tree
/// * [`parse_all`](Self::parse_all) - Parse all trees eagerly
/// * [`parse_first`](Self::parse_first) - Parse all trees, keep the first
/// * [`read_file`](Self::read_file) - Parse first tree of a file
///
/// # Example
/// ```
/// use nwkcheck::newick::NewickParser;
/// use nwkcheck::parser::ByteParser;
///
/// let input = "((HCC1954:1.0,MCF7:1.0):0.5,(A549,HeLa,K562)inner)root;";
/// let mut byte_parser = ByteParser::for_str(input);
/// let tree = NewickParser::new().parse_tree(&mut byte_parser).unwrap();
///
/// assert_eq!(tree.num_leaves(), 5);
/// assert!(tree.find_node_with_label("root").is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct NewickParser {
    preserve_underscores: bool,
}

// ============================================================================
// Construction & Configuration (pub)
// ============================================================================
impl NewickParser {
    /// Creates a new [NewickParser] reading unquoted underscores as spaces.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the parser to keep underscores in unquoted labels.
    pub fn with_preserved_underscores(mut self) -> Self {
        self.preserve_underscores = true;
        self
    }

    /// Configures whether or not to keep underscores in unquoted labels.
    pub fn set_preserve_underscores(&mut self, preserve_underscores: bool) -> &mut Self {
        self.preserve_underscores = preserve_underscores;
        self
    }
}

// ============================================================================
// API Parsing (pub)
// ============================================================================
impl NewickParser {
    /// Reads the file at `path` and parses its first tree.
    ///
    /// All trees in the file must be valid Newick, as with
    /// [parse_first](Self::parse_first).
    ///
    /// # Errors
    /// A [ParsingError] of kind `IoError` if reading fails, `NoTree` if the
    /// file holds no tree, or any syntax error.
    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> Result<Tree, ParsingError> {
        let byte_parser = ByteParser::from_file(path)?;
        self.parse_first(byte_parser)
    }

    /// Parses all trees in the byte source and returns the first one.
    pub fn parse_first<B: ByteSource>(
        &self,
        byte_parser: ByteParser<B>,
    ) -> Result<Tree, ParsingError> {
        self.parse_all(byte_parser)?
            .into_iter()
            .next()
            .ok_or_else(|| ParsingError::without_context(ParsingErrorType::NoTree))
    }

    /// Parses all Newick trees from the byte source until EOF.
    ///
    /// # Arguments
    /// * `byte_parser` - A byte parser with underlying source containing only
    ///   Newick strings, except for whitespace and `[...]` comments.
    ///
    /// # Returns
    /// * `Ok(Vec<Tree>)` - All parsed trees (possibly none)
    /// * `Err(ParsingError)` - If any tree fails to parse
    pub fn parse_all<B: ByteSource>(
        &self,
        mut byte_parser: ByteParser<B>,
    ) -> Result<Vec<Tree>, ParsingError> {
        let mut trees = Vec::new();
        loop {
            byte_parser.skip_comment_and_whitespace()?;
            if byte_parser.is_eof() {
                break;
            }
            trees.push(self.parse_tree(&mut byte_parser)?);
        }
        Ok(trees)
    }

    /// Parses a single Newick tree from the given [ByteParser].
    ///
    /// Nesting is tracked on an explicit stack, so deeply nested
    /// (e.g. caterpillar) trees don't exhaust the call stack.
    /// A missing `;` is accepted only directly before EOF.
    ///
    /// # Arguments
    /// * `parser` - The byte parser positioned at the start of a Newick tree string
    ///
    /// # Returns
    /// * `Ok(Tree)` - The parsed phylogenetic tree
    /// * `Err(ParsingError)` - If the Newick format is invalid
    pub fn parse_tree<B: ByteSource>(
        &self,
        parser: &mut ByteParser<B>,
    ) -> Result<Tree, ParsingError> {
        let mut tree = Tree::with_capacity(DEFAULT_NUM_VERTICES_GUESS);

        parser.skip_comment_and_whitespace()?;
        if parser.is_eof() {
            return Err(ParsingError::unexpected_eof(parser));
        }

        // Children collected so far for each currently open '('
        let mut open: Vec<Vec<VertexIndex>> = Vec::new();

        let root_index = 'subtree: loop {
            parser.skip_comment_and_whitespace()?;
            if parser.consume_if(b'(') {
                open.push(Vec::new());
                continue;
            }

            let mut current = self.parse_leaf(parser, &mut tree)?;

            // Attach finished subtree, closing as many parentheses as possible
            loop {
                parser.skip_comment_and_whitespace()?;
                let Some(children) = open.last_mut() else {
                    break 'subtree current;
                };

                if parser.consume_if(b',') {
                    children.push(current);
                    continue 'subtree;
                }

                if parser.consume_if(b')') {
                    children.push(current);
                    let children = open.pop().unwrap_or_default();
                    current = self.parse_internal_vertex(parser, &mut tree, children)?;
                    continue;
                }

                if parser.is_eof() {
                    return Err(ParsingError::unexpected_eof(parser));
                }
                let next_char = parser.peek().map(char::from);
                return Err(ParsingError::invalid_newick_string(
                    parser,
                    format!("Expected ',' or ')' but found {:?}", next_char),
                ));
            }
        };

        // Consume the terminating semicolon
        parser.skip_comment_and_whitespace()?;
        if !parser.consume_if(b';') && !parser.is_eof() {
            let next_char = parser.peek().map(char::from);
            return Err(ParsingError::invalid_newick_string(
                parser,
                format!("Expected ';' at end of tree but found {:?}", next_char),
            ));
        }

        tree.set_root(root_index);
        Ok(tree)
    }
}

// ============================================================================
// Parsing
// ============================================================================
impl NewickParser {
    /// Parses leaf vertex and adds it to tree:
    /// - `[label][:branch_length]`
    /// - Labeled leaves are registered as taxa
    ///
    /// # Returns
    /// - vertex index of parsed leaf
    /// - [ParsingError] if something went wrong, e.g. a duplicate taxon
    fn parse_leaf<B: ByteSource>(
        &self,
        parser: &mut ByteParser<B>,
        tree: &mut Tree,
    ) -> Result<VertexIndex, ParsingError> {
        let label = self.parse_vertex_label(parser)?;
        let branch_length = self.parse_branch_length(parser)?;
        tree.add_leaf(label.as_deref(), branch_length)
            .map_err(|dup| ParsingError::duplicate_taxon(parser, dup.0))
    }

    /// Parses what follows a closing `)`: `[label][:branch_length]`,
    /// and adds the internal vertex over `children` to the tree.
    fn parse_internal_vertex<B: ByteSource>(
        &self,
        parser: &mut ByteParser<B>,
        tree: &mut Tree,
        children: Vec<VertexIndex>,
    ) -> Result<VertexIndex, ParsingError> {
        let label = self.parse_vertex_label(parser)?;
        let branch_length = self.parse_branch_length(parser)?;
        Ok(tree.add_internal(children, label, branch_length))
    }

    /// Parses an optional label (quoted or unquoted).
    ///
    /// # Returns
    /// - `Ok(None)` if there is no label, i.e. an unquoted empty label
    /// - `Ok(Some(label))` otherwise; quoted labels may be empty
    fn parse_vertex_label<B: ByteSource>(
        &self,
        parser: &mut ByteParser<B>,
    ) -> Result<Option<String>, ParsingError> {
        parser.skip_comment_and_whitespace()?;
        let quoted = parser.peek_is(b'\'');
        let label = parser.parse_label(NEWICK_LABEL_DELIMITERS)?;

        if quoted {
            return Ok(Some(label));
        }
        if label.is_empty() {
            return Ok(None);
        }
        if !self.preserve_underscores {
            return Ok(Some(label.replace('_', " ")));
        }
        Ok(Some(label))
    }

    /// Parses optional branch length `[:number]`:
    /// - Skips comments/whitespace before and after `:`
    /// - Supports scientific notation (e.g., `1.5e-10`)
    ///
    /// # Returns
    /// - `Ok(Some(branch_length))` if found a branch length and was able to parse it
    /// - `Ok(None)` if no branch length found
    /// - [ParsingError] if it couldn't parse branch length value
    fn parse_branch_length<B: ByteSource>(
        &self,
        parser: &mut ByteParser<B>,
    ) -> Result<Option<BranchLength>, ParsingError> {
        parser.skip_comment_and_whitespace()?;
        if !parser.consume_if(b':') {
            return Ok(None);
        }
        parser.skip_comment_and_whitespace()?;

        let mut branch_length_str = String::new();
        while let Some(b) = parser.peek() {
            // Valid characters for a float: digits, '.', '-', '+', 'e', 'E'
            if b.is_ascii_digit() || matches!(b, b'.' | b'-' | b'+' | b'e' | b'E') {
                branch_length_str.push(b as char);
                parser.next_byte();
            } else {
                break;
            }
        }

        let value: BranchLength = branch_length_str.parse().map_err(|_| {
            ParsingError::invalid_newick_string(
                parser,
                format!("Invalid branch length: {:?}", branch_length_str),
            )
        })?;
        Ok(Some(value))
    }
}
