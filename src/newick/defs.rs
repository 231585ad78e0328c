//! Constants for the Newick parser.

/// Newick label delimiters: parentheses, brackets, comma, colon, semicolon, whitespace
pub(crate) const NEWICK_LABEL_DELIMITERS: &[u8] = b"([,:; \n\t\r)]";

/// Default guess for number of vertices, used to pre-allocate each tree
pub(crate) const DEFAULT_NUM_VERTICES_GUESS: usize = 64;
