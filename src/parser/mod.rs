//! Basic low-level byte parser functionality.
//!
//! Provides the [ByteParser] used by the [Newick parser](crate::newick)
//! together with the [ParsingError] it reports.

pub mod byte_parser;
pub mod byte_source;
pub mod parsing_error;

pub use byte_parser::ByteParser;
pub use byte_source::{ByteSource, InMemoryByteSource};
pub use parsing_error::{ParsingError, ParsingErrorType};
