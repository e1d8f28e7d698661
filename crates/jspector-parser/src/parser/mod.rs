//! Recursive descent parser.
//!
//! `ParserState` pulls tokens from `jspector_scanner::ScannerState` and builds
//! the owned tree in [`crate::ast`]. Parsing stops at the first error; the
//! rewrite pipeline has no use for a partially recovered tree.

mod error;
mod patterns;
mod state;
mod state_expressions;
mod state_statements;

pub use error::{ParseError, ParseResult};
pub use state::ParserState;

use crate::ast::Node;

/// Parse a complete script into a `Program` node.
pub fn parse_program(source: &str) -> ParseResult<Node> {
    let mut parser = ParserState::new(source);
    parser.parse_source_file()
}
