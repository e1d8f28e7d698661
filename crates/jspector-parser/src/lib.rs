//! JavaScript parser and syntax tree for the jspector source rewriter.
//!
//! - `ast` - the owned, ESTree-shaped syntax tree (`Node`, `NodeKind`) and
//!   the in-place `replace` traversal used by every rewrite pass
//! - `parser` - recursive descent `ParserState` producing a `Program` node

pub mod ast;
pub use ast::{Node, NodeKind};

pub mod parser;
pub use parser::{ParseError, ParserState, parse_program};
