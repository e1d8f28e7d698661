use jspector_common::{Position, Span};
use thiserror::Error;

/// Syntax error in the parsed text.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{message} ({position})")]
pub struct ParseError {
    pub message: String,
    pub span: Span,
    pub position: Position,
}

pub type ParseResult<T> = Result<T, ParseError>;
