//! JavaScript scanner/tokenizer for the jspector source rewriter.
//!
//! This crate provides the lexical analysis phase:
//! - `SyntaxKind` - Token types
//! - `ScannerState` - Tokenizer state machine with re-scan hooks for
//!   regular expressions and template continuations

pub mod syntax_kind;
pub use syntax_kind::SyntaxKind;

pub mod scanner_impl;
pub use scanner_impl::{ScanError, ScannerSnapshot, ScannerState};
