//! Source printer for the jspector source rewriter.
//!
//! This crate turns a syntax tree back into JavaScript text:
//! - `SourceWriter` - Indentation-aware output buffer
//! - `Printer` - Tree walker that emits statements and expressions, inserting
//!   parentheses only where operator precedence requires them

pub mod source_writer;
pub use source_writer::SourceWriter;

pub mod printer;
pub use printer::{Printer, PrinterOptions, print_program};
