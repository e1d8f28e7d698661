//! Tree printer.
//!
//! Output layout:
//! - one statement per line, each followed by a line break
//! - blocks, class bodies and non-empty object literals span several lines
//! - single-statement bodies of `if`/`while`/`for` stay on the header line
//! - parentheses appear only where precedence or statement position needs them

mod expressions;
mod precedence;
mod statements;

use jspector_common::limits::PRINTER_CAPACITY_FACTOR;
use jspector_parser::Node;
use serde::Deserialize;
use tracing::debug;

use crate::source_writer::SourceWriter;

/// Printer formatting knobs.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PrinterOptions {
    /// One level of indentation.
    pub indent: String,
    pub new_line: String,
}

impl Default for PrinterOptions {
    fn default() -> Self {
        Self {
            indent: "  ".to_string(),
            new_line: "\n".to_string(),
        }
    }
}

pub struct Printer {
    writer: SourceWriter,
}

impl Printer {
    pub fn new(options: PrinterOptions) -> Self {
        Self::with_source_len(options, 0)
    }

    /// Printer whose buffer is pre-sized for output of a `source_len` byte input.
    pub fn with_source_len(options: PrinterOptions, source_len: usize) -> Self {
        Self {
            writer: SourceWriter::with_capacity(
                source_len.saturating_mul(PRINTER_CAPACITY_FACTOR),
                options.indent,
                options.new_line,
            ),
        }
    }

    /// Emit any node: a whole program, a statement or an expression.
    pub fn emit(&mut self, node: &Node) {
        self.emit_statement(node);
    }

    /// Print a node with default options.
    #[must_use]
    pub fn emit_to_string(node: &Node) -> String {
        let mut printer = Self::new(PrinterOptions::default());
        printer.emit(node);
        printer.take_output()
    }

    #[must_use]
    pub fn get_output(&self) -> &str {
        self.writer.get_output()
    }

    #[must_use]
    pub fn take_output(self) -> String {
        self.writer.take_output()
    }

    fn emit_program(&mut self, body: &[Node]) {
        for statement in body {
            self.write_indent();
            self.emit_statement(statement);
            self.write_line();
        }
    }

    // =========================================================================
    // Output helpers (delegate to SourceWriter)
    // =========================================================================

    fn write(&mut self, text: &str) {
        self.writer.write(text);
    }

    fn write_char(&mut self, ch: char) {
        self.writer.write_char(ch);
    }

    fn write_line(&mut self) {
        self.writer.write_line();
    }

    fn write_indent(&mut self) {
        self.writer.write_indent();
    }

    fn increase_indent(&mut self) {
        self.writer.increase_indent();
    }

    fn decrease_indent(&mut self) {
        self.writer.decrease_indent();
    }
}

/// Render a whole program with default options.
pub fn print_program(program: &Node) -> String {
    let mut printer = Printer::new(PrinterOptions::default());
    printer.emit(program);
    let output = printer.take_output();
    debug!(bytes = output.len(), "printed program");
    output
}

#[cfg(test)]
#[path = "../../tests/printer_tests.rs"]
mod tests;
