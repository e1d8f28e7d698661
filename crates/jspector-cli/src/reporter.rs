//! Parse and file error formatting.
//!
//! ```text
//! src/app.js:3:9 - error: Unexpected token ')'.
//!
//! 3 let x = );
//!           ~
//! ```

use colored::Colorize;
use jspector_parser::ParseError;

pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub const fn new(color: bool) -> Self {
        Self { color }
    }

    /// Format `error`, found in `source` read from `file`.
    pub fn format_parse_error(&self, file: &str, source: &str, error: &ParseError) -> String {
        let line = error.position.line;
        let column = error.position.column;

        let mut output = String::new();
        if self.color {
            output.push_str(&format!(
                "{}:{}:{} - {}: {}",
                file.cyan(),
                line.to_string().yellow(),
                column.to_string().yellow(),
                "error".red(),
                error.message
            ));
        } else {
            output.push_str(&format!("{file}:{line}:{column} - error: {}", error.message));
        }

        if let Some(snippet) = self.format_snippet(source, line, column, error.span.len()) {
            output.push_str(&snippet);
        }
        output
    }

    /// `file - error: message`, for a file that could not be processed at all.
    pub fn format_file_error(&self, file: &str, message: &str) -> String {
        if self.color {
            format!("{} - {}: {message}", file.cyan(), "error".red())
        } else {
            format!("{file} - error: {message}")
        }
    }

    /// The offending line with the error underlined; `None` past the end of `source`.
    fn format_snippet(&self, source: &str, line: u32, column: u32, length: u32) -> Option<String> {
        let index = usize::try_from(line.checked_sub(1)?).ok()?;
        let text = source.lines().nth(index)?;
        let gutter = line.to_string();
        let pad = usize::try_from(column.saturating_sub(1)).unwrap_or(0);
        let width = usize::try_from(length.max(1)).unwrap_or(1);
        let underline = "~".repeat(width);

        let mut snippet = String::new();
        snippet.push_str("\n\n");
        if self.color {
            snippet.push_str(&format!("{} {text}\n", gutter.black().on_white()));
            snippet.push_str(&format!(
                "{} {}{}",
                " ".repeat(gutter.len()).on_white(),
                " ".repeat(pad),
                underline.red()
            ));
        } else {
            snippet.push_str(&format!("{gutter} {text}\n"));
            snippet.push_str(&format!("{} {}{underline}", " ".repeat(gutter.len()), " ".repeat(pad)));
        }
        Some(snippet)
    }
}

#[cfg(test)]
#[path = "../tests/reporter_tests.rs"]
mod tests;
