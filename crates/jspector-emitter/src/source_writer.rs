//! Output buffer with indentation tracking.

pub struct SourceWriter {
    output: String,
    indent_unit: String,
    new_line: String,
    indent_level: u32,
}

impl SourceWriter {
    pub fn new(indent_unit: impl Into<String>, new_line: impl Into<String>) -> Self {
        Self::with_capacity(0, indent_unit, new_line)
    }

    pub fn with_capacity(
        capacity: usize,
        indent_unit: impl Into<String>,
        new_line: impl Into<String>,
    ) -> Self {
        Self {
            output: String::with_capacity(capacity),
            indent_unit: indent_unit.into(),
            new_line: new_line.into(),
            indent_level: 0,
        }
    }

    pub fn write(&mut self, text: &str) {
        self.output.push_str(text);
    }

    pub fn write_char(&mut self, ch: char) {
        self.output.push(ch);
    }

    pub fn write_space(&mut self) {
        self.output.push(' ');
    }

    pub fn write_line(&mut self) {
        self.output.push_str(&self.new_line);
    }

    /// Write the indentation for the current level.
    pub fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.output.push_str(&self.indent_unit);
        }
    }

    pub const fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    pub const fn decrease_indent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    #[must_use]
    pub const fn indent_level(&self) -> u32 {
        self.indent_level
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.output.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    #[must_use]
    pub fn get_output(&self) -> &str {
        &self.output
    }

    #[must_use]
    pub fn take_output(self) -> String {
        self.output
    }
}

#[cfg(test)]
#[path = "../tests/source_writer_tests.rs"]
mod tests;
