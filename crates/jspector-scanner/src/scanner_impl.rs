//! Scanner state machine.
//!
//! The scanner is pull-based: the parser calls [`ScannerState::scan`] for the
//! next token and reads its kind, span and text. Two tokens are ambiguous
//! without parser context and are re-scanned on request:
//! - `/` and `/=` become a regular expression literal when the parser expects
//!   an operand ([`ScannerState::rescan_slash_token`]).
//! - `}` continues a template literal when it closes a `${ }` substitution
//!   ([`ScannerState::rescan_template_token`]).

use memchr::memmem;

use crate::SyntaxKind;

/// First lexical error encountered by the scanner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanError {
    pub message: String,
    pub pos: u32,
}

/// Saved scanner position for look-ahead.
#[derive(Clone, Copy, Debug)]
pub struct ScannerSnapshot {
    pos: usize,
    token_start: usize,
    value_start: usize,
    value_end: usize,
    token: SyntaxKind,
    preceding_line_break: bool,
}

pub struct ScannerState {
    source: String,
    pos: usize,
    token_start: usize,
    value_start: usize,
    value_end: usize,
    token: SyntaxKind,
    preceding_line_break: bool,
    error: Option<ScanError>,
}

const PUNCT_QUESTION: &[(&str, SyntaxKind)] = &[
    ("??=", SyntaxKind::QuestionQuestionEqualsToken),
    ("??", SyntaxKind::QuestionQuestionToken),
    ("?", SyntaxKind::QuestionToken),
];
const PUNCT_LESS: &[(&str, SyntaxKind)] = &[
    ("<<=", SyntaxKind::LessThanLessThanEqualsToken),
    ("<<", SyntaxKind::LessThanLessThanToken),
    ("<=", SyntaxKind::LessThanEqualsToken),
    ("<", SyntaxKind::LessThanToken),
];
const PUNCT_GREATER: &[(&str, SyntaxKind)] = &[
    (">>>=", SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken),
    (">>>", SyntaxKind::GreaterThanGreaterThanGreaterThanToken),
    (">>=", SyntaxKind::GreaterThanGreaterThanEqualsToken),
    (">>", SyntaxKind::GreaterThanGreaterThanToken),
    (">=", SyntaxKind::GreaterThanEqualsToken),
    (">", SyntaxKind::GreaterThanToken),
];
const PUNCT_EQUALS: &[(&str, SyntaxKind)] = &[
    ("===", SyntaxKind::EqualsEqualsEqualsToken),
    ("==", SyntaxKind::EqualsEqualsToken),
    ("=>", SyntaxKind::EqualsGreaterThanToken),
    ("=", SyntaxKind::EqualsToken),
];
const PUNCT_EXCLAMATION: &[(&str, SyntaxKind)] = &[
    ("!==", SyntaxKind::ExclamationEqualsEqualsToken),
    ("!=", SyntaxKind::ExclamationEqualsToken),
    ("!", SyntaxKind::ExclamationToken),
];
const PUNCT_PLUS: &[(&str, SyntaxKind)] = &[
    ("++", SyntaxKind::PlusPlusToken),
    ("+=", SyntaxKind::PlusEqualsToken),
    ("+", SyntaxKind::PlusToken),
];
const PUNCT_MINUS: &[(&str, SyntaxKind)] = &[
    ("--", SyntaxKind::MinusMinusToken),
    ("-=", SyntaxKind::MinusEqualsToken),
    ("-", SyntaxKind::MinusToken),
];
const PUNCT_ASTERISK: &[(&str, SyntaxKind)] = &[
    ("**=", SyntaxKind::AsteriskAsteriskEqualsToken),
    ("**", SyntaxKind::AsteriskAsteriskToken),
    ("*=", SyntaxKind::AsteriskEqualsToken),
    ("*", SyntaxKind::AsteriskToken),
];
const PUNCT_PERCENT: &[(&str, SyntaxKind)] = &[
    ("%=", SyntaxKind::PercentEqualsToken),
    ("%", SyntaxKind::PercentToken),
];
const PUNCT_AMPERSAND: &[(&str, SyntaxKind)] = &[
    ("&&=", SyntaxKind::AmpersandAmpersandEqualsToken),
    ("&&", SyntaxKind::AmpersandAmpersandToken),
    ("&=", SyntaxKind::AmpersandEqualsToken),
    ("&", SyntaxKind::AmpersandToken),
];
const PUNCT_BAR: &[(&str, SyntaxKind)] = &[
    ("||=", SyntaxKind::BarBarEqualsToken),
    ("||", SyntaxKind::BarBarToken),
    ("|=", SyntaxKind::BarEqualsToken),
    ("|", SyntaxKind::BarToken),
];
const PUNCT_CARET: &[(&str, SyntaxKind)] = &[
    ("^=", SyntaxKind::CaretEqualsToken),
    ("^", SyntaxKind::CaretToken),
];
const PUNCT_SLASH: &[(&str, SyntaxKind)] = &[
    ("/=", SyntaxKind::SlashEqualsToken),
    ("/", SyntaxKind::SlashToken),
];

fn is_identifier_start(ch: char) -> bool {
    ch == '$' || ch == '_' || ch.is_alphabetic()
}

fn is_identifier_part(ch: char) -> bool {
    is_identifier_start(ch) || ch.is_alphanumeric() || ch == '\u{200c}' || ch == '\u{200d}'
}

const fn is_line_terminator(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

impl ScannerState {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            pos: 0,
            token_start: 0,
            value_start: 0,
            value_end: 0,
            token: SyntaxKind::Unknown,
            preceding_line_break: false,
            error: None,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub const fn token(&self) -> SyntaxKind {
        self.token
    }

    #[must_use]
    pub const fn token_pos(&self) -> u32 {
        self.token_start as u32
    }

    #[must_use]
    pub const fn token_end(&self) -> u32 {
        self.pos as u32
    }

    /// Full source text of the current token.
    #[must_use]
    pub fn token_text(&self) -> &str {
        &self.source[self.token_start..self.pos]
    }

    /// Token value: identifier name, literal raw text, or the raw characters
    /// of a template chunk without its delimiters.
    #[must_use]
    pub fn token_value(&self) -> &str {
        &self.source[self.value_start..self.value_end]
    }

    #[must_use]
    pub const fn has_preceding_line_break(&self) -> bool {
        self.preceding_line_break
    }

    #[must_use]
    pub fn source_text(&self) -> &str {
        &self.source
    }

    pub fn take_error(&mut self) -> Option<ScanError> {
        self.error.take()
    }

    #[must_use]
    pub const fn has_error(&self) -> bool {
        self.error.is_some()
    }

    #[must_use]
    pub const fn save_state(&self) -> ScannerSnapshot {
        ScannerSnapshot {
            pos: self.pos,
            token_start: self.token_start,
            value_start: self.value_start,
            value_end: self.value_end,
            token: self.token,
            preceding_line_break: self.preceding_line_break,
        }
    }

    pub fn restore_state(&mut self, snapshot: ScannerSnapshot) {
        self.pos = snapshot.pos;
        self.token_start = snapshot.token_start;
        self.value_start = snapshot.value_start;
        self.value_end = snapshot.value_end;
        self.token = snapshot.token;
        self.preceding_line_break = snapshot.preceding_line_break;
    }

    // =========================================================================
    // Low-level helpers
    // =========================================================================

    fn peek_char(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn peek_byte_at(&self, offset: usize) -> Option<u8> {
        self.source.as_bytes().get(self.pos + offset).copied()
    }

    fn report(&mut self, message: impl Into<String>, pos: usize) {
        if self.error.is_none() {
            self.error = Some(ScanError {
                message: message.into(),
                pos: pos as u32,
            });
        }
    }

    fn finish(&mut self, kind: SyntaxKind) -> SyntaxKind {
        self.token = kind;
        self.value_start = self.token_start;
        self.value_end = self.pos;
        kind
    }

    fn finish_with_value(&mut self, kind: SyntaxKind, start: usize, end: usize) -> SyntaxKind {
        self.token = kind;
        self.value_start = start;
        self.value_end = end;
        kind
    }

    fn scan_punctuation(&mut self, options: &[(&str, SyntaxKind)]) -> SyntaxKind {
        for &(text, kind) in options {
            if self.source[self.pos..].starts_with(text) {
                self.pos += text.len();
                return self.finish(kind);
            }
        }
        // Every table ends with its single-character fallback.
        self.pos += 1;
        self.finish(SyntaxKind::Unknown)
    }

    // =========================================================================
    // Main entry point
    // =========================================================================

    /// Advance to the next token.
    pub fn scan(&mut self) -> SyntaxKind {
        self.preceding_line_break = false;
        loop {
            self.token_start = self.pos;
            let Some(byte) = self.peek_byte_at(0) else {
                return self.finish(SyntaxKind::EndOfFileToken);
            };

            match byte {
                b'\n' | b'\r' => {
                    self.preceding_line_break = true;
                    self.pos += 1;
                }
                b' ' | b'\t' | 0x0b | 0x0c => self.pos += 1,
                b'/' => match self.peek_byte_at(1) {
                    Some(b'/') => self.skip_line_comment(),
                    Some(b'*') => self.skip_block_comment(),
                    _ => return self.scan_punctuation(PUNCT_SLASH),
                },
                b'#' if self.pos == 0 && self.peek_byte_at(1) == Some(b'!') => {
                    self.skip_line_comment();
                }
                b'"' | b'\'' => return self.scan_string(byte),
                b'`' => {
                    self.pos += 1;
                    return self.scan_template_chunk(true);
                }
                b'0'..=b'9' => return self.scan_number(),
                b'.' => {
                    if self.peek_byte_at(1).is_some_and(|b| b.is_ascii_digit()) {
                        return self.scan_number();
                    }
                    if self.source[self.pos..].starts_with("...") {
                        self.pos += 3;
                        return self.finish(SyntaxKind::DotDotDotToken);
                    }
                    self.pos += 1;
                    return self.finish(SyntaxKind::DotToken);
                }
                b'{' => return self.single(SyntaxKind::OpenBraceToken),
                b'}' => return self.single(SyntaxKind::CloseBraceToken),
                b'(' => return self.single(SyntaxKind::OpenParenToken),
                b')' => return self.single(SyntaxKind::CloseParenToken),
                b'[' => return self.single(SyntaxKind::OpenBracketToken),
                b']' => return self.single(SyntaxKind::CloseBracketToken),
                b';' => return self.single(SyntaxKind::SemicolonToken),
                b',' => return self.single(SyntaxKind::CommaToken),
                b':' => return self.single(SyntaxKind::ColonToken),
                b'~' => return self.single(SyntaxKind::TildeToken),
                b'?' => {
                    // `a?.5:b` is a conditional, not an optional chain
                    if self.peek_byte_at(1) == Some(b'.')
                        && !self.peek_byte_at(2).is_some_and(|b| b.is_ascii_digit())
                    {
                        self.pos += 2;
                        return self.finish(SyntaxKind::QuestionDotToken);
                    }
                    return self.scan_punctuation(PUNCT_QUESTION);
                }
                b'<' => return self.scan_punctuation(PUNCT_LESS),
                b'>' => return self.scan_punctuation(PUNCT_GREATER),
                b'=' => return self.scan_punctuation(PUNCT_EQUALS),
                b'!' => return self.scan_punctuation(PUNCT_EXCLAMATION),
                b'+' => return self.scan_punctuation(PUNCT_PLUS),
                b'-' => return self.scan_punctuation(PUNCT_MINUS),
                b'*' => return self.scan_punctuation(PUNCT_ASTERISK),
                b'%' => return self.scan_punctuation(PUNCT_PERCENT),
                b'&' => return self.scan_punctuation(PUNCT_AMPERSAND),
                b'|' => return self.scan_punctuation(PUNCT_BAR),
                b'^' => return self.scan_punctuation(PUNCT_CARET),
                _ => {
                    let Some(ch) = self.peek_char() else {
                        return self.finish(SyntaxKind::EndOfFileToken);
                    };
                    if is_identifier_start(ch) || ch == '\\' {
                        return self.scan_identifier();
                    }
                    if is_line_terminator(ch) {
                        self.preceding_line_break = true;
                        self.pos += ch.len_utf8();
                    } else if ch.is_whitespace() || ch == '\u{feff}' {
                        self.pos += ch.len_utf8();
                    } else {
                        self.report(format!("Invalid character '{ch}'."), self.pos);
                        self.pos += ch.len_utf8();
                        return self.finish(SyntaxKind::Unknown);
                    }
                }
            }
        }
    }

    fn single(&mut self, kind: SyntaxKind) -> SyntaxKind {
        self.pos += 1;
        self.finish(kind)
    }

    fn skip_line_comment(&mut self) {
        let rest = &self.source.as_bytes()[self.pos..];
        match memchr::memchr2(b'\n', b'\r', rest) {
            Some(offset) => self.pos += offset,
            None => self.pos = self.source.len(),
        }
    }

    fn skip_block_comment(&mut self) {
        let start = self.pos;
        let body = &self.source.as_bytes()[self.pos + 2..];
        match memmem::find(body, b"*/") {
            Some(offset) => {
                let comment = &body[..offset];
                if memchr::memchr2(b'\n', b'\r', comment).is_some() {
                    self.preceding_line_break = true;
                }
                self.pos += 2 + offset + 2;
            }
            None => {
                self.report("'*/' expected.", start);
                self.pos = self.source.len();
            }
        }
    }

    // =========================================================================
    // Literals and names
    // =========================================================================

    fn scan_identifier(&mut self) -> SyntaxKind {
        while let Some(ch) = self.peek_char() {
            if ch == '\\' {
                // Unicode escape: \uXXXX or \u{...}
                self.pos += 1;
                if self.peek_byte_at(0) == Some(b'u') {
                    self.pos += 1;
                    if self.peek_byte_at(0) == Some(b'{') {
                        while let Some(b) = self.peek_byte_at(0) {
                            self.pos += 1;
                            if b == b'}' {
                                break;
                            }
                        }
                    } else {
                        self.pos = (self.pos + 4).min(self.source.len());
                    }
                } else {
                    self.report("Invalid character.", self.pos - 1);
                }
            } else if is_identifier_part(ch) {
                self.pos += ch.len_utf8();
            } else {
                break;
            }
        }
        let text = &self.source[self.token_start..self.pos];
        let kind = SyntaxKind::from_keyword(text).unwrap_or(SyntaxKind::Identifier);
        self.finish(kind)
    }

    fn consume_digits(&mut self, radix: u32) {
        while let Some(b) = self.peek_byte_at(0) {
            if b == b'_' || (b as char).is_digit(radix) {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn scan_number(&mut self) -> SyntaxKind {
        let radix = match (self.peek_byte_at(0), self.peek_byte_at(1)) {
            (Some(b'0'), Some(b'x' | b'X')) => 16,
            (Some(b'0'), Some(b'o' | b'O')) => 8,
            (Some(b'0'), Some(b'b' | b'B')) => 2,
            _ => 10,
        };

        if radix != 10 {
            self.pos += 2;
            self.consume_digits(radix);
        } else {
            self.consume_digits(10);
            if self.peek_byte_at(0) == Some(b'.') {
                self.pos += 1;
                self.consume_digits(10);
            }
            if matches!(self.peek_byte_at(0), Some(b'e' | b'E')) {
                let save = self.pos;
                self.pos += 1;
                if matches!(self.peek_byte_at(0), Some(b'+' | b'-')) {
                    self.pos += 1;
                }
                if self.peek_byte_at(0).is_some_and(|b| b.is_ascii_digit()) {
                    self.consume_digits(10);
                } else {
                    self.pos = save;
                    self.report("Digit expected.", self.pos);
                }
            }
        }

        // BigInt suffix
        if self.peek_byte_at(0) == Some(b'n') {
            self.pos += 1;
        }

        if self.peek_char().is_some_and(is_identifier_start) {
            self.report(
                "An identifier or keyword cannot immediately follow a numeric literal.",
                self.pos,
            );
        }
        self.finish(SyntaxKind::NumericLiteral)
    }

    fn scan_string(&mut self, quote: u8) -> SyntaxKind {
        self.pos += 1;
        loop {
            let Some(ch) = self.peek_char() else {
                self.report("Unterminated string literal.", self.token_start);
                break;
            };
            if ch as u32 == quote as u32 {
                self.pos += 1;
                break;
            }
            if ch == '\\' {
                self.pos += 1;
                if let Some(escaped) = self.peek_char() {
                    self.pos += escaped.len_utf8();
                    // \r\n line continuation
                    if escaped == '\r' && self.peek_byte_at(0) == Some(b'\n') {
                        self.pos += 1;
                    }
                }
                continue;
            }
            if ch == '\n' || ch == '\r' {
                self.report("Unterminated string literal.", self.token_start);
                break;
            }
            self.pos += ch.len_utf8();
        }
        self.finish(SyntaxKind::StringLiteral)
    }

    /// Scan template characters up to the closing backtick or the next `${`.
    /// `self.pos` must point just past the opening delimiter.
    fn scan_template_chunk(&mut self, is_start: bool) -> SyntaxKind {
        let value_start = self.pos;
        loop {
            let Some(ch) = self.peek_char() else {
                self.report("Unterminated template literal.", self.token_start);
                let end = self.pos;
                let kind = if is_start {
                    SyntaxKind::NoSubstitutionTemplateLiteral
                } else {
                    SyntaxKind::TemplateTail
                };
                return self.finish_with_value(kind, value_start, end);
            };
            match ch {
                '`' => {
                    let value_end = self.pos;
                    self.pos += 1;
                    let kind = if is_start {
                        SyntaxKind::NoSubstitutionTemplateLiteral
                    } else {
                        SyntaxKind::TemplateTail
                    };
                    return self.finish_with_value(kind, value_start, value_end);
                }
                '$' if self.peek_byte_at(1) == Some(b'{') => {
                    let value_end = self.pos;
                    self.pos += 2;
                    let kind = if is_start {
                        SyntaxKind::TemplateHead
                    } else {
                        SyntaxKind::TemplateMiddle
                    };
                    return self.finish_with_value(kind, value_start, value_end);
                }
                '\\' => {
                    self.pos += 1;
                    if let Some(escaped) = self.peek_char() {
                        self.pos += escaped.len_utf8();
                    }
                }
                _ => self.pos += ch.len_utf8(),
            }
        }
    }

    // =========================================================================
    // Re-scanning
    // =========================================================================

    /// Re-scan a `/` or `/=` token as a regular expression literal.
    pub fn rescan_slash_token(&mut self) -> SyntaxKind {
        if !matches!(
            self.token,
            SyntaxKind::SlashToken | SyntaxKind::SlashEqualsToken
        ) {
            return self.token;
        }

        self.pos = self.token_start + 1;
        let mut in_class = false;
        loop {
            let Some(ch) = self.peek_char() else {
                self.report("Unterminated regular expression literal.", self.token_start);
                return self.finish(SyntaxKind::RegularExpressionLiteral);
            };
            if is_line_terminator(ch) {
                self.report("Unterminated regular expression literal.", self.token_start);
                return self.finish(SyntaxKind::RegularExpressionLiteral);
            }
            self.pos += ch.len_utf8();
            match ch {
                '\\' => {
                    if let Some(escaped) = self.peek_char()
                        && !is_line_terminator(escaped)
                    {
                        self.pos += escaped.len_utf8();
                    }
                }
                '[' => in_class = true,
                ']' => in_class = false,
                '/' if !in_class => break,
                _ => {}
            }
        }

        // Flags
        while let Some(ch) = self.peek_char() {
            if !is_identifier_part(ch) {
                break;
            }
            self.pos += ch.len_utf8();
        }
        self.finish(SyntaxKind::RegularExpressionLiteral)
    }

    /// Re-scan a `}` token as the continuation of a template literal.
    pub fn rescan_template_token(&mut self) -> SyntaxKind {
        if self.token != SyntaxKind::CloseBraceToken {
            return self.token;
        }
        self.pos = self.token_start + 1;
        self.scan_template_chunk(false)
    }
}

#[cfg(test)]
#[path = "../tests/scanner_tests.rs"]
mod tests;
