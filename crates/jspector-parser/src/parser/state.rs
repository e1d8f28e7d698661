//! Parser state - token helpers, context flags and error construction

use jspector_common::limits::MAX_PARSER_RECURSION_DEPTH;
use jspector_common::{LineMap, Span};
use jspector_scanner::{ScannerState, SyntaxKind};
use tracing::debug;

use super::error::{ParseError, ParseResult};
use crate::ast::Node;

/// Inside an async function or async arrow: `await` is an operator.
pub(crate) const CONTEXT_FLAG_ASYNC: u8 = 1 << 0;
/// Inside a generator: `yield` is an operator.
pub(crate) const CONTEXT_FLAG_GENERATOR: u8 = 1 << 1;
/// In a `for (...;` initializer: `in` is not a binary operator.
pub(crate) const CONTEXT_FLAG_DISALLOW_IN: u8 = 1 << 2;

pub struct ParserState {
    pub(crate) scanner: ScannerState,
    pub(crate) context_flags: u8,
    recursion_depth: u32,
    line_map: LineMap,
}

impl ParserState {
    pub fn new(source: impl Into<String>) -> Self {
        let scanner = ScannerState::new(source);
        let line_map = LineMap::build(scanner.source_text());
        Self {
            scanner,
            context_flags: 0,
            recursion_depth: 0,
            line_map,
        }
    }

    /// Parse the whole input as a script.
    pub fn parse_source_file(&mut self) -> ParseResult<Node> {
        let _span =
            tracing::debug_span!("parse_source_file", len = self.scanner.source_text().len())
                .entered();

        self.next_token()?;
        let mut body = Vec::new();
        while !self.is_token(SyntaxKind::EndOfFileToken) {
            body.push(self.parse_statement()?);
        }

        debug!(statements = body.len(), "parsed program");
        Ok(Node::Program { body })
    }

    // =========================================================================
    // Token access
    // =========================================================================

    pub(crate) const fn token(&self) -> SyntaxKind {
        self.scanner.token()
    }

    pub(crate) fn is_token(&self, kind: SyntaxKind) -> bool {
        self.scanner.token() == kind
    }

    pub(crate) fn token_value(&self) -> &str {
        self.scanner.token_value()
    }

    pub(crate) const fn token_pos(&self) -> u32 {
        self.scanner.token_pos()
    }

    pub(crate) const fn has_preceding_line_break(&self) -> bool {
        self.scanner.has_preceding_line_break()
    }

    pub(crate) fn next_token(&mut self) -> ParseResult<SyntaxKind> {
        let kind = self.scanner.scan();
        self.check_scan_error()?;
        Ok(kind)
    }

    pub(crate) fn check_scan_error(&mut self) -> ParseResult<()> {
        match self.scanner.take_error() {
            Some(error) => Err(self.error_at(error.message, Span::at(error.pos))),
            None => Ok(()),
        }
    }

    /// Consume the current token if it is `kind`.
    pub(crate) fn parse_optional(&mut self, kind: SyntaxKind) -> ParseResult<bool> {
        if self.is_token(kind) {
            self.next_token()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub(crate) fn parse_expected(&mut self, kind: SyntaxKind) -> ParseResult<()> {
        if self.is_token(kind) {
            self.next_token()?;
            Ok(())
        } else {
            Err(self.error_at_token(format!("'{}' expected.", token_to_string(kind))))
        }
    }

    /// Automatic semicolon insertion point.
    pub(crate) fn can_parse_semicolon(&self) -> bool {
        matches!(
            self.token(),
            SyntaxKind::SemicolonToken | SyntaxKind::CloseBraceToken | SyntaxKind::EndOfFileToken
        ) || self.has_preceding_line_break()
    }

    pub(crate) fn parse_semicolon(&mut self) -> ParseResult<()> {
        if self.is_token(SyntaxKind::SemicolonToken) {
            self.next_token()?;
            return Ok(());
        }
        if self.can_parse_semicolon() {
            return Ok(());
        }
        Err(self.error_at_token("';' expected."))
    }

    // =========================================================================
    // Names
    // =========================================================================

    /// Identifier in binding or reference position (contextual keywords allowed).
    pub(crate) fn parse_binding_identifier(&mut self) -> ParseResult<String> {
        if !self.token().is_identifier() {
            return Err(self.error_at_token("Identifier expected."));
        }
        let name = self.token_value().to_string();
        self.next_token()?;
        Ok(name)
    }

    /// Property name after `.`: reserved words are allowed.
    pub(crate) fn parse_identifier_name(&mut self) -> ParseResult<String> {
        if !self.token().is_identifier_or_keyword() {
            return Err(self.error_at_token("Identifier expected."));
        }
        let name = self.token_value().to_string();
        self.next_token()?;
        Ok(name)
    }

    // =========================================================================
    // Context and look-ahead
    // =========================================================================

    pub(crate) const fn in_context(&self, flag: u8) -> bool {
        self.context_flags & flag != 0
    }

    /// Run `f` with `set` flags added and `clear` flags removed, then restore.
    pub(crate) fn with_context<T>(
        &mut self,
        set: u8,
        clear: u8,
        f: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        let saved = self.context_flags;
        self.context_flags = (saved | set) & !clear;
        let result = f(self);
        self.context_flags = saved;
        result
    }

    /// Run `f` with `in` allowed as a binary operator again.
    pub(crate) fn allow_in<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        self.with_context(0, CONTEXT_FLAG_DISALLOW_IN, f)
    }

    /// Speculatively run `f`, then rewind the scanner.
    pub(crate) fn look_ahead<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let snapshot = self.scanner.save_state();
        let had_error = self.scanner.has_error();
        let result = f(self);
        self.scanner.restore_state(snapshot);
        if !had_error {
            self.scanner.take_error();
        }
        result
    }

    /// Kind of the token after the current one.
    pub(crate) fn peek_token(&mut self) -> (SyntaxKind, bool) {
        self.look_ahead(|p| {
            let kind = p.scanner.scan();
            (kind, p.scanner.has_preceding_line_break())
        })
    }

    /// Run `f` one nesting level deeper, failing once the depth limit is hit.
    pub(crate) fn guarded<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        if self.recursion_depth >= MAX_PARSER_RECURSION_DEPTH {
            return Err(self.error_at_token("Maximum nesting depth exceeded."));
        }
        self.recursion_depth += 1;
        let result = f(self);
        self.recursion_depth -= 1;
        result
    }

    // =========================================================================
    // Errors
    // =========================================================================

    pub(crate) fn error_at(&self, message: impl Into<String>, span: Span) -> ParseError {
        let position = self.line_map.position(span.start);
        ParseError {
            message: message.into(),
            span,
            position,
        }
    }

    pub(crate) fn error_at_token(&self, message: impl Into<String>) -> ParseError {
        let span = Span::new(self.scanner.token_pos(), self.scanner.token_end());
        self.error_at(message, span)
    }

    pub(crate) fn unexpected_token(&self) -> ParseError {
        if self.is_token(SyntaxKind::EndOfFileToken) {
            self.error_at_token("Unexpected end of input.")
        } else {
            self.error_at_token(format!("Unexpected token '{}'.", self.scanner.token_text()))
        }
    }
}

fn token_to_string(kind: SyntaxKind) -> &'static str {
    match kind {
        SyntaxKind::OpenBraceToken => "{",
        SyntaxKind::CloseBraceToken => "}",
        SyntaxKind::OpenParenToken => "(",
        SyntaxKind::CloseParenToken => ")",
        SyntaxKind::OpenBracketToken => "[",
        SyntaxKind::CloseBracketToken => "]",
        SyntaxKind::SemicolonToken => ";",
        SyntaxKind::CommaToken => ",",
        SyntaxKind::ColonToken => ":",
        SyntaxKind::EqualsToken => "=",
        SyntaxKind::EqualsGreaterThanToken => "=>",
        SyntaxKind::WhileKeyword => "while",
        SyntaxKind::Identifier => "identifier",
        _ => "token",
    }
}
