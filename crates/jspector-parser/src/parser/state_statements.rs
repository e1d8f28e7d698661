//! Statement and declaration parsing.

use jspector_scanner::SyntaxKind;

use super::error::ParseResult;
use super::state::{
    CONTEXT_FLAG_ASYNC, CONTEXT_FLAG_DISALLOW_IN, CONTEXT_FLAG_GENERATOR, ParserState,
};
use crate::ast::{Class, Function, LiteralKind, MethodKind, Node, VariableKind};

impl ParserState {
    /// Parse a statement
    pub(crate) fn parse_statement(&mut self) -> ParseResult<Node> {
        self.guarded(|p| match p.token() {
            SyntaxKind::OpenBraceToken => p.parse_block(),
            SyntaxKind::VarKeyword | SyntaxKind::ConstKeyword => p.parse_variable_statement(),
            SyntaxKind::LetKeyword if p.look_ahead_is_let_declaration() => {
                p.parse_variable_statement()
            }
            SyntaxKind::FunctionKeyword => p.parse_function_declaration(false),
            SyntaxKind::AsyncKeyword if p.look_ahead_is_async_function() => {
                p.next_token()?;
                p.parse_function_declaration(true)
            }
            SyntaxKind::ClassKeyword => {
                let class = p.parse_class(true)?;
                Ok(Node::ClassDeclaration(class))
            }
            SyntaxKind::IfKeyword => p.parse_if_statement(),
            SyntaxKind::ForKeyword => p.parse_for_statement(),
            SyntaxKind::WhileKeyword => p.parse_while_statement(),
            SyntaxKind::DoKeyword => p.parse_do_statement(),
            SyntaxKind::ReturnKeyword => p.parse_return_statement(),
            SyntaxKind::BreakKeyword => p.parse_break_or_continue(true),
            SyntaxKind::ContinueKeyword => p.parse_break_or_continue(false),
            SyntaxKind::ThrowKeyword => p.parse_throw_statement(),
            SyntaxKind::TryKeyword => p.parse_try_statement(),
            SyntaxKind::SwitchKeyword => p.parse_switch_statement(),
            SyntaxKind::SemicolonToken => {
                p.next_token()?;
                Ok(Node::EmptyStatement)
            }
            SyntaxKind::DebuggerKeyword => {
                p.next_token()?;
                p.parse_semicolon()?;
                Ok(Node::DebuggerStatement)
            }
            SyntaxKind::WithKeyword => {
                Err(p.error_at_token("'with' statements are not supported."))
            }
            kind if kind.is_identifier() && p.look_ahead_is_labeled_statement() => {
                p.parse_labeled_statement()
            }
            _ => p.parse_expression_statement(),
        })
    }

    fn look_ahead_is_let_declaration(&mut self) -> bool {
        let (next, _) = self.peek_token();
        next.is_identifier()
            || matches!(next, SyntaxKind::OpenBracketToken | SyntaxKind::OpenBraceToken)
    }

    pub(crate) fn look_ahead_is_async_function(&mut self) -> bool {
        let (next, line_break) = self.peek_token();
        next == SyntaxKind::FunctionKeyword && !line_break
    }

    fn look_ahead_is_labeled_statement(&mut self) -> bool {
        self.peek_token().0 == SyntaxKind::ColonToken
    }

    pub(crate) fn parse_block(&mut self) -> ParseResult<Node> {
        self.parse_expected(SyntaxKind::OpenBraceToken)?;
        let mut body = Vec::new();
        while !self.is_token(SyntaxKind::CloseBraceToken) {
            if self.is_token(SyntaxKind::EndOfFileToken) {
                return Err(self.error_at_token("'}' expected."));
            }
            body.push(self.parse_statement()?);
        }
        self.next_token()?;
        Ok(Node::BlockStatement { body })
    }

    fn parse_expression_statement(&mut self) -> ParseResult<Node> {
        let expression = self.allow_in(Self::parse_expression)?;
        self.parse_semicolon()?;
        Ok(Node::expr_stmt(expression))
    }

    // =========================================================================
    // Variable declarations
    // =========================================================================

    fn parse_variable_statement(&mut self) -> ParseResult<Node> {
        let declaration = self.parse_variable_declaration_list()?;
        self.parse_semicolon()?;
        Ok(declaration)
    }

    /// `var|let|const` followed by one or more declarators.
    ///
    /// Honors `CONTEXT_FLAG_DISALLOW_IN` so `for (var k in o)` stops at `in`.
    fn parse_variable_declaration_list(&mut self) -> ParseResult<Node> {
        let kind = match self.token() {
            SyntaxKind::VarKeyword => VariableKind::Var,
            SyntaxKind::LetKeyword => VariableKind::Let,
            SyntaxKind::ConstKeyword => VariableKind::Const,
            _ => return Err(self.unexpected_token()),
        };
        self.next_token()?;

        let mut declarations = Vec::new();
        loop {
            let id = self.parse_binding_target()?;
            let init = if self.parse_optional(SyntaxKind::EqualsToken)? {
                Some(Box::new(self.parse_assignment_expression()?))
            } else {
                None
            };
            declarations.push(Node::VariableDeclarator {
                id: Box::new(id),
                init,
            });
            if !self.parse_optional(SyntaxKind::CommaToken)? {
                break;
            }
        }

        Ok(Node::VariableDeclaration { kind, declarations })
    }

    // =========================================================================
    // Functions and classes
    // =========================================================================

    fn parse_function_declaration(&mut self, is_async: bool) -> ParseResult<Node> {
        let function = self.parse_function(is_async, true)?;
        Ok(Node::FunctionDeclaration(function))
    }

    /// Parse `function [*] [name] (params) { body }` starting at `function`.
    pub(crate) fn parse_function(&mut self, is_async: bool, require_name: bool) -> ParseResult<Function> {
        self.parse_expected(SyntaxKind::FunctionKeyword)?;
        let is_generator = self.parse_optional(SyntaxKind::AsteriskToken)?;

        let id = if self.token().is_identifier() {
            Some(self.parse_binding_identifier()?)
        } else if require_name {
            return Err(self.error_at_token("Function name expected."));
        } else {
            None
        };

        let (params, body) = self.parse_function_rest(is_async, is_generator)?;
        Ok(Function {
            id,
            params,
            body: Box::new(body),
            is_async,
            is_generator,
        })
    }

    /// Parameters and body, parsed in the function's own await/yield context.
    pub(crate) fn parse_function_rest(
        &mut self,
        is_async: bool,
        is_generator: bool,
    ) -> ParseResult<(Vec<Node>, Node)> {
        let mut set = 0;
        if is_async {
            set |= CONTEXT_FLAG_ASYNC;
        }
        if is_generator {
            set |= CONTEXT_FLAG_GENERATOR;
        }
        let clear = CONTEXT_FLAG_ASYNC | CONTEXT_FLAG_GENERATOR | CONTEXT_FLAG_DISALLOW_IN;
        self.with_context(set, clear & !set, |p| {
            let params = p.parse_parameters()?;
            let body = p.parse_block()?;
            Ok((params, body))
        })
    }

    /// Parse `class [name] [extends Expr] { members }` starting at `class`.
    pub(crate) fn parse_class(&mut self, require_name: bool) -> ParseResult<Class> {
        self.parse_expected(SyntaxKind::ClassKeyword)?;

        let id = if self.token().is_identifier() {
            Some(self.parse_binding_identifier()?)
        } else if require_name {
            return Err(self.error_at_token("Class name expected."));
        } else {
            None
        };

        let super_class = if self.parse_optional(SyntaxKind::ExtendsKeyword)? {
            Some(Box::new(self.parse_left_hand_side_expression()?))
        } else {
            None
        };

        self.parse_expected(SyntaxKind::OpenBraceToken)?;
        let mut body = Vec::new();
        while !self.is_token(SyntaxKind::CloseBraceToken) {
            if self.parse_optional(SyntaxKind::SemicolonToken)? {
                continue;
            }
            if self.is_token(SyntaxKind::EndOfFileToken) {
                return Err(self.error_at_token("'}' expected."));
            }
            body.push(self.parse_class_member()?);
        }
        self.next_token()?;

        Ok(Class {
            id,
            super_class,
            body,
        })
    }

    fn parse_class_member(&mut self) -> ParseResult<Node> {
        let is_static = self.is_token(SyntaxKind::StaticKeyword) && self.look_ahead_is_modifier();
        if is_static {
            self.next_token()?;
        }

        let is_async = self.is_token(SyntaxKind::AsyncKeyword) && self.look_ahead_is_modifier();
        if is_async {
            self.next_token()?;
        }
        let is_generator = self.parse_optional(SyntaxKind::AsteriskToken)?;

        let mut kind = MethodKind::Method;
        if !is_async
            && !is_generator
            && matches!(self.token(), SyntaxKind::GetKeyword | SyntaxKind::SetKeyword)
            && self.look_ahead_is_modifier()
        {
            kind = if self.is_token(SyntaxKind::GetKeyword) {
                MethodKind::Get
            } else {
                MethodKind::Set
            };
            self.next_token()?;
        }

        let (key, computed) = self.parse_property_key()?;
        if !self.is_token(SyntaxKind::OpenParenToken) {
            return Err(self.error_at_token("Class fields are not supported."));
        }

        if kind == MethodKind::Method && !is_static && !computed && is_constructor_key(&key) {
            kind = MethodKind::Constructor;
        }

        let value = self.parse_method_function(is_async, is_generator)?;
        Ok(Node::MethodDefinition {
            key: Box::new(key),
            value: Box::new(value),
            kind,
            computed,
            is_static,
        })
    }

    /// A modifier keyword is followed by a property key on the same line.
    pub(crate) fn look_ahead_is_modifier(&mut self) -> bool {
        let (next, line_break) = self.peek_token();
        !line_break
            && (next.is_identifier_or_keyword()
                || matches!(
                    next,
                    SyntaxKind::StringLiteral
                        | SyntaxKind::NumericLiteral
                        | SyntaxKind::OpenBracketToken
                        | SyntaxKind::AsteriskToken
                ))
    }

    // =========================================================================
    // Control flow
    // =========================================================================

    fn parse_parenthesized_expression(&mut self) -> ParseResult<Node> {
        self.parse_expected(SyntaxKind::OpenParenToken)?;
        let expression = self.allow_in(Self::parse_expression)?;
        self.parse_expected(SyntaxKind::CloseParenToken)?;
        Ok(expression)
    }

    fn parse_if_statement(&mut self) -> ParseResult<Node> {
        self.next_token()?;
        let test = self.parse_parenthesized_expression()?;
        let consequent = self.parse_statement()?;
        let alternate = if self.parse_optional(SyntaxKind::ElseKeyword)? {
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };
        Ok(Node::IfStatement {
            test: Box::new(test),
            consequent: Box::new(consequent),
            alternate,
        })
    }

    fn parse_while_statement(&mut self) -> ParseResult<Node> {
        self.next_token()?;
        let test = self.parse_parenthesized_expression()?;
        let body = self.parse_statement()?;
        Ok(Node::WhileStatement {
            test: Box::new(test),
            body: Box::new(body),
        })
    }

    fn parse_do_statement(&mut self) -> ParseResult<Node> {
        self.next_token()?;
        let body = self.parse_statement()?;
        self.parse_expected(SyntaxKind::WhileKeyword)?;
        let test = self.parse_parenthesized_expression()?;
        // The semicolon after `do ... while (x)` is always optional.
        self.parse_optional(SyntaxKind::SemicolonToken)?;
        Ok(Node::DoWhileStatement {
            body: Box::new(body),
            test: Box::new(test),
        })
    }

    fn parse_for_statement(&mut self) -> ParseResult<Node> {
        self.next_token()?;
        self.parse_expected(SyntaxKind::OpenParenToken)?;

        let init = match self.token() {
            SyntaxKind::SemicolonToken => None,
            SyntaxKind::VarKeyword | SyntaxKind::ConstKeyword => Some(self.with_context(
                CONTEXT_FLAG_DISALLOW_IN,
                0,
                Self::parse_variable_declaration_list,
            )?),
            SyntaxKind::LetKeyword if self.look_ahead_is_let_declaration() => {
                Some(self.with_context(
                    CONTEXT_FLAG_DISALLOW_IN,
                    0,
                    Self::parse_variable_declaration_list,
                )?)
            }
            _ => Some(self.with_context(CONTEXT_FLAG_DISALLOW_IN, 0, Self::parse_expression)?),
        };

        match init {
            Some(left) if matches!(self.token(), SyntaxKind::InKeyword | SyntaxKind::OfKeyword) => {
                let is_of = self.is_token(SyntaxKind::OfKeyword);
                let left = Box::new(self.for_in_of_left(left)?);
                self.next_token()?;
                let right = Box::new(if is_of {
                    self.allow_in(Self::parse_assignment_expression)?
                } else {
                    self.allow_in(Self::parse_expression)?
                });
                self.parse_expected(SyntaxKind::CloseParenToken)?;
                let body = Box::new(self.parse_statement()?);
                Ok(if is_of {
                    Node::ForOfStatement { left, right, body }
                } else {
                    Node::ForInStatement { left, right, body }
                })
            }
            init => self.parse_for_rest(init),
        }
    }

    fn for_in_of_left(&mut self, left: Node) -> ParseResult<Node> {
        let Node::VariableDeclaration { declarations, .. } = &left else {
            return self.to_assignment_target(left);
        };
        if matches!(
            declarations.as_slice(),
            [Node::VariableDeclarator { init: None, .. }]
        ) {
            Ok(left)
        } else {
            Err(self.error_at_token(
                "Only a single variable declaration without initializer is allowed here.",
            ))
        }
    }

    fn parse_for_rest(&mut self, init: Option<Node>) -> ParseResult<Node> {
        self.parse_expected(SyntaxKind::SemicolonToken)?;
        let test = if self.is_token(SyntaxKind::SemicolonToken) {
            None
        } else {
            Some(Box::new(self.allow_in(Self::parse_expression)?))
        };
        self.parse_expected(SyntaxKind::SemicolonToken)?;
        let update = if self.is_token(SyntaxKind::CloseParenToken) {
            None
        } else {
            Some(Box::new(self.allow_in(Self::parse_expression)?))
        };
        self.parse_expected(SyntaxKind::CloseParenToken)?;
        let body = self.parse_statement()?;
        Ok(Node::ForStatement {
            init: init.map(Box::new),
            test,
            update,
            body: Box::new(body),
        })
    }

    fn parse_return_statement(&mut self) -> ParseResult<Node> {
        self.next_token()?;
        let argument = if self.can_parse_semicolon() {
            None
        } else {
            Some(Box::new(self.allow_in(Self::parse_expression)?))
        };
        self.parse_semicolon()?;
        Ok(Node::ReturnStatement { argument })
    }

    fn parse_break_or_continue(&mut self, is_break: bool) -> ParseResult<Node> {
        self.next_token()?;
        let label = if self.token().is_identifier() && !self.has_preceding_line_break() {
            Some(self.parse_binding_identifier()?)
        } else {
            None
        };
        self.parse_semicolon()?;
        Ok(if is_break {
            Node::BreakStatement { label }
        } else {
            Node::ContinueStatement { label }
        })
    }

    fn parse_throw_statement(&mut self) -> ParseResult<Node> {
        self.next_token()?;
        if self.has_preceding_line_break() {
            return Err(self.error_at_token("Line break not permitted here."));
        }
        let argument = self.allow_in(Self::parse_expression)?;
        self.parse_semicolon()?;
        Ok(Node::ThrowStatement {
            argument: Box::new(argument),
        })
    }

    fn parse_try_statement(&mut self) -> ParseResult<Node> {
        self.next_token()?;
        let block = self.parse_block()?;

        let handler = if self.parse_optional(SyntaxKind::CatchKeyword)? {
            let param = if self.parse_optional(SyntaxKind::OpenParenToken)? {
                let param = self.parse_binding_target()?;
                self.parse_expected(SyntaxKind::CloseParenToken)?;
                Some(Box::new(param))
            } else {
                None
            };
            let body = self.parse_block()?;
            Some(Box::new(Node::CatchClause {
                param,
                body: Box::new(body),
            }))
        } else {
            None
        };

        let finalizer = if self.parse_optional(SyntaxKind::FinallyKeyword)? {
            Some(Box::new(self.parse_block()?))
        } else {
            None
        };

        if handler.is_none() && finalizer.is_none() {
            return Err(self.error_at_token("'catch' or 'finally' expected."));
        }

        Ok(Node::TryStatement {
            block: Box::new(block),
            handler,
            finalizer,
        })
    }

    fn parse_switch_statement(&mut self) -> ParseResult<Node> {
        self.next_token()?;
        let discriminant = self.parse_parenthesized_expression()?;
        self.parse_expected(SyntaxKind::OpenBraceToken)?;

        let mut cases = Vec::new();
        while !self.is_token(SyntaxKind::CloseBraceToken) {
            let test = match self.token() {
                SyntaxKind::CaseKeyword => {
                    self.next_token()?;
                    Some(Box::new(self.allow_in(Self::parse_expression)?))
                }
                SyntaxKind::DefaultKeyword => {
                    self.next_token()?;
                    None
                }
                _ => return Err(self.error_at_token("'case' or 'default' expected.")),
            };
            self.parse_expected(SyntaxKind::ColonToken)?;

            let mut consequent = Vec::new();
            while !matches!(
                self.token(),
                SyntaxKind::CaseKeyword
                    | SyntaxKind::DefaultKeyword
                    | SyntaxKind::CloseBraceToken
                    | SyntaxKind::EndOfFileToken
            ) {
                consequent.push(self.parse_statement()?);
            }
            cases.push(Node::SwitchCase { test, consequent });
        }
        self.next_token()?;

        Ok(Node::SwitchStatement {
            discriminant: Box::new(discriminant),
            cases,
        })
    }

    fn parse_labeled_statement(&mut self) -> ParseResult<Node> {
        let label = self.parse_binding_identifier()?;
        self.parse_expected(SyntaxKind::ColonToken)?;
        let body = self.parse_statement()?;
        Ok(Node::LabeledStatement {
            label,
            body: Box::new(body),
        })
    }
}

fn is_constructor_key(key: &Node) -> bool {
    match key {
        Node::Identifier { name } => name == "constructor",
        Node::Literal {
            kind: LiteralKind::String,
            raw,
        } => raw.len() > 2 && &raw[1..raw.len() - 1] == "constructor",
        _ => false,
    }
}
