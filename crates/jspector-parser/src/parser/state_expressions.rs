//! Expression parsing.
//!
//! Binary expressions use precedence climbing; arrow functions are detected by
//! speculatively parsing a parameter list and checking for `=>`.

use jspector_scanner::SyntaxKind;

use super::error::ParseResult;
use super::state::{
    CONTEXT_FLAG_ASYNC, CONTEXT_FLAG_DISALLOW_IN, CONTEXT_FLAG_GENERATOR, ParserState,
};
use crate::ast::{
    AssignmentOperator, BinaryOperator, Function, LiteralKind, LogicalOperator, Node, PropertyKind,
    UnaryOperator, UpdateOperator,
};

/// An infix operator at the current token.
#[derive(Copy, Clone)]
enum InfixOperator {
    Binary(BinaryOperator),
    Logical(LogicalOperator),
}

impl InfixOperator {
    const fn precedence(self) -> u8 {
        match self {
            Self::Binary(op) => op.precedence(),
            Self::Logical(op) => op.precedence(),
        }
    }

    const fn is_right_associative(self) -> bool {
        matches!(self, Self::Binary(BinaryOperator::Exp))
    }
}

impl ParserState {
    /// Comma-separated expression list.
    pub(crate) fn parse_expression(&mut self) -> ParseResult<Node> {
        let first = self.parse_assignment_expression()?;
        if !self.is_token(SyntaxKind::CommaToken) {
            return Ok(first);
        }
        let mut expressions = vec![first];
        while self.parse_optional(SyntaxKind::CommaToken)? {
            expressions.push(self.parse_assignment_expression()?);
        }
        Ok(Node::SequenceExpression { expressions })
    }

    pub(crate) fn parse_assignment_expression(&mut self) -> ParseResult<Node> {
        self.guarded(Self::parse_assignment_expression_worker)
    }

    fn parse_assignment_expression_worker(&mut self) -> ParseResult<Node> {
        if self.is_token(SyntaxKind::YieldKeyword) && self.in_context(CONTEXT_FLAG_GENERATOR) {
            return self.parse_yield_expression();
        }
        if let Some(arrow) = self.try_parse_arrow_function()? {
            return Ok(arrow);
        }

        let expression = self.parse_conditional_expression()?;
        if !self.token().is_assignment_operator() {
            return Ok(expression);
        }

        let Some(operator) = AssignmentOperator::from_token(self.token()) else {
            return Err(self.unexpected_token());
        };
        let left = if operator == AssignmentOperator::Assign {
            self.to_assignment_target(expression)?
        } else if matches!(
            expression,
            Node::Identifier { .. } | Node::MemberExpression { optional: false, .. }
        ) {
            expression
        } else {
            return Err(self.error_at_token("Invalid left-hand side in assignment."));
        };

        self.next_token()?;
        let right = self.parse_assignment_expression()?;
        Ok(Node::AssignmentExpression {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    fn parse_yield_expression(&mut self) -> ParseResult<Node> {
        self.next_token()?;
        if self.has_preceding_line_break() || !self.is_start_of_yield_operand() {
            return Ok(Node::YieldExpression {
                argument: None,
                delegate: false,
            });
        }
        let delegate = self.parse_optional(SyntaxKind::AsteriskToken)?;
        let argument = self.parse_assignment_expression()?;
        Ok(Node::YieldExpression {
            argument: Some(Box::new(argument)),
            delegate,
        })
    }

    fn is_start_of_yield_operand(&self) -> bool {
        !matches!(
            self.token(),
            SyntaxKind::CloseParenToken
                | SyntaxKind::CloseBracketToken
                | SyntaxKind::CloseBraceToken
                | SyntaxKind::CommaToken
                | SyntaxKind::SemicolonToken
                | SyntaxKind::ColonToken
                | SyntaxKind::EndOfFileToken
        )
    }

    // =========================================================================
    // Arrow functions
    // =========================================================================

    fn try_parse_arrow_function(&mut self) -> ParseResult<Option<Node>> {
        let is_async = self.is_token(SyntaxKind::AsyncKeyword) && self.look_ahead_is_async_arrow();
        if !is_async && !self.look_ahead_is_arrow_head() {
            return Ok(None);
        }
        if is_async {
            self.next_token()?;
        }

        let params = self.parse_arrow_parameters()?;
        if self.has_preceding_line_break() {
            return Err(self.error_at_token("Line break not permitted before '=>'."));
        }
        self.parse_expected(SyntaxKind::EqualsGreaterThanToken)?;

        let expression = !self.is_token(SyntaxKind::OpenBraceToken);
        let set = if is_async { CONTEXT_FLAG_ASYNC } else { 0 };
        let body = self.with_context(
            set,
            (CONTEXT_FLAG_ASYNC | CONTEXT_FLAG_GENERATOR) & !set,
            |p| {
                if expression {
                    p.parse_assignment_expression()
                } else {
                    p.allow_in(Self::parse_block)
                }
            },
        )?;

        Ok(Some(Node::ArrowFunctionExpression {
            params,
            body: Box::new(body),
            expression,
            is_async,
        }))
    }

    fn parse_arrow_parameters(&mut self) -> ParseResult<Vec<Node>> {
        if self.token().is_identifier() {
            let name = self.parse_binding_identifier()?;
            return Ok(vec![Node::ident(name)]);
        }
        self.parse_parameters()
    }

    /// `x =>` or `( ... ) =>` at the current token.
    fn look_ahead_is_arrow_head(&mut self) -> bool {
        match self.token() {
            kind if kind.is_identifier() => {
                let (next, line_break) = self.peek_token();
                next == SyntaxKind::EqualsGreaterThanToken && !line_break
            }
            SyntaxKind::OpenParenToken => self.look_ahead(|p| {
                p.parse_parameters().is_ok()
                    && p.is_token(SyntaxKind::EqualsGreaterThanToken)
                    && !p.has_preceding_line_break()
            }),
            _ => false,
        }
    }

    /// `async x =>` or `async ( ... ) =>` at the current token.
    fn look_ahead_is_async_arrow(&mut self) -> bool {
        self.look_ahead(|p| {
            if p.next_token().is_err() || p.has_preceding_line_break() {
                return false;
            }
            p.look_ahead_is_arrow_head()
        })
    }

    // =========================================================================
    // Operators
    // =========================================================================

    fn parse_conditional_expression(&mut self) -> ParseResult<Node> {
        let test = self.parse_binary_expression(0)?;
        if !self.parse_optional(SyntaxKind::QuestionToken)? {
            return Ok(test);
        }
        let consequent = self.allow_in(Self::parse_assignment_expression)?;
        self.parse_expected(SyntaxKind::ColonToken)?;
        let alternate = self.parse_assignment_expression()?;
        Ok(Node::ConditionalExpression {
            test: Box::new(test),
            consequent: Box::new(consequent),
            alternate: Box::new(alternate),
        })
    }

    fn infix_operator_at_token(&self) -> Option<InfixOperator> {
        let kind = self.token();
        if kind == SyntaxKind::InKeyword && self.in_context(CONTEXT_FLAG_DISALLOW_IN) {
            return None;
        }
        if let Some(op) = LogicalOperator::from_token(kind) {
            return Some(InfixOperator::Logical(op));
        }
        BinaryOperator::from_token(kind).map(InfixOperator::Binary)
    }

    /// Precedence climbing over binary and logical operators.
    fn parse_binary_expression(&mut self, min_precedence: u8) -> ParseResult<Node> {
        let mut left = self.parse_unary_expression()?;

        while let Some(op) = self.infix_operator_at_token() {
            let precedence = op.precedence();
            if precedence <= min_precedence {
                break;
            }
            self.next_token()?;

            let next_min = if op.is_right_associative() {
                precedence - 1
            } else {
                precedence
            };
            let right = self.guarded(|p| p.parse_binary_expression(next_min))?;

            left = match op {
                InfixOperator::Binary(operator) => Node::binary(left, operator, right),
                InfixOperator::Logical(operator) => Node::LogicalExpression {
                    operator,
                    left: Box::new(left),
                    right: Box::new(right),
                },
            };
        }

        Ok(left)
    }

    fn parse_unary_expression(&mut self) -> ParseResult<Node> {
        self.guarded(Self::parse_unary_expression_worker)
    }

    fn parse_unary_expression_worker(&mut self) -> ParseResult<Node> {
        if let Some(operator) = UnaryOperator::from_token(self.token()) {
            self.next_token()?;
            let argument = self.parse_unary_expression()?;
            return Ok(Node::UnaryExpression {
                operator,
                argument: Box::new(argument),
            });
        }

        if let Some(operator) = UpdateOperator::from_token(self.token()) {
            self.next_token()?;
            let argument = self.parse_unary_expression()?;
            self.check_update_target(&argument)?;
            return Ok(Node::UpdateExpression {
                operator,
                prefix: true,
                argument: Box::new(argument),
            });
        }

        if self.is_token(SyntaxKind::AwaitKeyword) && self.in_context(CONTEXT_FLAG_ASYNC) {
            self.next_token()?;
            let argument = self.parse_unary_expression()?;
            return Ok(Node::AwaitExpression {
                argument: Box::new(argument),
            });
        }

        let expression = self.parse_left_hand_side_expression()?;
        if let Some(operator) = UpdateOperator::from_token(self.token())
            && !self.has_preceding_line_break()
        {
            self.check_update_target(&expression)?;
            self.next_token()?;
            return Ok(Node::UpdateExpression {
                operator,
                prefix: false,
                argument: Box::new(expression),
            });
        }
        Ok(expression)
    }

    fn check_update_target(&self, target: &Node) -> ParseResult<()> {
        match target {
            Node::Identifier { .. } | Node::MemberExpression { optional: false, .. } => Ok(()),
            _ => Err(self.error_at_token(
                "The operand of an increment or decrement operator must be a variable or a property access.",
            )),
        }
    }

    // =========================================================================
    // Member, call and new
    // =========================================================================

    pub(crate) fn parse_left_hand_side_expression(&mut self) -> ParseResult<Node> {
        let expression = if self.is_token(SyntaxKind::NewKeyword) {
            self.parse_new_expression()?
        } else {
            self.parse_primary_expression()?
        };
        self.parse_member_tail(expression, true)
    }

    fn parse_new_expression(&mut self) -> ParseResult<Node> {
        self.guarded(|p| {
            p.parse_expected(SyntaxKind::NewKeyword)?;

            if p.parse_optional(SyntaxKind::DotToken)? {
                let property = p.parse_identifier_name()?;
                if property != "target" {
                    return Err(p.error_at_token("'target' expected."));
                }
                return Ok(Node::member(Node::ident("new"), property));
            }

            let callee = if p.is_token(SyntaxKind::NewKeyword) {
                p.parse_new_expression()?
            } else {
                p.parse_primary_expression()?
            };
            let callee = p.parse_member_tail(callee, false)?;
            let arguments = if p.is_token(SyntaxKind::OpenParenToken) {
                p.parse_arguments()?
            } else {
                Vec::new()
            };
            Ok(Node::new_expr(callee, arguments))
        })
    }

    /// Property accesses, calls (when `allow_calls`) and tagged templates.
    fn parse_member_tail(&mut self, mut expression: Node, allow_calls: bool) -> ParseResult<Node> {
        loop {
            match self.token() {
                SyntaxKind::DotToken => {
                    self.next_token()?;
                    let name = self.parse_identifier_name()?;
                    expression = Node::member(expression, name);
                }
                SyntaxKind::OpenBracketToken => {
                    self.next_token()?;
                    let property = self.allow_in(Self::parse_expression)?;
                    self.parse_expected(SyntaxKind::CloseBracketToken)?;
                    expression = Node::MemberExpression {
                        object: Box::new(expression),
                        property: Box::new(property),
                        computed: true,
                        optional: false,
                    };
                }
                SyntaxKind::QuestionDotToken if allow_calls => {
                    self.next_token()?;
                    expression = self.parse_optional_chain_link(expression)?;
                }
                SyntaxKind::OpenParenToken if allow_calls => {
                    let arguments = self.parse_arguments()?;
                    expression = Node::CallExpression {
                        callee: Box::new(expression),
                        arguments,
                        optional: false,
                    };
                }
                kind if kind.is_template_start() => {
                    let quasi = self.parse_template_literal()?;
                    expression = Node::TaggedTemplateExpression {
                        tag: Box::new(expression),
                        quasi: Box::new(quasi),
                    };
                }
                _ => return Ok(expression),
            }
        }
    }

    /// The link after `?.`: a call, a computed access or a property name.
    fn parse_optional_chain_link(&mut self, expression: Node) -> ParseResult<Node> {
        match self.token() {
            SyntaxKind::OpenParenToken => {
                let arguments = self.parse_arguments()?;
                Ok(Node::CallExpression {
                    callee: Box::new(expression),
                    arguments,
                    optional: true,
                })
            }
            SyntaxKind::OpenBracketToken => {
                self.next_token()?;
                let property = self.allow_in(Self::parse_expression)?;
                self.parse_expected(SyntaxKind::CloseBracketToken)?;
                Ok(Node::MemberExpression {
                    object: Box::new(expression),
                    property: Box::new(property),
                    computed: true,
                    optional: true,
                })
            }
            _ => {
                let name = self.parse_identifier_name()?;
                Ok(Node::MemberExpression {
                    object: Box::new(expression),
                    property: Box::new(Node::ident(name)),
                    computed: false,
                    optional: true,
                })
            }
        }
    }

    pub(crate) fn parse_arguments(&mut self) -> ParseResult<Vec<Node>> {
        self.parse_expected(SyntaxKind::OpenParenToken)?;
        self.allow_in(|p| {
            let mut arguments = Vec::new();
            while !p.is_token(SyntaxKind::CloseParenToken) {
                arguments.push(p.parse_spread_or_assignment()?);
                if !p.parse_optional(SyntaxKind::CommaToken)? {
                    break;
                }
            }
            p.parse_expected(SyntaxKind::CloseParenToken)?;
            Ok(arguments)
        })
    }

    fn parse_spread_or_assignment(&mut self) -> ParseResult<Node> {
        if self.parse_optional(SyntaxKind::DotDotDotToken)? {
            let argument = self.parse_assignment_expression()?;
            return Ok(Node::SpreadElement {
                argument: Box::new(argument),
            });
        }
        self.parse_assignment_expression()
    }

    // =========================================================================
    // Primary expressions
    // =========================================================================

    fn parse_primary_expression(&mut self) -> ParseResult<Node> {
        match self.token() {
            SyntaxKind::AsyncKeyword if self.look_ahead_is_async_function() => {
                self.next_token()?;
                let function = self.parse_function(true, false)?;
                Ok(Node::FunctionExpression(function))
            }
            kind if kind.is_identifier() => {
                let name = self.parse_binding_identifier()?;
                Ok(Node::ident(name))
            }
            SyntaxKind::NumericLiteral => {
                let raw = self.token_value().to_string();
                let kind = if raw.ends_with('n') {
                    LiteralKind::BigInt
                } else {
                    LiteralKind::Number
                };
                self.next_token()?;
                Ok(Node::Literal { kind, raw })
            }
            SyntaxKind::StringLiteral => self.parse_literal_token(LiteralKind::String),
            SyntaxKind::NullKeyword => self.parse_literal_token(LiteralKind::Null),
            SyntaxKind::TrueKeyword | SyntaxKind::FalseKeyword => {
                self.parse_literal_token(LiteralKind::Boolean)
            }
            SyntaxKind::SlashToken | SyntaxKind::SlashEqualsToken => {
                self.scanner.rescan_slash_token();
                self.check_scan_error()?;
                self.parse_literal_token(LiteralKind::RegExp)
            }
            kind if kind.is_template_start() => self.parse_template_literal(),
            SyntaxKind::ThisKeyword => {
                self.next_token()?;
                Ok(Node::ThisExpression)
            }
            SyntaxKind::SuperKeyword => {
                self.next_token()?;
                Ok(Node::Super)
            }
            SyntaxKind::OpenParenToken => {
                self.next_token()?;
                let expression = self.allow_in(Self::parse_expression)?;
                self.parse_expected(SyntaxKind::CloseParenToken)?;
                Ok(expression)
            }
            SyntaxKind::OpenBracketToken => self.parse_array_literal(),
            SyntaxKind::OpenBraceToken => self.parse_object_literal(),
            SyntaxKind::FunctionKeyword => {
                let function = self.parse_function(false, false)?;
                Ok(Node::FunctionExpression(function))
            }
            SyntaxKind::ClassKeyword => {
                let class = self.parse_class(false)?;
                Ok(Node::ClassExpression(class))
            }
            _ => Err(self.unexpected_token()),
        }
    }

    fn parse_literal_token(&mut self, kind: LiteralKind) -> ParseResult<Node> {
        let raw = self.scanner.token_text().to_string();
        self.next_token()?;
        Ok(Node::Literal { kind, raw })
    }

    /// Template literal starting at a `NoSubstitutionTemplateLiteral` or `TemplateHead`.
    fn parse_template_literal(&mut self) -> ParseResult<Node> {
        let mut quasis = vec![self.token_value().to_string()];
        let mut expressions = Vec::new();

        if self.is_token(SyntaxKind::TemplateHead) {
            loop {
                self.next_token()?;
                expressions.push(self.allow_in(Self::parse_expression)?);
                if !self.is_token(SyntaxKind::CloseBraceToken) {
                    return Err(self.error_at_token("'}' expected."));
                }
                let kind = self.scanner.rescan_template_token();
                self.check_scan_error()?;
                quasis.push(self.token_value().to_string());
                if kind == SyntaxKind::TemplateTail {
                    break;
                }
            }
        }

        self.next_token()?;
        Ok(Node::TemplateLiteral {
            quasis,
            expressions,
        })
    }

    fn parse_array_literal(&mut self) -> ParseResult<Node> {
        self.parse_expected(SyntaxKind::OpenBracketToken)?;
        let elements = self.allow_in(|p| {
            let mut elements = Vec::new();
            while !p.is_token(SyntaxKind::CloseBracketToken) {
                if p.parse_optional(SyntaxKind::CommaToken)? {
                    elements.push(None);
                    continue;
                }
                elements.push(Some(p.parse_spread_or_assignment()?));
                if !p.parse_optional(SyntaxKind::CommaToken)? {
                    break;
                }
            }
            p.parse_expected(SyntaxKind::CloseBracketToken)?;
            Ok(elements)
        })?;
        Ok(Node::ArrayExpression { elements })
    }

    fn parse_object_literal(&mut self) -> ParseResult<Node> {
        self.parse_expected(SyntaxKind::OpenBraceToken)?;
        let properties = self.allow_in(|p| {
            let mut properties = Vec::new();
            while !p.is_token(SyntaxKind::CloseBraceToken) {
                properties.push(p.parse_object_member()?);
                if !p.parse_optional(SyntaxKind::CommaToken)? {
                    break;
                }
            }
            p.parse_expected(SyntaxKind::CloseBraceToken)?;
            Ok(properties)
        })?;
        Ok(Node::ObjectExpression { properties })
    }

    fn parse_object_member(&mut self) -> ParseResult<Node> {
        if self.parse_optional(SyntaxKind::DotDotDotToken)? {
            let argument = self.parse_assignment_expression()?;
            return Ok(Node::SpreadElement {
                argument: Box::new(argument),
            });
        }

        let is_async = self.is_token(SyntaxKind::AsyncKeyword) && self.look_ahead_is_modifier();
        if is_async {
            self.next_token()?;
        }
        let is_generator = self.parse_optional(SyntaxKind::AsteriskToken)?;

        if !is_async
            && !is_generator
            && matches!(self.token(), SyntaxKind::GetKeyword | SyntaxKind::SetKeyword)
            && self.look_ahead_is_modifier()
        {
            let kind = if self.is_token(SyntaxKind::GetKeyword) {
                PropertyKind::Get
            } else {
                PropertyKind::Set
            };
            self.next_token()?;
            let (key, computed) = self.parse_property_key()?;
            let value = self.parse_method_function(false, false)?;
            return Ok(property(key, value, kind, computed, false, false));
        }

        let key_is_identifier = self.token().is_identifier();
        let (key, computed) = self.parse_property_key()?;

        if is_async || is_generator || self.is_token(SyntaxKind::OpenParenToken) {
            let value = self.parse_method_function(is_async, is_generator)?;
            return Ok(property(key, value, PropertyKind::Init, computed, false, true));
        }

        if self.parse_optional(SyntaxKind::ColonToken)? {
            let value = self.parse_assignment_expression()?;
            return Ok(property(key, value, PropertyKind::Init, computed, false, false));
        }

        let Node::Identifier { name } = &key else {
            return Err(self.error_at_token("':' expected."));
        };
        if computed || !key_is_identifier {
            return Err(self.error_at_token("':' expected."));
        }

        // `{ a = 1 }` is only valid once converted to a pattern.
        let value = if self.parse_optional(SyntaxKind::EqualsToken)? {
            Node::AssignmentPattern {
                left: Box::new(Node::ident(name.clone())),
                right: Box::new(self.parse_assignment_expression()?),
            }
        } else {
            Node::ident(name.clone())
        };
        Ok(property(key, value, PropertyKind::Init, false, true, false))
    }

    /// Identifier, string, number or `[computed]` key. Returns `(key, computed)`.
    pub(crate) fn parse_property_key(&mut self) -> ParseResult<(Node, bool)> {
        match self.token() {
            SyntaxKind::StringLiteral => Ok((self.parse_literal_token(LiteralKind::String)?, false)),
            SyntaxKind::NumericLiteral => Ok((self.parse_literal_token(LiteralKind::Number)?, false)),
            SyntaxKind::OpenBracketToken => {
                self.next_token()?;
                let key = self.allow_in(Self::parse_assignment_expression)?;
                self.parse_expected(SyntaxKind::CloseBracketToken)?;
                Ok((key, true))
            }
            kind if kind.is_identifier_or_keyword() => {
                let name = self.parse_identifier_name()?;
                Ok((Node::ident(name), false))
            }
            _ => Err(self.error_at_token("Property name expected.")),
        }
    }

    /// Method body as an anonymous `FunctionExpression`.
    pub(crate) fn parse_method_function(
        &mut self,
        is_async: bool,
        is_generator: bool,
    ) -> ParseResult<Node> {
        let (params, body) = self.parse_function_rest(is_async, is_generator)?;
        Ok(Node::FunctionExpression(Function {
            id: None,
            params,
            body: Box::new(body),
            is_async,
            is_generator,
        }))
    }
}

fn property(
    key: Node,
    value: Node,
    kind: PropertyKind,
    computed: bool,
    shorthand: bool,
    method: bool,
) -> Node {
    Node::Property {
        key: Box::new(key),
        value: Box::new(value),
        kind,
        computed,
        shorthand,
        method,
    }
}
