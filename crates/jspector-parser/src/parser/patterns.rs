//! Binding patterns and the expression-to-pattern cover grammar.

use jspector_scanner::SyntaxKind;

use super::error::ParseResult;
use super::state::ParserState;
use crate::ast::{AssignmentOperator, Node, PropertyKind};

impl ParserState {
    /// `(a, [b, c] = d, ...rest)`
    pub(crate) fn parse_parameters(&mut self) -> ParseResult<Vec<Node>> {
        self.parse_expected(SyntaxKind::OpenParenToken)?;
        self.allow_in(|p| {
            let mut params = Vec::new();
            while !p.is_token(SyntaxKind::CloseParenToken) {
                if p.parse_optional(SyntaxKind::DotDotDotToken)? {
                    let argument = p.parse_binding_target()?;
                    params.push(Node::RestElement {
                        argument: Box::new(argument),
                    });
                    break;
                }
                params.push(p.parse_binding_element()?);
                if !p.parse_optional(SyntaxKind::CommaToken)? {
                    break;
                }
            }
            p.parse_expected(SyntaxKind::CloseParenToken)?;
            Ok(params)
        })
    }

    /// Identifier, array pattern or object pattern.
    pub(crate) fn parse_binding_target(&mut self) -> ParseResult<Node> {
        self.guarded(|p| match p.token() {
            SyntaxKind::OpenBracketToken => p.parse_array_binding_pattern(),
            SyntaxKind::OpenBraceToken => p.parse_object_binding_pattern(),
            _ => Ok(Node::ident(p.parse_binding_identifier()?)),
        })
    }

    /// A binding target with an optional `= default`.
    fn parse_binding_element(&mut self) -> ParseResult<Node> {
        let target = self.parse_binding_target()?;
        self.parse_binding_default(target)
    }

    fn parse_binding_default(&mut self, target: Node) -> ParseResult<Node> {
        if !self.parse_optional(SyntaxKind::EqualsToken)? {
            return Ok(target);
        }
        let right = self.allow_in(Self::parse_assignment_expression)?;
        Ok(Node::AssignmentPattern {
            left: Box::new(target),
            right: Box::new(right),
        })
    }

    fn parse_array_binding_pattern(&mut self) -> ParseResult<Node> {
        self.parse_expected(SyntaxKind::OpenBracketToken)?;
        let mut elements = Vec::new();
        while !self.is_token(SyntaxKind::CloseBracketToken) {
            if self.parse_optional(SyntaxKind::CommaToken)? {
                elements.push(None);
                continue;
            }
            if self.parse_optional(SyntaxKind::DotDotDotToken)? {
                let argument = self.parse_binding_target()?;
                elements.push(Some(Node::RestElement {
                    argument: Box::new(argument),
                }));
                break;
            }
            elements.push(Some(self.parse_binding_element()?));
            if !self.parse_optional(SyntaxKind::CommaToken)? {
                break;
            }
        }
        self.parse_expected(SyntaxKind::CloseBracketToken)?;
        Ok(Node::ArrayPattern { elements })
    }

    fn parse_object_binding_pattern(&mut self) -> ParseResult<Node> {
        self.parse_expected(SyntaxKind::OpenBraceToken)?;
        let mut properties = Vec::new();
        while !self.is_token(SyntaxKind::CloseBraceToken) {
            if self.parse_optional(SyntaxKind::DotDotDotToken)? {
                let name = self.parse_binding_identifier()?;
                properties.push(Node::RestElement {
                    argument: Box::new(Node::ident(name)),
                });
                break;
            }

            let key_is_identifier = self.token().is_identifier();
            let (key, computed) = self.parse_property_key()?;
            let (value, shorthand) = if self.parse_optional(SyntaxKind::ColonToken)? {
                (self.parse_binding_element()?, false)
            } else {
                match &key {
                    Node::Identifier { name } if key_is_identifier && !computed => {
                        let target = Node::ident(name.clone());
                        (self.parse_binding_default(target)?, true)
                    }
                    _ => return Err(self.error_at_token("':' expected.")),
                }
            };

            properties.push(Node::Property {
                key: Box::new(key),
                value: Box::new(value),
                kind: PropertyKind::Init,
                computed,
                shorthand,
                method: false,
            });
            if !self.parse_optional(SyntaxKind::CommaToken)? {
                break;
            }
        }
        self.parse_expected(SyntaxKind::CloseBraceToken)?;
        Ok(Node::ObjectPattern { properties })
    }

    /// Reinterpret a parsed expression as the target of `=` or `for-in/of`.
    pub(crate) fn to_assignment_target(&self, node: Node) -> ParseResult<Node> {
        match node {
            Node::Identifier { .. }
            | Node::MemberExpression {
                optional: false, ..
            }
            | Node::AssignmentPattern { .. } => Ok(node),
            Node::ArrayExpression { elements } => {
                let count = elements.len();
                let mut converted = Vec::with_capacity(count);
                for (index, element) in elements.into_iter().enumerate() {
                    let element = match element {
                        None => None,
                        Some(Node::SpreadElement { argument }) => {
                            if index + 1 != count {
                                return Err(self
                                    .error_at_token("A rest element must be last in a pattern."));
                            }
                            Some(Node::RestElement {
                                argument: Box::new(self.to_assignment_target(*argument)?),
                            })
                        }
                        Some(element) => Some(self.to_pattern_element(element)?),
                    };
                    converted.push(element);
                }
                Ok(Node::ArrayPattern {
                    elements: converted,
                })
            }
            Node::ObjectExpression { properties } => {
                let count = properties.len();
                let mut converted = Vec::with_capacity(count);
                for (index, property) in properties.into_iter().enumerate() {
                    converted.push(match property {
                        Node::SpreadElement { argument } if index + 1 == count => {
                            Node::RestElement {
                                argument: Box::new(self.to_assignment_target(*argument)?),
                            }
                        }
                        Node::Property {
                            key,
                            value,
                            kind: PropertyKind::Init,
                            computed,
                            shorthand,
                            method: false,
                        } => Node::Property {
                            key,
                            value: Box::new(self.to_pattern_element(*value)?),
                            kind: PropertyKind::Init,
                            computed,
                            shorthand,
                            method: false,
                        },
                        _ => return Err(self.error_at_token("Invalid destructuring assignment target.")),
                    });
                }
                Ok(Node::ObjectPattern {
                    properties: converted,
                })
            }
            _ => Err(self.error_at_token("Invalid assignment target.")),
        }
    }

    /// A pattern element may carry a default: `a = 1` becomes an `AssignmentPattern`.
    fn to_pattern_element(&self, node: Node) -> ParseResult<Node> {
        match node {
            Node::AssignmentExpression {
                operator: AssignmentOperator::Assign,
                left,
                right,
            } => Ok(Node::AssignmentPattern { left, right }),
            other => self.to_assignment_target(other),
        }
    }
}
