//! Expression precedence used to decide where parentheses are required.

use jspector_parser::Node;
use jspector_parser::ast::{BinaryOperator, LogicalOperator};

/// Expressions that are wrapped in parentheses wherever they appear as an operand.
pub(super) const NEEDS_PARENTHESES: u8 = 17;

pub(super) const PRECEDENCE_MEMBER: u8 = 19;
pub(super) const PRECEDENCE_UNARY: u8 = 15;
pub(super) const PRECEDENCE_BINARY: u8 = 14;
pub(super) const PRECEDENCE_LOGICAL: u8 = 13;
pub(super) const PRECEDENCE_CONDITIONAL: u8 = 4;
pub(super) const PRECEDENCE_ASSIGNMENT: u8 = 3;

/// Binding strength of an expression node as an operand.
pub(super) const fn expression_precedence(node: &Node) -> u8 {
    match node {
        Node::Literal { .. } => 18,
        Node::MemberExpression { .. } | Node::CallExpression { .. } | Node::NewExpression { .. } => {
            PRECEDENCE_MEMBER
        }
        Node::ArrowFunctionExpression { .. }
        | Node::ClassExpression(_)
        | Node::FunctionExpression(_)
        | Node::ObjectExpression { .. } => NEEDS_PARENTHESES,
        Node::UpdateExpression { .. } => 16,
        Node::UnaryExpression { .. } | Node::AwaitExpression { .. } => PRECEDENCE_UNARY,
        Node::BinaryExpression { .. } => PRECEDENCE_BINARY,
        Node::LogicalExpression { .. } => PRECEDENCE_LOGICAL,
        Node::ConditionalExpression { .. } => PRECEDENCE_CONDITIONAL,
        Node::AssignmentExpression { .. } => PRECEDENCE_ASSIGNMENT,
        Node::YieldExpression { .. } => 2,
        Node::RestElement { .. } => 1,
        // Identifiers, `this`, arrays, templates, sequences (self-parenthesized)
        // and everything that never appears as an operand.
        _ => 20,
    }
}

enum Infix {
    Binary(BinaryOperator),
    Logical(LogicalOperator),
}

const fn infix_operator(node: &Node) -> Option<Infix> {
    match node {
        Node::BinaryExpression { operator, .. } => Some(Infix::Binary(*operator)),
        Node::LogicalExpression { operator, .. } => Some(Infix::Logical(*operator)),
        _ => None,
    }
}

const fn operator_precedence(op: &Infix) -> u8 {
    match op {
        Infix::Binary(op) => op.precedence(),
        Infix::Logical(op) => op.precedence(),
    }
}

const fn is_exponent(op: &Infix) -> bool {
    matches!(op, Infix::Binary(BinaryOperator::Exp))
}

const fn is_coalesce(op: &Infix) -> bool {
    matches!(op, Infix::Logical(LogicalOperator::Coalesce))
}

/// Whether `node`, printed as an operand of `parent`, needs parentheses.
pub(super) fn needs_parentheses(node: &Node, parent: &Node, is_right_hand: bool) -> bool {
    let node_precedence = expression_precedence(node);
    if node_precedence == NEEDS_PARENTHESES {
        return true;
    }

    let parent_precedence = expression_precedence(parent);
    let (Some(node_op), Some(parent_op)) = (infix_operator(node), infix_operator(parent)) else {
        // `-a ** b` is a syntax error, so a unary base of `**` is parenthesized.
        let unary_base_of_exponent = !is_right_hand
            && node_precedence == PRECEDENCE_UNARY
            && infix_operator(parent).is_some_and(|op| is_exponent(&op));
        return node_precedence != parent_precedence
            && (unary_base_of_exponent || node_precedence < parent_precedence);
    };

    if node_precedence != parent_precedence {
        return node_precedence < parent_precedence;
    }
    if is_exponent(&node_op) && is_exponent(&parent_op) {
        return !is_right_hand;
    }
    if node_precedence == PRECEDENCE_LOGICAL && (is_coalesce(&node_op) || is_coalesce(&parent_op)) {
        return true;
    }

    let node_operator = operator_precedence(&node_op);
    let parent_operator = operator_precedence(&parent_op);
    if is_right_hand {
        node_operator <= parent_operator
    } else {
        node_operator < parent_operator
    }
}
