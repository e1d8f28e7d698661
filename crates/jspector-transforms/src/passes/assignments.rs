//! Pass 3: assignments to a plain name become `set` calls.
//!
//! ```text
//! x = E;     ->  x.set(E);
//! x += 2;    ->  x.set(x.get() + 2);
//! ```
//!
//! Compound assignments are decomposed only for `+=`, `-=`, `*=`, `/=` and
//! `%=` with a literal right-hand side. Member targets, patterns and every
//! other compound operator are left as written.

use jspector_parser::Node;
use jspector_parser::ast::{AssignmentOperator, NodeKind, Visitor, replace};
use tracing::{debug, debug_span, trace};

use super::take;
use crate::factory::{NodeFactory, Skeleton};

pub fn run(program: &mut Node, factory: NodeFactory<'_>) -> usize {
    let _span = debug_span!("assignments").entered();
    let mut pass = AssignmentRewriter {
        factory,
        rewrites: 0,
    };
    replace(program, &mut pass);
    debug!(rewrites = pass.rewrites, "rewrote assignments");
    pass.rewrites
}

struct AssignmentRewriter<'a> {
    factory: NodeFactory<'a>,
    rewrites: usize,
}

impl Visitor for AssignmentRewriter<'_> {
    fn enter(&mut self, node: &mut Node, _parent: Option<NodeKind>) -> Option<Node> {
        let Node::AssignmentExpression {
            operator,
            left,
            right,
        } = node
        else {
            return None;
        };
        let name = left.identifier_name()?.to_string();
        let skeleton = match (*operator, operator.arithmetic_operator()) {
            (AssignmentOperator::Assign, _) => Skeleton::AccessorWrite {
                name,
                value: take(right),
            },
            (_, Some(arithmetic)) if matches!(right.as_ref(), Node::Literal { .. }) => {
                Skeleton::CompoundUpdate {
                    name,
                    operator: arithmetic,
                    value: take(right),
                }
            }
            _ => return None,
        };
        trace!(operator = %operator, "rewriting assignment");
        self.rewrites += 1;
        Some(self.factory.synthesize(skeleton))
    }
}
