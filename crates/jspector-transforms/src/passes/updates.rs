//! Pass 4: `++` and `--` on a plain name.
//!
//! Prefix and postfix forms produce the same write, `x.set(x.get() + 1)` or
//! `x.set(x.get() - 1)`. The value the original expression yielded is not
//! reproduced.

use jspector_parser::Node;
use jspector_parser::ast::{NodeKind, Visitor, replace};
use tracing::{debug, debug_span, trace};

use crate::factory::{NodeFactory, Skeleton};

pub fn run(program: &mut Node, factory: NodeFactory<'_>) -> usize {
    let _span = debug_span!("updates").entered();
    let mut pass = UpdateRewriter {
        factory,
        rewrites: 0,
    };
    replace(program, &mut pass);
    debug!(rewrites = pass.rewrites, "rewrote update expressions");
    pass.rewrites
}

struct UpdateRewriter<'a> {
    factory: NodeFactory<'a>,
    rewrites: usize,
}

impl Visitor for UpdateRewriter<'_> {
    fn enter(&mut self, node: &mut Node, _parent: Option<NodeKind>) -> Option<Node> {
        let Node::UpdateExpression {
            operator,
            prefix,
            argument,
        } = node
        else {
            return None;
        };
        let name = argument.identifier_name()?.to_string();
        trace!(%name, operator = %operator, prefix = *prefix, "rewriting update");
        self.rewrites += 1;
        Some(self.factory.synthesize(Skeleton::CompoundUpdate {
            name,
            operator: operator.delta_operator(),
            value: Node::number("1"),
        }))
    }
}
